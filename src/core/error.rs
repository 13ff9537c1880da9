//! Custom error types for the application.
//!
//! Every failure in the browser is non-fatal and ends up as an inline message.
//! The categories are:
//!
//! - [`FetchError`] - Remote service calls (listing, image, file)
//! - [`HostError`] - Browser object URLs, blobs, and DOM save triggers
//! - [`BrowseError`] - Navigation requests that don't match the listing

use std::fmt;

/// Errors from calls to the remote file service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    NetworkError(String),
    /// HTTP error response without an RPC error body
    HttpError(u16),
    /// RPC error returned by the service
    Rpc { code: String, message: String },
    /// Failed to read response body
    ResponseReadFailed,
    /// Response body did not match the expected message
    Decode(String),
    /// Request timed out
    Timeout,
    /// Requested path is not known to the service
    #[cfg_attr(not(any(test, feature = "mock")), allow(dead_code))]
    NotFound(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::Rpc { code, message } if message.is_empty() => write!(f, "{}", code),
            Self::Rpc { code, message } => write!(f, "{}: {}", code, message),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::NotFound(path) => write!(f, "Not found: {}", path),
        }
    }
}

impl std::error::Error for FetchError {}

/// Errors from browser resource APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Browser window or document not available
    NoDocument,
    /// Blob construction failed
    BlobCreationFailed,
    /// Object URL could not be created
    ObjectUrlFailed,
    /// The save link could not be created or clicked
    SaveFailed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "Browser document not available"),
            Self::BlobCreationFailed => write!(f, "Failed to create blob"),
            Self::ObjectUrlFailed => write!(f, "Failed to create object URL"),
            Self::SaveFailed => write!(f, "Failed to start download"),
        }
    }
}

impl std::error::Error for HostError {}

/// Navigation requests that can't be honored by the current listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// No listing has been published for the current folder yet
    NoListing,
    /// No entry with this name in the current listing
    UnknownEntry(String),
    /// Entry exists but isn't a folder
    NotADirectory(String),
}

impl fmt::Display for BrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoListing => write!(f, "Folder is still loading"),
            Self::UnknownEntry(name) => write!(f, "No such entry: {}", name),
            Self::NotADirectory(name) => write!(f, "Not a folder: {}", name),
        }
    }
}

impl std::error::Error for BrowseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_display() {
        let err = FetchError::Rpc {
            code: "not_found".to_string(),
            message: "no such file".to_string(),
        };
        assert_eq!(err.to_string(), "not_found: no such file");

        let bare = FetchError::Rpc {
            code: "unavailable".to_string(),
            message: String::new(),
        };
        assert_eq!(bare.to_string(), "unavailable");
    }
}
