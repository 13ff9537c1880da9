//! Connect JSON messages for the `fs.FileSystem` service.
//!
//! Field names follow proto3 JSON mapping (camelCase). Fields holding their
//! default value may be omitted by the server, so every response field has a
//! serde default. `bytes` fields travel as base64.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::core::error::FetchError;
use crate::models::FileEntry;

/// Fully qualified service name used in request paths.
pub const SERVICE: &str = "fs.FileSystem";

pub const LIST_FILES: &str = "ListFiles";
pub const GET_IMAGE: &str = "GetImage";
pub const GET_FILE: &str = "GetFile";

/// Endpoint URL for a unary method.
pub fn method_url(base_url: &str, method: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), SERVICE, method)
}

#[derive(Clone, Debug, Serialize)]
pub struct ListFilesRequest<'a> {
    pub path: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListFilesResponse {
    pub files: Vec<FileInfo>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileInfo {
    pub filename: String,
    pub is_dir: bool,
    pub comment: String,
    pub hidden: bool,
}

impl From<FileInfo> for FileEntry {
    fn from(info: FileInfo) -> Self {
        Self {
            name: info.filename,
            is_directory: info.is_dir,
            hidden: info.hidden,
            comment: Some(info.comment).filter(|c| !c.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GetImageRequest<'a> {
    pub path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetImageResponse {
    pub image_data: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct GetFileRequest<'a> {
    pub path: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetFileResponse {
    pub file_data: String,
}

/// Error body of a failed unary call.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<ErrorBody> for FetchError {
    fn from(body: ErrorBody) -> Self {
        FetchError::Rpc {
            code: body.code,
            message: body.message,
        }
    }
}

/// Decode a proto3 JSON `bytes` value (standard or URL-safe alphabet, padding optional).
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>, FetchError> {
    [STANDARD, URL_SAFE, STANDARD_NO_PAD, URL_SAFE_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(encoded).ok())
        .ok_or_else(|| FetchError::Decode("invalid base64 in bytes field".to_string()))
}

/// Parse a response body into `T`.
pub fn parse<'de, T: Deserialize<'de>>(body: &'de str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Map a non-2xx response to an error, preferring the RPC error body.
pub fn error_from_status(status: u16, body: &str) -> FetchError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if !err.code.is_empty() => err.into(),
        _ => FetchError::HttpError(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url() {
        assert_eq!(
            method_url("https://files.example/", LIST_FILES),
            "https://files.example/fs.FileSystem/ListFiles"
        );
        assert_eq!(
            method_url("/api", GET_IMAGE),
            "/api/fs.FileSystem/GetImage"
        );
    }

    #[test]
    fn test_list_files_omitted_defaults() {
        let body = r#"{"files":[
            {"filename":"photos","isDir":true},
            {"filename":"cat.jpg","comment":"Our cat"},
            {"filename":".cache","hidden":true,"comment":""}
        ]}"#;
        let response: ListFilesResponse = parse(body).unwrap();
        let entries: Vec<FileEntry> = response.files.into_iter().map(Into::into).collect();

        assert_eq!(entries[0], FileEntry::directory("photos"));
        assert_eq!(entries[1], FileEntry::file("cat.jpg").with_comment("Our cat"));
        assert_eq!(entries[2], FileEntry::file(".cache").with_hidden(true));
    }

    #[test]
    fn test_empty_listing() {
        let response: ListFilesResponse = parse("{}").unwrap();
        assert!(response.files.is_empty());
    }

    #[test]
    fn test_image_request_width_omitted() {
        let full = GetImageRequest {
            path: "a/b.jpg",
            width: None,
        };
        assert_eq!(serde_json::to_string(&full).unwrap(), r#"{"path":"a/b.jpg"}"#);

        let preview = GetImageRequest {
            path: "a/b.jpg",
            width: Some(1280),
        };
        assert_eq!(
            serde_json::to_string(&preview).unwrap(),
            r#"{"path":"a/b.jpg","width":1280}"#
        );
    }

    #[test]
    fn test_decode_bytes_alphabets() {
        // 0xfb 0xff encodes to "+/8=" (standard) and "-_8=" (URL-safe)
        assert_eq!(decode_bytes("+/8=").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_bytes("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
        assert!(matches!(decode_bytes("%%%"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_error_from_status() {
        let err = error_from_status(404, r#"{"code":"not_found","message":"missing"}"#);
        assert_eq!(
            err,
            FetchError::Rpc {
                code: "not_found".to_string(),
                message: "missing".to_string()
            }
        );
        assert_eq!(error_from_status(502, "<html>"), FetchError::HttpError(502));
    }
}
