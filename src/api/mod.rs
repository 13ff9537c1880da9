//! Remote file service.
//!
//! [`FileService`] is the boundary to the store: list a folder, fetch an image
//! (optionally downscaled), fetch a file. [`ConnectClient`] speaks the Connect
//! JSON protocol from the browser; [`MockService`] serves fixtures in memory.

mod connect;
#[cfg(any(test, feature = "mock"))]
mod mock;
pub mod wire;

pub use connect::ConnectClient;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockCall, MockService};

use crate::core::error::FetchError;
use crate::models::FileEntry;

/// Request/response operations of the remote store.
///
/// Paths are folder segments joined with `/`; an entry's path is its folder
/// path followed by `/` and its name.
#[allow(async_fn_in_trait)]
pub trait FileService {
    /// List the entries of a folder.
    async fn list_files(&self, path: &str) -> Result<Vec<FileEntry>, FetchError>;

    /// Fetch image bytes. `width` asks the service to downscale; `None`
    /// requests full resolution.
    async fn get_image(&self, path: &str, width: Option<u32>) -> Result<Vec<u8>, FetchError>;

    /// Fetch raw file bytes.
    async fn get_file(&self, path: &str) -> Result<Vec<u8>, FetchError>;
}
