//! Browser client for the Connect JSON endpoint.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::FileService;
use super::wire::{self, GetFileRequest, GetImageRequest, ListFilesRequest};
use crate::core::error::FetchError;
use crate::models::FileEntry;
use crate::utils::fetch::post_json;

const PROTOCOL_HEADER: (&str, &str) = ("Connect-Protocol-Version", "1");

/// Connect-protocol client for the `fs.FileSystem` service.
///
/// Constructed once at startup and handed to the components that need it.
#[derive(Clone, Debug)]
pub struct ConnectClient {
    base_url: String,
}

impl ConnectClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, FetchError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = wire::method_url(&self.base_url, method);
        let response = post_json(&url, request, &[PROTOCOL_HEADER]).await?;
        if !response.ok {
            return Err(wire::error_from_status(response.status, &response.body));
        }
        wire::parse(&response.body)
    }
}

impl FileService for ConnectClient {
    async fn list_files(&self, path: &str) -> Result<Vec<FileEntry>, FetchError> {
        let response: wire::ListFilesResponse =
            self.call(wire::LIST_FILES, &ListFilesRequest { path }).await?;
        Ok(response.files.into_iter().map(FileEntry::from).collect())
    }

    async fn get_image(&self, path: &str, width: Option<u32>) -> Result<Vec<u8>, FetchError> {
        let response: wire::GetImageResponse = self
            .call(wire::GET_IMAGE, &GetImageRequest { path, width })
            .await?;
        wire::decode_bytes(&response.image_data)
    }

    async fn get_file(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let response: wire::GetFileResponse =
            self.call(wire::GET_FILE, &GetFileRequest { path }).await?;
        wire::decode_bytes(&response.file_data)
    }
}
