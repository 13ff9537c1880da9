//! In-memory file service for tests and offline development.

use std::cell::RefCell;
use std::collections::HashMap;

use super::FileService;
use crate::core::error::FetchError;
use crate::models::FileEntry;

/// Calls received by [`MockService`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    ListFiles(String),
    GetImage(String, Option<u32>),
    GetFile(String),
}

/// Fixture-backed [`FileService`].
///
/// Unknown paths answer with [`FetchError::NotFound`].
#[derive(Debug, Default)]
pub struct MockService {
    folders: HashMap<String, Vec<FileEntry>>,
    blobs: HashMap<String, Vec<u8>>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the entries of the folder at `path` (joined form, `""` for root).
    pub fn with_folder(mut self, path: &str, entries: Vec<FileEntry>) -> Self {
        self.folders.insert(path.to_string(), entries);
        self
    }

    /// Register bytes served for an entry path by both `get_image` and `get_file`.
    pub fn with_blob(mut self, path: &str, bytes: &[u8]) -> Self {
        self.blobs.insert(path.to_string(), bytes.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn blob(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.blobs
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}

impl FileService for MockService {
    async fn list_files(&self, path: &str) -> Result<Vec<FileEntry>, FetchError> {
        self.calls.borrow_mut().push(MockCall::ListFiles(path.to_string()));
        self.folders
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }

    async fn get_image(&self, path: &str, width: Option<u32>) -> Result<Vec<u8>, FetchError> {
        self.calls
            .borrow_mut()
            .push(MockCall::GetImage(path.to_string(), width));
        self.blob(path)
    }

    async fn get_file(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.borrow_mut().push(MockCall::GetFile(path.to_string()));
        self.blob(path)
    }
}
