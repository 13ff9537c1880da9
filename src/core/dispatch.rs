//! Execution of fetch effects against a [`FileService`].
//!
//! Each function performs one service call and packages the outcome together
//! with the request's identity so the session can decide whether it still
//! applies.

use crate::api::FileService;

use super::navigator::{ListingReply, ListingRequest};
use super::session::{FileReply, FileRequest, ImageReply, ImageRequest};

pub async fn fetch_listing<S: FileService>(service: &S, request: ListingRequest) -> ListingReply {
    let result = service.list_files(&request.wire_path()).await;
    ListingReply {
        ticket: request.ticket,
        path: request.path,
        result,
    }
}

pub async fn fetch_image<S: FileService>(service: &S, request: ImageRequest) -> ImageReply {
    let result = service.get_image(&request.path, request.width).await;
    ImageReply {
        ticket: request.ticket,
        full_resolution: request.full_resolution,
        name: request.name,
        result,
    }
}

pub async fn fetch_file<S: FileService>(service: &S, request: FileRequest) -> FileReply {
    let result = service.get_file(&request.path).await;
    FileReply {
        name: request.name,
        result,
    }
}
