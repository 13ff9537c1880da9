//! Browser bindings used by the UI runtime.
//!
//! Provides:
//! - [`WebBlobHost`] - Object URLs for previews and downloads
//! - [`history`] - Session history frames and popstate events
//! - [`fetch`] - JSON POST with timeout racing
//! - [`dom`] - Window, viewport, and location helpers

mod blob;
pub mod dom;
pub mod fetch;
pub mod history;

pub use blob::WebBlobHost;
