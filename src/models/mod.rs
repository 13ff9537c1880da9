//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FolderPath`] - Folder stack (path segments from the root)
//! - [`FileEntry`], [`DirectoryListing`] - Sorted folder contents
//! - [`HiddenPolicy`] - Presentation of entries flagged hidden
//! - [`ColorScheme`] - Light/dark preference

mod entry;
mod path;
mod theme;

pub use entry::{DirectoryListing, EntryKind, FileEntry, HiddenPolicy, image_mime};
pub use path::{FolderPath, SEPARATOR};
pub use theme::ColorScheme;
