//! Core navigation and resource logic.
//!
//! This module provides:
//! - `navigator` - Folder stack and listing refresh
//! - `carousel` - Circular image navigation
//! - `resource` - Preview handle lifecycle and downloads
//! - `history` - Session history mirroring
//! - [`BrowserSession`] - Composition of the above, emitting [`Effect`]s

mod carousel;
pub mod dispatch;
pub mod error;
mod generation;
mod history;
mod navigator;
mod resource;
mod session;

pub use carousel::Direction;
pub use history::HistoryEntry;
pub use navigator::ListingState;
pub use resource::BlobHost;
pub use session::{BrowserSession, Effect};
