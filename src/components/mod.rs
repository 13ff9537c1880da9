//! UI components built with Leptos.
//!
//! - [`Browser`] - Main card: header, viewer, messages, listing
//! - [`file_list`] - Sorted folder contents with parent row
//! - [`viewer`] - Image carousel with full size reload
//! - [`icons`] - Centralized icon definitions (change theme here)

mod browser;
mod file_list;
pub mod icons;
mod viewer;

pub use browser::Browser;
