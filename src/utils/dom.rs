//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the current window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current viewport width in CSS pixels, used as the image downscale hint.
pub fn viewport_width() -> Option<u32> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .filter(|w| *w > 0.0)
        .map(|w| w.round() as u32)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash as typed, still percent-encoded (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

/// Document path without hash or query, used for the root history frame.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
