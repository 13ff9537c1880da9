//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::HiddenPolicy;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the header.
pub const APP_NAME: &str = "folio";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the `fs.FileSystem` Connect endpoint.
///
/// Override at build time with `FOLIO_API_URL=https://… trunk build`.
pub const SERVICE_BASE_URL: &str = match option_env!("FOLIO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 30_000;

// =============================================================================
// Listing Configuration
// =============================================================================

/// Extensions (lowercase) opened in the image viewer. Everything else downloads.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Presentation of entries the store flags as hidden.
pub const HIDDEN_ENTRY_POLICY: HiddenPolicy = HiddenPolicy::Mark;

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query tracked for the color scheme.
pub const DARK_MODE_QUERY: &str = "(prefers-color-scheme: dark)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
