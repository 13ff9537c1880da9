//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ParentFolder, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuDownload as Download, LuFile as File, LuFolder as Folder, LuImage as FileImage,
        LuImages as Logo, LuMaximize as FullSize, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as ParentFolder, BsArrowsFullscreen as FullSize,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFolderFill as Folder,
        BsImages as Logo, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOGO, Logo);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(PARENT_FOLDER, ParentFolder);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FULL_SIZE, FullSize);
themed_icon!(CLOSE, Close);
