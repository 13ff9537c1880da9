//! Directory entries and sorted listings.

use std::cmp::Ordering;

use crate::config::IMAGE_EXTENSIONS;

use super::FolderPath;

// =============================================================================
// File Entries
// =============================================================================

/// A single entry returned by the listing service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// Entry name, unique within its listing
    pub name: String,
    /// Whether this entry is a folder
    pub is_directory: bool,
    /// Hidden flag as reported by the store
    pub hidden: bool,
    /// Optional caption text
    pub comment: Option<String>,
}

impl FileEntry {
    #[cfg(any(test, feature = "mock"))]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            hidden: false,
            comment: None,
        }
    }

    #[cfg(any(test, feature = "mock"))]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            is_directory: true,
            ..Self::file(name)
        }
    }

    #[cfg(any(test, feature = "mock"))]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[cfg(any(test, feature = "mock"))]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Classify this entry for activation.
    pub fn kind(&self) -> EntryKind {
        if self.is_directory {
            EntryKind::Directory
        } else if is_image_name(&self.name) {
            EntryKind::Image
        } else {
            EntryKind::Other
        }
    }
}

/// What activating an entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Descend into the folder
    Directory,
    /// Show in the carousel
    Image,
    /// Download
    Other,
}

/// Lowercased extension of a file name, if it has one.
fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Check whether a file name carries one of the displayable image extensions.
pub fn is_image_name(name: &str) -> bool {
    extension(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// MIME type used when wrapping fetched image bytes in a blob.
pub fn image_mime(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

// =============================================================================
// Hidden Entry Policy
// =============================================================================

/// How entries flagged hidden by the store are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub enum HiddenPolicy {
    /// List them like any other entry
    Show,
    /// List them, rendered dimmed
    #[default]
    Mark,
    /// Drop them from the listing
    Hide,
}

// =============================================================================
// Directory Listing
// =============================================================================

/// Ordering used by listings: folders first, then names.
///
/// Names compare case-insensitively; names equal ignoring case put the
/// lowercase form first, and byte order breaks any remaining tie.
pub fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| compare_names(&a.name, &b.name))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    folded.then_with(|| {
        for (ca, cb) in a.chars().zip(b.chars()) {
            if ca != cb {
                match (ca.is_lowercase(), cb.is_lowercase()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
        }
        a.cmp(b)
    })
}

/// Sorted entries of exactly one folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryListing {
    path: FolderPath,
    entries: Vec<FileEntry>,
}

impl DirectoryListing {
    /// Build a listing from raw service entries, applying the hidden policy and sort order.
    pub fn new(path: FolderPath, mut entries: Vec<FileEntry>, policy: HiddenPolicy) -> Self {
        if policy == HiddenPolicy::Hide {
            entries.retain(|e| !e.hidden);
        }
        entries.sort_by(compare_entries);
        Self { path, entries }
    }

    pub fn path(&self) -> &FolderPath {
        &self.path
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Image entries in listing order.
    pub fn images(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.kind() == EntryKind::Image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(listing: &DirectoryListing) -> Vec<&str> {
        listing.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_directories_first_then_names() {
        let listing = DirectoryListing::new(
            FolderPath::root(),
            vec![
                FileEntry::file("b.png"),
                FileEntry::directory("Apple"),
                FileEntry::directory("zeta"),
            ],
            HiddenPolicy::Show,
        );
        assert_eq!(names(&listing), ["Apple", "zeta", "b.png"]);
    }

    #[test]
    fn test_case_aware_order() {
        let listing = DirectoryListing::new(
            FolderPath::root(),
            vec![
                FileEntry::file("Banana.jpg"),
                FileEntry::file("apple.jpg"),
                FileEntry::file("Apple.jpg"),
                FileEntry::file("cherry.jpg"),
                FileEntry::directory("docs"),
                FileEntry::directory("Archive"),
            ],
            HiddenPolicy::Show,
        );
        assert_eq!(
            names(&listing),
            ["Archive", "docs", "apple.jpg", "Apple.jpg", "Banana.jpg", "cherry.jpg"]
        );

        // Every directory precedes every file
        let first_file = listing
            .entries()
            .iter()
            .position(|e| !e.is_directory)
            .unwrap();
        assert!(listing.entries()[first_file..].iter().all(|e| !e.is_directory));
    }

    #[test]
    fn test_hidden_policy() {
        let raw = vec![
            FileEntry::file("a.jpg"),
            FileEntry::file(".thumbs").with_hidden(true),
        ];
        let shown = DirectoryListing::new(FolderPath::root(), raw.clone(), HiddenPolicy::Mark);
        assert_eq!(names(&shown), [".thumbs", "a.jpg"]);

        let hidden = DirectoryListing::new(FolderPath::root(), raw, HiddenPolicy::Hide);
        assert_eq!(names(&hidden), ["a.jpg"]);
    }

    #[test]
    fn test_entry_kind() {
        assert_eq!(FileEntry::directory("pics.jpg").kind(), EntryKind::Directory);
        assert_eq!(FileEntry::file("cat.JPG").kind(), EntryKind::Image);
        assert_eq!(FileEntry::file("cat.jpeg").kind(), EntryKind::Image);
        assert_eq!(FileEntry::file("anim.gif").kind(), EntryKind::Image);
        assert_eq!(FileEntry::file("scan.bmp").kind(), EntryKind::Image);
        assert_eq!(FileEntry::file("pic.WebP").kind(), EntryKind::Image);
        assert_eq!(FileEntry::file("report.pdf").kind(), EntryKind::Other);
        assert_eq!(FileEntry::file("png").kind(), EntryKind::Other);
        assert_eq!(FileEntry::file("logo.svg").kind(), EntryKind::Other);
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.PNG"), "image/png");
        assert_eq!(image_mime("a.jpg"), "image/jpeg");
        assert_eq!(image_mime("a.jpeg"), "image/jpeg");
        assert_eq!(image_mime("a.webp"), "image/webp");
    }

    #[test]
    fn test_images_keep_listing_order() {
        let listing = DirectoryListing::new(
            FolderPath::root(),
            vec![
                FileEntry::file("c.png"),
                FileEntry::file("notes.txt"),
                FileEntry::file("a.jpg"),
                FileEntry::directory("b.jpg"),
            ],
            HiddenPolicy::Show,
        );
        let images: Vec<_> = listing.images().map(|e| e.name.as_str()).collect();
        assert_eq!(images, ["a.jpg", "c.png"]);
    }
}
