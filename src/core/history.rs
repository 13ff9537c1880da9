//! Folder stack ↔ session history synchronization.
//!
//! Folder changes made inside the app push a history frame. Back/forward
//! events coming from the host are turned back into folder changes; the change
//! that results from consuming such an event must not push a frame of its own,
//! otherwise every "back" would grow the forward stack.

use serde::{Deserialize, Serialize};

use crate::models::{FolderPath, SEPARATOR};

/// Serialized folder stored in a session history frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub folder: FolderPath,
}

impl HistoryEntry {
    pub fn new(folder: FolderPath) -> Self {
        Self { folder }
    }

    /// URL fragment for the frame (`#a/b`), with each segment passed through
    /// `encode`. `None` for the root, which uses the bare document path.
    pub fn fragment(&self, encode: impl Fn(&str) -> String) -> Option<String> {
        if self.folder.is_root() {
            return None;
        }
        let segments: Vec<String> = self.folder.segments().iter().map(|s| encode(s)).collect();
        Some(format!("#{}", segments.join(&SEPARATOR.to_string())))
    }

    /// Folder encoded in a URL fragment, with or without the leading `#`.
    ///
    /// The fragment is split before `decode` runs, so an encoded `/` stays
    /// inside its segment.
    pub fn folder_from_fragment(fragment: &str, decode: impl Fn(&str) -> String) -> FolderPath {
        let raw = FolderPath::from_joined(fragment.trim_start_matches('#'));
        FolderPath::from_segments(raw.segments().iter().map(|s| decode(s)))
    }
}

/// Tracks which folder changes should be mirrored into history.
#[derive(Clone, Debug, Default)]
pub struct HistorySync {
    restored: Option<FolderPath>,
}

impl HistorySync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame to push for a folder change, or `None` when the change was
    /// produced by a history event for that same folder.
    pub fn path_changed(&mut self, path: &FolderPath) -> Option<HistoryEntry> {
        if self.restored.take().as_ref() == Some(path) {
            return None;
        }
        Some(HistoryEntry::new(path.clone()))
    }

    /// Resolve a back/forward event into the folder to display.
    ///
    /// A frame without a folder is treated as "one level up". Returns `None`
    /// when the event doesn't change the folder.
    pub fn popped(
        &mut self,
        entry: Option<HistoryEntry>,
        current: &FolderPath,
    ) -> Option<FolderPath> {
        let target = match entry {
            Some(entry) => entry.folder,
            None => current.pop(),
        };
        if &target == current {
            return None;
        }
        self.restored = Some(target.clone());
        Some(target)
    }
}
