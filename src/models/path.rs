//! Folder stack representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used when joining segments for requests and history.
pub const SEPARATOR: char = '/';

/// Ordered sequence of folder names from the store root.
///
/// An empty sequence is the root. Values are immutable: [`push`](Self::push)
/// and [`pop`](Self::pop) return a new path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderPath(Vec<String>);

impl FolderPath {
    /// The root folder.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a joined path (`a/b/c`), skipping empty segments.
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Returns a new path with `segment` appended.
    pub fn push(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    /// Returns the parent path. The root is its own parent.
    pub fn pop(&self) -> Self {
        let mut segments = self.0.clone();
        segments.pop();
        Self(segments)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segments joined with `/` (empty string for the root).
    pub fn joined(&self) -> String {
        self.0.join("/")
    }

    /// Request path of an entry inside this folder.
    ///
    /// Always `joined + "/" + name`, so entries at the root encode as `/name`.
    pub fn entry_path(&self, name: &str) -> String {
        format!("{}{}{}", self.joined(), SEPARATOR, name)
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.joined())
    }
}
