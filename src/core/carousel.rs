//! Circular image navigation within the current listing.

use crate::models::DirectoryListing;

/// Carousel step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Image-only view of a listing plus the active position.
///
/// Invariant: `current` is `Some(i)` only when `i < images.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    current: Option<usize>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a freshly published listing. No image is active afterwards.
    pub fn rebuild(&mut self, listing: &DirectoryListing) {
        self.images = listing.images().map(|e| e.name.clone()).collect();
        self.current = None;
    }

    /// Drop the image sequence and the active position.
    pub fn clear(&mut self) {
        self.images.clear();
        self.current = None;
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.map(|i| self.images[i].as_str())
    }

    /// Make `name` the active image. Returns its position, or `None` when it
    /// isn't part of the image sequence (the active position is unchanged).
    pub fn select(&mut self, name: &str) -> Option<usize> {
        let index = self.images.iter().position(|n| n == name)?;
        self.current = Some(index);
        Some(index)
    }

    /// Move one step with wraparound and return the new active name.
    ///
    /// With nothing active, `Next` starts at the first image and `Previous`
    /// at the last. An empty sequence is a no-op.
    pub fn step(&mut self, direction: Direction) -> Option<&str> {
        let count = self.images.len();
        if count == 0 {
            return None;
        }
        let next = match (self.current, direction) {
            (Some(i), Direction::Next) => (i + 1) % count,
            (Some(i), Direction::Previous) => (i + count - 1) % count,
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => count - 1,
        };
        self.current = Some(next);
        Some(self.images[next].as_str())
    }
}
