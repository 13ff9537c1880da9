//! Folder stack and listing refresh.
//!
//! Every change of the current folder issues exactly one listing request.
//! Replies are matched against the folder's [`Generation`], so a reply for a
//! folder the user has already left is dropped instead of overwriting the
//! listing of the folder on screen.

use crate::models::{DirectoryListing, EntryKind, FileEntry, FolderPath, HiddenPolicy};

use super::error::{BrowseError, FetchError};
use super::generation::{Generation, Ticket};

/// Listing published for the current folder.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingState {
    /// Request in flight
    Pending,
    /// Sorted entries
    Ready(DirectoryListing),
    /// Fetch failed; the message is shown in place of the listing
    Failed(String),
}

/// Listing fetch to be issued to the file service.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingRequest {
    pub ticket: Ticket,
    pub path: FolderPath,
}

impl ListingRequest {
    /// Path as sent on the wire.
    pub fn wire_path(&self) -> String {
        self.path.joined()
    }
}

/// Completed listing fetch.
#[derive(Clone, Debug)]
pub struct ListingReply {
    pub ticket: Ticket,
    pub path: FolderPath,
    pub result: Result<Vec<FileEntry>, FetchError>,
}

/// Owner of the folder stack and its listing.
#[derive(Clone, Debug)]
pub struct DirectoryNavigator {
    path: FolderPath,
    state: ListingState,
    generation: Generation,
    policy: HiddenPolicy,
}

impl DirectoryNavigator {
    pub fn new(policy: HiddenPolicy) -> Self {
        Self {
            path: FolderPath::root(),
            state: ListingState::Pending,
            generation: Generation::new(),
            policy,
        }
    }

    pub fn path(&self) -> &FolderPath {
        &self.path
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn listing(&self) -> Option<&DirectoryListing> {
        match &self.state {
            ListingState::Ready(listing) if listing.path() == &self.path => Some(listing),
            _ => None,
        }
    }

    /// Switch to `path`, clearing the listing and issuing its fetch.
    pub fn navigate_to(&mut self, path: FolderPath) -> ListingRequest {
        self.path = path;
        self.state = ListingState::Pending;
        ListingRequest {
            ticket: self.generation.issue(),
            path: self.path.clone(),
        }
    }

    /// Descend into the folder entry `name` of the current listing.
    pub fn enter(&mut self, name: &str) -> Result<ListingRequest, BrowseError> {
        let listing = self.listing().ok_or(BrowseError::NoListing)?;
        let entry = listing
            .find(name)
            .ok_or_else(|| BrowseError::UnknownEntry(name.to_string()))?;
        if entry.kind() != EntryKind::Directory {
            return Err(BrowseError::NotADirectory(name.to_string()));
        }
        let next = self.path.push(name);
        Ok(self.navigate_to(next))
    }

    /// Pop one level. Returns `None` at the root.
    pub fn go_back(&mut self) -> Option<ListingRequest> {
        if self.path.is_root() {
            return None;
        }
        let parent = self.path.pop();
        Some(self.navigate_to(parent))
    }

    /// Apply a listing reply. Returns `false` when the reply was superseded.
    pub fn apply(&mut self, reply: ListingReply) -> bool {
        if !self.generation.is_current(reply.ticket) || reply.path != self.path {
            return false;
        }
        self.state = match reply.result {
            Ok(entries) => {
                ListingState::Ready(DirectoryListing::new(reply.path, entries, self.policy))
            }
            Err(e) => ListingState::Failed(format!("Error fetching folder: {}", e)),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(request: &ListingRequest, entries: Vec<FileEntry>) -> ListingReply {
        ListingReply {
            ticket: request.ticket,
            path: request.path.clone(),
            result: Ok(entries),
        }
    }

    fn ready_at_root() -> DirectoryNavigator {
        let mut nav = DirectoryNavigator::new(HiddenPolicy::Show);
        let request = nav.navigate_to(FolderPath::root());
        assert!(nav.apply(reply(
            &request,
            vec![FileEntry::directory("a"), FileEntry::file("x.jpg")]
        )));
        nav
    }

    #[test]
    fn test_apply_sorts_and_publishes() {
        let mut nav = DirectoryNavigator::new(HiddenPolicy::Show);
        let request = nav.navigate_to(FolderPath::root());
        assert_eq!(nav.state(), &ListingState::Pending);

        nav.apply(reply(
            &request,
            vec![FileEntry::file("b.png"), FileEntry::directory("Apple")],
        ));

        let listing = nav.listing().expect("listing published");
        assert_eq!(listing.entries()[0].name, "Apple");
        assert_eq!(listing.entries()[1].name, "b.png");
    }

    #[test]
    fn test_stale_reply_dropped() {
        let mut nav = ready_at_root();
        let p1 = nav.enter("a").unwrap();
        // Path changes again before P1's reply lands
        let p2 = nav.go_back().unwrap();

        assert!(nav.apply(reply(&p2, vec![FileEntry::file("root.jpg")])));
        assert!(!nav.apply(reply(&p1, vec![FileEntry::file("late.jpg")])));

        assert_eq!(nav.path(), &FolderPath::root());
        let listing = nav.listing().unwrap();
        assert_eq!(listing.entries()[0].name, "root.jpg");
    }

    #[test]
    fn test_failure_clears_listing() {
        let mut nav = ready_at_root();
        let request = nav.enter("a").unwrap();
        nav.apply(ListingReply {
            ticket: request.ticket,
            path: request.path.clone(),
            result: Err(FetchError::Timeout),
        });

        assert!(nav.listing().is_none());
        assert_eq!(
            nav.state(),
            &ListingState::Failed("Error fetching folder: Request timed out".to_string())
        );
    }

    #[test]
    fn test_enter_requires_directory() {
        let mut nav = ready_at_root();
        assert_eq!(
            nav.enter("x.jpg"),
            Err(BrowseError::NotADirectory("x.jpg".to_string()))
        );
        assert_eq!(
            nav.enter("missing"),
            Err(BrowseError::UnknownEntry("missing".to_string()))
        );
        assert!(nav.path().is_root());

        let request = nav.enter("a").unwrap();
        assert_eq!(request.wire_path(), "a");
        assert_eq!(nav.path(), &FolderPath::root().push("a"));
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let mut nav = ready_at_root();
        assert!(nav.go_back().is_none());
        assert!(nav.listing().is_some());
    }
}
