//! Browser session state and transition logic.
//!
//! [`BrowserSession`] composes the folder navigator, the image carousel, the
//! preview resource slot and the history synchronizer. User and host actions
//! are methods that mutate the session and return [`Effect`] intents for the
//! UI runtime to execute; fetch results come back through the `complete_*`
//! methods, which drop anything superseded in the meantime.

use crate::models::{DirectoryListing, EntryKind, FolderPath, HiddenPolicy, image_mime};

use super::carousel::{Carousel, Direction};
use super::error::{BrowseError, FetchError};
use super::generation::Ticket;
use super::history::{HistoryEntry, HistorySync};
use super::navigator::{DirectoryNavigator, ListingReply, ListingRequest, ListingState};
use super::resource::{BlobHost, LoadedResource, ResourceManager};

// =============================================================================
// Effects
// =============================================================================

/// Side-effect intents emitted by [`BrowserSession`] for the runtime to execute.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// List a folder and feed the reply to [`BrowserSession::complete_listing`].
    FetchListing(ListingRequest),
    /// Fetch image bytes and feed the reply to [`BrowserSession::complete_image`].
    FetchImage(ImageRequest),
    /// Fetch file bytes and feed the reply to [`BrowserSession::complete_download`].
    FetchFile(FileRequest),
    /// Push a new session history frame.
    PushHistory(HistoryEntry),
    /// Overwrite the current session history frame.
    ReplaceHistory(HistoryEntry),
}

/// Image fetch for the preview slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageRequest {
    pub ticket: Ticket,
    /// Entry name within the current folder
    pub name: String,
    /// Entry path as sent on the wire
    pub path: String,
    /// Downscale hint; `None` lets the service pick
    pub width: Option<u32>,
    /// Explicit full size reload
    pub full_resolution: bool,
}

#[derive(Clone, Debug)]
pub struct ImageReply {
    pub ticket: Ticket,
    pub name: String,
    pub full_resolution: bool,
    pub result: Result<Vec<u8>, FetchError>,
}

/// File fetch for a download.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRequest {
    /// Suggested save name
    pub name: String,
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct FileReply {
    pub name: String,
    pub result: Result<Vec<u8>, FetchError>,
}

// =============================================================================
// Session
// =============================================================================

/// Navigation and resource state of one browser tab.
#[derive(Debug)]
pub struct BrowserSession<H: BlobHost> {
    navigator: DirectoryNavigator,
    carousel: Carousel,
    resources: ResourceManager<H>,
    history: HistorySync,
    /// Highlighted row
    selected: Option<String>,
    /// Inline message for failed image loads and downloads
    notice: Option<String>,
    downloads: usize,
}

impl<H: BlobHost> BrowserSession<H> {
    pub fn new(host: H, policy: HiddenPolicy) -> Self {
        Self {
            navigator: DirectoryNavigator::new(policy),
            carousel: Carousel::new(),
            resources: ResourceManager::new(host),
            history: HistorySync::new(),
            selected: None,
            notice: None,
            downloads: 0,
        }
    }

    /// Open the initial folder. The current history frame is stamped with it
    /// instead of pushing a new one.
    pub fn start(&mut self, initial: FolderPath) -> Vec<Effect> {
        let request = self.navigator.navigate_to(initial.clone());
        vec![
            Effect::ReplaceHistory(HistoryEntry::new(initial)),
            Effect::FetchListing(request),
        ]
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn path(&self) -> &FolderPath {
        self.navigator.path()
    }

    pub fn listing_state(&self) -> &ListingState {
        self.navigator.state()
    }

    pub fn listing(&self) -> Option<&DirectoryListing> {
        self.navigator.listing()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn preview(&self) -> Option<&LoadedResource<H::Handle>> {
        self.resources.active()
    }

    pub fn is_preview_loading(&self) -> bool {
        self.resources.is_loading()
    }

    /// Whether the image viewer should be on screen.
    pub fn has_preview(&self) -> bool {
        self.resources.active().is_some() || self.resources.is_loading()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn downloads_in_flight(&self) -> usize {
        self.downloads
    }

    /// Caption of the displayed image: its comment, or its name.
    pub fn caption(&self) -> Option<String> {
        let name = &self.resources.active()?.name;
        let comment = self
            .listing()
            .and_then(|l| l.find(name))
            .and_then(|e| e.comment.clone());
        Some(comment.unwrap_or_else(|| name.clone()))
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    /// Activate a listing row: open a folder, show an image, or download a file.
    pub fn activate(
        &mut self,
        name: &str,
        viewport_width: Option<u32>,
    ) -> Result<Vec<Effect>, BrowseError> {
        let listing = self.navigator.listing().ok_or(BrowseError::NoListing)?;
        let kind = listing
            .find(name)
            .map(|e| e.kind())
            .ok_or_else(|| BrowseError::UnknownEntry(name.to_string()))?;

        match kind {
            EntryKind::Directory => self.enter(name),
            EntryKind::Image => {
                self.selected = Some(name.to_string());
                self.notice = None;
                self.carousel.select(name);
                Ok(vec![self.request_preview(name, viewport_width)])
            }
            EntryKind::Other => {
                self.selected = Some(name.to_string());
                self.notice = None;
                self.downloads += 1;
                Ok(vec![Effect::FetchFile(FileRequest {
                    name: name.to_string(),
                    path: self.navigator.path().entry_path(name),
                })])
            }
        }
    }

    /// Descend into a folder of the current listing.
    pub fn enter(&mut self, name: &str) -> Result<Vec<Effect>, BrowseError> {
        let request = self.navigator.enter(name)?;
        Ok(self.folder_changed(request))
    }

    /// Go up one folder. No-op at the root.
    pub fn go_back(&mut self) -> Vec<Effect> {
        match self.navigator.go_back() {
            Some(request) => self.folder_changed(request),
            None => Vec::new(),
        }
    }

    /// Step the carousel and load the new image.
    pub fn navigate(&mut self, direction: Direction, viewport_width: Option<u32>) -> Vec<Effect> {
        let Some(name) = self.carousel.step(direction).map(String::from) else {
            return Vec::new();
        };
        self.selected = None;
        self.notice = None;
        vec![self.request_preview(&name, viewport_width)]
    }

    /// Reload the active image without a downscale hint.
    pub fn load_full_resolution(&mut self) -> Vec<Effect> {
        let Some(name) = self.carousel.current_name().map(String::from) else {
            return Vec::new();
        };
        self.notice = None;
        vec![self.request_image(&name, None, true)]
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -------------------------------------------------------------------------
    // Host events
    // -------------------------------------------------------------------------

    /// Apply a back/forward navigation reported by the host.
    pub fn history_popped(&mut self, entry: Option<HistoryEntry>) -> Vec<Effect> {
        let Some(target) = self.history.popped(entry, self.navigator.path()) else {
            return Vec::new();
        };
        let request = self.navigator.navigate_to(target);
        self.folder_changed(request)
    }

    // -------------------------------------------------------------------------
    // Completions
    // -------------------------------------------------------------------------

    /// Returns `false` when the reply belongs to a folder that is no longer current.
    pub fn complete_listing(&mut self, reply: ListingReply) -> bool {
        if !self.navigator.apply(reply) {
            return false;
        }
        match self.navigator.listing() {
            Some(listing) => self.carousel.rebuild(listing),
            None => self.carousel.clear(),
        }
        true
    }

    /// Returns `false` when a newer image request superseded this one.
    pub fn complete_image(&mut self, reply: ImageReply) -> bool {
        let bytes = match reply.result {
            Ok(bytes) => bytes,
            Err(e) => {
                if !self.resources.fail(reply.ticket) {
                    return false;
                }
                let action = if reply.full_resolution {
                    "Error loading full size image"
                } else {
                    "Error loading image"
                };
                self.notice = Some(format!("{}: {}", action, e));
                return true;
            }
        };

        let mime = image_mime(&reply.name);
        match self
            .resources
            .complete(reply.ticket, &reply.name, &bytes, mime, reply.full_resolution)
        {
            Ok(applied) => applied,
            Err(e) => {
                self.notice = Some(format!("Error displaying image: {}", e));
                true
            }
        }
    }

    /// Hand downloaded bytes to the host save mechanism.
    pub fn complete_download(&mut self, reply: FileReply) {
        self.downloads = self.downloads.saturating_sub(1);
        let saved = match reply.result {
            Ok(bytes) => self
                .resources
                .download(&reply.name, &bytes)
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        if let Err(msg) = saved {
            self.notice = Some(format!("Error downloading file: {}", msg));
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn request_preview(&mut self, name: &str, viewport_width: Option<u32>) -> Effect {
        self.request_image(name, viewport_width, false)
    }

    fn request_image(&mut self, name: &str, width: Option<u32>, full_resolution: bool) -> Effect {
        Effect::FetchImage(ImageRequest {
            ticket: self.resources.begin(),
            name: name.to_string(),
            path: self.navigator.path().entry_path(name),
            width,
            full_resolution,
        })
    }

    fn folder_changed(&mut self, request: ListingRequest) -> Vec<Effect> {
        self.carousel.clear();
        self.resources.clear();
        self.selected = None;
        self.notice = None;

        let mut effects = Vec::with_capacity(2);
        if let Some(entry) = self.history.path_changed(&request.path) {
            effects.push(Effect::PushHistory(entry));
        }
        effects.push(Effect::FetchListing(request));
        effects
    }
}
