//! Binary resource lifecycle.
//!
//! [`ResourceManager`] owns the single preview slot. A handle is created from
//! fetched bytes, exposed for rendering, and released when superseded, cleared,
//! or when the manager is dropped. Downloads use a short-lived handle that is
//! always released after the save is triggered.

use std::fmt;

use super::error::HostError;
use super::generation::{Generation, Ticket};

/// MIME type for downloaded files.
pub const DOWNLOAD_MIME: &str = "application/octet-stream";

/// Host facility for turning bytes into revocable, locally-resolvable references.
pub trait BlobHost {
    /// Reference handed to the renderer (an object URL in the browser).
    type Handle: Clone + fmt::Debug + PartialEq;

    /// Wrap `bytes` in a new handle.
    fn create(&self, bytes: &[u8], mime: &str) -> Result<Self::Handle, HostError>;

    /// Revoke a handle. It must not be used afterwards.
    fn release(&self, handle: Self::Handle);

    /// Hand a handle to the host's save mechanism under `file_name`.
    fn save(&self, handle: &Self::Handle, file_name: &str) -> Result<(), HostError>;
}

/// Handle currently installed in the preview slot.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedResource<T> {
    pub handle: T,
    /// Entry name the bytes belong to
    pub name: String,
    /// Loaded without a width hint
    pub full_resolution: bool,
}

/// Single-slot owner of preview handles.
pub struct ResourceManager<H: BlobHost> {
    host: H,
    active: Option<LoadedResource<H::Handle>>,
    generation: Generation,
    loading: bool,
}

impl<H: BlobHost> ResourceManager<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            active: None,
            generation: Generation::new(),
            loading: false,
        }
    }

    pub fn active(&self) -> Option<&LoadedResource<H::Handle>> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a load for the slot. Earlier loads can no longer complete.
    pub fn begin(&mut self) -> Ticket {
        self.loading = true;
        self.generation.issue()
    }

    /// Install bytes from a completed load.
    ///
    /// Returns `Ok(false)` without touching the slot when `ticket` was superseded.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        name: &str,
        bytes: &[u8],
        mime: &str,
        full_resolution: bool,
    ) -> Result<bool, HostError> {
        if !self.generation.is_current(ticket) {
            return Ok(false);
        }
        self.loading = false;
        self.replace(name, bytes, mime, full_resolution)?;
        Ok(true)
    }

    /// Settle a failed load. The displayed handle is kept.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    /// Create a handle for `bytes`, install it, then release the previous one.
    ///
    /// On failure the previous handle stays installed.
    pub fn replace(
        &mut self,
        name: &str,
        bytes: &[u8],
        mime: &str,
        full_resolution: bool,
    ) -> Result<(), HostError> {
        let handle = self.host.create(bytes, mime)?;
        let previous = self.active.replace(LoadedResource {
            handle,
            name: name.to_string(),
            full_resolution,
        });
        if let Some(previous) = previous {
            self.host.release(previous.handle);
        }
        Ok(())
    }

    /// Release the active handle and abandon any in-flight load.
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.loading = false;
        if let Some(previous) = self.active.take() {
            self.host.release(previous.handle);
        }
    }

    /// Save `bytes` through the host using a temporary handle.
    pub fn download(&self, file_name: &str, bytes: &[u8]) -> Result<(), HostError> {
        let handle = self.host.create(bytes, DOWNLOAD_MIME)?;
        let saved = self.host.save(&handle, file_name);
        self.host.release(handle);
        saved
    }
}

impl<H: BlobHost> Drop for ResourceManager<H> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            self.host.release(active.handle);
        }
    }
}

impl<H: BlobHost> fmt::Debug for ResourceManager<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceManager")
            .field("active", &self.active)
            .field("loading", &self.loading)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeHost;
    use super::*;

    #[test]
    fn test_replace_releases_previous() {
        let host = FakeHost::default();
        let mut manager = ResourceManager::new(host.clone());

        for i in 0..5 {
            let ticket = manager.begin();
            let name = format!("{}.jpg", i);
            assert!(manager.complete(ticket, &name, b"img", "image/jpeg", false).unwrap());
            assert_eq!(host.live(), 1);
        }

        let log = host.0.borrow();
        assert_eq!(log.created, 5);
        // Every load after the first released exactly one predecessor
        assert_eq!(log.released, 4);
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let host = FakeHost::default();
        let mut manager = ResourceManager::new(host.clone());

        let first = manager.begin();
        let second = manager.begin();
        assert!(manager.complete(second, "b.jpg", b"b", "image/jpeg", false).unwrap());
        assert!(!manager.complete(first, "a.jpg", b"a", "image/jpeg", false).unwrap());

        assert_eq!(manager.active().unwrap().name, "b.jpg");
        assert_eq!(host.0.borrow().created, 1);
    }

    #[test]
    fn test_failure_keeps_displayed_handle() {
        let host = FakeHost::default();
        let mut manager = ResourceManager::new(host.clone());
        let ticket = manager.begin();
        manager.complete(ticket, "a.jpg", b"a", "image/jpeg", false).unwrap();
        let shown = manager.active().map(|r| r.handle);

        let ticket = manager.begin();
        assert!(manager.is_loading());
        assert!(manager.fail(ticket));
        assert!(!manager.is_loading());
        assert_eq!(manager.active().map(|r| r.handle), shown);

        host.0.borrow_mut().fail_create = true;
        let ticket = manager.begin();
        assert_eq!(
            manager.complete(ticket, "b.jpg", b"b", "image/jpeg", false),
            Err(HostError::ObjectUrlFailed)
        );
        assert!(!manager.is_loading());
        assert_eq!(manager.active().map(|r| r.handle), shown);
    }

    #[test]
    fn test_clear_and_drop_release() {
        let host = FakeHost::default();
        {
            let mut manager = ResourceManager::new(host.clone());
            let ticket = manager.begin();
            manager.complete(ticket, "a.jpg", b"a", "image/jpeg", false).unwrap();

            let in_flight = manager.begin();
            manager.clear();
            assert_eq!(host.live(), 0);
            assert!(!manager.complete(in_flight, "b.jpg", b"b", "image/jpeg", false).unwrap());

            let ticket = manager.begin();
            manager.complete(ticket, "c.jpg", b"c", "image/jpeg", false).unwrap();
            assert_eq!(host.live(), 1);
        }
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn test_download_releases_temporary_handle() {
        let host = FakeHost::default();
        let manager = ResourceManager::new(host.clone());

        manager.download("report.pdf", b"%PDF").unwrap();

        let log = host.0.borrow();
        assert_eq!(log.saved, ["report.pdf"]);
        assert_eq!(log.mimes, [DOWNLOAD_MIME]);
        assert!(log.live.is_empty());
        assert!(manager.active().is_none());
    }
}
