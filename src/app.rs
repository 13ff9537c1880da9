//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the effect
//! runner that executes [`SessionEffect`]s emitted by the browser session.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ConnectClient;
use crate::components::Browser;
use crate::config::{DARK_MODE_QUERY, HIDDEN_ENTRY_POLICY, SERVICE_BASE_URL};
use crate::core::Effect as SessionEffect;
use crate::core::{BrowserSession, Direction, HistoryEntry, dispatch};
use crate::models::ColorScheme;
use crate::utils::{WebBlobHost, dom, history};

/// Session type used by the UI.
pub type Session = BrowserSession<WebBlobHost>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children with
/// `use_context::<AppContext>()`. All fields are signals or stored values, so
/// the context is `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation, carousel, and preview state.
    pub session: RwSignal<Session>,

    /// Remote file service client.
    pub client: StoredValue<ConnectClient>,

    /// Host light/dark preference.
    pub color_scheme: Signal<ColorScheme>,
}

impl AppContext {
    /// Creates the context with a root session and the configured service client.
    pub fn new() -> Self {
        let is_dark_mode = leptos_use::use_media_query(DARK_MODE_QUERY.to_string());
        Self {
            session: RwSignal::new(BrowserSession::new(WebBlobHost, HIDDEN_ENTRY_POLICY)),
            client: StoredValue::new(ConnectClient::new(SERVICE_BASE_URL)),
            color_scheme: Signal::derive(move || ColorScheme::from_dark(is_dark_mode.get())),
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Open the folder named by the URL fragment and start listening for
    /// back/forward navigation.
    pub fn start(&self) {
        let ctx = *self;
        history::listen_popstate(move |entry| ctx.history_popped(entry));

        let initial = history::initial_folder();
        self.apply(|s| s.start(initial));
    }

    /// Activate a listing row.
    pub fn activate(&self, name: &str) {
        let width = dom::viewport_width();
        match self.session.try_update(|s| s.activate(name, width)) {
            Some(Ok(effects)) => self.run(effects),
            Some(Err(e)) => web_sys::console::warn_1(&e.to_string().into()),
            None => {}
        }
    }

    pub fn go_back(&self) {
        self.apply(|s| s.go_back());
    }

    pub fn navigate(&self, direction: Direction) {
        let width = dom::viewport_width();
        self.apply(|s| s.navigate(direction, width));
    }

    pub fn load_full_resolution(&self) {
        self.apply(|s| s.load_full_resolution());
    }

    pub fn dismiss_notice(&self) {
        self.session.update(|s| s.dismiss_notice());
    }

    fn history_popped(&self, entry: Option<HistoryEntry>) {
        self.apply(|s| s.history_popped(entry));
    }

    // ------------------------------------------------------------------------
    // Effect runner
    // ------------------------------------------------------------------------

    fn apply(&self, action: impl FnOnce(&mut Session) -> Vec<SessionEffect>) {
        if let Some(effects) = self.session.try_update(action) {
            self.run(effects);
        }
    }

    fn run(&self, effects: Vec<SessionEffect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: SessionEffect) {
        let ctx = *self;
        match effect {
            SessionEffect::FetchListing(request) => {
                let client = self.client.get_value();
                spawn_local(async move {
                    let reply = dispatch::fetch_listing(&client, request).await;
                    if let Err(e) = &reply.result {
                        let msg = format!("ListFiles {}: {}", reply.path, e);
                        web_sys::console::warn_1(&msg.into());
                    }
                    let path = reply.path.to_string();
                    if ctx.session.try_update(|s| s.complete_listing(reply)) == Some(false) {
                        let msg = format!("Dropped stale listing for {}", path);
                        web_sys::console::log_1(&msg.into());
                    }
                });
            }
            SessionEffect::FetchImage(request) => {
                let client = self.client.get_value();
                spawn_local(async move {
                    let reply = dispatch::fetch_image(&client, request).await;
                    if let Err(e) = &reply.result {
                        web_sys::console::warn_1(&format!("GetImage {}: {}", reply.name, e).into());
                    }
                    let name = reply.name.clone();
                    if ctx.session.try_update(|s| s.complete_image(reply)) == Some(false) {
                        web_sys::console::log_1(&format!("Dropped stale image {}", name).into());
                    }
                });
            }
            SessionEffect::FetchFile(request) => {
                let client = self.client.get_value();
                spawn_local(async move {
                    let reply = dispatch::fetch_file(&client, request).await;
                    if let Err(e) = &reply.result {
                        web_sys::console::warn_1(&format!("GetFile {}: {}", reply.name, e).into());
                    }
                    ctx.session.update(|s| s.complete_download(reply));
                });
            }
            SessionEffect::PushHistory(entry) => history::push(&entry),
            SessionEffect::ReplaceHistory(entry) => history::replace(&entry),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Opens the initial folder and wires up history events
/// - Mirrors the color scheme onto the document element
/// - Renders the Browser component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.start();

    Effect::new(move |_| {
        let scheme = ctx.color_scheme.get();
        if let Some(root) = dom::document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", scheme.attr());
        }
    });

    view! { <Browser /> }
}
