//! Browser session history bindings.
//!
//! Frames carry the serialized [`HistoryEntry`] as their state object and the
//! folder as the URL fragment, so reloads and shared links open the same folder.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::PopStateEvent;

use super::dom;
use crate::core::HistoryEntry;
use crate::models::FolderPath;

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Malformed escapes are kept as typed.
fn decode_segment(segment: &str) -> String {
    js_sys::decode_uri_component(segment)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| segment.to_string())
}

fn frame_url(entry: &HistoryEntry) -> String {
    entry.fragment(encode_segment).unwrap_or_else(dom::pathname)
}

/// Push a new frame for `entry`.
pub fn push(entry: &HistoryEntry) {
    write(entry, false);
}

/// Overwrite the current frame with `entry`.
pub fn replace(entry: &HistoryEntry) {
    write(entry, true);
}

fn write(entry: &HistoryEntry, replace: bool) {
    let Some(history) = dom::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let state = match serde_wasm_bindgen::to_value(entry) {
        Ok(state) => state,
        Err(e) => {
            web_sys::console::warn_1(&format!("History state not serializable: {}", e).into());
            return;
        }
    };
    let url = frame_url(entry);
    let written = if replace {
        history.replace_state_with_url(&state, "", Some(&url))
    } else {
        history.push_state_with_url(&state, "", Some(&url))
    };
    if written.is_err() {
        web_sys::console::warn_1(&format!("Failed to write history frame {}", url).into());
    }
}

/// Folder encoded in the current URL fragment.
pub fn initial_folder() -> FolderPath {
    HistoryEntry::folder_from_fragment(&dom::get_hash(), decode_segment)
}

/// Call `on_pop` with the decoded frame on every back/forward navigation.
///
/// Frames without a readable state (e.g. created outside the app) are
/// reported as `None`. The listener lives for the rest of the page.
pub fn listen_popstate(on_pop: impl Fn(Option<HistoryEntry>) + 'static) {
    let closure = Closure::wrap(Box::new(move |event: PopStateEvent| {
        let state = event.state();
        let entry = if state.is_null() || state.is_undefined() {
            None
        } else {
            serde_wasm_bindgen::from_value::<HistoryEntry>(state).ok()
        };
        on_pop(entry);
    }) as Box<dyn Fn(PopStateEvent)>);

    if let Some(window) = dom::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_fragment_survives_percent_signs() {
        let folder = FolderPath::root().push("a%41").push("b c");
        let url = frame_url(&HistoryEntry::new(folder.clone()));
        assert_eq!(url, "#a%2541/b%20c");
        assert_eq!(HistoryEntry::folder_from_fragment(&url, decode_segment), folder);
    }
}
