//! Network fetching utilities with timeout support.
//!
//! Provides a JSON POST helper for unary RPC calls, raced against a timeout.

use js_sys::{Array, Promise};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, which is how a timeout is
/// told apart from a completed fetch.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Response of a POST: HTTP status and body text.
#[derive(Debug)]
pub struct PostResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

/// POST `body` as JSON to `url` and return the status and body text.
///
/// Uses [`race_with_timeout`]; if the request takes longer than
/// `FETCH_TIMEOUT_MS`, returns `FetchError::Timeout`.
pub async fn post_json<B: Serialize>(
    url: &str,
    body: &B,
    extra_headers: &[(&str, &str)],
) -> Result<PostResponse, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let payload = serde_json::to_string(body).map_err(|_| FetchError::RequestCreationFailed)?;

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in extra_headers {
        headers
            .set(name, value)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result
                .dyn_into()
                .map_err(|_| FetchError::ResponseReadFailed)?;

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            Ok(PostResponse {
                status: resp.status(),
                ok: resp.ok(),
                body: text.as_string().ok_or(FetchError::ResponseReadFailed)?,
            })
        }
    }
}
