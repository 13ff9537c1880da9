//! Object URL host for preview images and downloads.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::dom;
use crate::core::BlobHost;
use crate::core::error::HostError;

/// [`BlobHost`] backed by `Blob` + `URL.createObjectURL`.
///
/// Handles are `blob:` URLs usable directly as `<img src>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebBlobHost;

impl BlobHost for WebBlobHost {
    type Handle = String;

    fn create(&self, bytes: &[u8], mime: &str) -> Result<String, HostError> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes));

        let options = BlobPropertyBag::new();
        options.set_type(mime);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| HostError::BlobCreationFailed)?;
        Url::create_object_url_with_blob(&blob).map_err(|_| HostError::ObjectUrlFailed)
    }

    fn release(&self, handle: String) {
        if Url::revoke_object_url(&handle).is_err() {
            web_sys::console::warn_1(&format!("Failed to revoke {}", handle).into());
        }
    }

    fn save(&self, handle: &String, file_name: &str) -> Result<(), HostError> {
        let document = dom::document().ok_or(HostError::NoDocument)?;
        let body = document.body().ok_or(HostError::NoDocument)?;

        let anchor = document
            .create_element("a")
            .map_err(|_| HostError::SaveFailed)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| HostError::SaveFailed)?;
        anchor.set_href(handle);
        anchor.set_download(file_name);

        body.append_child(&anchor).map_err(|_| HostError::SaveFailed)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_create_yields_blob_url() {
        let host = WebBlobHost;
        let url = host.create(&[0xff, 0xd8, 0xff], "image/jpeg").unwrap();
        assert!(url.starts_with("blob:"));
        host.release(url);
    }
}
