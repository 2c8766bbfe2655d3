/// Cookie relay running in the extension's background service worker
///
/// Content scripts cannot read cookies; they ask us over
/// `chrome.runtime.sendMessage` and we answer from `chrome.cookies`. The
/// worker script owns the `onMessage` listener and forwards each message
/// to `relay_message` once the module is initialised.

use crate::error::ExtensionError;
use crate::messaging::{CookieRequest, CookieResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCookie(url: &str, name: &str) -> Result<JsValue, JsValue>;
}

/// Returns a promise for the response, or `undefined` for messages that are
/// not ours.
pub fn handle_message(message: JsValue) -> JsValue {
    let request: CookieRequest = match serde_wasm_bindgen::from_value(message) {
        Ok(request) => request,
        Err(_) => return JsValue::UNDEFINED,
    };
    if !request.is_get_cookie() {
        return JsValue::UNDEFINED;
    }

    future_to_promise(async move {
        let response = lookup_cookie(&request).await?;
        serde_wasm_bindgen::to_value(&response)
            .map_err(|e| JsValue::from(ExtensionError::codec(e)))
    })
    .into()
}

async fn lookup_cookie(request: &CookieRequest) -> Result<CookieResponse, ExtensionError> {
    let value = getCookie(&request.url, &request.name)
        .await
        .map_err(ExtensionError::bridge)?;

    log::debug!("Cookie {} for {}: found={}", request.name, request.url, value.is_string());
    Ok(CookieResponse::from_lookup(value.as_string()))
}
