/// PastVu Decade Filter - Chrome extension adding a decade quick-filter
/// to the pastvu.com map toolbar
/// Built with Rust + WASM + Yew

mod background;
pub mod config;
pub mod content;
pub mod decades;
mod dom;
pub mod error;
pub mod locale;
pub mod messaging;
pub mod selection;
pub mod ui;
pub mod watcher;

use config::AugmenterConfig;
use error::ExtensionError;
use wasm_bindgen::prelude::*;

// Set up panic hook and logger once per extension context
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Background service worker: answer one runtime message. Resolves to the
// response, or returns `undefined` for messages that are not cookie requests.
#[wasm_bindgen]
pub fn relay_message(message: JsValue) -> JsValue {
    background::handle_message(message)
}

// Content script: watch for the map toolbar and inject the decade control
#[wasm_bindgen]
pub fn start_content() -> Result<(), JsValue> {
    content::start_augmenter(AugmenterConfig::default())?;
    Ok(())
}

// Same as `start_content`, overriding any subset of the config fields
#[wasm_bindgen]
pub fn start_content_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: AugmenterConfig = if config.is_undefined() || config.is_null() {
        AugmenterConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(ExtensionError::codec)?
    };

    content::start_augmenter(config)?;
    Ok(())
}
