/// Error type shared by the relay and the toolbar augmenter
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum ExtensionError {
    /// The extension messaging channel or cookie store call failed
    #[error("bridge call failed: {0}")]
    Bridge(String),

    #[error("message conversion failed: {0}")]
    Codec(String),

    #[error("browser global unavailable: {0}")]
    MissingGlobal(&'static str),

    #[error("failed to write storage key {key}: {reason}")]
    Storage { key: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ExtensionError {
    pub fn bridge(err: JsValue) -> Self {
        ExtensionError::Bridge(describe_js(&err))
    }

    pub fn codec(err: serde_wasm_bindgen::Error) -> Self {
        ExtensionError::Codec(err.to_string())
    }
}

impl From<ExtensionError> for JsValue {
    fn from(err: ExtensionError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value (`Error.message` or the raw string)
pub fn describe_js(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
