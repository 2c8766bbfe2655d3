/// Access to browser globals as `Result`s

use crate::error::ExtensionError;
use web_sys::{Document, HtmlElement, Storage, Window};

pub fn window() -> Result<Window, ExtensionError> {
    web_sys::window().ok_or(ExtensionError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, ExtensionError> {
    window()?
        .document()
        .ok_or(ExtensionError::MissingGlobal("document"))
}

pub fn body() -> Result<HtmlElement, ExtensionError> {
    document()?
        .body()
        .ok_or(ExtensionError::MissingGlobal("document.body"))
}

/// The page's localStorage (page-scoped, survives reload)
pub fn local_storage() -> Result<Storage, ExtensionError> {
    window()?
        .local_storage()
        .map_err(ExtensionError::bridge)?
        .ok_or(ExtensionError::MissingGlobal("localStorage"))
}

pub fn reload() -> Result<(), ExtensionError> {
    window()?.location().reload().map_err(ExtensionError::bridge)
}
