/// Messages exchanged between the content script and the background relay

use crate::error::ExtensionError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

pub const GET_COOKIE: &str = "getCookie";
pub const COOKIE_NOT_FOUND: &str = "Cookie not found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieRequest {
    pub action: String,
    pub url: String,
    pub name: String,
}

impl CookieRequest {
    pub fn get_cookie(url: &str, name: &str) -> CookieRequest {
        CookieRequest {
            action: GET_COOKIE.to_string(),
            url: url.to_string(),
            name: name.to_string(),
        }
    }

    pub fn is_get_cookie(&self) -> bool {
        self.action == GET_COOKIE
    }
}

/// `{ value }` on success, `{ error }` when the cookie does not exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CookieResponse {
    Found { value: String },
    Failed { error: String },
}

impl CookieResponse {
    pub fn from_lookup(value: Option<String>) -> CookieResponse {
        match value {
            Some(value) => CookieResponse::Found { value },
            None => CookieResponse::Failed {
                error: COOKIE_NOT_FOUND.to_string(),
            },
        }
    }
}

/// Locale for a finished cookie request. Transport failures and a missing
/// cookie both collapse to `Locale::Error`.
pub fn resolve_locale(response: Result<CookieResponse, ExtensionError>) -> Locale {
    match response {
        Ok(CookieResponse::Found { value }) => Locale::Code(value),
        Ok(CookieResponse::Failed { .. }) => Locale::Error,
        Err(e) => {
            log::warn!("Cookie request failed: {}", e);
            Locale::Error
        }
    }
}
