/// Configuration for the toolbar augmenter
///
/// Every value here is a contract with the host page (pastvu.com): the
/// toolbar selector and its unaugmented child count, the language cookie,
/// and the localStorage keys the map reads on load. Defaults match the
/// live site; a partial JS object passed to `start_content_with_config`
/// overrides individual fields.
use crate::error::ExtensionError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AugmenterConfig {
    pub toolbar_selector: String,
    /// Child count of a freshly rendered toolbar; any other count means
    /// the toolbar is not (or no longer) in its unaugmented state.
    pub toolbar_fingerprint: u32,
    pub cookie_url: String,
    pub cookie_name: String,
    pub storage_keys: StorageKeys,
    pub dropdown_offset: DropdownOffset,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub is_painting: String,
    pub year_from: String,
    pub year_to: String,
}

/// Pixel offset of the dropdown from the button's bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DropdownOffset {
    pub top: f64,
    pub left: f64,
}

impl Default for AugmenterConfig {
    fn default() -> Self {
        AugmenterConfig {
            toolbar_selector: ".trtools".to_string(),
            toolbar_fingerprint: 6,
            cookie_url: "https://pastvu.com".to_string(),
            cookie_name: "past_lang".to_string(),
            storage_keys: StorageKeys::default(),
            dropdown_offset: DropdownOffset::default(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        StorageKeys {
            is_painting: "map.isPainting".to_string(),
            year_from: "map.year.1".to_string(),
            year_to: "map.year2.1".to_string(),
        }
    }
}

impl Default for DropdownOffset {
    fn default() -> Self {
        DropdownOffset { top: 4.0, left: 2.0 }
    }
}

impl AugmenterConfig {
    pub fn validate(&self) -> Result<(), ExtensionError> {
        if self.toolbar_selector.trim().is_empty() {
            return Err(ExtensionError::Config("toolbar selector is empty".to_string()));
        }
        if self.toolbar_fingerprint == 0 {
            return Err(ExtensionError::Config(
                "toolbar fingerprint must be at least 1".to_string(),
            ));
        }
        if self.cookie_name.is_empty() {
            return Err(ExtensionError::Config("cookie name is empty".to_string()));
        }

        let parsed = url::Url::parse(&self.cookie_url)
            .map_err(|e| ExtensionError::Config(format!("cookie url {}: {}", self.cookie_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ExtensionError::Config(format!(
                "cookie url must be http(s), got {}",
                parsed.scheme()
            )));
        }

        let keys = &self.storage_keys;
        if keys.is_painting.is_empty() || keys.year_from.is_empty() || keys.year_to.is_empty() {
            return Err(ExtensionError::Config("storage keys must not be empty".to_string()));
        }

        Ok(())
    }
}
