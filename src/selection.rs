/// Reading and writing the map's year-range selection in localStorage

use crate::config::StorageKeys;
use crate::decades::{earliest, Decade};
use crate::error::{describe_js, ExtensionError};
use crate::locale::Locale;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// String key-value store with localStorage semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ExtensionError>;
}

impl KeyValueStore for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ExtensionError> {
        self.set_item(key, value).map_err(|e| ExtensionError::Storage {
            key: key.to_string(),
            reason: describe_js(&e),
        })
    }
}

impl KeyValueStore for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ExtensionError> {
        self.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a leading integer the way the map's own scripts do: skip leading
/// whitespace, accept an optional sign, then read digits up to the first
/// non-digit. `None` when there are no digits.
pub fn parse_year(raw: &str) -> Option<i64> {
    static LEADING_INT: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_INT.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"));

    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Text for the toolbar button given the stored range
///
/// A range covering exactly one decade shows that decade; a range with no
/// start year ending in 1829 is the truncated 1820s entry. Anything else,
/// including unparsable values, shows the placeholder.
pub fn button_label(locale: &Locale, year_from: Option<&str>, year_to: Option<&str>) -> String {
    match year_from.filter(|s| !s.is_empty()) {
        Some(from) => {
            let from = parse_year(from);
            let to = year_to.and_then(parse_year);
            if let (Some(from), Some(to)) = (from, to) {
                if from % 10 == 0 && to.checked_sub(from) == Some(9) {
                    return locale.decade_name(from);
                }
            }
        }
        None => {
            let earliest = earliest();
            if year_to == Some(earliest.last_year.to_string().as_str()) {
                return locale.decade_name(earliest.label);
            }
        }
    }

    locale.default_decade_text().to_string()
}

/// Year range as it was stored when the page loaded
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoredRange {
    pub year_from: Option<String>,
    pub year_to: Option<String>,
}

impl StoredRange {
    pub fn read(store: &impl KeyValueStore, keys: &StorageKeys) -> StoredRange {
        StoredRange {
            year_from: store.get(&keys.year_from),
            year_to: store.get(&keys.year_to),
        }
    }

    pub fn label(&self, locale: &Locale) -> String {
        button_label(locale, self.year_from.as_deref(), self.year_to.as_deref())
    }
}

/// Write painting-off plus the decade's range, in that order. Not atomic:
/// a failed write leaves earlier writes in place.
pub fn persist_selection(
    store: &mut impl KeyValueStore,
    keys: &StorageKeys,
    decade: &Decade,
) -> Result<(), ExtensionError> {
    store.set(&keys.is_painting, "false")?;
    store.set(&keys.year_from, &decade.first_year.to_string())?;
    store.set(&keys.year_to, &decade.last_year.to_string())?;
    Ok(())
}

/// Persist the decade, then reload. The map only picks up a new range on
/// load; a failed write skips the reload.
pub fn apply_selection(
    store: &mut impl KeyValueStore,
    keys: &StorageKeys,
    decade: &Decade,
    reload: impl FnOnce() -> Result<(), ExtensionError>,
) -> Result<(), ExtensionError> {
    persist_selection(store, keys, decade)?;
    log::info!("Selected {}-{}, reloading", decade.first_year, decade.last_year);
    reload()
}
