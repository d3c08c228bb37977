//! Persistent key-value settings
//!
//! Only two values outlive a page load: the theme preference and the
//! admin bearer token. Callers hold an explicit store handle instead of
//! reaching for ambient browser globals, so session and theme logic stay
//! testable off-browser.

use std::cell::RefCell;
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";
pub const TOKEN_KEY: &str = "token";

/// Synchronous key-value persistence. Writes take effect immediately;
/// there is no batching.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed store. Storage can be unavailable (private
/// browsing, disabled cookies); every failure reads as "no value".
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSettings;

impl SettingsStore for BrowserSettings {
    fn get(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for unit tests.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RefCell<HashMap<String, String>>,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemorySettings::default();
        assert_eq!(store.get(THEME_KEY), None);

        store.set(THEME_KEY, "light");
        assert_eq!(store.get(THEME_KEY), Some("light".to_string()));

        store.remove(THEME_KEY);
        assert_eq!(store.get(THEME_KEY), None);
    }
}
