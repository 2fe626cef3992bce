//! Browser adapters over `localStorage`, `window.location` and `history`.
//!
//! Requires a browser environment (feature `web`).

use crate::error::{Error, Result};
use crate::location::Location;
use crate::storage::TokenStore;
use wasm_bindgen::JsValue;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::LocationUnavailable("no window".into()))
}

/// [`TokenStore`] backed by `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's local storage
    pub fn open() -> Result<Self> {
        let storage = window()
            .map_err(|e| Error::StorageUnavailable(e.to_string()))?
            .local_storage()
            .map_err(|e| Error::StorageUnavailable(describe(&e)))?
            .ok_or_else(|| Error::StorageUnavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl TokenStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::StorageRead(describe(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::StorageWrite(describe(&e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| Error::StorageWrite(describe(&e)))
    }
}

/// [`Location`] backed by `window.location` and `history.replaceState`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn href(&self) -> Result<String> {
        window()?
            .location()
            .href()
            .map_err(|e| Error::LocationUnavailable(describe(&e)))
    }

    fn replace_url(&mut self, href: &str) -> Result<()> {
        let window = window()?;
        let title = window.document().map(|doc| doc.title()).unwrap_or_default();

        window
            .history()
            .map_err(|e| Error::LocationUnavailable(describe(&e)))?
            .replace_state_with_url(&JsValue::NULL, &title, Some(href))
            .map_err(|e| Error::LocationUnavailable(describe(&e)))
    }
}
