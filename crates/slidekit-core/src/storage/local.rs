//! Browser `localStorage` preferences for WASM.

use super::{PreferenceStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Preferences kept in `window.localStorage`.
#[derive(Debug, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    /// Create a handle to the page's local storage.
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> StorageResult<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(e: JsValue) -> StorageError {
    StorageError::Other(format!("{:?}", e))
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
