//! Browser `localStorage` implementation of [`KeyValueStore`].

use barkedlogy_core::storage::KeyValueStore;
use barkedlogy_core::StoreError;
use wasm_bindgen::JsValue;

/// Store backed by `window.localStorage`.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Opens the window's local storage.
    ///
    /// Fails with [`StoreError::Unavailable`] outside a window context or
    /// when the browser has storage disabled.
    pub fn open() -> Result<Self, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(backend_error)?
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

fn backend_error(e: JsValue) -> StoreError {
    StoreError::Backend(format!("{:?}", e))
}

impl KeyValueStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}
