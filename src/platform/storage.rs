//! LocalStorage-backed key-value store

use wasm_bindgen::JsValue;

use crate::error::EditorError;
use crate::persistence::KeyValueStore;

pub struct LocalStore {
    storage: web_sys::Storage,
}

fn storage_err(err: JsValue) -> EditorError {
    EditorError::Storage(format!("{err:?}"))
}

impl LocalStore {
    /// Open `window.localStorage`; fails when storage is disabled (e.g. private mode)
    pub fn open() -> Result<Self, EditorError> {
        let window = web_sys::window().ok_or_else(|| EditorError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(storage_err)?
            .ok_or_else(|| EditorError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        self.storage.get_item(key).map_err(storage_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError> {
        self.storage.set_item(key, value).map_err(storage_err)
    }

    fn remove(&mut self, key: &str) -> Result<(), EditorError> {
        self.storage.remove_item(key).map_err(storage_err)
    }
}
