//! Platform storage for state shared between pages.
//!
//! Web builds persist to browser `localStorage` so a search survives the
//! move from the home page to the results page. Native builds keep state in
//! memory.

#[cfg(target_arch = "wasm32")]
mod local_storage;

use std::rc::Rc;

pub use barkedlogy_core::storage::{InMemoryStore, KeyValueStore};

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Shared handle to the store every page reads and writes.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Opens `localStorage`, falling back to memory when the browser denies it.
#[cfg(target_arch = "wasm32")]
pub fn open_platform_store() -> SharedStore {
    use dioxus::logger::tracing::warn;

    match LocalStorageStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!("localStorage unavailable ({}), state will not persist", e);
            Rc::new(InMemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_store() -> SharedStore {
    Rc::new(InMemoryStore::new())
}
