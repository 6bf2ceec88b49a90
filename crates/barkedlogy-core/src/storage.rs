//! Durable key-value storage for state that must survive page navigation.
//!
//! This module provides the [`KeyValueStore`] abstraction and typed accessors
//! for the four keys the pages share:
//!
//! - `search_term` - last search term (may be empty)
//! - `selected_cluster` - last cluster filter, empty when none
//! - `search_total` - total result count of the last search
//! - `selected_article` - JSON of the article opened from the results grid
//!
//! # Implementations
//!
//! - [`InMemoryStore`] - HashMap-backed store for tests and native builds
//! - `LocalStorageStore` - browser `localStorage` (in app crate, WASM)
//!
//! Browser local storage is synchronous, so unlike an IndexedDB-backed store
//! this trait has no async methods.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::error::StoreError;
use crate::models::Article;
use crate::state::SearchState;

pub const SEARCH_TERM_KEY: &str = "search_term";
pub const SELECTED_CLUSTER_KEY: &str = "selected_cluster";
pub const SEARCH_TOTAL_KEY: &str = "search_total";
pub const SELECTED_ARTICLE_KEY: &str = "selected_article";

/// String key-value storage shared by every page of the site.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites any existing value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Returns `Ok(())` even if the key didn't exist.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

/// In-memory store that lives as long as the value does.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

// =============================================================================
// Search state
// =============================================================================

/// Persists the search term and cluster filter.
pub fn save_search<S: KeyValueStore + ?Sized>(
    store: &S,
    state: &SearchState,
) -> Result<(), StoreError> {
    store.set_item(SEARCH_TERM_KEY, state.search_term())?;
    store.set_item(SELECTED_CLUSTER_KEY, state.cluster_id().unwrap_or(""))
}

/// Restores the last search, starting again from the first page.
///
/// Unreadable storage yields an empty search.
pub fn load_search<S: KeyValueStore + ?Sized>(store: &S, limit: usize) -> SearchState {
    let read = |key: &str| match store.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", key, e);
            None
        }
    };

    let term = read(SEARCH_TERM_KEY).unwrap_or_default();
    let cluster = read(SELECTED_CLUSTER_KEY);

    let mut state = SearchState::new(limit);
    state.reset(term, cluster.as_deref());
    state
}

pub fn save_total<S: KeyValueStore + ?Sized>(store: &S, total: u64) -> Result<(), StoreError> {
    store.set_item(SEARCH_TOTAL_KEY, &total.to_string())
}

/// Last stored total, if any and parseable.
pub fn load_total<S: KeyValueStore + ?Sized>(store: &S) -> Option<u64> {
    match store.get_item(SEARCH_TOTAL_KEY) {
        Ok(raw) => raw.and_then(|raw| raw.trim().parse().ok()),
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", SEARCH_TOTAL_KEY, e);
            None
        }
    }
}

// =============================================================================
// Selected article
// =============================================================================

pub fn save_selected_article<S: KeyValueStore + ?Sized>(
    store: &S,
    article: &Article,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(article)?;
    store.set_item(SELECTED_ARTICLE_KEY, &json)
}

/// Reads the article chosen on the results page.
///
/// Returns `Ok(None)` when nothing was selected and
/// [`StoreError::Serialization`] when the stored JSON is malformed.
pub fn load_selected_article<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<Article>, StoreError> {
    match store.get_item(SELECTED_ARTICLE_KEY)? {
        Some(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
        _ => Ok(None),
    }
}
