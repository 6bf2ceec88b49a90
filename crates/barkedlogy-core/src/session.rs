//! Search transitions shared by every page.
//!
//! These functions take the page's [`SearchState`] explicitly instead of
//! reaching for globals. The order is always: update state, persist, then
//! fetch or navigate.

use tracing::warn;

use crate::api::{ApiClient, Transport};
use crate::clusters::suggested_filters;
use crate::error::ApiError;
use crate::models::Cluster;
use crate::routing::Page;
use crate::state::{PageUpdate, SearchState};
use crate::storage::{save_search, save_total, KeyValueStore};

/// What the caller must do after starting a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Already on the results page: fetch the first page and replace the grid
    RenderInPlace,
    /// Go to another page; it restores the persisted search on load
    Navigate(Page),
}

/// Starts a new search for `term`, optionally filtered by cluster.
///
/// The offset always returns to zero. A storage failure is logged and does
/// not stop the search.
pub fn search_articles<S: KeyValueStore + ?Sized>(
    state: &mut SearchState,
    store: &S,
    term: &str,
    cluster_id: Option<&str>,
    current_page: Page,
) -> SearchOutcome {
    state.reset(term, cluster_id);
    if let Err(e) = save_search(store, state) {
        warn!("Failed to persist search state: {}", e);
    }

    if current_page == Page::Results {
        SearchOutcome::RenderInPlace
    } else {
        SearchOutcome::Navigate(Page::Results)
    }
}

/// Moves to the next page. The caller then fetches with `reset = false`.
pub fn load_more(state: &mut SearchState) {
    state.advance_page();
}

/// Fetches the page described by `state` and records the total result count.
pub async fn fetch_page<T, S>(
    api: &ApiClient<T>,
    store: &S,
    state: &SearchState,
    reset: bool,
) -> Result<PageUpdate, ApiError>
where
    T: Transport,
    S: KeyValueStore + ?Sized,
{
    let page = api.fetch_articles(&state.query()).await?;
    if let Err(e) = save_total(store, page.total_results) {
        warn!("Failed to persist result total: {}", e);
    }
    Ok(PageUpdate::from_page(state, page, reset))
}

/// Fetches clusters and picks a random handful to offer as filters.
pub async fn load_suggested_filters<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<Cluster>, ApiError> {
    let clusters = api.fetch_clusters().await?;
    Ok(suggested_filters(&clusters, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_search, load_total, InMemoryStore};
    use crate::test_utils::{test_client, ScriptedTransport};

    fn articles_json(n: usize, total: u64) -> String {
        let articles: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"title":"Paper {}","final_cluster":"1"}}"#, i))
            .collect();
        format!(
            r#"{{"articles":[{}],"total_results":{}}}"#,
            articles.join(","),
            total
        )
    }

    #[test]
    fn test_search_resets_offset_and_persists() {
        let store = InMemoryStore::new();
        let mut state = SearchState::new(40);
        state.reset("old", None);
        load_more(&mut state);
        load_more(&mut state);

        let outcome = search_articles(&mut state, &store, "gravity", None, Page::Results);

        assert_eq!(outcome, SearchOutcome::RenderInPlace);
        assert_eq!(state.skip(), 0);
        assert_eq!(load_search(&store, 40).search_term(), "gravity");
    }

    #[test]
    fn test_search_from_other_pages_navigates() {
        let store = InMemoryStore::new();
        let mut state = SearchState::new(40);
        for page in [Page::Home, Page::Article, Page::Unknown] {
            let outcome = search_articles(&mut state, &store, "", Some("4"), page);
            assert_eq!(outcome, SearchOutcome::Navigate(Page::Results));
            assert_eq!(state.cluster_id(), Some("4"));
        }
    }

    #[tokio::test]
    async fn test_fetch_page_records_total() {
        let transport = ScriptedTransport::new();
        transport.push_body(articles_json(3, 3));
        let client = test_client(transport);
        let store = InMemoryStore::new();
        let state = SearchState::new(40);

        let update = fetch_page(&client, &store, &state, true).await.unwrap();

        assert_eq!(update.articles.len(), 3);
        assert!(!update.show_load_more);
        assert!(update.reset);
        assert_eq!(load_total(&store), Some(3));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_total_untouched() {
        let transport = ScriptedTransport::new();
        transport.push_status(502);
        let client = test_client(transport);
        let store = InMemoryStore::new();
        crate::storage::save_total(&store, 17).unwrap();

        let result = fetch_page(&client, &store, &SearchState::new(40), true).await;

        assert!(result.is_err());
        assert_eq!(load_total(&store), Some(17));
    }

    #[tokio::test]
    async fn test_load_suggested_filters_filters_sentinels() {
        let transport = ScriptedTransport::new();
        transport.push_body(
            r#"{"clusters":[
                {"id":1,"name":"Plants","article_count":3},
                {"id":2,"name":"Sin categoría","article_count":3},
                {"id":"-1","name":"-1","article_count":9},
                {"id":3,"name":"NAN","article_count":9},
                {"id":4,"name":"Empty","article_count":0}
            ]}"#,
        );
        let client = test_client(transport);

        let filters = load_suggested_filters(&client).await.unwrap();
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, "Plants");
    }
}
