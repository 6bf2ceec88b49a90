//! Search state: term, cluster filter and pagination offset.
//!
//! One [`SearchState`] is owned by whichever page is active. It is mirrored
//! into durable storage (see [`crate::storage`]) so it survives navigation
//! between pages.

use crate::api::ArticleQuery;
use crate::clusters::filter_value;
use crate::config::PAGE_SIZE;
use crate::models::{Article, ArticlesPage};

/// Current search parameters.
///
/// `skip` is always a non-negative multiple of `limit`: it is only ever reset
/// to zero or advanced by exactly one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    search_term: String,
    cluster_id: Option<String>,
    skip: usize,
    limit: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl SearchState {
    /// Empty search with the given page size.
    ///
    /// A zero page size is bumped to one so "load more" always advances.
    pub fn new(limit: usize) -> Self {
        Self {
            search_term: String::new(),
            cluster_id: None,
            skip: 0,
            limit: limit.max(1),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn cluster_id(&self) -> Option<&str> {
        self.cluster_id.as_deref()
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Starts a new search from the first page.
    ///
    /// Sentinel cluster ids are dropped.
    pub fn reset(&mut self, search_term: impl Into<String>, cluster_id: Option<&str>) {
        self.search_term = search_term.into();
        self.cluster_id = filter_value(cluster_id);
        self.skip = 0;
    }

    /// Advances to the next page.
    pub fn advance_page(&mut self) {
        self.skip = self.skip.saturating_add(self.limit);
    }

    /// Request parameters for the current page.
    pub fn query(&self) -> ArticleQuery {
        ArticleQuery::new(
            self.search_term.clone(),
            self.cluster_id.clone(),
            self.skip,
            self.limit,
        )
    }

    /// "Load more" stays visible only while full pages keep arriving.
    pub fn has_more(&self, last_page_len: usize) -> bool {
        last_page_len >= self.limit
    }
}

/// Result of fetching one page, ready to be applied to the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PageUpdate {
    pub articles: Vec<Article>,
    pub total_results: u64,
    /// Replace the grid instead of appending
    pub reset: bool,
    pub show_load_more: bool,
}

impl PageUpdate {
    pub fn from_page(state: &SearchState, page: ArticlesPage, reset: bool) -> Self {
        let show_load_more = state.has_more(page.articles.len());
        Self {
            articles: page.articles,
            total_results: page.total_results,
            reset,
            show_load_more,
        }
    }
}

/// Articles currently shown in the results grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList {
    articles: Vec<Article>,
    loaded: bool,
}

impl ResultList {
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Clears the grid first when `reset`, otherwise appends.
    pub fn apply(&mut self, reset: bool, articles: Vec<Article>) {
        if reset {
            self.articles = articles;
        } else {
            self.articles.extend(articles);
        }
        self.loaded = true;
    }

    /// True once a fetch has landed and produced nothing to show.
    pub fn show_placeholder(&self) -> bool {
        self.loaded && self.articles.is_empty()
    }
}
