//! UI components for the BARKEDLOGY application.
//!
//! - [`App`]: detects the page from the location and renders it
//! - `home`: landing page with the main search box and cluster tags
//! - `search_page`: results grid, "load more" and suggested filters
//! - `article_page`: detail view of the article opened from the grid
//! - `autocomplete`: search input with debounced suggestions
//! - `results`: article cards and the grid that holds them
//!
//! # Context
//!
//! [`App`] provides one [`AppContext`] holding the API client, the platform
//! store and the current page:
//!
//! ```ignore
//! let ctx = use_app_context();
//! let clusters = ctx.api.fetch_clusters().await?;
//! ```

mod article_page;
mod autocomplete;
mod home;
mod results;
mod search_page;

pub use article_page::ArticlePage;
pub use autocomplete::AutocompleteInput;
pub use home::HomePage;
pub use results::{ArticleCard, ResultsGrid};
pub use search_page::SearchPage;

use barkedlogy_core::config::{ClientConfig, DEFAULT_API_URL};
use barkedlogy_core::routing::legacy_search_term;
use barkedlogy_core::session::{search_articles, SearchOutcome};
use barkedlogy_core::{ApiClient, Page, ReqwestTransport, SearchState};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use once_cell::sync::Lazy;
use url::Url;

use crate::platform;
use crate::storage::{open_platform_store, SharedStore};

static DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(DEFAULT_API_URL).expect("default API URL is valid"));

/// Shared handles every page needs.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient<ReqwestTransport>,
    pub store: SharedStore,
    pub config: ClientConfig,
    pub page: Page,
}

impl AppContext {
    fn from_location(config: ClientConfig) -> Self {
        let location = platform::current_location();
        let page = Page::from_path(&location.path);
        info!("Loaded {} as {:?}", location.path, page);

        if let Some(term) = legacy_search_term(&location.query) {
            // Pages restore the search from storage instead.
            info!("Ignoring legacy search parameter '{}'", term);
        }

        let api = ApiClient::from_config(&config).unwrap_or_else(|e| {
            error!(
                "Invalid API URL '{}': {}, using {}",
                config.api_base_url, e, DEFAULT_API_URL
            );
            ApiClient::new(DEFAULT_BASE_URL.clone(), ReqwestTransport::new())
        });

        Self {
            api,
            store: open_platform_store(),
            config,
            page,
        }
    }
}

/// Application context provided by [`App`].
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Starts a search from any page and navigates when the results live
/// elsewhere. Returns the outcome so the results page can refresh in place.
pub(crate) fn dispatch_search(
    ctx: &AppContext,
    mut state: Signal<SearchState>,
    term: &str,
    cluster_id: Option<&str>,
) -> SearchOutcome {
    let outcome = search_articles(&mut state.write(), &ctx.store, term, cluster_id, ctx.page);
    if let SearchOutcome::Navigate(target) = outcome {
        platform::navigate_to(target);
    }
    outcome
}

/// Root component: one page per document, chosen from the URL path.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(|| AppContext::from_location(ClientConfig::default()));

    match ctx.page {
        Page::Home => rsx! { HomePage {} },
        Page::Results => rsx! { SearchPage {} },
        Page::Article => rsx! { ArticlePage {} },
        Page::Unknown => rsx! {},
    }
}
