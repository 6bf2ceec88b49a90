//! Production configuration constants.
//!
//! These values define how the front end talks to the search API and how the
//! pages behave. The API base URL can be overridden at build time with the
//! `BARKEDLOGY_API_URL` environment variable; a browser bundle has no process
//! environment to read at runtime.
//!
//! # Usage
//!
//! ```
//! use barkedlogy_core::config::{ClientConfig, PAGE_SIZE};
//!
//! let config = ClientConfig::default();
//! assert_eq!(config.page_size, PAGE_SIZE);
//! ```

use url::Url;

use crate::error::ApiError;

// =============================================================================
// Search API
// =============================================================================

/// Search API used when no build-time override is set.
pub const DEFAULT_API_URL: &str = "https://space-biology-knowledge-engine-n1jh.onrender.com";

/// Number of articles requested per page.
pub const PAGE_SIZE: usize = 40;

// =============================================================================
// Autocomplete
// =============================================================================

/// Terms shorter than this never reach the association endpoint.
pub const SUGGESTION_MIN_CHARS: usize = 3;

/// Maximum number of related terms shown (and requested).
pub const SUGGESTION_LIMIT: usize = 5;

/// Quiet period after the last keystroke before suggestions are fetched.
pub const AUTOCOMPLETE_DEBOUNCE_MS: u32 = 300;

// =============================================================================
// Clusters and thumbnails
// =============================================================================

/// Number of random cluster filters offered on the results page.
pub const SUGGESTED_FILTER_COUNT: usize = 6;

/// Directory holding one `{cluster_id}.jpg` thumbnail per cluster.
pub const CLUSTER_IMAGE_DIR: &str = "assets/clusters";

/// Image used when a cluster thumbnail fails to load.
pub const FALLBACK_IMAGE: &str = "assets/logo_barquito.png";

/// Site name appended to the article page title.
pub const SITE_NAME: &str = "BARKEDLOGY";

/// Client configuration resolved at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the search API (no trailing path)
    pub api_base_url: String,
    /// Articles per page, also the "load more" increment
    pub page_size: usize,
}

impl ClientConfig {
    /// Creates a configuration for the given API base URL.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            page_size: PAGE_SIZE,
        }
    }

    /// Parses the configured base URL.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        Ok(Url::parse(&self.api_base_url)?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(option_env!("BARKEDLOGY_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ClientConfig::default();
        assert!(config.base_url().is_ok());
        assert_eq!(config.page_size, 40);
    }

    #[test]
    fn test_invalid_base_url_is_reported() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(config.base_url(), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_debounce_matches_widget_timing() {
        assert_eq!(AUTOCOMPLETE_DEBOUNCE_MS, 300);
        assert!(SUGGESTION_LIMIT <= SUGGESTED_FILTER_COUNT);
    }
}
