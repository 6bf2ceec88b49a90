//! Page detection.
//!
//! The site is three static HTML pages sharing one WASM bundle. The bundle
//! looks at the path once on load and mounts the matching page.

use url::form_urlencoded;

/// Query parameter some older links append to the results page.
///
/// It is recognized but never consumed; searches are always restored from
/// storage.
pub const LEGACY_SEARCH_PARAM: &str = "buscar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Results,
    Article,
    Unknown,
}

impl Page {
    /// Resolves a location path to a page.
    pub fn from_path(path: &str) -> Self {
        if path.contains("index.html") || path.ends_with('/') {
            Page::Home
        } else if path.contains("search_page.html") {
            Page::Results
        } else if path.contains("article.html") {
            Page::Article
        } else {
            Page::Unknown
        }
    }

    /// Relative link to the page, if it has one.
    pub fn href(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("index.html"),
            Page::Results => Some("search_page.html"),
            Page::Article => Some("article.html"),
            Page::Unknown => None,
        }
    }
}

/// Extracts the legacy `?buscar=` value from a location query string.
pub fn legacy_search_term(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == LEGACY_SEARCH_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_paths() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/barkedlogy/"), Page::Home);
    }

    #[test]
    fn test_other_pages() {
        assert_eq!(Page::from_path("/search_page.html"), Page::Results);
        assert_eq!(Page::from_path("/site/article.html"), Page::Article);
        assert_eq!(Page::from_path("/about.html"), Page::Unknown);
        assert_eq!(Page::from_path(""), Page::Unknown);
    }

    #[test]
    fn test_href_round_trips() {
        for page in [Page::Home, Page::Results, Page::Article] {
            let href = page.href().unwrap();
            assert_eq!(Page::from_path(&format!("/{}", href)), page);
        }
        assert_eq!(Page::Unknown.href(), None);
    }

    #[test]
    fn test_legacy_search_term() {
        assert_eq!(
            legacy_search_term("?buscar=bone+loss").as_deref(),
            Some("bone loss")
        );
        assert_eq!(legacy_search_term("?other=1"), None);
        assert_eq!(legacy_search_term(""), None);
    }
}
