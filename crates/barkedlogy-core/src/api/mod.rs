//! Client for the BARKEDLOGY search API.
//!
//! [`ApiClient`] builds request URLs and decodes responses. The actual HTTP
//! exchange goes through a [`Transport`], so the URL and decoding logic can be
//! exercised without a network.
//!
//! ```ignore
//! use barkedlogy_core::api::{ApiClient, ArticleQuery};
//! use barkedlogy_core::config::ClientConfig;
//!
//! let client = ApiClient::from_config(&ClientConfig::default())?;
//! let page = client.fetch_articles(&ArticleQuery::new("gravity", None, 0, 40)).await?;
//! ```
//!
//! There are no retries, timeouts or caches: every call is a fresh request.

mod http;

pub use http::ReqwestTransport;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::autocomplete::is_queryable;
use crate::config::{ClientConfig, SUGGESTION_LIMIT};
use crate::error::ApiError;
use crate::models::{ArticlesPage, AssociationsResponse, Cluster, ClustersResponse};

/// Performs a GET request and returns the response body.
///
/// Implementations must map non-success statuses to [`ApiError::Status`].
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<String, ApiError>;
}

/// Parameters of one `/articles` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    pub search: String,
    pub cluster_id: Option<String>,
    pub skip: usize,
    pub limit: usize,
}

impl ArticleQuery {
    pub fn new(
        search: impl Into<String>,
        cluster_id: Option<String>,
        skip: usize,
        limit: usize,
    ) -> Self {
        Self {
            search: search.into(),
            cluster_id,
            skip,
            limit,
        }
    }
}

/// Search API client.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: Url,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Creates a client backed by reqwest for the configured API.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(config.base_url()?, ReqwestTransport::new()))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Endpoints are resolved below `base_url`, so a base path such as
    /// `/api` is kept as a directory.
    pub fn new(mut base_url: Url, transport: T) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// URL for an `/articles` request.
    ///
    /// Parameters appear in the order `search`, `cluster_id`, `limit`, `skip`;
    /// empty search terms and missing clusters are omitted.
    pub fn articles_url(&self, query: &ArticleQuery) -> Result<Url, ApiError> {
        let mut url = self.endpoint("articles")?;
        {
            let mut pairs = url.query_pairs_mut();
            if !query.search.is_empty() {
                pairs.append_pair("search", &query.search);
            }
            if let Some(cluster_id) = query.cluster_id.as_deref() {
                pairs.append_pair("cluster_id", cluster_id);
            }
            pairs.append_pair("limit", &query.limit.to_string());
            pairs.append_pair("skip", &query.skip.to_string());
        }
        Ok(url)
    }

    pub fn clusters_url(&self) -> Result<Url, ApiError> {
        self.endpoint("clusters")
    }

    pub fn associations_url(&self, term: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint("associations")?;
        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("limit", &SUGGESTION_LIMIT.to_string());
        Ok(url)
    }

    async fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        debug!("GET {}", url);
        let body = self.transport.get(&url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches one page of articles.
    pub async fn fetch_articles(&self, query: &ArticleQuery) -> Result<ArticlesPage, ApiError> {
        let url = self.articles_url(query)?;
        self.get_json(url).await
    }

    /// Fetches every cluster known to the API.
    pub async fn fetch_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        let url = self.clusters_url()?;
        let response: ClustersResponse = self.get_json(url).await?;
        Ok(response.clusters)
    }

    /// Fetches related terms for autocomplete.
    ///
    /// Terms too short for [`is_queryable`] return immediately without
    /// a request. Failures are logged and yield an empty list.
    pub async fn fetch_suggestions(&self, term: &str) -> Vec<String> {
        let term = term.trim();
        if !is_queryable(term) {
            return Vec::new();
        }

        let result: Result<AssociationsResponse, ApiError> = match self.associations_url(term) {
            Ok(url) => self.get_json(url).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(response) => collect_suggestions(response),
            Err(e) => {
                warn!("Error fetching associations for '{}': {}", term, e);
                Vec::new()
            }
        }
    }
}

/// Flattens rule consequents into a deduplicated list, keeping first-seen
/// order and at most [`SUGGESTION_LIMIT`] entries.
pub fn collect_suggestions(response: AssociationsResponse) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::with_capacity(SUGGESTION_LIMIT);
    for word in response.rules.into_iter().flat_map(|rule| rule.consequents) {
        if !suggestions.contains(&word) {
            suggestions.push(word);
        }
    }
    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssociationRule;
    use crate::clusters::suggested_filters;
    use crate::test_utils::{test_client, ScriptedTransport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rules(sets: &[&[&str]]) -> AssociationsResponse {
        AssociationsResponse {
            rules: sets
                .iter()
                .map(|words| AssociationRule {
                    consequents: words.iter().map(|w| w.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_articles_url_parameter_order() {
        let client = test_client(ScriptedTransport::new());
        let query = ArticleQuery::new("gravity", Some("4".into()), 80, 40);
        let url = client.articles_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test/articles?search=gravity&cluster_id=4&limit=40&skip=80"
        );
    }

    #[test]
    fn test_articles_url_omits_empty_filters() {
        let client = test_client(ScriptedTransport::new());
        let url = client
            .articles_url(&ArticleQuery::new("", None, 0, 40))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.test/articles?limit=40&skip=0");
    }

    #[test]
    fn test_associations_url_encodes_term() {
        let client = test_client(ScriptedTransport::new());
        let url = client.associations_url("bone loss").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test/associations?term=bone+loss&limit=5"
        );
    }

    #[test]
    fn test_collect_suggestions_dedupes_and_caps() {
        let response = rules(&[&["mice", "bone"], &["bone", "muscle"], &["iss", "rat", "plant"]]);
        assert_eq!(
            collect_suggestions(response),
            vec!["mice", "bone", "muscle", "iss", "rat"]
        );
    }

    #[tokio::test]
    async fn test_short_terms_issue_no_request() {
        let client = test_client(ScriptedTransport::new());
        assert!(client.fetch_suggestions("ab").await.is_empty());
        assert!(client.fetch_suggestions("  ab  ").await.is_empty());
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_suggestion_failure_returns_empty() {
        let transport = ScriptedTransport::new();
        transport.push_status(500);
        let client = test_client(transport);

        assert!(client.fetch_suggestions("gravity").await.is_empty());
        assert_eq!(client.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_suggestions_return_empty() {
        let transport = ScriptedTransport::new();
        transport.push_body("<html>oops</html>");
        let client = test_client(transport);
        assert!(client.fetch_suggestions("gravity").await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_suggestions_parses_rules() {
        let transport = ScriptedTransport::new();
        transport.push_body(r#"{"rules":[{"consequents":["microgravity","spaceflight"]},{"consequents":["microgravity"]}]}"#);
        let client = test_client(transport);

        let suggestions = client.fetch_suggestions("gravity").await;
        assert_eq!(suggestions, vec!["microgravity", "spaceflight"]);
        assert_eq!(
            client.transport().requests()[0],
            "https://api.test/associations?term=gravity&limit=5"
        );
    }

    #[tokio::test]
    async fn test_fetch_articles_propagates_status() {
        let transport = ScriptedTransport::new();
        transport.push_status(404);
        let client = test_client(transport);

        let result = client
            .fetch_articles(&ArticleQuery::new("x", None, 0, 40))
            .await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_fetch_clusters() {
        let transport = ScriptedTransport::new();
        transport.push_body(
            r#"{"clusters":[{"id":1,"name":"Plants","article_count":3},{"id":"-1","name":"-1","article_count":9}]}"#,
        );
        let client = test_client(transport);

        let clusters = client.fetch_clusters().await.unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].name, "Plants");
        assert_eq!(client.transport().requests(), vec!["https://api.test/clusters"]);
    }

    #[tokio::test]
    async fn test_fetch_clusters_tolerates_null_names() {
        let transport = ScriptedTransport::new();
        transport.push_body(
            r#"{"clusters":[{"id":1,"name":"Plants","article_count":3},{"id":"-1","name":null,"article_count":9}]}"#,
        );
        let client = test_client(transport);

        let clusters = client.fetch_clusters().await.unwrap();
        assert_eq!(clusters.len(), 2);

        let mut rng = StdRng::seed_from_u64(7);
        let offered = suggested_filters(&clusters, &mut rng);
        assert_eq!(offered.len(), 1);
        assert_eq!(offered[0].name, "Plants");
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let base = Url::parse("https://host.example/api").unwrap();
        let client = ApiClient::new(base, ScriptedTransport::new());

        let url = client
            .articles_url(&ArticleQuery::new("gravity", None, 0, 40))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://host.example/api/articles?search=gravity&limit=40&skip=0"
        );
        assert_eq!(
            client.clusters_url().unwrap().as_str(),
            "https://host.example/api/clusters"
        );

        let slashed = ApiClient::new(
            Url::parse("https://host.example/api/").unwrap(),
            ScriptedTransport::new(),
        );
        assert_eq!(
            slashed.clusters_url().unwrap().as_str(),
            "https://host.example/api/clusters"
        );
    }
}
