//! Records served by the search API.
//!
//! The client treats articles as opaque: only presence checks with display
//! fallbacks are applied, and any field the API adds is carried through so a
//! persisted article comes back exactly as it was served.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Fallback title for articles without one.
pub const UNTITLED: &str = "Sin Título";
/// Card label for articles without a cluster name.
pub const UNCATEGORIZED: &str = "Sin categoría";
/// Detail-page category for articles without a cluster name.
pub const GENERAL_CATEGORY: &str = "General";
/// Detail-page text for articles without any abstract.
pub const NO_ABSTRACT: &str = "No hay resumen.";
/// Link text when the article has a source URL.
pub const SOURCE_LINK_TEXT: &str = "Ir a la fuente original";
/// Link text when the article has no source URL.
pub const NO_LINK_TEXT: &str = "Enlace no disponible";

/// Cluster identifier as it appears on the wire.
///
/// The API is inconsistent about ids: some responses carry strings (`"-1"`,
/// `"nan"`), others JSON numbers (`3`, `3.0`). The original representation
/// is kept so serialization round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClusterRef {
    Number(serde_json::Number),
    Text(String),
}

impl ClusterRef {
    /// Identifier as a string, exactly as the API spelled it.
    pub fn as_key(&self) -> String {
        match self {
            ClusterRef::Number(n) => n.to_string(),
            ClusterRef::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for ClusterRef {
    fn from(s: &str) -> Self {
        ClusterRef::Text(s.to_string())
    }
}

/// Decodes an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        rename = "abstract",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_abstract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_cluster: Option<ClusterRef>,
    /// Any other fields the API returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treats empty strings the same as missing values.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Article {
    /// Title shown on cards and the detail page.
    pub fn display_title(&self) -> &str {
        non_empty(&self.title).unwrap_or(UNTITLED)
    }

    /// Category label shown under the card title.
    pub fn card_category(&self) -> &str {
        non_empty(&self.cluster_name).unwrap_or(UNCATEGORIZED)
    }

    /// Category line on the detail page.
    pub fn detail_category(&self) -> String {
        format!(
            "Categoría: {}",
            non_empty(&self.cluster_name).unwrap_or(GENERAL_CATEGORY)
        )
    }

    /// Abstract text, preferring `abstract` over `clean_abstract`.
    pub fn abstract_or_default(&self) -> &str {
        non_empty(&self.abstract_text)
            .or_else(|| non_empty(&self.clean_abstract))
            .unwrap_or(NO_ABSTRACT)
    }

    /// Link target, `#` when the article has no source.
    pub fn link_href(&self) -> &str {
        non_empty(&self.link).unwrap_or("#")
    }

    pub fn link_text(&self) -> &str {
        if non_empty(&self.link).is_some() {
            SOURCE_LINK_TEXT
        } else {
            NO_LINK_TEXT
        }
    }

    /// Raw cluster id used for the thumbnail lookup.
    pub fn cluster_key(&self) -> Option<String> {
        self.final_cluster.as_ref().map(ClusterRef::as_key)
    }
}

/// A named group of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: ClusterRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_count: u64,
}

impl Cluster {
    /// Label used for home-page tags, e.g. `Plant Biology (120)`.
    pub fn tag_label(&self) -> String {
        format!("{} ({})", self.name, self.article_count)
    }
}

/// Response of `GET /articles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticlesPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u64,
}

/// Response of `GET /clusters`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClustersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<Cluster>,
}

/// One association rule mined by the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociationRule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub consequents: Vec<String>,
}

/// Response of `GET /associations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssociationsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<AssociationRule>,
}
