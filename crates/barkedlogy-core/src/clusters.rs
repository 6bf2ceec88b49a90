//! Cluster helpers: sentinel handling, thumbnails and suggested filters.
//!
//! The API marks unclassified articles with placeholder cluster ids such as
//! `"-1"` or `"nan"`. Those never become filter values and never select a
//! thumbnail.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{CLUSTER_IMAGE_DIR, SUGGESTED_FILTER_COUNT};
use crate::models::{Cluster, UNCATEGORIZED};

/// Thumbnail name used for articles without a usable cluster.
pub const DEFAULT_IMAGE_KEY: &str = "default";

/// Returns true for placeholder ids that mean "no cluster assigned".
pub fn is_sentinel_id(id: &str) -> bool {
    let id = id.trim();
    id.is_empty() || id == "-1" || id.eq_ignore_ascii_case("nan")
}

/// Normalizes a raw cluster id for thumbnail lookup.
///
/// Numeric ids lose any fractional suffix (`"3.0"` becomes `"3"`). Missing or
/// sentinel ids map to [`DEFAULT_IMAGE_KEY`].
pub fn image_key(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim) else {
        return DEFAULT_IMAGE_KEY.to_string();
    };
    if is_sentinel_id(raw) {
        return DEFAULT_IMAGE_KEY.to_string();
    }

    match raw.split_once('.') {
        Some((whole, fraction))
            if !whole.is_empty()
                && whole.trim_start_matches('-').chars().all(|c| c.is_ascii_digit())
                && fraction.chars().all(|c| c.is_ascii_digit()) =>
        {
            if whole == "-1" {
                DEFAULT_IMAGE_KEY.to_string()
            } else {
                whole.to_string()
            }
        }
        _ => raw.to_string(),
    }
}

/// Path of the thumbnail for a raw cluster id.
pub fn cluster_image_path(raw: Option<&str>) -> String {
    format!("{}/{}.jpg", CLUSTER_IMAGE_DIR, image_key(raw))
}

/// Turns a stored or clicked cluster id into a filter value.
///
/// Sentinels and the `"default"` image key are not filters.
pub fn filter_value(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if is_sentinel_id(raw) || raw == DEFAULT_IMAGE_KEY {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Returns true if a cluster may be offered as a sidebar filter.
pub fn is_suggestable(cluster: &Cluster) -> bool {
    let name = cluster.name.as_str();
    !name.is_empty()
        && name != UNCATEGORIZED
        && name != "-1"
        && !name.eq_ignore_ascii_case("nan")
        && cluster.article_count > 0
}

/// Picks up to [`SUGGESTED_FILTER_COUNT`] random suggestable clusters.
pub fn suggested_filters<R: Rng + ?Sized>(clusters: &[Cluster], rng: &mut R) -> Vec<Cluster> {
    let mut valid: Vec<Cluster> = clusters.iter().filter(|c| is_suggestable(c)).cloned().collect();
    valid.shuffle(rng);
    valid.truncate(SUGGESTED_FILTER_COUNT);
    valid
}
