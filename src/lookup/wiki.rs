//! Wikipedia opensearch client
//!
//! Resolves a search term to the best-matching encyclopedia page. The
//! opensearch response is positional: a 4-element array of
//! `[term, [titles], [descriptions], [urls]]`; the result is the first title
//! paired with the first URL.

use chrono::Duration;
use reqwest::Client;
use serde_json::Value;

use super::{percent_encode, Lookup, LookupError, LOOKUP_TIMEOUT};
use crate::cache::TtlCache;

/// Base URL for the Wikipedia API
const WIKI_BASE_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Cache TTL for encyclopedia lookups in days
const WIKI_CACHE_TTL_DAYS: i64 = 7;

/// Client for resolving search terms against Wikipedia
#[derive(Debug)]
pub struct WikiClient {
    http_client: Client,
    cache: TtlCache<Lookup>,
    base_url: String,
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WikiClient {
    /// Creates a new WikiClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url: WIKI_BASE_URL.to_string(),
        }
    }

    /// Creates a new WikiClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url,
        }
    }

    /// Generates a cache key for a search term
    fn cache_key(term: &str) -> String {
        format!("wiki_{}", term.trim().to_lowercase())
    }

    /// Resolves a search term to its best-matching page
    ///
    /// Returns the normalized result and whether it came from the cache.
    /// Cache hits skip the network entirely; successful lookups are cached
    /// for seven days.
    pub async fn search(&self, term: &str) -> Result<(Lookup, bool), LookupError> {
        let cache_key = Self::cache_key(term);
        if let Some(hit) = self.cache.get(&cache_key) {
            log::debug!("Cache hit: wiki '{}'", term);
            return Ok((hit, true));
        }

        let result = self.fetch_from_api(term).await?;
        self.cache
            .put(&cache_key, result.clone(), Duration::days(WIKI_CACHE_TTL_DAYS));
        Ok((result, false))
    }

    /// Fetches the opensearch result directly from the API
    async fn fetch_from_api(&self, term: &str) -> Result<Lookup, LookupError> {
        let url = format!(
            "{}?action=opensearch&search={}&limit=1&format=json",
            self.base_url,
            percent_encode(term)
        );

        let response = self
            .http_client
            .get(&url)
            .header("Cache-Control", "no-cache")
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))?;
        parse_opensearch(&value)
    }
}

/// Extracts the first title/URL pair from an opensearch response
///
/// A response that is not a 4-element array at all is a parse failure
/// (upstream shape changed); a well-shaped response with empty result arrays
/// means the term matched nothing.
fn parse_opensearch(value: &Value) -> Result<Lookup, LookupError> {
    let parts = value
        .as_array()
        .filter(|parts| parts.len() >= 4)
        .ok_or_else(|| LookupError::Parse("expected a 4-element opensearch array".to_string()))?;

    let title = parts[1]
        .as_array()
        .and_then(|titles| titles.first())
        .and_then(Value::as_str);
    let url = parts[3]
        .as_array()
        .and_then(|urls| urls.first())
        .and_then(Value::as_str);

    match (title, url) {
        (Some(title), Some(url)) => Ok(Lookup {
            title: title.to_string(),
            url: url.to_string(),
        }),
        _ => Err(LookupError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_opensearch_first_result() {
        let value = json!([
            "Tomato",
            ["Tomato", "Tomato sauce"],
            ["The edible berry...", "A sauce..."],
            [
                "https://en.wikipedia.org/wiki/Tomato",
                "https://en.wikipedia.org/wiki/Tomato_sauce"
            ]
        ]);

        let result = parse_opensearch(&value).expect("Should parse opensearch response");
        assert_eq!(result.title, "Tomato");
        assert_eq!(result.url, "https://en.wikipedia.org/wiki/Tomato");
    }

    #[test]
    fn test_parse_opensearch_no_results_is_not_found() {
        let value = json!(["Xyzzy", [], [], []]);
        assert!(matches!(
            parse_opensearch(&value),
            Err(LookupError::NotFound)
        ));
    }

    #[test]
    fn test_parse_opensearch_wrong_shape_is_parse_error() {
        assert!(matches!(
            parse_opensearch(&json!({"error": "bad request"})),
            Err(LookupError::Parse(_))
        ));
        assert!(matches!(
            parse_opensearch(&json!(["only", "three", "elements"])),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_opensearch_title_without_url_is_not_found() {
        let value = json!(["Tomato", ["Tomato"], ["..."], []]);
        assert!(matches!(
            parse_opensearch(&value),
            Err(LookupError::NotFound)
        ));
    }

    #[test]
    fn test_cache_key_normalizes_term() {
        assert_eq!(WikiClient::cache_key("Tomato"), "wiki_tomato");
        assert_eq!(WikiClient::cache_key("  Broad Bean "), "wiki_broad bean");
    }
}
