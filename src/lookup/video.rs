//! Top-video search client
//!
//! Resolves a free-text query to the first video on the provider's search
//! results page. There is no structured API for this, so the adapter scans
//! the result HTML for the first embedded 11-character video identifier.

use chrono::Duration;
use regex::Regex;
use reqwest::Client;
use std::sync::OnceLock;

use super::{percent_encode, Lookup, LookupError, LOOKUP_TIMEOUT};
use crate::cache::TtlCache;

/// Base URL for the search results page
const SEARCH_BASE_URL: &str = "https://www.youtube.com/results";

/// Cache TTL for video lookups in hours
const VIDEO_CACHE_TTL_HOURS: i64 = 24;

/// Pattern for a video id embedded in the results page
fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#""videoId":"([0-9A-Za-z_-]{11})""#).expect("video id pattern is valid")
    })
}

/// Client for resolving search queries to the top video result
#[derive(Debug)]
pub struct VideoClient {
    http_client: Client,
    cache: TtlCache<Lookup>,
    base_url: String,
}

impl Default for VideoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoClient {
    /// Creates a new VideoClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url: SEARCH_BASE_URL.to_string(),
        }
    }

    /// Creates a new VideoClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url,
        }
    }

    /// Generates a cache key for a search query
    fn cache_key(query: &str) -> String {
        format!("video_{}", query.trim().to_lowercase())
    }

    /// Resolves a search query to the top video result
    ///
    /// The provider surfaces no title on the scraped page that is worth
    /// parsing, so the result record carries the query as its display title
    /// and the canonical watch URL. Successful lookups are cached for 24
    /// hours.
    pub async fn search(&self, query: &str) -> Result<(Lookup, bool), LookupError> {
        let cache_key = Self::cache_key(query);
        if let Some(hit) = self.cache.get(&cache_key) {
            log::debug!("Cache hit: video '{}'", query);
            return Ok((hit, true));
        }

        let result = self.fetch_from_search(query).await?;
        self.cache.put(
            &cache_key,
            result.clone(),
            Duration::hours(VIDEO_CACHE_TTL_HOURS),
        );
        Ok((result, false))
    }

    /// Fetches the results page and extracts the first video id
    async fn fetch_from_search(&self, query: &str) -> Result<Lookup, LookupError> {
        let url = format!("{}?search_query={}", self.base_url, percent_encode(query));

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

        let html = response.text().await?;
        let video_id = extract_video_id(&html).ok_or(LookupError::NotFound)?;

        Ok(Lookup {
            title: query.to_string(),
            url: format!("https://www.youtube.com/watch?v={}", video_id),
        })
    }
}

/// Extracts the first embedded video id from result page HTML
fn extract_video_id(html: &str) -> Option<&str> {
    video_id_pattern()
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id_first_match() {
        let html = r#"<script>var data = {"videoId":"dQw4w9WgXcQ","x":1};
            {"videoId":"abcdefghijk"}</script>"#;
        assert_eq!(extract_video_id(html), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_extract_video_id_no_match() {
        assert!(extract_video_id("<html><body>no videos here</body></html>").is_none());
        assert!(extract_video_id("").is_none());
    }

    #[test]
    fn test_extract_video_id_rejects_wrong_length() {
        // Ten characters is not a video id
        assert!(extract_video_id(r#"{"videoId":"shortid890"}"#).is_none());
    }

    #[tokio::test]
    async fn test_search_builds_watch_url() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"<html>{"videoId":"dQw4w9WgXcQ"}</html>"#)
            .create_async()
            .await;

        let client = VideoClient::with_base_url(server.url());
        let (result, cached) = client
            .search("pruning tomatoes")
            .await
            .expect("Search should succeed");

        assert_eq!(result.title, "pruning tomatoes");
        assert_eq!(result.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(!cached);
    }

    #[tokio::test]
    async fn test_search_page_without_ids_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>no results</html>")
            .create_async()
            .await;

        let client = VideoClient::with_base_url(server.url());
        let result = client.search("no such video").await;
        assert!(matches!(result, Err(LookupError::NotFound)));
    }
}
