//! YouTube oEmbed client
//!
//! Resolves a video URL to its title via the provider's oEmbed endpoint.
//! The provider answers 404 for unknown or private videos, which is a
//! not-found outcome rather than an upstream failure.

use chrono::Duration;
use reqwest::Client;
use serde::Deserialize;

use super::{percent_encode, Lookup, LookupError, LOOKUP_TIMEOUT};
use crate::cache::TtlCache;

/// Base URL for the oEmbed endpoint
const OEMBED_BASE_URL: &str = "https://www.youtube.com/oembed";

/// Cache TTL for oEmbed lookups in hours
const OEMBED_CACHE_TTL_HOURS: i64 = 24;

/// oEmbed response fields we consume
#[derive(Debug, Deserialize)]
struct OembedResponse {
    title: Option<String>,
}

/// Client for resolving video URLs to titles
#[derive(Debug)]
pub struct OembedClient {
    http_client: Client,
    cache: TtlCache<Lookup>,
    base_url: String,
}

impl Default for OembedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OembedClient {
    /// Creates a new OembedClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url: OEMBED_BASE_URL.to_string(),
        }
    }

    /// Creates a new OembedClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            cache: TtlCache::new(),
            base_url,
        }
    }

    /// Resolves a video URL to its title
    ///
    /// The returned record's URL is the queried URL itself; the provider only
    /// contributes the title. Successful lookups are cached for 24 hours.
    pub async fn resolve(&self, video_url: &str) -> Result<(Lookup, bool), LookupError> {
        let cache_key = format!("oembed_{}", video_url);
        if let Some(hit) = self.cache.get(&cache_key) {
            log::debug!("Cache hit: oembed '{}'", video_url);
            return Ok((hit, true));
        }

        let result = self.fetch_from_api(video_url).await?;
        self.cache.put(
            &cache_key,
            result.clone(),
            Duration::hours(OEMBED_CACHE_TTL_HOURS),
        );
        Ok((result, false))
    }

    /// Fetches the oEmbed document directly from the provider
    async fn fetch_from_api(&self, video_url: &str) -> Result<Lookup, LookupError> {
        let url = format!(
            "{}?url={}&format=json",
            self.base_url,
            percent_encode(video_url)
        );

        let response = self
            .http_client
            .get(&url)
            .header("Cache-Control", "no-cache")
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        // The provider answers 404 for unknown videos
        if status.as_u16() == 404 {
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: OembedResponse =
            serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))?;

        match parsed.title {
            Some(title) if !title.is_empty() => Ok(Lookup {
                title,
                url: video_url.to_string(),
            }),
            _ => Err(LookupError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oembed_title() {
        let parsed: OembedResponse =
            serde_json::from_str(r#"{"title": "Pruning Tomatoes", "author_name": "Gardener"}"#)
                .expect("Failed to parse oEmbed response");
        assert_eq!(parsed.title.as_deref(), Some("Pruning Tomatoes"));
    }

    #[test]
    fn test_parse_oembed_missing_title() {
        let parsed: OembedResponse =
            serde_json::from_str(r#"{"author_name": "Gardener"}"#).expect("Failed to parse");
        assert!(parsed.title.is_none());
    }

    #[tokio::test]
    async fn test_resolve_uses_queried_url_in_result() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"title": "Pruning Tomatoes"}"#)
            .create_async()
            .await;

        let client = OembedClient::with_base_url(server.url());
        let (result, cached) = client
            .resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .expect("Lookup should succeed");

        assert_eq!(result.title, "Pruning Tomatoes");
        assert_eq!(result.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(!cached);
    }

    #[tokio::test]
    async fn test_provider_404_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = OembedClient::with_base_url(server.url());
        let result = client.resolve("https://www.youtube.com/watch?v=missing00ta").await;
        assert!(matches!(result, Err(LookupError::NotFound)));
    }

    #[tokio::test]
    async fn test_provider_500_is_upstream_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = OembedClient::with_base_url(server.url());
        let result = client.resolve("https://www.youtube.com/watch?v=whatever000").await;
        assert!(matches!(result, Err(LookupError::UpstreamStatus(500))));
    }
}
