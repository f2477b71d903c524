//! Outbound lookup clients for third-party providers
//!
//! Each submodule wraps a single provider behind a narrow adapter: build the
//! request URL, issue one call, and normalize the provider-specific response
//! shape into a small result record. Provider shape changes stay one point of
//! change. There is no retry logic anywhere; a failed call fails the request.

pub mod oembed;
pub mod video;
pub mod weather;
pub mod wiki;

pub use oembed::OembedClient;
pub use video::VideoClient;
pub use weather::{DailyForecast, WeatherClient, WeatherReport};
pub use wiki::WikiClient;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Bounded timeout applied per request for the non-weather lookups
pub(crate) const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Normalized result of a lookup, independent of provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    /// Display title of the matched page or video
    pub title: String,
    /// Canonical URL of the match
    pub url: String,
}

/// Errors that can occur during an outbound lookup
///
/// `NotFound` (the expected field was absent or malformed in an otherwise
/// well-formed response) is deliberately distinct from the upstream and
/// transport failures: callers render different messages for each.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The provider answered but had no matching result
    #[error("no matching result")]
    NotFound,

    /// The provider returned a non-success status
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// The provider's response body did not parse as expected
    #[error("failed to parse upstream response: {0}")]
    Parse(String),

    /// The provider could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded its deadline
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Network(err.to_string())
        }
    }
}

/// Percent-encodes a string for use in a query parameter
///
/// Unreserved characters (RFC 3986) pass through; everything else is encoded
/// byte-wise.
pub(crate) fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
