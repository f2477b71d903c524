//! Request-boundary handlers
//!
//! One handler per endpoint. Every handler validates its required parameters,
//! consults the relevant client or resolver, and produces a JSON body with an
//! HTTP status code. All failures are converted to a structured `error` body;
//! nothing here panics or crashes the process.

use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::{PlantAnalyzer, SubmissionStore};
use crate::data::{self, Month, Region, Season};
use crate::lookup::{LookupError, OembedClient, VideoClient, WeatherClient, WikiClient};

/// A handler's JSON response with its HTTP status code
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body, either the result or `{ "error": ... }`
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

/// Errors surfaced at the request boundary
///
/// Each variant maps to the HTTP status class the endpoint contract demands:
/// missing parameter 400, not found 404, upstream 502, transport 503,
/// timeout 504, anything uncategorized 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required query parameter was absent or empty
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// No matching data for the request
    #[error("{0}")]
    NotFound(String),

    /// An outbound lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Uncategorized server-side failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status code for this error
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingParameter(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Lookup(LookupError::NotFound) => 404,
            ApiError::Lookup(LookupError::UpstreamStatus(_)) => 502,
            ApiError::Lookup(LookupError::Parse(_)) => 502,
            ApiError::Lookup(LookupError::Network(_)) => 503,
            ApiError::Lookup(LookupError::Timeout) => 504,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        ApiResponse {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }
}

/// Validates a required parameter, treating empty strings as absent
fn require<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingParameter(name)),
    }
}

/// All endpoint handlers with their clients and shared caches
///
/// One `Api` instance lives for the whole process; each lookup client owns
/// the single shared cache for its endpoint.
pub struct Api {
    wiki: WikiClient,
    oembed: OembedClient,
    video: VideoClient,
    weather: Option<WeatherClient>,
    analyzer: PlantAnalyzer,
}

impl Api {
    /// Creates the handler set
    ///
    /// `weather` is optional because the forecast provider needs an API key;
    /// without one the weather endpoint reports an internal error rather
    /// than failing construction.
    pub fn new(weather: Option<WeatherClient>, store: Box<dyn SubmissionStore>) -> Self {
        Self {
            wiki: WikiClient::new(),
            oembed: OembedClient::new(),
            video: VideoClient::new(),
            weather,
            analyzer: PlantAnalyzer::new(store),
        }
    }

    /// Creates the handler set with pre-built lookup clients (for testing)
    pub fn with_clients(
        wiki: WikiClient,
        oembed: OembedClient,
        video: VideoClient,
        weather: Option<WeatherClient>,
        store: Box<dyn SubmissionStore>,
    ) -> Self {
        Self {
            wiki,
            oembed,
            video,
            weather,
            analyzer: PlantAnalyzer::new(store),
        }
    }

    /// GET /wiki-page?term=
    pub async fn wiki_page(&self, term: Option<&str>) -> ApiResponse {
        match self.wiki_page_inner(term).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    async fn wiki_page_inner(&self, term: Option<&str>) -> Result<Value, ApiError> {
        let term = require("term", term)?;
        let (result, cached) = self.wiki.search(term).await?;
        Ok(json!({
            "title": result.title,
            "url": result.url,
            "cached": cached,
        }))
    }

    /// GET /youtube-oembed?url=
    pub async fn video_oembed(&self, url: Option<&str>) -> ApiResponse {
        match self.video_oembed_inner(url).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    async fn video_oembed_inner(&self, url: Option<&str>) -> Result<Value, ApiError> {
        let url = require("url", url)?;
        let (result, cached) = self.oembed.resolve(url).await?;
        Ok(json!({
            "title": result.title,
            "url": result.url,
            "cached": cached,
        }))
    }

    /// GET /youtube-top?q=
    pub async fn video_top(&self, query: Option<&str>) -> ApiResponse {
        match self.video_top_inner(query).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    async fn video_top_inner(&self, query: Option<&str>) -> Result<Value, ApiError> {
        let query = require("q", query)?;
        let (result, cached) = self.video.search(query).await?;
        Ok(json!({
            "title": result.title,
            "url": result.url,
            "cached": cached,
        }))
    }

    /// GET /weather?city=&state=
    pub async fn weather(&self, city: Option<&str>, state: Option<&str>) -> ApiResponse {
        match self.weather_inner(city, state).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    async fn weather_inner(
        &self,
        city: Option<&str>,
        state: Option<&str>,
    ) -> Result<Value, ApiError> {
        let city = require("city", city)?;
        let state = require("state", state)?;
        let client = self.weather.as_ref().ok_or_else(|| {
            ApiError::Internal("weather provider key is not configured".to_string())
        })?;
        let report = client.fetch_forecast(city, state).await?;
        serde_json::to_value(&report).map_err(|e| ApiError::Internal(e.to_string()))
    }

    /// GET /planting-guide?region=&month=
    pub fn planting_guide(&self, region: Option<&str>, month: Option<&str>) -> ApiResponse {
        match planting_guide_inner(region, month) {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    /// GET /season?region=&month=
    pub fn season(&self, region: Option<&str>, month: Option<&str>) -> ApiResponse {
        match season_inner(region, month) {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    /// GET /climate?region=&city=
    pub fn climate(&self, region: Option<&str>, city: Option<&str>) -> ApiResponse {
        match climate_inner(region, city) {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    /// GET /companions?plant=
    pub fn companions(&self, plant: Option<&str>) -> ApiResponse {
        match companions_inner(plant) {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    /// POST /analyze { image_url, user_id }
    pub async fn analyze(&self, image_url: Option<&str>, user_id: Option<&str>) -> ApiResponse {
        match self.analyze_inner(image_url, user_id).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => err.into(),
        }
    }

    async fn analyze_inner(
        &self,
        image_url: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Value, ApiError> {
        let image_url = require("image_url", image_url)?;
        let user_id = require("user_id", user_id)?;
        let outcome = self.analyzer.analyze(image_url, user_id).await;
        serde_json::to_value(&outcome).map_err(|e| ApiError::Internal(e.to_string()))
    }
}

fn planting_guide_inner(region: Option<&str>, month: Option<&str>) -> Result<Value, ApiError> {
    let region_param = require("region", region)?;
    let month_param = require("month", month)?;

    let region = Region::from_code(region_param)
        .ok_or_else(|| ApiError::NotFound(format!("unknown region '{}'", region_param)))?;
    let month = Month::from_name(month_param)
        .ok_or_else(|| ApiError::NotFound(format!("unknown month '{}'", month_param)))?;

    let guide = data::resolve_guide(region, month).ok_or_else(|| {
        ApiError::NotFound(format!(
            "no planting data for {} in {}",
            region.code(),
            month.name()
        ))
    })?;

    Ok(json!({
        "region": region.code(),
        "month": month.name(),
        "overview": guide.overview,
        "sow": guide.sow,
        "plant": guide.plant,
    }))
}

fn season_inner(region: Option<&str>, month: Option<&str>) -> Result<Value, ApiError> {
    let region_param = require("region", region)?;
    let month_param = require("month", month)?;

    // Unmapped regions and months resolve to the Unknown sentinel, not an
    // error: season display degrades, it never fails.
    let season = match (Region::from_code(region_param), Month::from_name(month_param)) {
        (Some(region), Some(month)) => data::resolve_season(region, month),
        _ => Season::Unknown,
    };

    Ok(json!({
        "region": region_param,
        "month": month_param,
        "season": season.name(),
    }))
}

fn climate_inner(region: Option<&str>, city: Option<&str>) -> Result<Value, ApiError> {
    let region = require("region", region)?;
    let city = require("city", city)?;
    let zone = data::resolve_climate(region, city);

    Ok(json!({
        "region": region,
        "city": city,
        "zone": zone.label(),
    }))
}

fn companions_inner(plant: Option<&str>) -> Result<Value, ApiError> {
    let plant = require("plant", plant)?;
    let entry = data::get_companions(plant)
        .ok_or_else(|| ApiError::NotFound(format!("no companion data for '{}'", plant)))?;

    Ok(json!({
        "plant": entry.plant,
        "good": entry.good,
        "bad": entry.bad,
        "reasons": entry.reasons,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MemoryStore;

    fn test_api() -> Api {
        Api::new(None, Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ApiError::MissingParameter("term").status(), 400);
        assert_eq!(ApiError::NotFound("x".to_string()).status(), 404);
        assert_eq!(ApiError::Lookup(LookupError::NotFound).status(), 404);
        assert_eq!(ApiError::Lookup(LookupError::UpstreamStatus(500)).status(), 502);
        assert_eq!(
            ApiError::Lookup(LookupError::Parse("bad".to_string())).status(),
            502
        );
        assert_eq!(
            ApiError::Lookup(LookupError::Network("down".to_string())).status(),
            503
        );
        assert_eq!(ApiError::Lookup(LookupError::Timeout).status(), 504);
        assert_eq!(ApiError::Internal("boom".to_string()).status(), 500);
    }

    #[test]
    fn test_error_response_has_error_body() {
        let response: ApiResponse = ApiError::MissingParameter("term").into();
        assert_eq!(response.status, 400);
        assert!(response.body["error"]
            .as_str()
            .expect("error should be a string")
            .contains("term"));
    }

    #[tokio::test]
    async fn test_wiki_page_missing_term_is_400() {
        let api = test_api();
        let response = api.wiki_page(None).await;
        assert_eq!(response.status, 400);
        assert!(response.body.get("error").is_some());

        let response = api.wiki_page(Some("  ")).await;
        assert_eq!(response.status, 400, "Blank parameter counts as missing");
    }

    #[tokio::test]
    async fn test_weather_missing_params_is_400() {
        let api = test_api();
        assert_eq!(api.weather(None, Some("VIC")).await.status, 400);
        assert_eq!(api.weather(Some("Melbourne"), None).await.status, 400);
    }

    #[tokio::test]
    async fn test_weather_without_key_is_500() {
        let api = test_api();
        let response = api.weather(Some("Melbourne"), Some("VIC")).await;
        assert_eq!(response.status, 500);
        assert!(response.body["error"]
            .as_str()
            .expect("error should be a string")
            .contains("not configured"));
    }

    #[test]
    fn test_planting_guide_success() {
        let api = test_api();
        let response = api.planting_guide(Some("VIC"), Some("October"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["region"], "VIC");
        assert_eq!(response.body["month"], "October");
        assert!(response.body["overview"].as_str().is_some());
        assert!(response.body["sow"].as_array().is_some());
        assert!(response.body["plant"].as_array().is_some());
    }

    #[test]
    fn test_planting_guide_unpopulated_pair_is_404() {
        let api = test_api();
        let response = api.planting_guide(Some("NT"), Some("January"));
        assert_eq!(response.status, 404);
        assert!(response.body.get("error").is_some());
    }

    #[test]
    fn test_planting_guide_unknown_region_is_404() {
        let api = test_api();
        assert_eq!(api.planting_guide(Some("XX"), Some("October")).status, 404);
        assert_eq!(api.planting_guide(Some("VIC"), Some("Smarch")).status, 404);
    }

    #[test]
    fn test_planting_guide_missing_params_is_400() {
        let api = test_api();
        assert_eq!(api.planting_guide(None, Some("October")).status, 400);
        assert_eq!(api.planting_guide(Some("VIC"), None).status, 400);
    }

    #[test]
    fn test_season_wraps_december_to_february() {
        let api = test_api();
        let response = api.season(Some("VIC"), Some("January"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["season"], "Summer");
    }

    #[test]
    fn test_season_unknown_region_is_200_unknown() {
        let api = test_api();
        let response = api.season(Some("XX"), Some("January"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["season"], "Unknown");

        let response = api.season(Some("VIC"), Some("Smarch"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["season"], "Unknown");
    }

    #[test]
    fn test_climate_ordering_and_default() {
        let api = test_api();
        assert_eq!(api.climate(Some("VIC"), Some("Melbourne")).body["zone"], "cool");
        assert_eq!(api.climate(Some("VIC"), Some("Unknown City")).body["zone"], "cool");
        assert_eq!(api.climate(Some("XX"), Some("Nowhere")).body["zone"], "warm");
    }

    #[test]
    fn test_companions_success_and_miss() {
        let api = test_api();
        let response = api.companions(Some("Tomato"));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["plant"], "Tomato");
        assert!(response.body["good"].as_array().is_some());

        assert_eq!(api.companions(Some("Triffid")).status, 404);
        assert_eq!(api.companions(None).status, 400);
    }

    #[tokio::test]
    async fn test_analyze_returns_predictions() {
        let api = test_api();
        let response = api
            .analyze(Some("https://example.com/leaf.jpg"), Some("user-1"))
            .await;
        assert_eq!(response.status, 200);
        assert!(response.body["predictions"].as_array().is_some());
        assert!(response.body["submission_id"].as_str().is_some());
        assert!(response.body["save_error"].is_null());
    }

    #[tokio::test]
    async fn test_analyze_missing_params_is_400() {
        let api = test_api();
        assert_eq!(api.analyze(None, Some("user-1")).await.status, 400);
        assert_eq!(
            api.analyze(Some("https://example.com/leaf.jpg"), None)
                .await
                .status,
            400
        );
    }
}
