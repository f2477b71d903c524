//! Weather forecast client
//!
//! Fetches current conditions and a multi-day forecast for a city/state pair
//! and re-shapes the provider's response into the fixed schema the UI layer
//! expects. Field names and units in `WeatherReport` are part of that
//! contract; in particular wind speed is converted from the provider's km/h
//! to m/s.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{percent_encode, LookupError};

/// Base URL for the forecast provider
const FORECAST_BASE_URL: &str = "https://api.weatherapi.com/v1/forecast.json";

/// Number of forecast days requested
const FORECAST_DAYS: u8 = 3;

/// Deadline for the whole fetch, enforced by cooperative cancellation
const WEATHER_DEADLINE: Duration = Duration::from_secs(8);

/// Current conditions in the target schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temp_c: f64,
    /// Short condition text (e.g. "Partly cloudy")
    pub condition: String,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in metres per second
    pub wind_ms: f64,
}

/// One forecast day in the target schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date (YYYY-MM-DD)
    pub date: String,
    /// Minimum temperature in Celsius
    pub min_c: f64,
    /// Maximum temperature in Celsius
    pub max_c: f64,
    /// Short condition text
    pub condition: String,
    /// Chance of rain percentage
    pub chance_of_rain: u8,
}

/// Weather data in the fixed target schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City the report is for
    pub city: String,
    /// State the report is for
    pub state: String,
    /// Current conditions
    pub current: CurrentConditions,
    /// Multi-day forecast
    pub forecast: Vec<DailyForecast>,
}

/// Client for fetching weather forecasts
#[derive(Debug)]
pub struct WeatherClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Creates a new WeatherClient with the given provider API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: FORECAST_BASE_URL.to_string(),
        }
    }

    /// Creates a new WeatherClient with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Fetches the forecast for a city and state
    ///
    /// The whole call is bounded by an 8-second deadline; exceeding it
    /// surfaces `LookupError::Timeout`.
    pub async fn fetch_forecast(
        &self,
        city: &str,
        state: &str,
    ) -> Result<WeatherReport, LookupError> {
        match tokio::time::timeout(WEATHER_DEADLINE, self.fetch_from_api(city, state)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout),
        }
    }

    /// Fetches and re-shapes the provider response
    async fn fetch_from_api(&self, city: &str, state: &str) -> Result<WeatherReport, LookupError> {
        let url = format!(
            "{}?key={}&q={}&days={}",
            self.base_url,
            percent_encode(&self.api_key),
            percent_encode(&format!("{}, {}, Australia", city, state)),
            FORECAST_DAYS
        );

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status.as_u16() == 400 || status.as_u16() == 404 {
            // The provider answers 400 for locations it cannot match
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status.as_u16()));
        }

        let text = response.text().await?;
        let provider: ProviderResponse =
            serde_json::from_str(&text).map_err(|e| LookupError::Parse(e.to_string()))?;

        Ok(reshape(provider, city, state))
    }
}

/// Converts a provider response into the target schema
fn reshape(provider: ProviderResponse, city: &str, state: &str) -> WeatherReport {
    let current = CurrentConditions {
        temp_c: provider.current.temp_c,
        condition: provider.current.condition.text,
        humidity: provider.current.humidity as u8,
        wind_ms: kph_to_ms(provider.current.wind_kph),
    };

    let forecast = provider
        .forecast
        .forecastday
        .into_iter()
        .map(|day| DailyForecast {
            date: day.date,
            min_c: day.day.mintemp_c,
            max_c: day.day.maxtemp_c,
            condition: day.day.condition.text,
            chance_of_rain: day.day.daily_chance_of_rain.unwrap_or(0.0) as u8,
        })
        .collect();

    WeatherReport {
        city: city.to_string(),
        state: state.to_string(),
        current,
        forecast,
    }
}

/// Converts km/h to m/s
fn kph_to_ms(kph: f64) -> f64 {
    kph / 3.6
}

/// Forecast provider response structure
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    current: ProviderCurrent,
    forecast: ProviderForecast,
}

#[derive(Debug, Deserialize)]
struct ProviderCurrent {
    temp_c: f64,
    humidity: f64,
    wind_kph: f64,
    condition: ProviderCondition,
}

#[derive(Debug, Deserialize)]
struct ProviderCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ProviderForecast {
    forecastday: Vec<ProviderForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ProviderForecastDay {
    date: String,
    day: ProviderDay,
}

#[derive(Debug, Deserialize)]
struct ProviderDay {
    mintemp_c: f64,
    maxtemp_c: f64,
    daily_chance_of_rain: Option<f64>,
    condition: ProviderCondition,
}
