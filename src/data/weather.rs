//! Open-Meteo forecast API client
//!
//! This module fetches the raw current/hourly/daily forecast for a location,
//! checks that the payload is well formed, and hands it to the normalizer.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::LocalTimestamp;
use super::{forecast, CityWeather, Location};

/// Base URL for the Open-Meteo API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Fields requested for current conditions
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,is_day,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_direction_10m,surface_pressure,uv_index";

/// Fields requested for the hourly series
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,visibility";

/// Fields requested for the daily series
const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset";

/// Number of forecast days requested
const FORECAST_DAYS: u8 = 7;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Builds the HTTP client shared by the API clients
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The forecast API answered with a non-success status
    #[error("Weather fetch failed: {0}")]
    WeatherFetchFailed(u16),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Payload parsed but violates the series invariants
    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),

    /// A newer fetch superseded this one
    #[error("Fetch was superseded by a newer request")]
    Aborted,
}

/// Raw forecast response as returned by Open-Meteo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastPayload {
    pub current: RawCurrent,
    pub hourly: RawHourly,
    pub daily: RawDaily,
}

/// Current conditions record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCurrent {
    /// Local timestamp, e.g. "2024-06-01T14:00"
    pub time: String,
    pub temperature_2m: f64,
    pub weather_code: i32,
    /// 1 during daylight, 0 at night
    pub is_day: u8,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    /// km/h
    pub wind_speed_10m: f64,
    /// Degrees, 0 = north
    pub wind_direction_10m: f64,
    /// hPa
    pub surface_pressure: f64,
    #[serde(default)]
    pub uv_index: f64,
}

/// Hourly series; all vectors are index-aligned
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<i32>,
    /// Meters. May be shorter than `time` or contain gaps.
    #[serde(default)]
    pub visibility: Vec<Option<f64>>,
}

/// Daily series; all vectors are index-aligned
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
}

impl RawForecastPayload {
    /// Checks the invariants the normalizer relies on
    ///
    /// # Returns
    /// * `Err(WeatherError::MalformedResponse)` - when hourly or daily series
    ///   have mismatched lengths, daily data is empty, or a timestamp the
    ///   normalizer reads cannot be parsed
    pub fn validate(&self) -> Result<(), WeatherError> {
        let hourly = &self.hourly;
        let len = hourly.time.len();
        if hourly.temperature_2m.len() != len || hourly.weather_code.len() != len {
            return Err(WeatherError::MalformedResponse(
                "hourly arrays have inconsistent lengths".to_string(),
            ));
        }

        let daily = &self.daily;
        let days = daily.time.len();
        if days == 0 {
            return Err(WeatherError::MalformedResponse(
                "daily forecast is empty".to_string(),
            ));
        }
        if daily.weather_code.len() != days
            || daily.temperature_2m_max.len() != days
            || daily.temperature_2m_min.len() != days
            || daily.sunrise.len() != days
            || daily.sunset.len() != days
        {
            return Err(WeatherError::MalformedResponse(
                "daily arrays have inconsistent lengths".to_string(),
            ));
        }

        let timestamps = std::iter::once(&self.current.time)
            .chain(hourly.time.iter())
            .chain(daily.time.iter())
            .chain(daily.sunrise.first())
            .chain(daily.sunset.first());
        for timestamp in timestamps {
            if LocalTimestamp::parse(timestamp).is_none() {
                return Err(WeatherError::MalformedResponse(format!(
                    "invalid timestamp: {}",
                    timestamp
                )));
            }
        }

        Ok(())
    }
}

/// Query string for the forecast endpoint
#[derive(Debug, Serialize)]
struct ForecastQuery<'a> {
    latitude: f64,
    longitude: f64,
    current: &'a str,
    hourly: &'a str,
    daily: &'a str,
    timezone: &'a str,
    forecast_days: u8,
}

/// Client for fetching weather data from Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with default settings
    pub fn new() -> Self {
        Self::with_client(http_client())
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (mock servers, mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the raw forecast for the given coordinates
    ///
    /// The provider resolves the local timezone (`timezone=auto`), so all
    /// timestamps in the payload are local to the location.
    pub async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<RawForecastPayload, WeatherError> {
        let query = ForecastQuery {
            latitude: lat,
            longitude: lon,
            current: CURRENT_FIELDS,
            hourly: HOURLY_FIELDS,
            daily: DAILY_FIELDS,
            timezone: "auto",
            forecast_days: FORECAST_DAYS,
        };

        tracing::debug!(lat, lon, "requesting forecast");
        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::WeatherFetchFailed(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch, validate and normalize the forecast for a location
    ///
    /// # Returns
    /// * `Ok(CityWeather)` - Display-ready snapshot named after the location
    /// * `Err(WeatherError)` - On HTTP failure or a malformed payload
    pub async fn fetch_city_weather(&self, location: &Location) -> Result<CityWeather, WeatherError> {
        let payload = self
            .fetch_forecast(location.latitude, location.longitude)
            .await?;
        payload.validate()?;
        Ok(forecast::normalize(&location.name, &payload))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Sample valid Open-Meteo API response (trimmed to three hours, two days)
    pub(crate) const VALID_RESPONSE: &str = r#"{
        "latitude": 50.06,
        "longitude": 19.94,
        "timezone": "Europe/Warsaw",
        "current": {
            "time": "2024-06-01T14:00",
            "interval": 900,
            "temperature_2m": 21.4,
            "weather_code": 2,
            "is_day": 1,
            "apparent_temperature": 20.6,
            "relative_humidity_2m": 55,
            "wind_speed_10m": 12.3,
            "wind_direction_10m": 0,
            "surface_pressure": 1012.7,
            "uv_index": 6.2
        },
        "hourly": {
            "time": ["2024-06-01T13:00", "2024-06-01T14:00", "2024-06-01T15:00"],
            "temperature_2m": [20.9, 21.4, 22.0],
            "weather_code": [1, 2, 3],
            "visibility": [24000.0, 24140.0, null]
        },
        "daily": {
            "time": ["2024-06-01", "2024-06-02"],
            "weather_code": [2, 61],
            "temperature_2m_max": [23.6, 19.2],
            "temperature_2m_min": [12.4, 11.0],
            "sunrise": ["2024-06-01T04:27", "2024-06-02T04:26"],
            "sunset": ["2024-06-01T20:51", "2024-06-02T20:52"]
        }
    }"#;
}
