//! City lookup via the Open-Meteo geocoding API
//!
//! Provides the curated default city list used on cold start and for empty
//! searches, plus a client that resolves free-text queries to candidates.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::weather::http_client;
use super::Location;

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Maximum number of candidates returned by a search
pub const MAX_RESULTS: usize = 5;

/// Language hint sent with every search
const SEARCH_LANGUAGE: &str = "en";

/// A statically known city
struct DefaultCity {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    country: &'static str,
}

/// Curated cities shown before the user searches. The first is the
/// cold-start selection.
static DEFAULT_CITIES: [DefaultCity; 5] = [
    DefaultCity {
        name: "Kraków",
        latitude: 50.0647,
        longitude: 19.945,
        country: "Poland",
    },
    DefaultCity {
        name: "Warszawa",
        latitude: 52.2297,
        longitude: 21.0122,
        country: "Poland",
    },
    DefaultCity {
        name: "Wrocław",
        latitude: 51.1079,
        longitude: 17.0385,
        country: "Poland",
    },
    DefaultCity {
        name: "Gdańsk",
        latitude: 54.352,
        longitude: 18.6466,
        country: "Poland",
    },
    DefaultCity {
        name: "Poznań",
        latitude: 52.4064,
        longitude: 16.9252,
        country: "Poland",
    },
];

impl DefaultCity {
    fn to_location(&self) -> Location {
        Location {
            name: self.name.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            country: Some(self.country.to_string()),
        }
    }
}

/// The curated default locations, in display order. No network access.
pub fn default_locations() -> Vec<Location> {
    DEFAULT_CITIES.iter().map(DefaultCity::to_location).collect()
}

/// The location shown on cold start
pub fn cold_start_location() -> Location {
    DEFAULT_CITIES[0].to_location()
}

/// Finds a default location by case-insensitive name
pub fn find_default(name: &str) -> Option<Location> {
    let wanted = name.trim().to_lowercase();
    DEFAULT_CITIES
        .iter()
        .find(|city| city.name.to_lowercase() == wanted)
        .map(DefaultCity::to_location)
}

/// What a search box input should resolve to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// Empty or whitespace-only input: show the default list
    Defaults,
    /// Trimmed text to send to the geocoder
    Remote(String),
}

impl LocationQuery {
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            LocationQuery::Defaults
        } else {
            LocationQuery::Remote(trimmed.to_string())
        }
    }
}

/// Errors that can occur when searching for a city
#[derive(Debug, Error)]
pub enum SearchError {
    /// The geocoder answered with a non-success status
    #[error("City search failed: {0}")]
    SearchFailed(u16),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Geocoding response; `results` is absent when nothing matched
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

/// A single geocoding candidate
#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            latitude: result.latitude,
            longitude: result.longitude,
            country: result.country,
        }
    }
}

/// Client for the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodingClient {
    /// Create a new GeocodingClient with default settings
    pub fn new() -> Self {
        Self::with_client(http_client())
    }

    /// Create a new GeocodingClient sharing an existing HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (mock servers, mirrors)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Search for cities matching `query`
    ///
    /// Always issues a request; callers special-case empty input with
    /// [`LocationQuery`]. Candidates keep the geocoder's ranking and are
    /// capped at [`MAX_RESULTS`].
    ///
    /// # Returns
    /// * `Ok(vec![])` - The geocoder found nothing
    /// * `Err(SearchError::SearchFailed(status))` - Non-success HTTP status
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, SearchError> {
        let count = MAX_RESULTS.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", count.as_str()),
                ("language", SEARCH_LANGUAGE),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::SearchFailed(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: GeocodingResponse = serde_json::from_str(&text)?;

        Ok(parse_results(parsed))
    }
}

fn parse_results(response: GeocodingResponse) -> Vec<Location> {
    response
        .results
        .unwrap_or_default()
        .into_iter()
        .take(MAX_RESULTS)
        .map(Location::from)
        .collect()
}
