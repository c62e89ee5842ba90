//! Core data models for Skyglance
//!
//! This module contains the location and forecast types shared by the API
//! clients, the forecast normalizer and the terminal UI.

pub mod codes;
pub mod forecast;
pub mod format;
pub mod locations;
pub mod weather;

pub use codes::{icon_url, lookup_condition, ConditionInfo};
pub use forecast::normalize;
pub use locations::{
    cold_start_location, default_locations, find_default, GeocodingClient, LocationQuery,
    SearchError,
};
pub use weather::{RawForecastPayload, WeatherClient, WeatherError};

use serde::{Deserialize, Serialize};

/// A place a forecast can be requested for
///
/// Two locations are equal when their name and latitude match; the UI uses
/// this as the list identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the place
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Country name, when the geocoder provides one
    pub country: Option<String>,
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.latitude == other.latitude
    }
}

impl Location {
    /// Name with the country appended, e.g. "Kraków, Poland"
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// One hour in the rolling hourly strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyItem {
    /// Stable identifier (`h0`, `h1`, ...)
    pub id: String,
    /// `"Now"` for the first entry, otherwise e.g. `"3 PM"`
    pub time: String,
    /// Rounded temperature in Celsius
    pub temp: i32,
    /// Icon identifier with day/night suffix
    pub icon: String,
}

/// One day in the multi-day summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyItem {
    /// Stable identifier (`d0`, `d1`, ...)
    pub id: String,
    /// `"Today"` for the first entry, otherwise a weekday abbreviation
    pub day: String,
    /// Rounded maximum temperature in Celsius
    pub high: i32,
    /// Rounded minimum temperature in Celsius
    pub low: i32,
    /// Daytime icon identifier
    pub icon: String,
}

/// Display-ready weather snapshot for one city
///
/// Produced by [`normalize`] and replaced wholesale on every successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityWeather {
    pub city: String,
    /// Current temperature in Celsius
    pub temp: i32,
    pub condition: String,
    pub icon: String,
    /// Today's maximum
    pub high: i32,
    /// Today's minimum
    pub low: i32,
    pub hourly: Vec<HourlyItem>,
    pub daily: Vec<DailyItem>,
    pub uv_index: i32,
    pub uv_label: String,
    pub feels_like: i32,
    /// Relative humidity percentage
    pub humidity: i32,
    /// e.g. `"12 km/h N"`
    pub wind: String,
    /// e.g. `"24 km"`
    pub visibility: String,
    /// e.g. `"1013 hPa"`
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
}
