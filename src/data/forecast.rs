//! Forecast normalization
//!
//! Turns a validated [`RawForecastPayload`] into the display-ready
//! [`CityWeather`] snapshot. Everything here is pure and synchronous; the
//! same payload always yields the same snapshot.
//!
//! The "now" anchor is the first hourly slot in the same calendar hour as
//! the current-conditions timestamp. The hourly strip starts there and never
//! wraps past the end of the series.

use super::codes::lookup_condition;
use super::format::{
    format_clock, format_hour, hour_of, round_half_up, short_weekday, uv_label, wind_direction,
    LocalTimestamp,
};
use super::weather::{RawDaily, RawForecastPayload, RawHourly};
use super::{CityWeather, DailyItem, HourlyItem};

/// Number of entries in the hourly strip
pub const HOURLY_WINDOW: usize = 10;

/// Visibility assumed when the hourly series has no value (meters)
const DEFAULT_VISIBILITY_METERS: f64 = 20_000.0;

/// Code used when a series is shorter than expected; resolves to "Unknown"
const MISSING_CODE: i32 = -1;

/// Placeholder for labels whose source timestamp cannot be read
const MISSING_LABEL: &str = "--";

/// Daylight hours taken from the first day's sunrise and sunset
#[derive(Debug, Clone, Copy)]
struct Daylight {
    sunrise_hour: Option<u32>,
    sunset_hour: Option<u32>,
}

impl Daylight {
    /// `sunrise <= hour < sunset`, minutes ignored
    fn contains(&self, hour: u32) -> bool {
        match (self.sunrise_hour, self.sunset_hour) {
            (Some(sunrise), Some(sunset)) => sunrise <= hour && hour < sunset,
            _ => false,
        }
    }
}

/// Builds the display snapshot for `city` from a raw forecast payload.
///
/// Expects a payload that passed [`RawForecastPayload::validate`]; on a
/// malformed one it still returns, with placeholder values where data is
/// missing.
pub fn normalize(city: &str, raw: &RawForecastPayload) -> CityWeather {
    let current = &raw.current;
    let hourly = &raw.hourly;
    let daily = &raw.daily;

    let condition = lookup_condition(current.weather_code, current.is_day == 1);
    let anchor = anchor_index(&current.time, &hourly.time);

    let sunrise = daily.sunrise.first().and_then(|s| LocalTimestamp::parse(s));
    let sunset = daily.sunset.first().and_then(|s| LocalTimestamp::parse(s));
    let daylight = Daylight {
        sunrise_hour: sunrise.map(|ts| ts.hour),
        sunset_hour: sunset.map(|ts| ts.hour),
    };

    let uv_index = round_half_up(current.uv_index);

    let visibility_m = hourly
        .visibility
        .get(anchor)
        .copied()
        .flatten()
        .unwrap_or(DEFAULT_VISIBILITY_METERS);

    CityWeather {
        city: city.to_string(),
        temp: round_half_up(current.temperature_2m),
        condition: condition.condition,
        icon: condition.icon,
        high: rounded_at(&daily.temperature_2m_max, 0),
        low: rounded_at(&daily.temperature_2m_min, 0),
        hourly: hourly_window(hourly, anchor, daylight),
        daily: daily_summary(daily),
        uv_index,
        uv_label: uv_label(uv_index as f64).to_string(),
        feels_like: round_half_up(current.apparent_temperature),
        humidity: round_half_up(current.relative_humidity_2m),
        wind: format!(
            "{} km/h {}",
            round_half_up(current.wind_speed_10m),
            wind_direction(current.wind_direction_10m)
        ),
        visibility: format!("{} km", round_half_up(visibility_m / 1000.0)),
        pressure: format!("{} hPa", round_half_up(current.surface_pressure)),
        sunrise: clock_or_placeholder(sunrise),
        sunset: clock_or_placeholder(sunset),
    }
}

/// Index of the hourly slot matching the current hour, or 0 if none does
fn anchor_index(now: &str, times: &[String]) -> usize {
    let Some(now) = LocalTimestamp::parse(now) else {
        return 0;
    };

    times
        .iter()
        .position(|t| LocalTimestamp::parse(t).is_some_and(|ts| ts.same_hour(&now)))
        .unwrap_or(0)
}

/// Up to [`HOURLY_WINDOW`] entries starting at `anchor`
fn hourly_window(hourly: &RawHourly, anchor: usize, daylight: Daylight) -> Vec<HourlyItem> {
    (0..HOURLY_WINDOW)
        .map_while(|offset| {
            let index = anchor + offset;
            let timestamp = hourly.time.get(index)?;
            let hour = hour_of(timestamp);

            let time = match (offset, hour) {
                (0, _) => "Now".to_string(),
                (_, Some(h)) => format_hour(h),
                (_, None) => MISSING_LABEL.to_string(),
            };
            let is_daytime = hour.is_some_and(|h| daylight.contains(h));
            let code = hourly
                .weather_code
                .get(index)
                .copied()
                .unwrap_or(MISSING_CODE);

            Some(HourlyItem {
                id: format!("h{}", offset),
                time,
                temp: rounded_at(&hourly.temperature_2m, index),
                icon: lookup_condition(code, is_daytime).icon,
            })
        })
        .collect()
}

/// One entry per day, first labelled "Today"; icons always use the day variant
fn daily_summary(daily: &RawDaily) -> Vec<DailyItem> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(index, date)| {
            let day = if index == 0 {
                "Today"
            } else {
                short_weekday(date).unwrap_or(MISSING_LABEL)
            };
            let code = daily
                .weather_code
                .get(index)
                .copied()
                .unwrap_or(MISSING_CODE);

            DailyItem {
                id: format!("d{}", index),
                day: day.to_string(),
                high: rounded_at(&daily.temperature_2m_max, index),
                low: rounded_at(&daily.temperature_2m_min, index),
                icon: lookup_condition(code, true).icon,
            }
        })
        .collect()
}

fn rounded_at(values: &[f64], index: usize) -> i32 {
    values
        .get(index)
        .copied()
        .map(round_half_up)
        .unwrap_or_default()
}

fn clock_or_placeholder(timestamp: Option<LocalTimestamp>) -> String {
    timestamp
        .map(|ts| format_clock(&ts))
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}
