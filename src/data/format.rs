//! Scalar formatters for forecast display
//!
//! Open-Meteo returns local times (with `timezone=auto`) as naive ISO 8601
//! strings such as `"2024-06-01T14:00"`, and dates as `"2024-06-01"`. These are
//! parsed into a [`LocalTimestamp`] record; no timezone conversion happens.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Weekday abbreviations indexed by days from Sunday
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Compass points, clockwise from north in 22.5 degree steps
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// A naive local timestamp broken into calendar fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalTimestamp {
    /// Parses `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` or a bare `YYYY-MM-DD`
    /// (midnight). Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        let datetime = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"));
        if let Ok(dt) = datetime {
            return Some(Self {
                year: dt.year(),
                month: dt.month(),
                day: dt.day(),
                hour: dt.hour(),
                minute: dt.minute(),
            });
        }

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
        Some(Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: 0,
            minute: 0,
        })
    }

    /// True when both timestamps fall in the same calendar hour
    pub fn same_hour(&self, other: &LocalTimestamp) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
    }

    /// Index into [`WEEKDAY_NAMES`] (0 = Sunday)
    fn weekday_index(&self) -> Option<usize> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|date| date.weekday().num_days_from_sunday() as usize)
    }
}

/// Rounds half up, so `21.5 -> 22` and `-2.5 -> -2`
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Hour of day (0-23) of a local timestamp string
pub fn hour_of(timestamp: &str) -> Option<u32> {
    LocalTimestamp::parse(timestamp).map(|ts| ts.hour)
}

/// Formats a 24-hour value as `"3 PM"`; 0 and 12 both print as 12
pub fn format_hour(hour: u32) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// Formats a timestamp as a clock time, e.g. `"5:07 AM"`
pub fn format_clock(timestamp: &LocalTimestamp) -> String {
    let hour = format_hour(timestamp.hour);
    // format_hour always yields "<h> <AM|PM>"
    match hour.split_once(' ') {
        Some((h, suffix)) => format!("{}:{:02} {}", h, timestamp.minute, suffix),
        None => hour,
    }
}

/// Three-letter weekday for a local date string such as `"2024-06-03"`
pub fn short_weekday(date: &str) -> Option<&'static str> {
    LocalTimestamp::parse(date)
        .and_then(|ts| ts.weekday_index())
        .map(|index| WEEKDAY_NAMES[index])
}

/// UV index category. Each boundary belongs to the lower bucket.
pub fn uv_label(uv: f64) -> &'static str {
    if uv <= 2.0 {
        "Low"
    } else if uv <= 5.0 {
        "Moderate"
    } else if uv <= 7.0 {
        "High"
    } else if uv <= 10.0 {
        "Very High"
    } else {
        "Extreme"
    }
}

/// Nearest of the 16 compass points for a heading in degrees
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = round_half_up(degrees / 22.5).rem_euclid(16);
    COMPASS_POINTS[sector as usize]
}
