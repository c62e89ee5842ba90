//! WMO weather code table
//!
//! Maps the integer weather codes returned by Open-Meteo to a display label
//! and an OpenWeatherMap-style icon identifier (`"02d"`, `"10n"`, ...).

use serde::Serialize;

/// Base URL template for icon images; `{icon}` is the identifier.
const ICON_URL_PREFIX: &str = "https://openweathermap.org/img/wn/";

/// Base icon used for unknown codes (clear sky)
const DEFAULT_BASE_ICON: &str = "01";

/// A single row of the WMO code table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmoEntry {
    /// Provider weather code
    pub code: i32,
    /// Human-readable condition
    pub condition: &'static str,
    /// Icon identifier without the day/night suffix
    pub base_icon: &'static str,
}

/// Resolved condition label and icon for a weather code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionInfo {
    pub condition: String,
    pub icon: String,
}

/// Every code the provider documents. Closed set.
pub static WMO_CODES: [WmoEntry; 28] = [
    WmoEntry { code: 0, condition: "Clear Sky", base_icon: "01" },
    WmoEntry { code: 1, condition: "Mainly Clear", base_icon: "02" },
    WmoEntry { code: 2, condition: "Partly Cloudy", base_icon: "02" },
    WmoEntry { code: 3, condition: "Overcast", base_icon: "04" },
    WmoEntry { code: 45, condition: "Fog", base_icon: "50" },
    WmoEntry { code: 48, condition: "Depositing Rime Fog", base_icon: "50" },
    WmoEntry { code: 51, condition: "Light Drizzle", base_icon: "09" },
    WmoEntry { code: 53, condition: "Moderate Drizzle", base_icon: "09" },
    WmoEntry { code: 55, condition: "Dense Drizzle", base_icon: "09" },
    WmoEntry { code: 56, condition: "Freezing Drizzle", base_icon: "09" },
    WmoEntry { code: 57, condition: "Heavy Freezing Drizzle", base_icon: "09" },
    WmoEntry { code: 61, condition: "Slight Rain", base_icon: "10" },
    WmoEntry { code: 63, condition: "Moderate Rain", base_icon: "10" },
    WmoEntry { code: 65, condition: "Heavy Rain", base_icon: "10" },
    WmoEntry { code: 66, condition: "Freezing Rain", base_icon: "10" },
    WmoEntry { code: 67, condition: "Heavy Freezing Rain", base_icon: "10" },
    WmoEntry { code: 71, condition: "Slight Snow", base_icon: "13" },
    WmoEntry { code: 73, condition: "Moderate Snow", base_icon: "13" },
    WmoEntry { code: 75, condition: "Heavy Snow", base_icon: "13" },
    WmoEntry { code: 77, condition: "Snow Grains", base_icon: "13" },
    WmoEntry { code: 80, condition: "Slight Showers", base_icon: "09" },
    WmoEntry { code: 81, condition: "Moderate Showers", base_icon: "09" },
    WmoEntry { code: 82, condition: "Violent Showers", base_icon: "09" },
    WmoEntry { code: 85, condition: "Slight Snow Showers", base_icon: "13" },
    WmoEntry { code: 86, condition: "Heavy Snow Showers", base_icon: "13" },
    WmoEntry { code: 95, condition: "Thunderstorm", base_icon: "11" },
    WmoEntry { code: 96, condition: "Thunderstorm with Hail", base_icon: "11" },
    WmoEntry { code: 99, condition: "Thunderstorm with Heavy Hail", base_icon: "11" },
];

/// Looks up the condition label and icon for a weather code.
///
/// Unknown codes resolve to `"Unknown"` with the clear-sky icon. The icon is
/// suffixed with `d` or `n` depending on `is_daytime`.
pub fn lookup_condition(code: i32, is_daytime: bool) -> ConditionInfo {
    let (condition, base_icon) = WMO_CODES
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| (entry.condition, entry.base_icon))
        .unwrap_or(("Unknown", DEFAULT_BASE_ICON));

    ConditionInfo {
        condition: condition.to_string(),
        icon: format!("{}{}", base_icon, if is_daytime { 'd' } else { 'n' }),
    }
}

/// Full image URL for an icon identifier on the icon host
pub fn icon_url(icon: &str) -> String {
    format!("{}{}@2x.png", ICON_URL_PREFIX, icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_code_is_known() {
        for entry in WMO_CODES.iter() {
            let info = lookup_condition(entry.code, true);
            assert_ne!(info.condition, "Unknown", "code {} should be mapped", entry.code);
            assert_eq!(info.condition, entry.condition);
        }
    }

    #[test]
    fn test_table_codes_are_unique() {
        for (i, a) in WMO_CODES.iter().enumerate() {
            for b in WMO_CODES.iter().skip(i + 1) {
                assert_ne!(a.code, b.code);
            }
        }
    }

    #[test]
    fn test_partly_cloudy_day_and_night() {
        let day = lookup_condition(2, true);
        assert_eq!(day.condition, "Partly Cloudy");
        assert_eq!(day.icon, "02d");

        let night = lookup_condition(2, false);
        assert_eq!(night.icon, "02n");
    }

    #[test]
    fn test_unknown_codes_fail_soft() {
        for code in [-1, 4, 42, 100, 255, i32::MAX] {
            let info = lookup_condition(code, true);
            assert_eq!(info.condition, "Unknown");
            assert_eq!(info.icon, "01d");
        }
        assert_eq!(lookup_condition(7, false).icon, "01n");
    }

    #[test]
    fn test_thunderstorm_icon() {
        assert_eq!(lookup_condition(99, true).icon, "11d");
        assert_eq!(lookup_condition(95, false).condition, "Thunderstorm");
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url("10n"),
            "https://openweathermap.org/img/wn/10n@2x.png"
        );
    }
}
