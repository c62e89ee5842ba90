//! Command-line interface parsing for Skyglance
//!
//! Handles the startup options: which default city to open with, the initial
//! theme, and where to write the log file.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::data::{cold_start_location, default_locations, find_default, Location};

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested city is not one of the default cities
    #[error("Unknown city: '{name}'. Available cities: {available}")]
    UnknownCity { name: String, available: String },
}

/// Skyglance - current conditions and forecasts in the terminal
#[derive(Parser, Debug)]
#[command(name = "skyglance")]
#[command(about = "Current conditions, hourly and 7-day forecasts from Open-Meteo")]
#[command(version)]
pub struct Cli {
    /// Open with one of the default cities instead of the first one
    ///
    /// Matching is case-insensitive. Other cities can be found with the
    /// in-app search (press `s`).
    #[arg(long, value_name = "NAME")]
    pub city: Option<String>,

    /// Start with the light theme
    #[arg(long)]
    pub light: bool,

    /// Write logs to this file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Location to fetch first
    pub location: Location,
    /// Whether to start in the dark theme
    pub dark_theme: bool,
    /// Explicit log file path, if any
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            location: cold_start_location(),
            dark_theme: true,
            log_file: None,
        }
    }
}

/// Resolves a `--city` argument against the default cities.
///
/// # Arguments
/// * `name` - The city name from the command line
///
/// # Returns
/// * `Ok(Location)` if the name matches a default city
/// * `Err(CliError::UnknownCity)` otherwise
pub fn parse_city_arg(name: &str) -> Result<Location, CliError> {
    find_default(name).ok_or_else(|| CliError::UnknownCity {
        name: name.to_string(),
        available: default_locations()
            .iter()
            .map(|location| location.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an unknown city was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let location = match &cli.city {
            Some(name) => parse_city_arg(name)?,
            None => cold_start_location(),
        };

        Ok(StartupConfig {
            location,
            dark_theme: !cli.light,
            log_file: cli.log_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_arg_case_insensitive() {
        assert_eq!(parse_city_arg("warszawa").unwrap().name, "Warszawa");
        assert_eq!(parse_city_arg("POZNAŃ").unwrap().name, "Poznań");
    }

    #[test]
    fn test_parse_city_arg_unknown() {
        let err = parse_city_arg("Atlantis").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown city"));
        assert!(message.contains("Atlantis"));
        assert!(message.contains("Kraków, Warszawa"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.location.name, "Kraków");
        assert!(config.dark_theme);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["skyglance"]);
        assert!(cli.city.is_none());
        assert!(!cli.light);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_parse_all_options() {
        let cli = Cli::parse_from([
            "skyglance",
            "--city",
            "gdańsk",
            "--light",
            "--log-file",
            "/tmp/sky.log",
        ]);
        assert_eq!(cli.city.as_deref(), Some("gdańsk"));
        assert!(cli.light);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/sky.log")));
    }

    #[test]
    fn test_startup_config_from_cli_defaults() {
        let cli = Cli::parse_from(["skyglance"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.location.name, "Kraków");
        assert!(config.dark_theme);
    }

    #[test]
    fn test_startup_config_from_cli_city_and_theme() {
        let cli = Cli::parse_from(["skyglance", "--city", "Wrocław", "--light"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.location.name, "Wrocław");
        assert!(!config.dark_theme);
    }

    #[test]
    fn test_startup_config_from_cli_unknown_city() {
        let cli = Cli::parse_from(["skyglance", "--city", "Berlin"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(matches!(result, Err(CliError::UnknownCity { .. })));
    }
}
