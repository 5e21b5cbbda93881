//! Configuration loading for sunweeks.
//!
//! sunweeks runs without any command-line arguments. Every setting has a
//! built-in default (Brussels, the current year, the working directory), and
//! an optional `sunweeks.toml` can override them:
//!
//! ```toml
//! # Location by coordinates
//! name = "Brussels"            # Shown in the chart caption
//! region = "Belgium"
//! timezone = "Europe/Brussels" # Detected from coordinates when omitted
//! latitude = 50.8503
//! longitude = 4.3517
//!
//! # ...or by city name, resolved from the built-in city database
//! city = "Brussels"
//!
//! # Output
//! year = 2024                  # Defaults to the current year
//! output_dir = "."             # Where the PNG is written
//! ```
//!
//! The file is looked up at `$XDG_CONFIG_HOME/sunweeks/sunweeks.toml`. A
//! missing file is not an error; a malformed or invalid one is.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::geo::solar::validate_coordinates;
use crate::geo::timezone::{determine_timezone_from_coordinates, parse_timezone};
use crate::geo::{Location, find_city};
use crate::logger::Log;

/// Raw contents of `sunweeks.toml`. Every key is optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub region: Option<String>,
    pub timezone: Option<String>,
    pub latitude: Option<f64>,  // Geographic latitude in degrees
    pub longitude: Option<f64>, // Geographic longitude in degrees
    pub city: Option<String>,   // City name looked up in the cities database
    pub year: Option<i32>,
    pub output_dir: Option<PathBuf>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub location: Location,
    pub year: i32,
    pub output_dir: PathBuf,
    /// File the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: Location::default(),
            year: current_year(),
            output_dir: PathBuf::from("."),
            source: None,
        }
    }
}

/// The year of the current local date.
pub fn current_year() -> i32 {
    Local::now().year()
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from the default config location, falling back to the
    /// built-in defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Load and resolve settings from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let file: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        let mut config = Self::resolve(file)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Turn raw file contents into a validated configuration.
    ///
    /// Location precedence: explicit coordinates, then `city`, then the
    /// built-in default. `name`, `region` and `timezone` override whatever
    /// the chosen source provides.
    pub fn resolve(file: ConfigFile) -> Result<Self> {
        let mut location = match (file.latitude, file.longitude, file.city.as_deref()) {
            (Some(latitude), Some(longitude), _) => {
                validate_coordinates(latitude, longitude)?;
                Location {
                    name: file
                        .city
                        .clone()
                        .unwrap_or_else(|| format!("{:.4}, {:.4}", latitude, longitude)),
                    region: String::new(),
                    timezone: determine_timezone_from_coordinates(latitude, longitude),
                    latitude,
                    longitude,
                }
            }
            (Some(_), None, _) | (None, Some(_), _) => {
                anyhow::bail!("Both latitude and longitude must be set, or neither")
            }
            (None, None, Some(city)) => Location::from(find_city(city, file.region.as_deref())?),
            (None, None, None) => Location::default(),
        };

        if let Some(name) = file.name {
            location.name = name;
        }
        if let Some(region) = file.region {
            location.region = region;
        }
        if let Some(timezone) = file.timezone.as_deref() {
            location.timezone = parse_timezone(timezone)?;
        }

        let year = file.year.unwrap_or_else(current_year);
        validate_year(year)?;

        Ok(Self {
            location,
            year,
            output_dir: file.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            source: None,
        })
    }

    /// Full path of the chart this configuration produces.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(crate::chart::output_file_name(self.year))
    }

    pub fn log_config(&self) {
        match &self.source {
            Some(path) => Log::log_block_start(&format!(
                "Loaded configuration from {}",
                path.display()
            )),
            None => Log::log_block_start("Using built-in configuration"),
        }

        let place = if self.location.region.is_empty() {
            self.location.name.clone()
        } else {
            format!("{}, {}", self.location.name, self.location.region)
        };
        Log::log_indented(&format!("Location: {}", place));
        Log::log_indented(&format!(
            "Coordinates: {}",
            self.location.coordinates_for_display()
        ));
        Log::log_indented(&format!("Timezone: {}", self.location.timezone));
        Log::log_indented(&format!("Year: {}", self.year));
    }
}

fn validate_year(year: i32) -> Result<()> {
    if !(MINIMUM_YEAR..=MAXIMUM_YEAR).contains(&year) {
        anyhow::bail!(
            "Invalid year: {}. Must be between {} and {}",
            year,
            MINIMUM_YEAR,
            MAXIMUM_YEAR
        );
    }
    Ok(())
}
