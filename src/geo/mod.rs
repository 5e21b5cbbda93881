//! Geographic location handling.
//!
//! A [`Location`] bundles everything the sun-time calculation needs: display
//! names for the chart caption, the IANA timezone used to express local
//! times, and the coordinates. Locations come from the built-in default, from
//! explicit coordinates in the configuration, or from a city name looked up
//! in the `cities` database.

use anyhow::Result;
use chrono_tz::Tz;

use crate::constants::*;

pub mod solar;
pub mod timezone;

/// A fixed observation point on Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub timezone: Tz,
    pub latitude: f64,  // degrees, north positive
    pub longitude: f64, // degrees, east positive
}

impl Default for Location {
    /// Brussels, Belgium.
    fn default() -> Self {
        Self {
            name: DEFAULT_LOCATION_NAME.to_string(),
            region: DEFAULT_LOCATION_REGION.to_string(),
            timezone: DEFAULT_TIMEZONE,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl Location {
    /// Format coordinates the way they are shown in log output, e.g. `50.8503°N, 4.3517°E`.
    pub fn coordinates_for_display(&self) -> String {
        format!(
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            if self.latitude >= 0.0 { "N" } else { "S" },
            self.longitude.abs(),
            if self.longitude >= 0.0 { "E" } else { "W" }
        )
    }
}

/// Represents a city with its geographic information
#[derive(Debug, Clone)]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Look up a city by name in the `cities` database.
///
/// Matching is case-insensitive. When `country` is given, only cities in that
/// country are considered; otherwise the first match in database order wins.
///
/// # Returns
/// * `Ok(city)` - The matching city
/// * `Err(_)` - If no city matches
pub fn find_city(name: &str, country: Option<&str>) -> Result<CityInfo> {
    let wanted = name.trim();
    let iter = IntoIterator::into_iter(cities::all());

    iter.filter(|city| city.city.eq_ignore_ascii_case(wanted))
        .find(|city| country.is_none_or(|c| city.country.eq_ignore_ascii_case(c.trim())))
        .map(|city| CityInfo {
            name: city.city.to_string(),
            country: city.country.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
        })
        .ok_or_else(|| match country {
            Some(country) => anyhow::anyhow!("Unknown city: {}, {}", wanted, country),
            None => anyhow::anyhow!("Unknown city: {}", wanted),
        })
}

impl From<CityInfo> for Location {
    /// Build a location from a city, detecting its timezone from the coordinates.
    fn from(city: CityInfo) -> Self {
        Self {
            timezone: timezone::determine_timezone_from_coordinates(city.latitude, city.longitude),
            name: city.name,
            region: city.country,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}
