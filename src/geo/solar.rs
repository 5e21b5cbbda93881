//! Sunrise and sunset calculation for a fixed location.
//!
//! The astronomy itself is delegated to the `sunrise` crate. This module
//! validates coordinates, asks for the two events of a given day, and moves
//! the resulting UTC instants into the location's own timezone.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use sunrise::{Coordinates, SolarDay, SolarEvent};

use crate::constants::*;
use crate::geo::Location;

/// Local sunrise and sunset instants for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct SunTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

/// Source of daily sunrise and sunset times.
///
/// The weekly aggregation only depends on this trait, so tests can supply
/// synthetic times without touching the solar calculation.
#[cfg_attr(test, mockall::automock)]
pub trait SunTimeProvider {
    /// Sunrise and sunset on `date`, expressed in the provider's local timezone.
    fn sun_times(&self, date: NaiveDate) -> Result<SunTimes>;
}

/// Check that coordinates are within the valid geographic range.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude) {
        anyhow::bail!(
            "Invalid latitude: {}. Must be between {} and {} degrees",
            latitude,
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE
        );
    }
    if !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude) {
        anyhow::bail!(
            "Invalid longitude: {}. Must be between {} and {} degrees",
            longitude,
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE
        );
    }
    Ok(())
}

/// [`SunTimeProvider`] backed by the `sunrise` crate.
#[derive(Debug, Clone)]
pub struct SolarCalculator {
    latitude: f64,
    longitude: f64,
    timezone: Tz,
}

impl SolarCalculator {
    /// Create a calculator for `location`.
    ///
    /// # Returns
    /// * `Ok(calculator)` - Ready to compute times for any date
    /// * `Err(_)` - If the location's coordinates are out of range
    pub fn new(location: &Location) -> Result<Self> {
        validate_coordinates(location.latitude, location.longitude)?;

        Ok(Self {
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
        })
    }
}

/// Whether `event` is a real crossing of the horizon around `date`.
///
/// During polar day or polar night the `sunrise` crate reports the Unix
/// epoch instead of an event time.
fn is_event_on_day(event: DateTime<Utc>, date: NaiveDate) -> bool {
    event.timestamp() != 0 && (event.date_naive() - date).num_days().abs() <= 1
}

impl SunTimeProvider for SolarCalculator {
    fn sun_times(&self, date: NaiveDate) -> Result<SunTimes> {
        let coordinates = Coordinates::new(self.latitude, self.longitude)
            .context("Failed to create coordinates")?;
        let solar_day = SolarDay::new(coordinates, date);

        // Sun at 0 degrees elevation
        let sunrise_utc = solar_day.event_time(SolarEvent::Sunrise);
        let sunset_utc = solar_day.event_time(SolarEvent::Sunset);

        if !is_event_on_day(sunrise_utc, date) || !is_event_on_day(sunset_utc, date) {
            anyhow::bail!(
                "The sun does not rise and set on {} at {:.4}, {:.4} (polar day or polar night)",
                date,
                self.latitude,
                self.longitude
            );
        }

        Ok(SunTimes {
            sunrise: sunrise_utc.with_timezone(&self.timezone),
            sunset: sunset_utc.with_timezone(&self.timezone),
        })
    }
}
