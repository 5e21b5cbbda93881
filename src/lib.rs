//! # Sunweeks
//!
//! Charts how sunrise and sunset shift over a year at a fixed location.
//!
//! Every day of the target year is run through a solar calculation, the local
//! sunrise and sunset times are averaged per ISO 8601 week, and the two
//! weekly series are drawn as a line chart with month annotations.
//!
//! ## Architecture
//!
//! - **aggregate**: Fractional-hour conversion and per-week averaging
//! - **calendar**: Day enumeration, leap years, ISO weeks, month boundaries
//! - **chart**: Chart layout and PNG rendering
//! - **config**: Optional TOML configuration with built-in defaults
//! - **constants**: Application-wide constants and defaults
//! - **geo**: Locations, timezone detection and sunrise/sunset calculation
//! - **logger**: Structured logging with visual formatting
//! - **pipeline**: The end-to-end run tying the pieces together

pub mod aggregate;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod constants;
pub mod geo;
pub mod logger;
pub mod pipeline;

// Re-export important types for easier access
pub use aggregate::{WeekBuckets, WeeklyAverage, WeeklySeries, aggregate_year, fractional_hour};
pub use calendar::{MonthLabel, dates_in_year, month_labels};
pub use config::Config;
pub use geo::Location;
pub use geo::solar::{SolarCalculator, SunTimeProvider, SunTimes};
pub use logger::{Log, LogLevel};
