//! Weekly aggregation of daily sunrise and sunset times.
//!
//! Each day's local sunrise and sunset are reduced to fractional hours and
//! grouped by the ISO week number of the date. Buckets are keyed by week
//! number alone, so the late-December days that ISO 8601 assigns to week 1 of
//! the next year share a bucket with the first days of January, and early
//! January days belonging to the previous ISO year join week 52 or 53.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Timelike};
use std::collections::BTreeMap;

use crate::calendar::iso_week_number;
use crate::geo::solar::SunTimeProvider;

/// Convert a time of day into fractional hours, e.g. 06:30:00 becomes 6.5.
///
/// Sub-second precision is discarded, so the result is always in `[0.0, 24.0)`.
pub fn fractional_hour<T: Timelike>(time: &T) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0 + f64::from(time.second()) / 3600.0
}

/// Mean sunrise and sunset for one ISO week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyAverage {
    pub week: u32,
    pub sunrise: f64,
    pub sunset: f64,
}

/// Per-week averages in ascending week order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySeries {
    averages: Vec<WeeklyAverage>,
}

impl WeeklySeries {
    pub fn averages(&self) -> &[WeeklyAverage] {
        &self.averages
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Week numbers, ascending.
    pub fn weeks(&self) -> Vec<u32> {
        self.averages.iter().map(|a| a.week).collect()
    }

    /// Mean sunrise hours, parallel to [`WeeklySeries::weeks`].
    pub fn sunrise_hours(&self) -> Vec<f64> {
        self.averages.iter().map(|a| a.sunrise).collect()
    }

    /// Mean sunset hours, parallel to [`WeeklySeries::weeks`].
    pub fn sunset_hours(&self) -> Vec<f64> {
        self.averages.iter().map(|a| a.sunset).collect()
    }
}

#[derive(Debug, Clone, Default)]
struct Bucket {
    sunrises: Vec<f64>,
    sunsets: Vec<f64>,
}

/// Daily fractional-hour values grouped by ISO week number.
///
/// Sunrise and sunset lists of a bucket are always filled together, so their
/// lengths never differ.
#[derive(Debug, Clone, Default)]
pub struct WeekBuckets {
    buckets: BTreeMap<u32, Bucket>,
}

impl WeekBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one day's values in the bucket for the date's ISO week.
    pub fn insert(&mut self, date: NaiveDate, sunrise: f64, sunset: f64) {
        let bucket = self.buckets.entry(iso_week_number(date)).or_default();
        bucket.sunrises.push(sunrise);
        bucket.sunsets.push(sunset);
    }

    /// Week numbers that received at least one day, ascending.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    /// Number of days recorded for `week` as `(sunrises, sunsets)`.
    pub fn counts(&self, week: u32) -> Option<(usize, usize)> {
        self.buckets
            .get(&week)
            .map(|b| (b.sunrises.len(), b.sunsets.len()))
    }

    /// Total number of days recorded across all weeks.
    pub fn total_days(&self) -> usize {
        self.buckets.values().map(|b| b.sunrises.len()).sum()
    }

    /// Arithmetic mean per week. Partial weeks average over the days they hold.
    pub fn averages(&self) -> WeeklySeries {
        let averages = self
            .buckets
            .iter()
            .map(|(&week, bucket)| WeeklyAverage {
                week,
                sunrise: mean(&bucket.sunrises),
                sunset: mean(&bucket.sunsets),
            })
            .collect();

        WeeklySeries { averages }
    }
}

// Buckets are only created on insert, so `values` is never empty
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Collect sun times for every date and average them per ISO week.
///
/// # Arguments
/// * `dates` - Days to aggregate, typically a whole calendar year
/// * `provider` - Source of local sunrise and sunset times
///
/// # Returns
/// * `Ok(buckets)` - Daily values grouped by week, ready for [`WeekBuckets::averages`]
/// * `Err(_)` - If the provider fails for any date
pub fn collect_week_buckets<P>(dates: &[NaiveDate], provider: &P) -> Result<WeekBuckets>
where
    P: SunTimeProvider + ?Sized,
{
    let mut buckets = WeekBuckets::new();

    for &date in dates {
        let times = provider
            .sun_times(date)
            .with_context(|| format!("Failed to calculate sun times for {}", date))?;

        buckets.insert(
            date,
            fractional_hour(&times.sunrise),
            fractional_hour(&times.sunset),
        );
    }

    Ok(buckets)
}

/// Shorthand for [`collect_week_buckets`] followed by [`WeekBuckets::averages`].
pub fn aggregate_year<P>(dates: &[NaiveDate], provider: &P) -> Result<WeeklySeries>
where
    P: SunTimeProvider + ?Sized,
{
    Ok(collect_week_buckets(dates, provider)?.averages())
}
