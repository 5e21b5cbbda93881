//! Calendar helpers: enumerating the days of a year and mapping month starts
//! onto ISO 8601 week numbers.
//!
//! All week numbers come from `chrono`'s ISO week implementation, where week 1
//! is the Monday-to-Sunday week containing the year's first Thursday. A naive
//! `day_of_year / 7` formula gives different boundaries and is never used here.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Three-letter month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A month annotation for the chart's horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    /// ISO week number containing the first day of the month.
    pub week: u32,
    /// Three-letter month abbreviation ("Jan" .. "Dec").
    pub label: &'static str,
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Every date of `year`, January 1 through December 31 inclusive.
///
/// # Returns
/// * `Ok(dates)` - 365 or 366 consecutive dates in ascending order
/// * `Err(_)` - If `year` is outside the range chrono can represent
pub fn dates_in_year(year: i32) -> Result<Vec<NaiveDate>> {
    let first = first_day_of_month(year, 1)?;

    (0..days_in_year(year))
        .map(|offset| {
            first
                .checked_add_days(Days::new(u64::from(offset)))
                .with_context(|| format!("Date overflow at day {} of year {}", offset + 1, year))
        })
        .collect()
}

/// ISO 8601 week number (1-53) of `date`.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Map each month of `year` to the ISO week containing its first day.
///
/// Always yields 12 labels in calendar order. Two months landing in the same
/// week would both be kept, though Gregorian month lengths never allow it.
pub fn month_labels(year: i32) -> Result<Vec<MonthLabel>> {
    MONTH_ABBREVIATIONS
        .into_iter()
        .zip(1u32..)
        .map(|(label, month)| {
            let first_day = first_day_of_month(year, month)?;
            Ok(MonthLabel {
                week: iso_week_number(first_day),
                label,
            })
        })
        .collect()
}

fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("Invalid date: year {} month {}", year, month))
}
