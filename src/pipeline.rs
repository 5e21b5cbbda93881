//! The end-to-end run: enumerate the year, compute and aggregate sun times,
//! map month boundaries, and render the chart.

use anyhow::Result;
use std::path::PathBuf;

use crate::aggregate::{WeeklySeries, collect_week_buckets};
use crate::calendar::{MonthLabel, dates_in_year, month_labels};
use crate::chart::{ChartData, chart_title, render_png};
use crate::config::Config;
use crate::geo::solar::{SolarCalculator, SunTimeProvider};
use crate::logger::Log;

/// Everything computed for one year, ready to be drawn.
#[derive(Debug, Clone)]
pub struct YearSummary {
    pub year: i32,
    pub days: usize,
    pub series: WeeklySeries,
    pub month_labels: Vec<MonthLabel>,
}

/// Compute weekly averages and month labels for `year` using `provider`.
pub fn summarize_year<P>(year: i32, provider: &P) -> Result<YearSummary>
where
    P: SunTimeProvider + ?Sized,
{
    let dates = dates_in_year(year)?;
    let buckets = collect_week_buckets(&dates, provider)?;

    Ok(YearSummary {
        year,
        days: buckets.total_days(),
        series: buckets.averages(),
        month_labels: month_labels(year)?,
    })
}

/// Run the whole pipeline for `config` and return the path of the written chart.
pub fn run(config: &Config) -> Result<PathBuf> {
    let calculator = SolarCalculator::new(&config.location)?;

    Log::log_block_start(&format!(
        "Calculating sunrise and sunset for {}",
        config.year
    ));
    let summary = summarize_year(config.year, &calculator)?;
    Log::log_indented(&format!(
        "{} days averaged into {} weeks",
        summary.days,
        summary.series.len()
    ));
    Log::log_decorated(&format!(
        "Mapped {} month boundaries onto ISO weeks",
        summary.month_labels.len()
    ));

    let output_path = config.output_path();
    let data = ChartData {
        title: chart_title(&config.location.name, config.year),
        series: &summary.series,
        month_labels: &summary.month_labels,
    };

    Log::log_block_start("Rendering chart");
    render_png(&data, &output_path)?;
    Log::log_info(&format!("Graph saved as {}", output_path.display()));

    Ok(output_path)
}
