//! Line chart of weekly averaged sunrise and sunset times.
//!
//! The chart plots both series against ISO week number, with an hourly
//! `HH:MM` vertical axis from 05:00 to 23:00, a tick for every week from 1 to
//! 53, and month abbreviations placed under the week each month starts in.
//!
//! [`draw_chart`] works on any `plotters` drawing backend; [`render_png`] is
//! the file-writing entry point used by the application.

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::Path;

use crate::aggregate::WeeklySeries;
use crate::calendar::MonthLabel;
use crate::constants::*;

const FONT_FAMILY: &str = "sans-serif";
const SUNRISE_COLOR: RGBColor = RGBColor(255, 140, 0); // dark orange
const SUNSET_COLOR: RGBColor = RGBColor(65, 105, 225); // royal blue
const MONTH_LABEL_COLOR: RGBColor = RGBColor(128, 128, 128); // gray

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone)]
pub struct ChartData<'a> {
    pub title: String,
    pub series: &'a WeeklySeries,
    pub month_labels: &'a [MonthLabel],
}

/// Chart caption, e.g. `Sunrise and Sunset Times in Brussels (2024)`.
pub fn chart_title(location_name: &str, year: i32) -> String {
    format!("Sunrise and Sunset Times in {} ({})", location_name, year)
}

/// Output file name for `year`, e.g. `sunrise_sunset_weeks_avg_2024.png`.
pub fn output_file_name(year: i32) -> String {
    format!("{}{}.{}", OUTPUT_FILE_PREFIX, year, OUTPUT_FILE_EXTENSION)
}

/// Format a fractional hour as `HH:MM`, truncating to the minute.
///
/// `6.5` becomes `06:30`, `23.0` becomes `23:00`.
pub fn format_hour(value: f64) -> String {
    let hours = value.floor();
    let minutes = ((value - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as i64, minutes as i64)
}

/// Week numbers that get an x axis tick: 1 through 53.
pub fn week_ticks() -> Vec<f64> {
    (FIRST_WEEK..=LAST_WEEK).map(f64::from).collect()
}

/// Hours that get a y axis tick: 05:00 through 23:00, or up to
/// `upper_bound` when the axis has been widened past 23:00.
pub fn hour_ticks(upper_bound: f64) -> Vec<f64> {
    let last = (upper_bound.floor() as u32).max(Y_AXIS_LAST_HOUR);
    (Y_AXIS_FIRST_HOUR..=last).map(f64::from).collect()
}

/// Vertical range of the plot area.
///
/// Starts as 04:00 to 23:00 and grows to whole hours around any average
/// falling outside it, so no point is clipped.
pub fn y_axis_bounds(series: &WeeklySeries) -> (f64, f64) {
    let hours = series
        .sunrise_hours()
        .into_iter()
        .chain(series.sunset_hours());

    let (lowest, highest) = hours.fold(
        (Y_AXIS_LOWER_BOUND, Y_AXIS_UPPER_BOUND),
        |(lo, hi), hour| (lo.min(hour), hi.max(hour)),
    );

    (lowest.floor(), highest.ceil())
}

/// Continuous axis whose ticks sit exactly on a fixed list of values.
#[derive(Clone)]
struct TickedAxis {
    coord: RangedCoordf64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            coord: range.into(),
            ticks,
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.coord.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.coord.range()
    }
}

/// Draw the chart onto `root`.
///
/// The caller is responsible for calling `present()` on the drawing area.
pub fn draw_chart<DB>(root: &DrawingArea<DB, Shift>, data: &ChartData) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).context("Failed to fill chart background")?;

    let x_range = (f64::from(FIRST_WEEK) - X_AXIS_PADDING_WEEKS)
        ..(f64::from(LAST_WEEK) + X_AXIS_PADDING_WEEKS);
    let (y_lower, y_upper) = y_axis_bounds(data.series);

    let mut chart = ChartBuilder::on(root)
        .caption(&data.title, (FONT_FAMILY, CAPTION_FONT_SIZE))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(140)
        .build_cartesian_2d(
            TickedAxis::new(x_range, week_ticks()),
            TickedAxis::new(y_lower..y_upper, hour_ticks(y_upper)),
        )
        .context("Failed to build chart coordinates")?;

    chart
        .configure_mesh()
        .x_desc("Week Number")
        .y_desc("Time of Day")
        .x_label_formatter(&|week| format!("{:.0}", week))
        .y_label_formatter(&|hour| format_hour(*hour))
        .label_style((FONT_FAMILY, TICK_FONT_SIZE))
        .axis_desc_style((FONT_FAMILY, AXIS_DESC_FONT_SIZE))
        .bold_line_style(BLACK.mix(GRID_ALPHA))
        .draw()
        .context("Failed to draw chart mesh")?;

    let weeks = data.series.weeks();

    for (name, color, hours) in [
        ("Sunrise", SUNRISE_COLOR, data.series.sunrise_hours()),
        ("Sunset", SUNSET_COLOR, data.series.sunset_hours()),
    ] {
        let style = color.stroke_width(SERIES_LINE_WIDTH);
        let points = weeks.iter().zip(hours).map(|(&week, hour)| (f64::from(week), hour));

        chart
            .draw_series(LineSeries::new(points, style))
            .with_context(|| format!("Failed to draw {} series", name))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], style));
    }

    let month_style = TextStyle::from((FONT_FAMILY, MONTH_LABEL_FONT_SIZE).into_font())
        .color(&MONTH_LABEL_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Top));

    chart
        .draw_series(data.month_labels.iter().map(|month| {
            Text::new(
                month.label,
                (f64::from(month.week), MONTH_LABEL_Y),
                month_style.clone(),
            )
        }))
        .context("Failed to draw month labels")?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleMiddle)
        .label_font((FONT_FAMILY, LEGEND_FONT_SIZE))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(GRID_ALPHA))
        .draw()
        .context("Failed to draw legend")?;

    Ok(())
}

/// Draw the chart and write it to `path` as a PNG image.
pub fn render_png(data: &ChartData, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();

    draw_chart(&root, data)?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::WeekBuckets;
    use chrono::NaiveDate;

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(5.0), "05:00");
        assert_eq!(format_hour(6.5), "06:30");
        assert_eq!(format_hour(16.75), "16:45");
        assert_eq!(format_hour(23.0), "23:00");
        // Truncates rather than rounds
        assert_eq!(format_hour(7.999), "07:59");
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(2024), "sunrise_sunset_weeks_avg_2024.png");
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(
            chart_title("Brussels", 2024),
            "Sunrise and Sunset Times in Brussels (2024)"
        );
    }

    #[test]
    fn test_axis_ticks() {
        let weeks = week_ticks();
        assert_eq!(weeks.len(), 53);
        assert_eq!(weeks.first(), Some(&1.0));
        assert_eq!(weeks.last(), Some(&53.0));

        let hours: Vec<String> = hour_ticks(Y_AXIS_UPPER_BOUND)
            .into_iter()
            .map(format_hour)
            .collect();
        assert_eq!(hours.len(), 19);
        assert_eq!(hours.first().map(String::as_str), Some("05:00"));
        assert_eq!(hours.last().map(String::as_str), Some("23:00"));

        let widened = hour_ticks(24.0);
        assert_eq!(widened.len(), 20);
        assert_eq!(widened.last(), Some(&24.0));
    }

    #[test]
    fn test_ticked_axis_uses_exact_ticks() {
        let axis = TickedAxis::new(0.5..53.5, week_ticks());
        assert_eq!(axis.key_points(10usize), week_ticks());
        assert_eq!(axis.range(), 0.5..53.5);
        assert!(axis.map(&1.0, (0, 1000)) < axis.map(&53.0, (0, 1000)));
    }

    fn series_with(sunrise: f64, sunset: f64) -> WeeklySeries {
        let mut buckets = WeekBuckets::new();
        buckets.insert(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(), sunrise, sunset);
        buckets.averages()
    }

    #[test]
    fn test_y_axis_bounds_default() {
        assert_eq!(
            y_axis_bounds(&series_with(5.5, 21.9)),
            (Y_AXIS_LOWER_BOUND, Y_AXIS_UPPER_BOUND)
        );
        assert_eq!(
            y_axis_bounds(&WeeklySeries::default()),
            (Y_AXIS_LOWER_BOUND, Y_AXIS_UPPER_BOUND)
        );
    }

    #[test]
    fn test_y_axis_bounds_grow_to_fit_late_sunsets() {
        let (lower, upper) = y_axis_bounds(&series_with(2.7, 23.4));
        assert_eq!(lower, 2.0);
        assert_eq!(upper, 24.0);
        assert_eq!(hour_ticks(upper).last(), Some(&24.0));
    }

    #[test]
    fn test_month_labels_fit_in_plot_area() {
        assert!(MONTH_LABEL_Y > Y_AXIS_LOWER_BOUND);
        assert!(MONTH_LABEL_Y < f64::from(Y_AXIS_FIRST_HOUR));
    }
}
