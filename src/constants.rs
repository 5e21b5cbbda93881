//! Application constants and default values for sunweeks.
//!
//! This module contains the default location, validation limits, and the
//! layout constants used by the chart renderer.

use chrono_tz::Tz;

// ═══ Default Location ═══
// Used when no configuration file overrides the location

pub const DEFAULT_LOCATION_NAME: &str = "Brussels";
pub const DEFAULT_LOCATION_REGION: &str = "Belgium";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Brussels;
pub const DEFAULT_LATITUDE: f64 = 50.8503; // degrees north
pub const DEFAULT_LONGITUDE: f64 = 4.3517; // degrees east

// ═══ Validation Limits ═══

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// Years chrono can represent comfortably and that format as four digits
pub const MINIMUM_YEAR: i32 = 1;
pub const MAXIMUM_YEAR: i32 = 9999;

// ═══ Output ═══

pub const CONFIG_DIR_NAME: &str = "sunweeks";
pub const CONFIG_FILE_NAME: &str = "sunweeks.toml";
pub const OUTPUT_FILE_PREFIX: &str = "sunrise_sunset_weeks_avg_";
pub const OUTPUT_FILE_EXTENSION: &str = "png";

// ═══ Chart Layout ═══
// 14 x 6 inches at 200 DPI

pub const CHART_WIDTH_PX: u32 = 2800;
pub const CHART_HEIGHT_PX: u32 = 1200;

pub const Y_AXIS_FIRST_HOUR: u32 = 5; // 05:00
pub const Y_AXIS_LAST_HOUR: u32 = 23; // 23:00
pub const FIRST_WEEK: u32 = 1;
pub const LAST_WEEK: u32 = 53;

// Month abbreviations sit just below the 05:00 gridline
pub const MONTH_LABEL_Y: f64 = 4.7;
pub const Y_AXIS_LOWER_BOUND: f64 = 4.0;
pub const Y_AXIS_UPPER_BOUND: f64 = 23.0;
pub const X_AXIS_PADDING_WEEKS: f64 = 0.5;

pub const SERIES_LINE_WIDTH: u32 = 4;
pub const GRID_ALPHA: f64 = 0.3;
pub const CAPTION_FONT_SIZE: u32 = 48;
pub const AXIS_DESC_FONT_SIZE: u32 = 36;
pub const TICK_FONT_SIZE: u32 = 24;
pub const MONTH_LABEL_FONT_SIZE: u32 = 27;
pub const LEGEND_FONT_SIZE: u32 = 30;

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
