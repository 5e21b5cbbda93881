use plotters::prelude::*;
use std::fs;
use tempfile::tempdir;

use sunweeks::chart::{ChartData, chart_title, draw_chart, output_file_name};
use sunweeks::config::ConfigFile;
use sunweeks::pipeline::{self, summarize_year};
use sunweeks::{Config, Location, Log, SolarCalculator};

fn quiet() {
    Log::set_enabled(false);
}

#[test]
fn test_integration_pipeline_writes_png() {
    quiet();
    let temp_dir = tempdir().unwrap();

    let config = Config {
        location: Location::default(),
        year: 2024,
        output_dir: temp_dir.path().to_path_buf(),
        source: None,
    };

    let path = pipeline::run(&config).unwrap();

    assert_eq!(path, temp_dir.path().join("sunrise_sunset_weeks_avg_2024.png"));
    let bytes = fs::read(&path).unwrap();
    // PNG signature
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[test]
fn test_integration_config_file_to_png() {
    quiet();
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("sunweeks.toml");
    let output_dir = temp_dir.path().join("charts");
    fs::create_dir_all(&output_dir).unwrap();

    fs::write(
        &config_path,
        format!(
            r#"
name = "Antwerp"
region = "Belgium"
timezone = "Europe/Brussels"
latitude = 51.2194
longitude = 4.4025
year = 2023
output_dir = "{}"
"#,
            output_dir.display()
        ),
    )
    .unwrap();

    let config = Config::load_from_path(&config_path).unwrap();
    let path = pipeline::run(&config).unwrap();

    assert_eq!(path, output_dir.join(output_file_name(2023)));
    assert!(path.exists());
}

#[test]
fn test_integration_svg_contains_labels() {
    quiet();
    let calculator = SolarCalculator::new(&Location::default()).unwrap();
    let summary = summarize_year(2024, &calculator).unwrap();

    let data = ChartData {
        title: chart_title("Brussels", 2024),
        series: &summary.series,
        month_labels: &summary.month_labels,
    };

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (1400, 600)).into_drawing_area();
        draw_chart(&root, &data).unwrap();
        root.present().unwrap();
    }

    assert!(svg.contains("Sunrise and Sunset Times in Brussels (2024)"));
    assert!(svg.contains("Week Number"));
    assert!(svg.contains("Time of Day"));
    assert!(svg.contains("Sunrise"));
    assert!(svg.contains("Sunset"));
    assert!(svg.contains("05:00"));
    assert!(svg.contains("23:00"));
    for month in ["Jan", "Jun", "Dec"] {
        assert!(svg.contains(&format!(">{}<", month)), "missing month label {}", month);
    }
}

#[test]
fn test_integration_city_lookup_resolves_location() {
    quiet();
    let first = IntoIterator::into_iter(cities::all())
        .find(|city| !city.city.is_empty() && city.city.is_ascii() && city.city.trim() == city.city)
        .unwrap();

    let file = ConfigFile {
        city: Some(first.city.to_string()),
        region: Some(first.country.to_string()),
        year: Some(2024),
        ..ConfigFile::default()
    };
    let config = Config::resolve(file).unwrap();

    assert!(config.location.name.eq_ignore_ascii_case(&first.city));
    assert_eq!(config.location.latitude, first.latitude);
    assert_eq!(config.location.longitude, first.longitude);
}
