//! Timezone detection from geographic coordinates.
//!
//! Used when the configuration supplies coordinates (or a city) but no
//! explicit timezone, so local sunrise and sunset times are still expressed
//! in the zone the location actually observes.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::sync::OnceLock;
use tzf_rs::DefaultFinder;

use crate::logger::Log;

/// Uses the tzf-rs crate for timezone detection based on geographic boundaries.
///
/// Falls back to `TZ` from the environment, then UTC, when the finder returns
/// a name chrono-tz does not know (e.g. open-ocean `Etc/` zones).
pub fn determine_timezone_from_coordinates(latitude: f64, longitude: f64) -> Tz {
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    let finder = FINDER.get_or_init(DefaultFinder::new);

    // tzf-rs uses (longitude, latitude) order
    let tz_name = finder.get_tz_name(longitude, latitude);

    match tz_name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            let fallback = match std::env::var("TZ") {
                Ok(tz_str) => tz_str.parse().unwrap_or(Tz::UTC),
                Err(_) => Tz::UTC,
            };
            Log::log_warning(&format!(
                "No known timezone at ({:.4}, {:.4}), using {}",
                latitude, longitude, fallback
            ));
            fallback
        }
    }
}

/// Parse an IANA timezone identifier such as `Europe/Brussels`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Unknown timezone identifier: {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_detection_known_cities() {
        let test_cases = vec![
            (50.8503, 4.3517, "Europe/Brussels"),
            (48.8566, 2.3522, "Europe/Paris"),
            (35.6762, 139.6503, "Asia/Tokyo"),
            (40.7128, -74.0060, "America/New_York"),
        ];

        for (lat, lon, expected) in test_cases {
            let tz = determine_timezone_from_coordinates(lat, lon);
            assert_eq!(
                tz,
                expected.parse::<Tz>().unwrap(),
                "Wrong timezone for ({}, {})",
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("Europe/Brussels").unwrap(),
            chrono_tz::Europe::Brussels
        );
        assert_eq!(parse_timezone(" UTC ").unwrap(), Tz::UTC);
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }
}
