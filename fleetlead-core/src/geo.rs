//! Static geographic reference data
//!
//! Global invariants enforced:
//! - All tables are immutable and initialized once
//! - Exact-match ZIP lookup only; absence is a normal outcome
//! - No runtime mutation API exists

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Geographic facts for one ZIP code
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeoRecord {
    pub zip: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Population per square mile
    pub population_density: f64,
}

/// Embedded ZIP dataset
///
/// Coverage is deliberately partial; `lookup` returning `None` is the
/// expected outcome for any ZIP outside this table.
static ZIP_TABLE: LazyLock<HashMap<&'static str, GeoRecord>> = LazyLock::new(|| {
    const ROWS: &[(&str, &str, &str, f64, f64, f64)] = &[
        ("60601", "Chicago", "IL", 41.8819, -87.6278, 12000.0),
        ("10001", "New York", "NY", 40.7484, -73.9967, 27000.0),
        ("90210", "Beverly Hills", "CA", 34.0901, -118.4065, 5200.0),
        ("80202", "Denver", "CO", 39.7541, -104.9927, 4500.0),
        ("98101", "Seattle", "WA", 47.6097, -122.3331, 8500.0),
        ("33101", "Miami", "FL", 25.7617, -80.1918, 11000.0),
        ("48201", "Detroit", "MI", 42.3314, -83.0458, 5000.0),
        ("02101", "Boston", "MA", 42.3601, -71.0589, 13000.0),
        ("75201", "Dallas", "TX", 32.7767, -96.7970, 3500.0),
        ("85001", "Phoenix", "AZ", 33.4484, -112.0740, 3000.0),
        ("55401", "Minneapolis", "MN", 44.9778, -93.2650, 7000.0),
        ("84101", "Salt Lake City", "UT", 40.7608, -111.8910, 3200.0),
        ("15201", "Pittsburgh", "PA", 40.4406, -79.9959, 5500.0),
        ("44101", "Cleveland", "OH", 41.4993, -81.6944, 4800.0),
        ("14201", "Buffalo", "NY", 42.8864, -78.8784, 6500.0),
        ("59601", "Helena", "MT", 46.5927, -112.0361, 280.0),
    ];

    ROWS.iter()
        .map(|&(zip, city, state, lat, lon, population_density)| {
            (
                zip,
                GeoRecord {
                    zip,
                    city,
                    state,
                    lat,
                    lon,
                    population_density,
                },
            )
        })
        .collect()
});

/// States that salt roads in winter (road de-icing corrosion risk)
const SALT_BELT_STATES: &[&str] = &[
    "CT", "DC", "DE", "IL", "IN", "IA", "KY", "ME", "MD", "MA", "MI", "MN", "MO", "NH", "NJ", "NY",
    "OH", "PA", "RI", "VT", "VA", "WV", "WI",
];

/// States with marine-layer corrosion exposure
const COASTAL_STATES: &[&str] = &[
    "CA", "OR", "WA", "TX", "LA", "MS", "AL", "FL", "GA", "SC", "NC", "VA", "MD", "DE", "NJ", "NY",
    "CT", "RI", "MA", "NH", "ME",
];

/// States with significant elevation variance
const MOUNTAINOUS_STATES: &[&str] = &[
    "CO", "WV", "UT", "NV", "ID", "MT", "WA", "OR", "CA", "AZ", "NM", "WY",
];

/// Coastline proxies: (lat, lon) of major coastal cities
pub const COASTAL_REFERENCE_POINTS: [(f64, f64); 8] = [
    (34.0522, -118.2437), // Los Angeles
    (32.7157, -117.1611), // San Diego
    (37.7749, -122.4194), // San Francisco
    (47.6062, -122.3321), // Seattle
    (25.7617, -80.1918),  // Miami
    (29.7604, -95.3698),  // Houston
    (40.7128, -74.0060),  // New York
    (42.3601, -71.0589),  // Boston
];

/// ZIP 3-digit prefix -> average elevation in feet
const ELEVATION_BY_PREFIX: &[(&str, u32)] = &[
    ("800", 5280), // Denver area
    ("801", 5500), // Colorado
    ("802", 6000), // Colorado mountains
    ("803", 7000), // Colorado mountains
    ("804", 8000), // High Colorado
    ("805", 5500), // Colorado
    ("840", 4300), // Salt Lake City
    ("841", 4500), // Utah
    ("871", 5300), // Albuquerque
    ("872", 6000), // New Mexico
    ("891", 4500), // Las Vegas area
    ("590", 3500), // Montana
    ("591", 4000), // Montana
    ("820", 6000), // Wyoming
    ("821", 6500), // Wyoming
    ("822", 7000), // Wyoming
    ("831", 4500), // Idaho
    ("832", 5000), // Idaho
    ("833", 5500), // Idaho
];

/// Per-state default elevation in feet, used when no prefix matches
const ELEVATION_BY_STATE: &[(&str, u32)] = &[
    ("CO", 5500),
    ("UT", 4500),
    ("WY", 5500),
    ("NM", 5000),
    ("NV", 4000),
    ("AZ", 3500),
    ("ID", 4000),
    ("MT", 3500),
    ("WA", 1500),
    ("OR", 1500),
    ("CA", 1000),
    ("WV", 1500),
];

/// Last-resort elevation when neither prefix nor state is tabulated
const DEFAULT_ELEVATION_FEET: u32 = 500;

/// Look up the geographic record for a ZIP code (exact match only)
pub fn lookup(zip: &str) -> Option<&'static GeoRecord> {
    ZIP_TABLE.get(zip)
}

/// All ZIP codes covered by the embedded dataset
pub fn known_zip_codes() -> impl Iterator<Item = &'static str> {
    ZIP_TABLE.keys().copied()
}

pub fn is_salt_belt_state(state: &str) -> bool {
    SALT_BELT_STATES.contains(&state)
}

pub fn is_coastal_state(state: &str) -> bool {
    COASTAL_STATES.contains(&state)
}

pub fn is_mountainous_state(state: &str) -> bool {
    MOUNTAINOUS_STATES.contains(&state)
}

/// Estimate elevation for a ZIP code in feet
///
/// Fallback chain: 3-digit prefix table, then per-state default, then
/// a flat 500 feet. Always yields a value; never fails.
pub fn elevation_estimate(zip: &str, state: &str) -> u32 {
    let prefix = zip.get(..3).unwrap_or(zip);
    if let Some(&(_, feet)) = ELEVATION_BY_PREFIX.iter().find(|(p, _)| *p == prefix) {
        return feet;
    }
    ELEVATION_BY_STATE
        .iter()
        .find(|(s, _)| *s == state)
        .map(|&(_, feet)| feet)
        .unwrap_or(DEFAULT_ELEVATION_FEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_zip() {
        let record = lookup("60601").unwrap();
        assert_eq!(record.city, "Chicago");
        assert_eq!(record.state, "IL");
        assert!(record.population_density > 10_000.0);
    }

    #[test]
    fn test_lookup_unknown_zip_is_absent() {
        assert!(lookup("00000").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("6060").is_none()); // no prefix matching
    }

    #[test]
    fn test_state_sets() {
        assert!(is_salt_belt_state("IL"));
        assert!(!is_salt_belt_state("AZ"));
        assert!(is_coastal_state("FL"));
        assert!(!is_coastal_state("CO"));
        assert!(is_mountainous_state("MT"));
        assert!(!is_mountainous_state("IL"));
    }

    #[test]
    fn test_elevation_prefix_beats_state_default() {
        // 802xx is tabulated directly; CO default would be 5500
        assert_eq!(elevation_estimate("80202", "CO"), 6000);
    }

    #[test]
    fn test_elevation_state_default() {
        // 596xx is not in the prefix table
        assert_eq!(elevation_estimate("59601", "MT"), 3500);
    }

    #[test]
    fn test_elevation_last_resort() {
        assert_eq!(elevation_estimate("75201", "TX"), 500);
    }

    #[test]
    fn test_elevation_short_zip_does_not_panic() {
        assert_eq!(elevation_estimate("80", "CO"), 5500);
    }
}
