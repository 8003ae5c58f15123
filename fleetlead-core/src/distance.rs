//! Great-circle distance calculations
//!
//! Global invariants enforced:
//! - Deterministic for any valid coordinate pair
//! - No error conditions: every input produces a distance

use crate::geo::COASTAL_REFERENCE_POINTS;

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two coordinates
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance in miles to the nearest coastal reference point
pub fn nearest_coast_distance(lat: f64, lon: f64) -> f64 {
    COASTAL_REFERENCE_POINTS
        .iter()
        .map(|&(coast_lat, coast_lon)| haversine_miles(lat, lon, coast_lat, coast_lon))
        .fold(f64::INFINITY, f64::min)
}
