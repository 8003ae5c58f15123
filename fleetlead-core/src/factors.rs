//! Risk factor calculators
//!
//! Four independent, side-effect-free heuristics convert geographic
//! facts into bounded sub-scores. Every tier policy is an explicit
//! ordered rule list evaluated top-to-bottom, first match wins.
//!
//! Global invariants enforced:
//! - Every sub-score is >= 0 and bounded by its own tier table
//! - Deterministic: identical input yields identical sub-scores
//! - A recognized ZIP always produces sub-scores, never an error

use crate::distance::nearest_coast_distance;
use crate::geo::{self, GeoRecord};
use serde::{Deserialize, Serialize};

/// The seven risk sub-scores for one ZIP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskFactors {
    pub corrosion: u32,
    pub coastal: u32,
    pub urban_wear: u32,
    pub rural_road: u32,
    pub terrain: u32,
    pub heat: u32,
    pub cold: u32,
}

/// Identifies one sub-score within [`RiskFactors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Corrosion,
    Coastal,
    UrbanWear,
    RuralRoad,
    Terrain,
    Heat,
    Cold,
}

impl RiskFactors {
    pub fn get(&self, factor: Factor) -> u32 {
        match factor {
            Factor::Corrosion => self.corrosion,
            Factor::Coastal => self.coastal,
            Factor::UrbanWear => self.urban_wear,
            Factor::RuralRoad => self.rural_road,
            Factor::Terrain => self.terrain,
            Factor::Heat => self.heat,
            Factor::Cold => self.cold,
        }
    }

    /// Uncapped sum of all seven sub-scores
    pub fn sum(&self) -> u32 {
        self.corrosion
            + self.coastal
            + self.urban_wear
            + self.rural_road
            + self.terrain
            + self.heat
            + self.cold
    }
}

/// Salt-belt membership score
const SALT_BELT_SCORE: u32 = 30;

/// Coastal tiers: first tier whose max distance exceeds the measured
/// distance wins. (max_distance_miles, score)
const COASTAL_TIERS: &[(f64, u32)] = &[(20.0, 15), (50.0, 8)];

/// One density tier: a one-sided band plus the pair of scores it yields
struct DensityTier {
    band: DensityBand,
    urban_wear: u32,
    rural_road: u32,
}

enum DensityBand {
    DenserThan(f64),
    SparserThan(f64),
}

/// Density tiers in evaluation order. The sparser-than-500 tier sits
/// above the sparser-than-100 tier, so the latter never fires; this
/// ordering is part of the published scoring contract.
const DENSITY_TIERS: &[DensityTier] = &[
    DensityTier {
        band: DensityBand::DenserThan(10_000.0),
        urban_wear: 30,
        rural_road: 0,
    },
    DensityTier {
        band: DensityBand::DenserThan(5_000.0),
        urban_wear: 25,
        rural_road: 0,
    },
    DensityTier {
        band: DensityBand::DenserThan(2_000.0),
        urban_wear: 15,
        rural_road: 0,
    },
    DensityTier {
        band: DensityBand::SparserThan(500.0),
        urban_wear: 0,
        rural_road: 10,
    },
    DensityTier {
        band: DensityBand::SparserThan(100.0),
        urban_wear: 0,
        rural_road: 15,
    },
];

/// Elevation tiers: first tier the estimate exceeds wins.
/// (min_elevation_feet, score)
const ELEVATION_TIERS: &[(u32, u32)] = &[(7000, 25), (5000, 20), (3000, 12), (2000, 8)];

/// Heat tiers on latitude: first tier the latitude falls below wins.
/// (max_latitude, score)
const HEAT_TIERS: &[(f64, u32)] = &[(30.0, 20), (35.0, 12)];

/// Cold tiers on latitude: first tier the latitude exceeds wins.
/// (min_latitude, score)
const COLD_TIERS: &[(f64, u32)] = &[(45.0, 20), (42.0, 12)];

/// Corrosion heuristic: road salt and marine-layer exposure
///
/// The two channels are independent and must not be conflated: salt
/// belt membership scores regardless of coast distance, and coastal
/// proximity scores only for coastal states.
pub fn corrosion_scores(state: &str, lat: f64, lon: f64) -> (u32, u32) {
    let salt = if geo::is_salt_belt_state(state) {
        SALT_BELT_SCORE
    } else {
        0
    };

    let mut coastal = 0;
    if geo::is_coastal_state(state) {
        let miles = nearest_coast_distance(lat, lon);
        if let Some(&(_, score)) = COASTAL_TIERS.iter().find(|&&(max, _)| miles < max) {
            coastal = score;
        }
    }

    (salt, coastal)
}

/// Density heuristic: stop-and-go urban wear vs unpaved rural roads
///
/// Returns (urban_wear, rural_road); at most one is non-zero.
pub fn density_scores(population_density: f64) -> (u32, u32) {
    for tier in DENSITY_TIERS {
        let matched = match tier.band {
            DensityBand::DenserThan(min) => population_density > min,
            DensityBand::SparserThan(max) => population_density < max,
        };
        if matched {
            return (tier.urban_wear, tier.rural_road);
        }
    }
    (0, 0)
}

/// Terrain heuristic: mountainous-state elevation stress
pub fn terrain_score(zip: &str, state: &str) -> u32 {
    if !geo::is_mountainous_state(state) {
        return 0;
    }
    let elevation = geo::elevation_estimate(zip, state);
    ELEVATION_TIERS
        .iter()
        .find(|&&(min, _)| elevation > min)
        .map(|&(_, score)| score)
        .unwrap_or(0)
}

/// Thermal heuristic: latitude-banded heat and cold-start stress
///
/// Returns (heat, cold). The bands are disjoint with the current
/// constants (35 < 42), so at most one is non-zero.
pub fn thermal_scores(lat: f64) -> (u32, u32) {
    let heat = HEAT_TIERS
        .iter()
        .find(|&&(max, _)| lat < max)
        .map(|&(_, score)| score)
        .unwrap_or(0);
    let cold = COLD_TIERS
        .iter()
        .find(|&&(min, _)| lat > min)
        .map(|&(_, score)| score)
        .unwrap_or(0);
    (heat, cold)
}

/// Run all four heuristics for one geographic record
pub fn compute_risk_factors(record: &GeoRecord) -> RiskFactors {
    let (corrosion, coastal) = corrosion_scores(record.state, record.lat, record.lon);
    let (urban_wear, rural_road) = density_scores(record.population_density);
    let terrain = terrain_score(record.zip, record.state);
    let (heat, cold) = thermal_scores(record.lat);

    RiskFactors {
        corrosion,
        coastal,
        urban_wear,
        rural_road,
        terrain,
        heat,
        cold,
    }
}
