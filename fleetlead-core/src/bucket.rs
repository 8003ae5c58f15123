//! Risk bucket classification
//!
//! Combines the seven sub-scores into four composite totals and picks
//! the single dominant marketing bucket. The rule table is ordered:
//! on an exact tie between composite totals that both clear their
//! minimum, the earlier-listed bucket wins.
//!
//! Global invariants enforced:
//! - Exactly one bucket per score
//! - `General` whenever no composite clears its minimum

use crate::factors::RiskFactors;
use serde::{Deserialize, Serialize};

/// Closed set of marketing buckets, in tie-break priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    SaltBelt,
    TransmissionCooker,
    CityGrinder,
    ThermalStress,
    General,
}

impl RiskBucket {
    /// Every variant, in tie-break priority order
    pub const ALL: [RiskBucket; 5] = [
        RiskBucket::SaltBelt,
        RiskBucket::TransmissionCooker,
        RiskBucket::CityGrinder,
        RiskBucket::ThermalStress,
        RiskBucket::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBucket::SaltBelt => "salt_belt",
            RiskBucket::TransmissionCooker => "transmission_cooker",
            RiskBucket::CityGrinder => "city_grinder",
            RiskBucket::ThermalStress => "thermal_stress",
            RiskBucket::General => "general",
        }
    }

    /// Marketing display name
    pub fn label(&self) -> &'static str {
        match self {
            RiskBucket::SaltBelt => "Metric Ton of Salt",
            RiskBucket::TransmissionCooker => "Transmission Cooker",
            RiskBucket::CityGrinder => "City Grinder",
            RiskBucket::ThermalStress => "Thermal Stress",
            RiskBucket::General => "General",
        }
    }

    /// One-line sales pitch for dashboard use
    pub fn pitch(&self) -> &'static str {
        match self {
            RiskBucket::SaltBelt => {
                "Road salt eats brake lines and frames; corrosion protection pays for itself here."
            }
            RiskBucket::TransmissionCooker => {
                "Long grades overheat transmissions; fluid service keeps these fleets climbing."
            }
            RiskBucket::CityGrinder => {
                "Stop-and-go traffic grinds brakes and starters; wear items turn over fast."
            }
            RiskBucket::ThermalStress => {
                "Temperature extremes kill batteries and cooling systems before their time."
            }
            RiskBucket::General => {
                "Balanced wear profile; standard preventive maintenance intervals apply."
            }
        }
    }
}

/// Composite category totals derived from the sub-scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeTotals {
    pub corrosion: u32,
    pub urban: u32,
    pub terrain: u32,
    pub thermal: u32,
}

impl CompositeTotals {
    pub fn from_factors(factors: &RiskFactors) -> Self {
        CompositeTotals {
            corrosion: factors.corrosion + factors.coastal,
            urban: factors.urban_wear,
            terrain: factors.terrain,
            thermal: factors.heat + factors.cold,
        }
    }

    fn max(&self) -> u32 {
        self.corrosion.max(self.urban).max(self.terrain).max(self.thermal)
    }
}

/// Ordered classification rules: (bucket, category minimum)
///
/// Position in this table is the tie-break priority.
const BUCKET_RULES: [(RiskBucket, u32); 4] = [
    (RiskBucket::SaltBelt, 25),
    (RiskBucket::TransmissionCooker, 15),
    (RiskBucket::CityGrinder, 20),
    (RiskBucket::ThermalStress, 15),
];

fn composite_for(bucket: RiskBucket, totals: &CompositeTotals) -> u32 {
    match bucket {
        RiskBucket::SaltBelt => totals.corrosion,
        RiskBucket::TransmissionCooker => totals.terrain,
        RiskBucket::CityGrinder => totals.urban,
        RiskBucket::ThermalStress => totals.thermal,
        RiskBucket::General => 0,
    }
}

/// Classify sub-scores into the single dominant risk bucket
///
/// The first rule whose composite equals the maximum composite AND
/// meets its category minimum wins; otherwise `General`.
pub fn classify_bucket(factors: &RiskFactors) -> RiskBucket {
    let totals = CompositeTotals::from_factors(factors);
    let max_score = totals.max();

    BUCKET_RULES
        .iter()
        .find(|&&(bucket, minimum)| {
            let composite = composite_for(bucket, &totals);
            composite == max_score && composite >= minimum
        })
        .map(|&(bucket, _)| bucket)
        .unwrap_or(RiskBucket::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(
        corrosion: u32,
        coastal: u32,
        urban_wear: u32,
        terrain: u32,
        heat: u32,
        cold: u32,
    ) -> RiskFactors {
        RiskFactors {
            corrosion,
            coastal,
            urban_wear,
            rural_road: 0,
            terrain,
            heat,
            cold,
        }
    }

    #[test]
    fn test_salt_belt_dominant() {
        assert_eq!(
            classify_bucket(&factors(30, 8, 15, 0, 0, 0)),
            RiskBucket::SaltBelt
        );
    }

    #[test]
    fn test_tie_prefers_earlier_rule() {
        // Corrosion and urban both total 30 and clear their minimums:
        // the salt belt rule is listed first and wins
        assert_eq!(
            classify_bucket(&factors(30, 0, 30, 0, 0, 0)),
            RiskBucket::SaltBelt
        );
    }

    #[test]
    fn test_terrain_beats_urban_on_tie() {
        assert_eq!(
            classify_bucket(&factors(0, 0, 20, 20, 0, 0)),
            RiskBucket::TransmissionCooker
        );
    }

    #[test]
    fn test_thermal_below_minimum_is_general() {
        // Dominant composite (urban 15) misses its 20 minimum and the
        // thermal composite (12) misses its 15 minimum
        assert_eq!(
            classify_bucket(&factors(0, 0, 15, 12, 12, 0)),
            RiskBucket::General
        );
    }

    #[test]
    fn test_thermal_stress() {
        assert_eq!(
            classify_bucket(&factors(0, 0, 0, 0, 0, 20)),
            RiskBucket::ThermalStress
        );
    }

    #[test]
    fn test_all_zero_is_general() {
        assert_eq!(
            classify_bucket(&factors(0, 0, 0, 0, 0, 0)),
            RiskBucket::General
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(RiskBucket::SaltBelt.as_str(), "salt_belt");
        assert_eq!(RiskBucket::TransmissionCooker.as_str(), "transmission_cooker");
        for bucket in RiskBucket::ALL {
            let json = serde_json::to_string(&bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.as_str()));
        }
    }
}
