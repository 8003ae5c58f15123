//! Risk narration: ranked human-readable risk labels
//!
//! Global invariants enforced:
//! - Stable descending rank; ties keep the listed order
//! - Primary is "Low Risk" only when every contribution is zero

use crate::factors::RiskFactors;

/// Primary label when no sub-score contributes
pub const LOW_RISK_LABEL: &str = "Low Risk";

/// Minimum score for a label to qualify as a secondary risk
const SECONDARY_RISK_FLOOR: u32 = 5;

/// Ranked risk narrative for one score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskNarrative {
    pub primary: &'static str,
    /// Ranks 2 and 3, highest first; at most two entries
    pub secondary: Vec<&'static str>,
}

/// Build the labeled contributions in their canonical listed order
fn labeled_scores(factors: &RiskFactors) -> [(u32, &'static str); 6] {
    [
        (factors.corrosion + factors.coastal, "Corrosion"),
        (factors.urban_wear, "Stop-and-Go Wear"),
        (factors.terrain, "Terrain Stress"),
        (factors.heat, "Heat Stress"),
        (factors.cold, "Cold Start Risk"),
        (factors.rural_road, "Rural Road Wear"),
    ]
}

/// Rank risk labels: primary plus up to two secondary risks
pub fn narrate_risks(factors: &RiskFactors) -> RiskNarrative {
    let mut ranked = labeled_scores(factors);
    // Stable: equal scores keep the canonical order
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let primary = if ranked[0].0 > 0 {
        ranked[0].1
    } else {
        LOW_RISK_LABEL
    };

    let secondary = ranked[1..3]
        .iter()
        .filter(|&&(score, _)| score >= SECONDARY_RISK_FLOOR)
        .map(|&(_, label)| label)
        .collect();

    RiskNarrative { primary, secondary }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_is_low_risk() {
        let narrative = narrate_risks(&RiskFactors::default());
        assert_eq!(narrative.primary, LOW_RISK_LABEL);
        assert!(narrative.secondary.is_empty());
    }

    #[test]
    fn test_tie_keeps_listed_order() {
        // Corrosion and urban tie at 30; corrosion is listed first
        let factors = RiskFactors {
            corrosion: 30,
            urban_wear: 30,
            ..Default::default()
        };
        let narrative = narrate_risks(&factors);
        assert_eq!(narrative.primary, "Corrosion");
        assert_eq!(narrative.secondary, vec!["Stop-and-Go Wear"]);
    }

    #[test]
    fn test_secondary_floor() {
        // Terrain 4 is ranked second but misses the floor
        let factors = RiskFactors {
            urban_wear: 25,
            terrain: 4,
            ..Default::default()
        };
        let narrative = narrate_risks(&factors);
        assert_eq!(narrative.primary, "Stop-and-Go Wear");
        assert!(narrative.secondary.is_empty());
    }

    #[test]
    fn test_two_secondaries_in_rank_order() {
        let factors = RiskFactors {
            corrosion: 30,
            cold: 20,
            terrain: 12,
            rural_road: 10,
            ..Default::default()
        };
        let narrative = narrate_risks(&factors);
        assert_eq!(narrative.primary, "Corrosion");
        // Fourth-ranked rural road wear is cut even though it clears
        // the floor
        assert_eq!(narrative.secondary, vec!["Cold Start Risk", "Terrain Stress"]);
    }
}
