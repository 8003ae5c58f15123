//! Lead priority classification
//!
//! Maps total severity to a coarse sales-triage tier.

use crate::factors::RiskFactors;
use serde::{Deserialize, Serialize};

/// Severity ceiling: sub-score sums clamp here
pub const MAX_SEVERITY_SCORE: u32 = 100;

const HOT_THRESHOLD: u32 = 60;
const WARM_THRESHOLD: u32 = 35;

/// Sales triage tier, highest urgency first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadPriority {
    Hot,
    Warm,
    Cold,
}

impl LeadPriority {
    /// Every variant, hottest first
    pub const ALL: [LeadPriority; 3] = [LeadPriority::Hot, LeadPriority::Warm, LeadPriority::Cold];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPriority::Hot => "hot",
            LeadPriority::Warm => "warm",
            LeadPriority::Cold => "cold",
        }
    }
}

/// Total severity score: sum of all seven sub-scores, clamped to 100
pub fn total_severity_score(factors: &RiskFactors) -> u32 {
    factors.sum().min(MAX_SEVERITY_SCORE)
}

/// Classify a total severity score into a lead priority
pub fn classify_priority(total_severity_score: u32) -> LeadPriority {
    if total_severity_score >= HOT_THRESHOLD {
        LeadPriority::Hot
    } else if total_severity_score >= WARM_THRESHOLD {
        LeadPriority::Warm
    } else {
        LeadPriority::Cold
    }
}
