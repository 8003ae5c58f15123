//! Fleet Lead Scoring Engine core library
//!
//! Converts ZIP codes into Maintenance Severity Scores, risk buckets,
//! and ranked upsell recommendations by combining static geographic
//! reference data with tiered scoring heuristics.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Scoring is a pure function over immutable reference tables
// - No I/O, no mutable global state, no randomness or clocks
// - Unknown ZIP is a normal absent outcome, never an error
// - Identical input yields identical records

pub mod bucket;
pub mod distance;
pub mod factors;
pub mod geo;
pub mod narrative;
pub mod priority;
pub mod report;
pub mod upsell;

pub use bucket::RiskBucket;
pub use factors::RiskFactors;
pub use geo::GeoRecord;
pub use priority::LeadPriority;
pub use report::{
    group_by_bucket, group_by_priority, render_json, render_summary, render_text, sort_records,
    FleetLeadScore,
};

use rayon::prelude::*;

/// Result filters for batch scoring
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreOptions {
    /// Drop records below this total severity score
    pub min_score: Option<u32>,
    /// Keep only the top N records after sorting
    pub top: Option<usize>,
}

/// Score a single ZIP code
///
/// Returns `None` when the ZIP has no reference data; that is the only
/// absent case and it is not an error.
pub fn score_zip_code(zip: &str) -> Option<FleetLeadScore> {
    let record = geo::lookup(zip)?;

    let risk_factors = factors::compute_risk_factors(record);
    let total_severity_score = priority::total_severity_score(&risk_factors);
    let risk_bucket = bucket::classify_bucket(&risk_factors);
    let narrative = narrative::narrate_risks(&risk_factors);
    let recommended_upsell = upsell::recommend_upsells(&risk_factors);
    let lead_priority = priority::classify_priority(total_severity_score);

    Some(FleetLeadScore {
        zip: record.zip.to_string(),
        city: record.city.to_string(),
        state: record.state.to_string(),
        latitude: record.lat,
        longitude: record.lon,
        population_density: record.population_density,
        total_severity_score,
        risk_factors,
        primary_risk: narrative.primary.to_string(),
        secondary_risks: narrative.secondary.iter().map(|s| s.to_string()).collect(),
        risk_bucket,
        bucket_label: risk_bucket.label().to_string(),
        bucket_pitch: risk_bucket.pitch().to_string(),
        recommended_upsell: recommended_upsell.iter().map(|s| s.to_string()).collect(),
        lead_priority,
    })
}

/// Score a batch of ZIP codes
///
/// Inputs are trimmed; ZIPs without reference data are silently
/// dropped. Results are sorted by total severity descending, stable
/// for ties. Scoring runs in parallel per ZIP; the collect preserves
/// input order, so output is identical to sequential evaluation.
pub fn score_many<S: AsRef<str> + Sync>(zips: &[S]) -> Vec<FleetLeadScore> {
    let records = zips
        .par_iter()
        .filter_map(|zip| score_zip_code(zip.as_ref().trim()))
        .collect();
    sort_records(records)
}

/// Score a batch of ZIP codes with result filters applied after sorting
pub fn score_many_with_options<S: AsRef<str> + Sync>(
    zips: &[S],
    options: ScoreOptions,
) -> Vec<FleetLeadScore> {
    let mut records = score_many(zips);
    if let Some(min_score) = options.min_score {
        records.retain(|r| r.total_severity_score >= min_score);
    }
    if let Some(top) = options.top {
        records.truncate(top);
    }
    records
}
