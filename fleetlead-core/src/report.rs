//! Lead score records, grouping, and output rendering
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs
//! - Grouping is an exact partition: every enumeration member is
//!   keyed, and the union of groups reproduces the input multiset

use crate::bucket::RiskBucket;
use crate::factors::RiskFactors;
use crate::priority::LeadPriority;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete lead score for one ZIP code
///
/// Created fresh per scoring call; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FleetLeadScore {
    pub zip: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population_density: f64,
    pub total_severity_score: u32,
    pub risk_factors: RiskFactors,
    pub primary_risk: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub secondary_risks: Vec<String>,
    pub risk_bucket: RiskBucket,
    pub bucket_label: String,
    pub bucket_pitch: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub recommended_upsell: Vec<String>,
    pub lead_priority: LeadPriority,
}

/// Sort records by total severity descending
///
/// The sort is stable: records with equal severity keep their input
/// order.
pub fn sort_records(mut records: Vec<FleetLeadScore>) -> Vec<FleetLeadScore> {
    records.sort_by(|a, b| b.total_severity_score.cmp(&a.total_severity_score));
    records
}

/// Partition records by risk bucket
///
/// Every bucket is keyed, including buckets with no matches. Relative
/// order within each group follows the input order.
pub fn group_by_bucket(records: Vec<FleetLeadScore>) -> BTreeMap<RiskBucket, Vec<FleetLeadScore>> {
    let mut groups: BTreeMap<RiskBucket, Vec<FleetLeadScore>> = RiskBucket::ALL
        .into_iter()
        .map(|bucket| (bucket, Vec::new()))
        .collect();
    for record in records {
        groups
            .entry(record.risk_bucket)
            .or_default()
            .push(record);
    }
    groups
}

/// Partition records by lead priority
///
/// Every priority is keyed, including priorities with no matches.
pub fn group_by_priority(
    records: Vec<FleetLeadScore>,
) -> BTreeMap<LeadPriority, Vec<FleetLeadScore>> {
    let mut groups: BTreeMap<LeadPriority, Vec<FleetLeadScore>> = LeadPriority::ALL
        .into_iter()
        .map(|priority| (priority, Vec::new()))
        .collect();
    for record in records {
        groups
            .entry(record.lead_priority)
            .or_default()
            .push(record);
    }
    groups
}

/// Render records as a fixed-width text table
pub fn render_text(records: &[FleetLeadScore]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<8} {:<16} {:<4} {:<6} {:<9} {:<20} {}\n",
        "ZIP", "CITY", "ST", "SCORE", "PRIORITY", "BUCKET", "PRIMARY RISK"
    ));

    for record in records {
        output.push_str(&format!(
            "{:<8} {:<16} {:<4} {:<6} {:<9} {:<20} {}\n",
            record.zip,
            truncate_or_pad(&record.city, 16),
            record.state,
            record.total_severity_score,
            record.lead_priority.as_str(),
            record.risk_bucket.as_str(),
            record.primary_risk,
        ));
    }

    output
}

/// Render records as pretty-printed JSON
pub fn render_json(records: &[FleetLeadScore]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Render a triage summary grouped by priority, with bucket counts
pub fn render_summary(records: &[FleetLeadScore]) -> String {
    let mut output = String::new();
    let by_priority = group_by_priority(records.to_vec());

    output.push_str("FLEET LEAD SCORING SUMMARY\n");
    for (priority, group) in &by_priority {
        output.push_str(&format!(
            "\n{} leads ({}):\n",
            priority.as_str().to_uppercase(),
            group.len()
        ));
        for record in group {
            output.push_str(&format!(
                "  {}, {} ({}): score {} - {}\n",
                record.city, record.state, record.zip, record.total_severity_score,
                record.primary_risk
            ));
        }
    }

    output.push_str("\nMARKETING BUCKETS:\n");
    let by_bucket = group_by_bucket(records.to_vec());
    for (bucket, group) in &by_bucket {
        if !group.is_empty() {
            output.push_str(&format!("  {}: {} leads\n", bucket.label(), group.len()));
        }
    }

    output
}

/// Truncate or pad string to fixed width
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.len() > width {
        format!("{}...", &s[..width.saturating_sub(3)])
    } else {
        format!("{:<width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(zip: &str, score: u32, bucket: RiskBucket, priority: LeadPriority) -> FleetLeadScore {
        FleetLeadScore {
            zip: zip.to_string(),
            city: "Testville".to_string(),
            state: "IL".to_string(),
            latitude: 41.0,
            longitude: -87.0,
            population_density: 5000.0,
            total_severity_score: score,
            risk_factors: RiskFactors::default(),
            primary_risk: "Corrosion".to_string(),
            secondary_risks: vec![],
            risk_bucket: bucket,
            bucket_label: bucket.label().to_string(),
            bucket_pitch: bucket.pitch().to_string(),
            recommended_upsell: vec![],
            lead_priority: priority,
        }
    }

    #[test]
    fn test_sort_descending_and_stable() {
        let records = vec![
            record("11111", 40, RiskBucket::General, LeadPriority::Warm),
            record("22222", 70, RiskBucket::SaltBelt, LeadPriority::Hot),
            record("33333", 40, RiskBucket::General, LeadPriority::Warm),
        ];
        let sorted = sort_records(records);
        let zips: Vec<&str> = sorted.iter().map(|r| r.zip.as_str()).collect();
        // The two 40s keep their input order
        assert_eq!(zips, vec!["22222", "11111", "33333"]);
    }

    #[test]
    fn test_group_by_bucket_is_exhaustive_partition() {
        let records = vec![
            record("11111", 60, RiskBucket::SaltBelt, LeadPriority::Hot),
            record("22222", 20, RiskBucket::General, LeadPriority::Cold),
            record("33333", 65, RiskBucket::SaltBelt, LeadPriority::Hot),
        ];
        let groups = group_by_bucket(records.clone());

        // Every bucket is keyed, even the empty ones
        assert_eq!(groups.len(), RiskBucket::ALL.len());
        assert!(groups[&RiskBucket::CityGrinder].is_empty());

        // Union of groups reproduces the input multiset
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, records.len());
        assert_eq!(groups[&RiskBucket::SaltBelt].len(), 2);
        assert_eq!(groups[&RiskBucket::General].len(), 1);
    }

    #[test]
    fn test_group_by_priority_is_exhaustive_partition() {
        let records = vec![record("11111", 60, RiskBucket::SaltBelt, LeadPriority::Hot)];
        let groups = group_by_priority(records);
        assert_eq!(groups.len(), LeadPriority::ALL.len());
        assert_eq!(groups[&LeadPriority::Hot].len(), 1);
        assert!(groups[&LeadPriority::Warm].is_empty());
        assert!(groups[&LeadPriority::Cold].is_empty());
    }

    #[test]
    fn test_render_text_has_one_row_per_record() {
        let records = vec![
            record("11111", 60, RiskBucket::SaltBelt, LeadPriority::Hot),
            record("22222", 20, RiskBucket::General, LeadPriority::Cold),
        ];
        let text = render_text(&records);
        assert_eq!(text.lines().count(), 3); // header + 2 rows
        assert!(text.contains("salt_belt"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let records = vec![record("11111", 60, RiskBucket::SaltBelt, LeadPriority::Hot)];
        let json = render_json(&records);
        let parsed: Vec<FleetLeadScore> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_render_deterministic() {
        let records = vec![
            record("11111", 60, RiskBucket::SaltBelt, LeadPriority::Hot),
            record("22222", 20, RiskBucket::General, LeadPriority::Cold),
        ];
        assert_eq!(render_text(&records), render_text(&records));
        assert_eq!(render_json(&records), render_json(&records));
        assert_eq!(render_summary(&records), render_summary(&records));
    }

    #[test]
    fn test_truncate_or_pad() {
        assert_eq!(truncate_or_pad("ab", 4), "ab  ");
        assert_eq!(truncate_or_pad("abcdefgh", 5), "ab...");
    }
}
