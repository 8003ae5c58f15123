//! Upsell recommendations
//!
//! Independent threshold rules over the sub-scores; several may fire
//! for one lead. Recommendations concatenate in rule order, dedupe
//! preserving first occurrence, and cap at six.

use crate::factors::{Factor, RiskFactors};

/// Maximum recommendations per lead
const MAX_RECOMMENDATIONS: usize = 6;

/// One upsell rule: fires when the factor meets its threshold
struct UpsellRule {
    factor: Factor,
    threshold: u32,
    services: &'static [&'static str],
}

/// Rules in presentation order; not mutually exclusive
const UPSELL_RULES: &[UpsellRule] = &[
    UpsellRule {
        factor: Factor::Corrosion,
        threshold: 25,
        services: &["Undercoating", "Brake Line Inspection", "Caliper Check"],
    },
    UpsellRule {
        factor: Factor::Coastal,
        threshold: 10,
        services: &["Rust Proofing", "Marine Grade Lubricants"],
    },
    UpsellRule {
        factor: Factor::UrbanWear,
        threshold: 20,
        services: &["Brake Rotors", "Starter System Check", "Door Hinge Lube"],
    },
    UpsellRule {
        factor: Factor::RuralRoad,
        threshold: 10,
        services: &["Suspension Inspection", "Alignment Check"],
    },
    UpsellRule {
        factor: Factor::Terrain,
        threshold: 15,
        services: &["Transmission Flush", "Coolant Check", "Brake Fluid Flush"],
    },
    UpsellRule {
        factor: Factor::Heat,
        threshold: 12,
        services: &["Battery Load Test", "AC System Check"],
    },
    UpsellRule {
        factor: Factor::Cold,
        threshold: 12,
        services: &["Block Heater", "Battery Replacement", "Alternator Test"],
    },
];

/// Recommend services for a risk profile
pub fn recommend_upsells(factors: &RiskFactors) -> Vec<&'static str> {
    let mut recommendations = Vec::new();
    for rule in UPSELL_RULES {
        if factors.get(rule.factor) >= rule.threshold {
            for &service in rule.services {
                if !recommendations.contains(&service) {
                    recommendations.push(service);
                }
            }
        }
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
