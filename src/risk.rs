//! Ordinal risk classification.
//!
//! Maps crater diameter and casualty count to a four-level ordinal scale.
//! Evaluation is most-severe-first with first match winning: a small
//! crater with an enormous casualty count still classifies Catastrophic.
//! All thresholds are strict (`>`).

use serde::{Deserialize, Serialize};

/// Crater diameter above which the impact is Catastrophic.
pub const CATASTROPHIC_CRATER: f64 = 50_000.0;
/// Casualty count above which the impact is Catastrophic.
pub const CATASTROPHIC_CASUALTIES: u64 = 10_000_000;

/// Crater diameter above which the impact is at least Severe.
pub const SEVERE_CRATER: f64 = 10_000.0;
/// Casualty count above which the impact is at least Severe.
pub const SEVERE_CASUALTIES: u64 = 1_000_000;

/// Crater diameter above which the impact is at least Medium.
pub const MEDIUM_CRATER: f64 = 1_000.0;
/// Casualty count above which the impact is at least Medium.
pub const MEDIUM_CASUALTIES: u64 = 10_000;

/// Overall impact severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Localized damage, no mass-casualty potential.
    Low,
    /// Regional damage or a five-figure casualty count.
    Medium,
    /// City-scale destruction or a seven-figure casualty count.
    Severe,
    /// Continental-scale crater or an eight-figure casualty count.
    Catastrophic,
}

/// Classify an impact from its crater diameter and casualty estimate.
#[must_use]
pub fn classify(crater_diameter: f64, casualties: u64) -> RiskLevel {
    if crater_diameter > CATASTROPHIC_CRATER || casualties > CATASTROPHIC_CASUALTIES {
        RiskLevel::Catastrophic
    } else if crater_diameter > SEVERE_CRATER || casualties > SEVERE_CASUALTIES {
        RiskLevel::Severe
    } else if crater_diameter > MEDIUM_CRATER || casualties > MEDIUM_CASUALTIES {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
