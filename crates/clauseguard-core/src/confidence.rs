//! Confidence tier classification.
//!
//! Maps a continuous model confidence in [0.0, 1.0] onto three discrete
//! tiers with fixed display texts. Thresholds are inclusive lower bounds
//! evaluated high-to-low: 0.85 for HIGH, 0.70 for MEDIUM.

use crate::error::CoreError;

/// Discrete confidence bucket derived from a continuous score.
///
/// Never stored; recomputed per issue for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Confidence",
            Self::Medium => "Medium Confidence",
            Self::Low => "Low Confidence",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::High => {
                "Our AI is highly confident in this assessment based on clear legal precedents and statutes."
            }
            Self::Medium => {
                "Assessment is based on interpretable legal principles, but edge cases may apply."
            }
            Self::Low => {
                "This assessment requires human legal review. The clause may have unusual or ambiguous terms."
            }
        }
    }
}

/// Tier plus the rounded confidence percentage shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceAssessment {
    pub tier: ConfidenceTier,
    /// Confidence × 100, rounded half away from zero.
    pub percent: u8,
}

/// Classify a confidence score into a tier.
///
/// Input outside [0.0, 1.0] (including NaN) is a precondition violation;
/// the score is never clamped.
pub fn classify(confidence: f64) -> Result<ConfidenceAssessment, CoreError> {
    if !(0.0..=1.0).contains(&confidence) {
        return Err(CoreError::ConfidenceOutOfRange(confidence));
    }

    let tier = if confidence >= 0.85 {
        ConfidenceTier::High
    } else if confidence >= 0.70 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    };

    Ok(ConfidenceAssessment {
        tier,
        percent: (confidence * 100.0).round() as u8,
    })
}
