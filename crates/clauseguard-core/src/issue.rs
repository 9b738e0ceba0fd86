//! Shared data model for contract-risk findings.
//!
//! Produced by the external analysis service and consumed read-only by the
//! pipeline. The wire format follows the analysis API: risk levels are
//! upper-case strings and the plain-language field is named `eli5`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Risk level assigned to a single flagged clause.
///
/// Exhaustive: the analysis service contract admits no other value, so an
/// unrecognized string fails deserialisation instead of mapping to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// One flagged contract clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Verbatim contract excerpt.
    pub clause: String,
    pub risk_level: RiskLevel,
    /// Legal basis for the finding, e.g. "Indian Contract Act, 1872 – Section 27".
    pub law_cited: String,
    /// Plain-language explanation of the finding.
    #[serde(rename = "eli5")]
    pub explanation: String,
    /// Model confidence in [0.0, 1.0].
    pub confidence: f64,
}

/// Root value returned by the analysis service for one contract.
///
/// `risk_score` and the per-issue `risk_level` distribution are supplied
/// independently by the service and are not required to be consistent with
/// each other; a high score with no HIGH issues is legal input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall contract risk in 0..=100.
    pub risk_score: u8,
    /// Findings in the order the service produced them; not assumed sorted.
    pub issues: Vec<Issue>,
}

impl AnalysisResult {
    /// Validate ranges the type system cannot express.
    ///
    /// A malformed result is rejected wholesale; callers must not render any
    /// part of a result that fails here.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.risk_score > 100 {
            return Err(CoreError::ScoreOutOfRange(self.risk_score));
        }
        for (index, issue) in self.issues.iter().enumerate() {
            if issue.clause.trim().is_empty() {
                return Err(CoreError::InvalidIssue {
                    index,
                    reason: "empty clause text".into(),
                });
            }
            if !(0.0..=1.0).contains(&issue.confidence) {
                return Err(CoreError::InvalidIssue {
                    index,
                    reason: format!("confidence {} outside [0.0, 1.0]", issue.confidence),
                });
            }
        }
        Ok(())
    }
}
