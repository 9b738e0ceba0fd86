//! Aggregation over a set of findings: per-level counts and display order.

use crate::issue::{Issue, RiskLevel};

/// Counts of issues per risk level, recomputed fresh from each issue set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

/// Count issues by risk level. Empty input yields all-zero counts.
pub fn summarize(issues: &[Issue]) -> RiskSummary {
    let mut summary = RiskSummary::default();
    for issue in issues {
        match issue.risk_level {
            RiskLevel::High => summary.high += 1,
            RiskLevel::Medium => summary.medium += 1,
            RiskLevel::Low => summary.low += 1,
        }
        summary.total += 1;
    }
    summary
}

/// Produce a display ordering: HIGH first, then MEDIUM, then LOW.
///
/// The sort is stable, so issues with equal risk level retain their
/// original relative order. The input is not mutated; a new ordered view
/// is returned.
pub fn order(issues: &[Issue]) -> Vec<Issue> {
    let mut ordered = issues.to_vec();
    ordered.sort_by_key(|issue| severity_rank(issue.risk_level));
    ordered
}

fn severity_rank(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::High => 0,
        RiskLevel::Medium => 1,
        RiskLevel::Low => 2,
    }
}
