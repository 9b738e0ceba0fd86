//! Development stand-in for the analysis service.
//!
//! Returns a fixed employment-contract analysis so the display pipeline can
//! be exercised without the service running. Not a substitute for the real
//! boundary: responses from the wire still go through strict validation in
//! [`crate::http`].

use clauseguard_core::{AnalysisResult, Issue, RiskLevel};

/// Fixed five-issue analysis of an employment contract, score 87.
pub fn sample_analysis() -> AnalysisResult {
    AnalysisResult {
        risk_score: 87,
        issues: vec![
            Issue {
                clause: "The Employee agrees not to engage in any business or employment \
                    that competes with the Company for a period of 5 years after \
                    termination, across all of India."
                    .into(),
                risk_level: RiskLevel::High,
                law_cited: "Indian Contract Act, 1872 – Section 27".into(),
                explanation: "This non-compete clause is likely unenforceable in India. \
                    Section 27 of the Indian Contract Act makes agreements that restrain \
                    trade void. Courts have consistently ruled against such broad \
                    restrictions."
                    .into(),
                confidence: 0.94,
            },
            Issue {
                clause: "Any disputes shall be resolved exclusively under the jurisdiction \
                    of courts in Singapore, and Singapore law shall apply."
                    .into(),
                risk_level: RiskLevel::High,
                law_cited: "Consumer Protection Act, 2019 – Section 2(7)".into(),
                explanation: "For consumer contracts, Indian courts have jurisdiction. This \
                    foreign jurisdiction clause may be challenged if it causes undue \
                    hardship to an Indian party."
                    .into(),
                confidence: 0.88,
            },
            Issue {
                clause: "The Company reserves the right to modify the terms of this \
                    agreement at any time without prior notice to the Employee."
                    .into(),
                risk_level: RiskLevel::Medium,
                law_cited: "Indian Contract Act, 1872 – Section 14".into(),
                explanation: "Unilateral modification clauses may be considered unfair. \
                    Valid contracts require 'free consent' from all parties. Changes \
                    should be mutually agreed upon."
                    .into(),
                confidence: 0.82,
            },
            Issue {
                clause: "The Employee shall forfeit all pending dues and bonuses if they \
                    resign before completing 2 years of service."
                    .into(),
                risk_level: RiskLevel::Medium,
                law_cited: "Payment of Wages Act, 1936 – Section 7".into(),
                explanation: "Earned wages cannot be forfeited. While notice period clauses \
                    are valid, withholding already-earned compensation may violate labour \
                    laws."
                    .into(),
                confidence: 0.79,
            },
            Issue {
                clause: "Employee agrees to maintain confidentiality of company information \
                    during and after employment."
                    .into(),
                risk_level: RiskLevel::Low,
                law_cited: "Information Technology Act, 2000 – Section 72A".into(),
                explanation: "This is a standard and reasonable confidentiality clause. It \
                    protects legitimate business interests without unduly restricting the \
                    employee."
                    .into(),
                confidence: 0.95,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clauseguard_core::{RiskBand, Tone, classify, generate, map_score, order, summarize};

    #[test]
    fn sample_passes_strict_validation() {
        assert!(sample_analysis().validate().is_ok());
    }

    #[test]
    fn sample_drives_the_whole_pipeline() {
        let result = sample_analysis();
        result.validate().unwrap();

        let summary = summarize(&result.issues);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.medium, 2);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.total, 5);

        let ordered = order(&result.issues);
        assert_eq!(ordered[0].confidence, 0.94);
        assert_eq!(ordered[1].confidence, 0.88);
        assert_eq!(ordered[4].risk_level, RiskLevel::Low);

        let reading = map_score(result.risk_score).unwrap();
        assert_eq!(reading.band, RiskBand::Critical);

        let draft = generate(&result.issues, Tone::Formal);
        assert_eq!(draft.high_count, 2);
        assert_eq!(draft.medium_count, 2);
        assert!(draft.body.contains("Indian Contract Act, 1872 – Section 27"));

        for issue in &result.issues {
            classify(issue.confidence).unwrap();
        }
    }
}
