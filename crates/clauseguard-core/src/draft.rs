//! Negotiation draft synthesis.
//!
//! Composes one plain-text negotiation message from the HIGH and MEDIUM
//! findings, parameterised by tone. Tone texts are fixed lookup tables;
//! issue content only ever fills the numbered entries. Output is fully
//! deterministic: identical arguments produce byte-identical drafts.

use std::fmt::Write;
use std::str::FromStr;

use crate::error::CoreError;
use crate::issue::{Issue, RiskLevel};

/// Fixed document returned when no HIGH or MEDIUM issues exist.
const NO_NEGOTIATION_NEEDED: &str = "No negotiation needed.\n\n\
    Great news! This contract doesn't contain any high or medium-risk clauses \
    that require negotiation. The terms appear to be fair and compliant with \
    Indian law.";

const HIGH_DIRECTIVE: &str =
    "Request: This clause should be revised or removed to comply with Indian law.";
const MEDIUM_DIRECTIVE: &str =
    "Suggestion: Consider revising this clause for fairness and legal compliance.";

/// Voice of the generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Friendly,
    Assertive,
}

/// Fixed greeting/intro/closing texts for one tone.
struct ToneText {
    greeting: &'static str,
    intro: &'static str,
    closing: &'static str,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Friendly => "friendly",
            Self::Assertive => "assertive",
        }
    }

    /// Static text table; the match keeps the table exhaustive so a new
    /// tone cannot be added without defining its texts.
    fn text(&self) -> ToneText {
        match self {
            Self::Formal => ToneText {
                greeting: "Dear Sir/Madam,",
                intro: "I am writing to request revisions to certain clauses in the contract \
                    under review. Upon careful examination, the following concerns have been \
                    identified:",
                closing: "I trust we can arrive at mutually agreeable terms. Please do not \
                    hesitate to contact me to discuss these matters further.\n\nYours sincerely,",
            },
            Self::Friendly => ToneText {
                greeting: "Hello,",
                intro: "Thank you for sharing the contract. I've reviewed it and would like \
                    to discuss a few points that caught my attention:",
                closing: "I'm confident we can work together to address these points. Looking \
                    forward to your response!\n\nBest regards,",
            },
            Self::Assertive => ToneText {
                greeting: "To whom it may concern,",
                intro: "After reviewing the contract, I must bring to your attention several \
                    clauses that require immediate revision:",
                closing: "I expect these issues to be addressed before we can proceed further. \
                    Please respond with your proposed amendments.\n\nRegards,",
            },
        }
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "friendly" => Ok(Self::Friendly),
            "assertive" => Ok(Self::Assertive),
            _ => Err(CoreError::UnknownTone(s.to_string())),
        }
    }
}

/// Generated negotiation message plus the counts of issues it addresses.
///
/// Has no lifecycle beyond the call that produced it; regenerate rather
/// than mutate when the tone or issue set changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiationDraft {
    pub body: String,
    pub high_count: usize,
    pub medium_count: usize,
}

/// Synthesise a negotiation draft from the HIGH and MEDIUM findings.
///
/// Issues are partitioned by level in their original relative order; this
/// function never re-sorts. With no HIGH or MEDIUM issues the fixed
/// no-negotiation document is returned regardless of tone.
pub fn generate(issues: &[Issue], tone: Tone) -> NegotiationDraft {
    let high: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.risk_level == RiskLevel::High)
        .collect();
    let medium: Vec<&Issue> = issues
        .iter()
        .filter(|i| i.risk_level == RiskLevel::Medium)
        .collect();

    if high.is_empty() && medium.is_empty() {
        return NegotiationDraft {
            body: NO_NEGOTIATION_NEEDED.to_string(),
            high_count: 0,
            medium_count: 0,
        };
    }

    let text = tone.text();
    let mut body = String::new();
    let _ = write!(body, "{}\n\n{}\n\n", text.greeting, text.intro);

    if !high.is_empty() {
        body.push_str("**CRITICAL ISSUES:**\n\n");
        append_entries(&mut body, &high, HIGH_DIRECTIVE);
    }

    if !medium.is_empty() {
        body.push_str("**ADDITIONAL CONCERNS:**\n\n");
        append_entries(&mut body, &medium, MEDIUM_DIRECTIVE);
    }

    body.push_str(text.closing);

    NegotiationDraft {
        body,
        high_count: high.len(),
        medium_count: medium.len(),
    }
}

/// Append 1-based numbered entries for one section.
fn append_entries(body: &mut String, issues: &[&Issue], directive: &str) {
    for (index, issue) in issues.iter().enumerate() {
        let _ = write!(
            body,
            "{}. {}\n   Issue: {}\n   {}\n\n",
            index + 1,
            issue.law_cited,
            issue.explanation,
            directive,
        );
    }
}
