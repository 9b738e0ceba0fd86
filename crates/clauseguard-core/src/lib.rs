pub mod aggregate;
pub mod confidence;
pub mod draft;
pub mod error;
pub mod gauge;
pub mod issue;

pub use aggregate::{RiskSummary, order, summarize};
pub use confidence::{ConfidenceAssessment, ConfidenceTier, classify};
pub use draft::{NegotiationDraft, Tone, generate};
pub use error::CoreError;
pub use gauge::{GaugeReading, RiskBand, map_score};
pub use issue::{AnalysisResult, Issue, RiskLevel};
