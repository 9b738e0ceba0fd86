use thiserror::Error;

/// Precondition violations in the core pipeline.
///
/// Every variant is a local, synchronous failure. Out-of-range values are
/// never clamped and unknown enum values never fall back to a default.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("confidence {0} outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    #[error("risk score {0} outside 0..=100")]
    ScoreOutOfRange(u8),

    #[error("unknown tone {0:?}, expected one of: formal, friendly, assertive")]
    UnknownTone(String),

    #[error("issue {index}: {reason}")]
    InvalidIssue { index: usize, reason: String },
}
