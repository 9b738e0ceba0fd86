//! Risk-score gauge mapping.
//!
//! Converts the 0..=100 contract risk score into a needle angle and a
//! discrete band label. Angle and band are independent views of the same
//! score: the angle is continuous across band boundaries.

use crate::error::CoreError;

/// Discrete risk-score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskBand {
    Safe,
    Caution,
    High,
    Critical,
}

impl RiskBand {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Mostly Safe",
            Self::Caution => "Caution Advised",
            Self::High => "High Risk",
            Self::Critical => "Predatory Terms",
        }
    }
}

/// Needle position and band for one risk score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    /// Linear map of the score onto [-90.0, 90.0].
    pub angle_degrees: f64,
    pub band: RiskBand,
}

/// Map a risk score onto a gauge reading.
///
/// Band boundaries: 0..=30 Safe, 31..=60 Caution, 61..=80 High,
/// 81..=100 Critical. Scores above 100 are a precondition violation.
pub fn map_score(score: u8) -> Result<GaugeReading, CoreError> {
    if score > 100 {
        return Err(CoreError::ScoreOutOfRange(score));
    }

    let band = match score {
        0..=30 => RiskBand::Safe,
        31..=60 => RiskBand::Caution,
        61..=80 => RiskBand::High,
        _ => RiskBand::Critical,
    };

    Ok(GaugeReading {
        angle_degrees: -90.0 + (score as f64 / 100.0) * 180.0,
        band,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angle(score: u8) -> f64 {
        map_score(score).unwrap().angle_degrees
    }

    fn band(score: u8) -> RiskBand {
        map_score(score).unwrap().band
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn angle_endpoints_and_midpoint() {
        assert_close(angle(0), -90.0);
        assert_close(angle(50), 0.0);
        assert_close(angle(100), 90.0);
    }

    #[test]
    fn angle_is_monotonic() {
        for score in 1..=100u8 {
            assert!(angle(score) > angle(score - 1));
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(band(0), RiskBand::Safe);
        assert_eq!(band(30), RiskBand::Safe);
        assert_eq!(band(31), RiskBand::Caution);
        assert_eq!(band(60), RiskBand::Caution);
        assert_eq!(band(61), RiskBand::High);
        assert_eq!(band(80), RiskBand::High);
        assert_eq!(band(81), RiskBand::Critical);
        assert_eq!(band(100), RiskBand::Critical);
    }

    #[test]
    fn band_is_independent_of_angle_continuity() {
        // Crossing a band boundary moves the angle by one step only.
        assert_close(angle(31) - angle(30), 1.8);
        assert_ne!(band(30), band(31));
    }

    #[test]
    fn scenario_score_87() {
        let reading = map_score(87).unwrap();
        assert_eq!(reading.band, RiskBand::Critical);
        assert_close(reading.angle_degrees, 66.6);
    }

    #[test]
    fn scenario_score_5() {
        let reading = map_score(5).unwrap();
        assert_eq!(reading.band, RiskBand::Safe);
        assert_close(reading.angle_degrees, -81.0);
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        assert_eq!(map_score(101), Err(CoreError::ScoreOutOfRange(101)));
        assert_eq!(map_score(255), Err(CoreError::ScoreOutOfRange(255)));
    }
}
