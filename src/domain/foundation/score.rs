//! Risk score value object (0-100 scale, two decimal places).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weighted risk score between 0 and 100, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// Creates a score from a raw percentage, rounding to two decimals.
    ///
    /// Non-finite input collapses to zero.
    pub fn from_percentage(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self((value * 100.0).round() / 100.0)
    }

    /// Returns the rounded value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RiskScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RiskScore {
    /// Whole numbers keep one decimal place (`50.0`), others print as-is (`33.33`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rounds_to_two_decimals() {
        assert_eq!(RiskScore::from_percentage(33.333_333).value(), 33.33);
        assert_eq!(RiskScore::from_percentage(66.666_666).value(), 66.67);
    }

    #[test]
    fn score_keeps_exact_values() {
        assert_eq!(RiskScore::from_percentage(50.0).value(), 50.0);
        assert_eq!(RiskScore::from_percentage(100.0).value(), 100.0);
    }

    #[test]
    fn score_collapses_non_finite_to_zero() {
        assert_eq!(RiskScore::from_percentage(f64::NAN), RiskScore::ZERO);
        assert_eq!(RiskScore::from_percentage(f64::INFINITY), RiskScore::ZERO);
    }

    #[test]
    fn score_displays_like_a_report_value() {
        assert_eq!(RiskScore::from_percentage(50.0).to_string(), "50.0");
        assert_eq!(RiskScore::from_percentage(33.333).to_string(), "33.33");
        assert_eq!(RiskScore::ZERO.to_string(), "0.0");
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let json = serde_json::to_string(&RiskScore::from_percentage(62.5)).unwrap();
        assert_eq!(json, "62.5");
    }

    #[test]
    fn score_default_is_zero() {
        assert_eq!(RiskScore::default(), RiskScore::ZERO);
    }
}
