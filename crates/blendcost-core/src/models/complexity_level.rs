use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::{COMPLEX_COMPLEXITY_THRESHOLD, MODERATE_COMPLEXITY_THRESHOLD};
use crate::models::pricing_input::clamp_complexity;

/// Display band for a complexity factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    /// Band a complexity factor. Out-of-range values are clamped first.
    pub fn from_factor(complexity_factor: f64) -> Self {
        let c = clamp_complexity(complexity_factor);
        if c >= COMPLEX_COMPLEXITY_THRESHOLD {
            Self::Complex
        } else if c >= MODERATE_COMPLEXITY_THRESHOLD {
            Self::Moderate
        } else {
            Self::Simple
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Moderate => "Moderate",
            Self::Complex => "Complex",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(ComplexityLevel::from_factor(0.0), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_factor(0.329), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_factor(0.33), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_factor(0.5), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_factor(0.66), ComplexityLevel::Complex);
        assert_eq!(ComplexityLevel::from_factor(1.0), ComplexityLevel::Complex);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(ComplexityLevel::from_factor(-3.0), ComplexityLevel::Simple);
        assert_eq!(ComplexityLevel::from_factor(7.0), ComplexityLevel::Complex);
        assert_eq!(ComplexityLevel::from_factor(f64::NAN), ComplexityLevel::Simple);
    }
}
