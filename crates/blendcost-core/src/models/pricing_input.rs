use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_COMPLEXITY, MIN_COMPLEXITY, MIN_MINUTES};

/// Clamp a complexity factor into [0.0, 1.0]. NaN maps to 0.0.
pub fn clamp_complexity(value: f64) -> f64 {
    if value.is_nan() {
        MIN_COMPLEXITY
    } else {
        value.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY)
    }
}

/// A single pricing request: duration in whole minutes and a complexity
/// factor in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingInput {
    pub minutes: u32,
    pub complexity_factor: f64,
}

impl PricingInput {
    pub fn new(minutes: u32, complexity_factor: f64) -> Self {
        Self {
            minutes,
            complexity_factor,
        }
    }

    /// Copy with `minutes` floored to 1 and the complexity clamped.
    pub fn normalized(&self) -> Self {
        Self {
            minutes: self.minutes.max(MIN_MINUTES),
            complexity_factor: clamp_complexity(self.complexity_factor),
        }
    }

    /// True when `normalized` would change this input.
    pub fn needs_normalization(&self) -> bool {
        let normalized = self.normalized();
        normalized.minutes != self.minutes
            || normalized.complexity_factor.to_bits() != self.complexity_factor.to_bits()
    }
}
