use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A price range with `min <= mean <= max`, all non-negative.
///
/// Used per minute (baseline, per content type, blended) and for totals.
/// `min == max` only happens for a zero-width baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl PriceRange {
    /// The all-zero range.
    pub const ZERO: Self = Self {
        min: 0.0,
        mean: 0.0,
        max: 0.0,
    };

    /// Create a range, repairing bad bounds instead of rejecting them:
    /// NaN and negative values become 0.0, swapped bounds are reordered and
    /// the mean is clamped into `[min, max]`.
    pub fn new(min: f64, mean: f64, max: f64) -> Self {
        let min = non_negative(min);
        let max = non_negative(max);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mean = non_negative(mean).clamp(min, max);
        Self { min, mean, max }
    }

    /// A zero-width range at `value`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Half the width. The displayed range is the one-sigma band, so this is
    /// the standard deviation of the price distribution.
    pub fn half_width(&self) -> f64 {
        (self.max - self.min) / 2.0
    }

    /// Check `min <= mean <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.mean && self.mean <= self.max
    }

    /// Check for a zero-width range.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Check whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Multiply every bound by `factor`. No rounding is applied.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            mean: self.mean * factor,
            max: self.max * factor,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} – {:.2} (mean {:.2})", self.min, self.max, self.mean)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
