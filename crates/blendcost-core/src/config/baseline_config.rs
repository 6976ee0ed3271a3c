//! Baseline price configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PriceRange;

/// Unscaled per-minute price range at zero complexity.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BaselineConfig {
    /// Lower bound per minute. Default: 1000.
    pub min_per_minute: Option<f64>,
    /// Mean per minute. Default: 1750.
    pub mean_per_minute: Option<f64>,
    /// Upper bound per minute. Default: 2500.
    pub max_per_minute: Option<f64>,
}

impl BaselineConfig {
    pub fn effective_min(&self) -> f64 {
        self.min_per_minute
            .unwrap_or(defaults::DEFAULT_BASE_MIN_PER_MINUTE)
    }

    pub fn effective_mean(&self) -> f64 {
        self.mean_per_minute
            .unwrap_or(defaults::DEFAULT_BASE_MEAN_PER_MINUTE)
    }

    pub fn effective_max(&self) -> f64 {
        self.max_per_minute
            .unwrap_or(defaults::DEFAULT_BASE_MAX_PER_MINUTE)
    }

    /// The effective baseline as a range. Only meaningful after validation.
    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.effective_min(), self.effective_mean(), self.effective_max())
    }
}
