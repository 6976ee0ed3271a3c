//! Distribution curve configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DistributionConfig {
    /// Number of curve samples. Default: 100.
    pub sample_count: Option<usize>,
}

impl DistributionConfig {
    pub fn effective_sample_count(&self) -> usize {
        self.sample_count
            .unwrap_or(defaults::DEFAULT_DISTRIBUTION_SAMPLES)
    }
}
