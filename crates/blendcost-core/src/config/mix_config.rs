//! Content mix (complexity model) configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MixConfig {
    /// CGI/VFX share at complexity 1.0 and one minute. Default: 0.85.
    pub base_cgfx_share: Option<f64>,
    /// Exponent on the complexity factor. Default: 1.5.
    pub complexity_exponent: Option<f64>,
    /// Maximum fraction of the share removed by long durations. Default: 0.3.
    pub duration_tempering: Option<f64>,
    /// Saturation scale of the duration adjustment, in minutes. Default: 10.
    pub duration_scale_minutes: Option<f64>,
}

impl MixConfig {
    pub fn effective_base_cgfx_share(&self) -> f64 {
        self.base_cgfx_share
            .unwrap_or(defaults::DEFAULT_BASE_CGFX_SHARE)
    }

    pub fn effective_complexity_exponent(&self) -> f64 {
        self.complexity_exponent
            .unwrap_or(defaults::DEFAULT_COMPLEXITY_EXPONENT)
    }

    pub fn effective_duration_tempering(&self) -> f64 {
        self.duration_tempering
            .unwrap_or(defaults::DEFAULT_DURATION_TEMPERING)
    }

    pub fn effective_duration_scale_minutes(&self) -> f64 {
        self.duration_scale_minutes
            .unwrap_or(defaults::DEFAULT_DURATION_SCALE_MINUTES)
    }
}
