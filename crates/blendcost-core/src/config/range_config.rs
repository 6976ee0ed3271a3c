//! Per content type range scaling configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ContentType;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RangeConfig {
    /// Motion graphics price sensitivity to complexity. Default: 0.5.
    pub motion_graphics_sensitivity: Option<f64>,
    /// CGI/VFX price sensitivity to complexity. Default: 1.5.
    pub cgfx_sensitivity: Option<f64>,
    /// Upper-bound growth relative to the lower bound (>= 1). Default: 1.25.
    pub upper_spread: Option<f64>,
}

impl RangeConfig {
    pub fn effective_sensitivity(&self, content_type: ContentType) -> f64 {
        match content_type {
            ContentType::MotionGraphics => self
                .motion_graphics_sensitivity
                .unwrap_or(defaults::DEFAULT_MOTION_GRAPHICS_SENSITIVITY),
            ContentType::Cgfx => self
                .cgfx_sensitivity
                .unwrap_or(defaults::DEFAULT_CGFX_SENSITIVITY),
        }
    }

    pub fn effective_upper_spread(&self) -> f64 {
        self.upper_spread.unwrap_or(defaults::DEFAULT_UPPER_SPREAD)
    }
}
