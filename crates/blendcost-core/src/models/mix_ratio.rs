use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ContentType;

/// Split of a video's runtime between motion graphics and CGI/VFX/SFX.
///
/// Invariants: both ratios lie in [0.0, 1.0] and sum to 1; the per-type
/// minutes sum to the requested duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MixRatio {
    pub motion_graphics_ratio: f64,
    pub cgfx_ratio: f64,
    pub motion_graphics_minutes: f64,
    pub cgfx_minutes: f64,
}

impl MixRatio {
    /// Build the mix from the CGI/VFX share. The share is clamped to
    /// [0.0, 1.0] (NaN becomes 0.0) and motion graphics takes the rest.
    pub fn from_cgfx_ratio(minutes: u32, cgfx_ratio: f64) -> Self {
        let cgfx_ratio = if cgfx_ratio.is_nan() {
            0.0
        } else {
            cgfx_ratio.clamp(0.0, 1.0)
        };
        let total = minutes as f64;
        let cgfx_minutes = total * cgfx_ratio;
        Self {
            motion_graphics_ratio: 1.0 - cgfx_ratio,
            cgfx_ratio,
            motion_graphics_minutes: total - cgfx_minutes,
            cgfx_minutes,
        }
    }

    /// Share of the runtime assigned to `content_type`.
    pub fn ratio(&self, content_type: ContentType) -> f64 {
        match content_type {
            ContentType::MotionGraphics => self.motion_graphics_ratio,
            ContentType::Cgfx => self.cgfx_ratio,
        }
    }

    /// Minutes assigned to `content_type`.
    pub fn minutes(&self, content_type: ContentType) -> f64 {
        match content_type {
            ContentType::MotionGraphics => self.motion_graphics_minutes,
            ContentType::Cgfx => self.cgfx_minutes,
        }
    }

    pub fn total_minutes(&self) -> f64 {
        self.motion_graphics_minutes + self.cgfx_minutes
    }
}
