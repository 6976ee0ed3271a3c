use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ContentType, MixRatio, PriceRange};

/// Everything one pricing calculation produces. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingResult {
    pub mix_ratio: MixRatio,
    /// Unscaled per-minute baseline; also the axis of `distribution`.
    pub base_range: PriceRange,
    pub motion_graphics_price_range: PriceRange,
    pub motion_graphics_total_range: PriceRange,
    pub cgfx_price_range: PriceRange,
    pub cgfx_total_range: PriceRange,
    /// Blended per-minute range (the 68% confidence band).
    pub price_per_minute_range: PriceRange,
    pub total_price_range: PriceRange,
    /// Normalized density samples across `base_range`, peak equal to 1.0.
    pub distribution: Vec<f64>,
}

impl PricingResult {
    /// Per-minute range for one content type.
    pub fn price_range(&self, content_type: ContentType) -> PriceRange {
        match content_type {
            ContentType::MotionGraphics => self.motion_graphics_price_range,
            ContentType::Cgfx => self.cgfx_price_range,
        }
    }

    /// Total range for one content type over its share of the runtime.
    pub fn total_range(&self, content_type: ContentType) -> PriceRange {
        match content_type {
            ContentType::MotionGraphics => self.motion_graphics_total_range,
            ContentType::Cgfx => self.cgfx_total_range,
        }
    }

    /// Standard deviation behind the displayed confidence band.
    pub fn sigma(&self) -> f64 {
        self.price_per_minute_range.half_width()
    }

    /// Serialize for the presentation layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
