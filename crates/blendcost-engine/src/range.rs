use blendcost_core::config::{defaults, RangeConfig};
use blendcost_core::models::pricing_input::clamp_complexity;
use blendcost_core::{ContentType, PriceRange};

/// Scale a baseline per-minute range by complexity.
///
/// ```text
/// lower = 1 + s·c
/// upper = 1 + s·c·spread
/// min = base.min × lower
/// mean = base.mean × (lower + upper) / 2
/// max = base.max × upper
/// ```
///
/// With `spread >= 1` the range widens as complexity grows. `c = 0` returns
/// the baseline unchanged.
pub fn compute_price_range(
    base_range: &PriceRange,
    complexity_factor: f64,
    sensitivity: f64,
    upper_spread: f64,
) -> PriceRange {
    let c = clamp_complexity(complexity_factor);
    let sensitivity = sensitivity.max(0.0);
    let upper_spread = upper_spread.max(1.0);

    let lower_scale = 1.0 + sensitivity * c;
    let upper_scale = 1.0 + sensitivity * c * upper_spread;
    let mean_scale = (lower_scale + upper_scale) / 2.0;

    PriceRange {
        min: base_range.min * lower_scale,
        mean: base_range.mean * mean_scale,
        max: base_range.max * upper_scale,
    }
}

/// Per content type range scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeModel {
    pub motion_graphics_sensitivity: f64,
    pub cgfx_sensitivity: f64,
    pub upper_spread: f64,
}

impl RangeModel {
    pub fn from_config(config: &RangeConfig) -> Self {
        Self {
            motion_graphics_sensitivity: config
                .effective_sensitivity(ContentType::MotionGraphics),
            cgfx_sensitivity: config.effective_sensitivity(ContentType::Cgfx),
            upper_spread: config.effective_upper_spread(),
        }
    }

    pub fn sensitivity(&self, content_type: ContentType) -> f64 {
        match content_type {
            ContentType::MotionGraphics => self.motion_graphics_sensitivity,
            ContentType::Cgfx => self.cgfx_sensitivity,
        }
    }

    /// Per-minute range for `content_type` at the given complexity.
    pub fn price_range(
        &self,
        base_range: &PriceRange,
        complexity_factor: f64,
        content_type: ContentType,
    ) -> PriceRange {
        compute_price_range(
            base_range,
            complexity_factor,
            self.sensitivity(content_type),
            self.upper_spread,
        )
    }
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            motion_graphics_sensitivity: defaults::DEFAULT_MOTION_GRAPHICS_SENSITIVITY,
            cgfx_sensitivity: defaults::DEFAULT_CGFX_SENSITIVITY,
            upper_spread: defaults::DEFAULT_UPPER_SPREAD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PriceRange {
        PriceRange::new(1000.0, 1750.0, 2500.0)
    }

    #[test]
    fn zero_complexity_returns_baseline() {
        let model = RangeModel::default();
        for content_type in ContentType::ALL {
            assert_eq!(model.price_range(&base(), 0.0, content_type), base());
        }
    }

    #[test]
    fn full_complexity_uses_type_sensitivity() {
        let model = RangeModel::default();
        let mg = model.price_range(&base(), 1.0, ContentType::MotionGraphics);
        let cg = model.price_range(&base(), 1.0, ContentType::Cgfx);

        // Motion graphics: lower 1.5, upper 1.625.
        assert_eq!(mg.min, 1500.0);
        assert_eq!(mg.max, 4062.5);
        // CGI/VFX: lower 2.5, upper 2.875.
        assert_eq!(cg.min, 2500.0);
        assert_eq!(cg.max, 7187.5);
        assert!(cg.max > mg.max);
    }

    #[test]
    fn mean_stays_inside_bounds() {
        let model = RangeModel::default();
        for step in 0..=10 {
            let c = step as f64 / 10.0;
            for content_type in ContentType::ALL {
                let range = model.price_range(&base(), c, content_type);
                assert!(range.is_ordered(), "{range:?} at c={c}");
            }
        }
    }

    #[test]
    fn zero_sensitivity_never_scales() {
        let range = compute_price_range(&base(), 0.9, 0.0, 1.25);
        assert_eq!(range, base());
    }
}
