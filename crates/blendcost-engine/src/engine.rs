use blendcost_core::config::PricingConfig;
use blendcost_core::errors::ConfigError;
use blendcost_core::{ContentType, PriceRange, PricingInput, PricingResult};
use tracing::{debug, trace, warn};

use crate::blend::blend;
use crate::complexity::ComplexityModel;
use crate::distribution::DensityCurve;
use crate::range::RangeModel;
use crate::total::scale_by_duration;

/// Pricing engine: runs the complexity → range → blend → total pipeline and
/// synthesizes the confidence curve.
///
/// Immutable after construction. Every call builds a fresh result, so one
/// engine can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingEngine {
    base_range: PriceRange,
    complexity: ComplexityModel,
    ranges: RangeModel,
    sample_count: usize,
}

impl PricingEngine {
    /// Engine with the compiled default model.
    pub fn new() -> Self {
        let config = PricingConfig::default();
        Self::build(&config)
    }

    /// Engine from a config. The config is validated first.
    pub fn from_config(config: &PricingConfig) -> Result<Self, ConfigError> {
        PricingConfig::validate(config)?;
        Ok(Self::build(config))
    }

    fn build(config: &PricingConfig) -> Self {
        Self {
            base_range: config.baseline.range(),
            complexity: ComplexityModel::from_config(&config.mix),
            ranges: RangeModel::from_config(&config.range),
            sample_count: config.distribution.effective_sample_count(),
        }
    }

    /// Unscaled per-minute baseline.
    pub fn base_range(&self) -> PriceRange {
        self.base_range
    }

    pub fn complexity_model(&self) -> &ComplexityModel {
        &self.complexity
    }

    pub fn range_model(&self) -> &RangeModel {
        &self.ranges
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Price one request. Never fails: `minutes` is floored to 1 and the
    /// complexity is clamped to [0, 1].
    pub fn calculate_price(&self, input: &PricingInput) -> PricingResult {
        if input.needs_normalization() {
            warn!(
                minutes = input.minutes,
                complexity = input.complexity_factor,
                "pricing input outside domain, clamping"
            );
        }
        let input = input.normalized();
        let span = blendcost_core::calculate_span!(input.minutes, input.complexity_factor);
        let _guard = span.enter();

        let c = input.complexity_factor;
        let mix_ratio = self.complexity.compute_mix_ratio(input.minutes, c);
        debug!(
            cgfx_ratio = mix_ratio.cgfx_ratio,
            cgfx_minutes = mix_ratio.cgfx_minutes,
            "derived content mix"
        );

        let motion_graphics_price_range =
            self.ranges
                .price_range(&self.base_range, c, ContentType::MotionGraphics);
        let cgfx_price_range = self.ranges.price_range(&self.base_range, c, ContentType::Cgfx);

        let price_per_minute_range = blend(
            &motion_graphics_price_range,
            mix_ratio.motion_graphics_ratio,
            &cgfx_price_range,
            mix_ratio.cgfx_ratio,
        );
        let total_price_range = scale_by_duration(&price_per_minute_range, input.minutes as f64);
        trace!(
            per_minute = %price_per_minute_range,
            total = %total_price_range,
            "blended price"
        );

        let distribution =
            DensityCurve::new(&price_per_minute_range, &self.base_range, self.sample_count)
                .to_vec();

        PricingResult {
            mix_ratio,
            base_range: self.base_range,
            motion_graphics_price_range,
            motion_graphics_total_range: scale_by_duration(
                &motion_graphics_price_range,
                mix_ratio.motion_graphics_minutes,
            ),
            cgfx_price_range,
            cgfx_total_range: scale_by_duration(&cgfx_price_range, mix_ratio.cgfx_minutes),
            price_per_minute_range,
            total_price_range,
            distribution,
        }
    }

    /// The density curve behind `result.distribution`, for callers that
    /// also need sample positions.
    pub fn density_curve(&self, result: &PricingResult) -> DensityCurve {
        DensityCurve::new(&result.price_per_minute_range, &self.base_range, self.sample_count)
    }

    /// Price several requests, e.g. for a comparison table.
    pub fn calculate_batch(&self, inputs: &[PricingInput]) -> Vec<PricingResult> {
        let span = blendcost_core::batch_span!(inputs.len());
        let _guard = span.enter();
        inputs.iter().map(|input| self.calculate_price(input)).collect()
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Price one request with the default model.
pub fn calculate_price(input: &PricingInput) -> PricingResult {
    PricingEngine::new().calculate_price(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_complexity_is_pure_baseline() {
        let engine = PricingEngine::new();
        let result = engine.calculate_price(&PricingInput::new(5, 0.0));
        assert_eq!(result.mix_ratio.cgfx_ratio, 0.0);
        assert_eq!(result.motion_graphics_price_range, engine.base_range());
        assert_eq!(result.cgfx_price_range, engine.base_range());
        assert_eq!(result.price_per_minute_range, engine.base_range());
        assert_eq!(result.total_price_range, PriceRange::new(5000.0, 8750.0, 12500.0));
        assert_eq!(result.cgfx_total_range, PriceRange::ZERO);
    }

    #[test]
    fn distribution_uses_configured_sample_count() {
        let config = PricingConfig::from_toml("[distribution]\nsample_count = 12\n").unwrap();
        let engine = PricingEngine::from_config(&config).unwrap();
        let result = engine.calculate_price(&PricingInput::new(3, 0.4));
        assert_eq!(result.distribution.len(), 12);
        assert_eq!(engine.density_curve(&result).to_vec(), result.distribution);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PricingConfig::from_toml("[mix]\nbase_cgfx_share = 2.0\n").unwrap();
        assert!(PricingEngine::from_config(&config).is_err());
    }

    #[test]
    fn huge_baseline_still_yields_a_curve() {
        let config = PricingConfig::from_toml(
            "[baseline]\nmin_per_minute = 1e155\nmean_per_minute = 2e155\nmax_per_minute = 3e155\n",
        )
        .unwrap();
        let engine = PricingEngine::from_config(&config).unwrap();
        let result = engine.calculate_price(&PricingInput::new(2, 0.5));
        assert!(result.sigma() > 0.0);
        assert!(!engine.density_curve(&result).is_spike());
        let non_zero = result.distribution.iter().filter(|&&s| s > 0.0).count();
        assert!(non_zero > 1, "expected a spread curve, got {non_zero} non-zero samples");
    }

    #[test]
    fn batch_matches_single_calls() {
        let engine = PricingEngine::new();
        let inputs = [PricingInput::new(1, 0.2), PricingInput::new(8, 0.9)];
        let batch = engine.calculate_batch(&inputs);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], engine.calculate_price(&inputs[0]));
        assert_eq!(batch[1], engine.calculate_price(&inputs[1]));
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingEngine>();
    }
}
