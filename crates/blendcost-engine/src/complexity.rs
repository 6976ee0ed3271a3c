use blendcost_core::config::{defaults, MixConfig};
use blendcost_core::constants::MIN_MINUTES;
use blendcost_core::models::pricing_input::clamp_complexity;
use blendcost_core::MixRatio;

/// Complexity-to-mix model.
///
/// ```text
/// cgfxRatio = clamp(baseCgfxShare × complexity^exponent × durationFactor(minutes), 0, 1)
/// durationFactor(m) = 1 − tempering × (1 − e^(−(m − 1) / scale))
/// ```
///
/// The duration factor is 1.0 for a one-minute video and decays towards
/// `1 − tempering` as the runtime grows. It is strictly positive, so the
/// share stays non-decreasing in complexity for any fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexityModel {
    pub base_cgfx_share: f64,
    pub complexity_exponent: f64,
    pub duration_tempering: f64,
    pub duration_scale_minutes: f64,
}

impl ComplexityModel {
    /// Model from the effective values of a (validated) mix config.
    pub fn from_config(config: &MixConfig) -> Self {
        Self {
            base_cgfx_share: config.effective_base_cgfx_share(),
            complexity_exponent: config.effective_complexity_exponent(),
            duration_tempering: config.effective_duration_tempering(),
            duration_scale_minutes: config.effective_duration_scale_minutes(),
        }
    }

    /// Multiplier in `(1 − tempering, 1]` applied to the CGI/VFX share.
    /// Non-increasing in `minutes`.
    pub fn duration_factor(&self, minutes: u32) -> f64 {
        let extra_minutes = (minutes.max(MIN_MINUTES) - MIN_MINUTES) as f64;
        let saturation = 1.0 - (-extra_minutes / self.duration_scale_minutes).exp();
        1.0 - self.duration_tempering * saturation
    }

    /// Split `minutes` between motion graphics and CGI/VFX.
    /// Complexity outside [0, 1] is clamped; never fails.
    pub fn compute_mix_ratio(&self, minutes: u32, complexity_factor: f64) -> MixRatio {
        let minutes = minutes.max(MIN_MINUTES);
        let c = clamp_complexity(complexity_factor);
        let raw = self.base_cgfx_share * c.powf(self.complexity_exponent);
        let cgfx_ratio = (raw * self.duration_factor(minutes)).clamp(0.0, 1.0);
        MixRatio::from_cgfx_ratio(minutes, cgfx_ratio)
    }
}

impl Default for ComplexityModel {
    fn default() -> Self {
        Self {
            base_cgfx_share: defaults::DEFAULT_BASE_CGFX_SHARE,
            complexity_exponent: defaults::DEFAULT_COMPLEXITY_EXPONENT,
            duration_tempering: defaults::DEFAULT_DURATION_TEMPERING,
            duration_scale_minutes: defaults::DEFAULT_DURATION_SCALE_MINUTES,
        }
    }
}

/// Mix ratio under the default model.
pub fn compute_mix_ratio(minutes: u32, complexity_factor: f64) -> MixRatio {
    ComplexityModel::default().compute_mix_ratio(minutes, complexity_factor)
}
