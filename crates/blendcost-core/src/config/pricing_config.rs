//! Top-level blendcost configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BaselineConfig, DistributionConfig, MixConfig, RangeConfig};
use crate::constants::{ENV_PREFIX, MAX_DISTRIBUTION_SAMPLES, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::models::ContentType;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BLENDCOST_*`)
/// 3. Project config (`blendcost.toml` in project root) or an explicit file
/// 4. User config (`~/.blendcost/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    pub baseline: BaselineConfig,
    pub mix: MixConfig,
    pub range: RangeConfig,
    pub distribution: DistributionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_min: Option<f64>,
    pub base_mean: Option<f64>,
    pub base_max: Option<f64>,
    pub base_cgfx_share: Option<f64>,
    pub sample_count: Option<usize>,
}

impl PricingConfig {
    /// Load configuration with layered resolution, reading the project
    /// config from `root/blendcost.toml` when it exists.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let project = project_config_path
            .exists()
            .then_some(project_config_path.as_path());
        Self::resolve(project, cli_overrides)
    }

    /// Load configuration with an explicit config file in place of the
    /// project config. A missing file is an error.
    pub fn load_from_file(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Self::resolve(Some(path), cli_overrides)
    }

    fn resolve(
        project_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { message, .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: format!("invalid TOML in user config: {message}"),
                        });
                    }
                    Err(e) => {
                        // Unreadable user config is not fatal; continue with defaults.
                        tracing::warn!(error = %e, "skipping user config");
                    }
                }
            }
        }

        // Layer 3: project config
        if let Some(path) = project_file {
            Self::merge_toml_file(&mut config, path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the effective configuration values.
    pub fn validate(config: &PricingConfig) -> Result<(), ConfigError> {
        let min = config.baseline.effective_min();
        let mean = config.baseline.effective_mean();
        let max = config.baseline.effective_max();
        for (field, value) in [
            ("baseline.min_per_minute", min),
            ("baseline.mean_per_minute", mean),
            ("baseline.max_per_minute", max),
            ("mix.base_cgfx_share", config.mix.effective_base_cgfx_share()),
            ("mix.complexity_exponent", config.mix.effective_complexity_exponent()),
            ("mix.duration_tempering", config.mix.effective_duration_tempering()),
            ("mix.duration_scale_minutes", config.mix.effective_duration_scale_minutes()),
            (
                "range.motion_graphics_sensitivity",
                config.range.effective_sensitivity(ContentType::MotionGraphics),
            ),
            ("range.cgfx_sensitivity", config.range.effective_sensitivity(ContentType::Cgfx)),
            ("range.upper_spread", config.range.effective_upper_spread()),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid_value(field, format!("{value} is not a finite number")));
            }
        }
        for (field, value) in [
            ("baseline.min_per_minute", min),
            ("baseline.mean_per_minute", mean),
            ("baseline.max_per_minute", max),
        ] {
            if value < 0.0 {
                return Err(ConfigError::validation(field, "must be a non-negative price"));
            }
        }
        if !(min <= mean && mean <= max) {
            return Err(ConfigError::validation(
                "baseline",
                format!("must satisfy min <= mean <= max (got {min} / {mean} / {max})"),
            ));
        }

        let share = config.mix.effective_base_cgfx_share();
        if !(0.0..=1.0).contains(&share) {
            return Err(ConfigError::validation(
                "mix.base_cgfx_share",
                "must be between 0.0 and 1.0",
            ));
        }
        let exponent = config.mix.effective_complexity_exponent();
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::validation(
                "mix.complexity_exponent",
                "must be greater than 0",
            ));
        }
        let tempering = config.mix.effective_duration_tempering();
        if !(0.0..1.0).contains(&tempering) {
            return Err(ConfigError::validation(
                "mix.duration_tempering",
                "must be in [0.0, 1.0)",
            ));
        }
        let scale = config.mix.effective_duration_scale_minutes();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::validation(
                "mix.duration_scale_minutes",
                "must be greater than 0",
            ));
        }

        for content_type in ContentType::ALL {
            let sensitivity = config.range.effective_sensitivity(content_type);
            if !sensitivity.is_finite() || sensitivity < 0.0 {
                let field = match content_type {
                    ContentType::MotionGraphics => "range.motion_graphics_sensitivity",
                    ContentType::Cgfx => "range.cgfx_sensitivity",
                };
                return Err(ConfigError::validation(field, "must be finite and non-negative"));
            }
        }
        // Blended totals only rise with complexity if CGI/VFX never scales
        // slower than motion graphics.
        if config.range.effective_sensitivity(ContentType::Cgfx)
            < config.range.effective_sensitivity(ContentType::MotionGraphics)
        {
            return Err(ConfigError::validation(
                "range.cgfx_sensitivity",
                "must be at least range.motion_graphics_sensitivity",
            ));
        }
        let spread = config.range.effective_upper_spread();
        if !spread.is_finite() || spread < 1.0 {
            return Err(ConfigError::validation(
                "range.upper_spread",
                "must be at least 1.0",
            ));
        }

        if config.distribution.effective_sample_count() > MAX_DISTRIBUTION_SAMPLES {
            return Err(ConfigError::validation(
                "distribution.sample_count",
                format!("must not exceed {MAX_DISTRIBUTION_SAMPLES}"),
            ));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.blendcost/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".blendcost").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PricingConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PricingConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PricingConfig, other: &PricingConfig) {
        // Baseline
        if other.baseline.min_per_minute.is_some() {
            base.baseline.min_per_minute = other.baseline.min_per_minute;
        }
        if other.baseline.mean_per_minute.is_some() {
            base.baseline.mean_per_minute = other.baseline.mean_per_minute;
        }
        if other.baseline.max_per_minute.is_some() {
            base.baseline.max_per_minute = other.baseline.max_per_minute;
        }

        // Mix
        if other.mix.base_cgfx_share.is_some() {
            base.mix.base_cgfx_share = other.mix.base_cgfx_share;
        }
        if other.mix.complexity_exponent.is_some() {
            base.mix.complexity_exponent = other.mix.complexity_exponent;
        }
        if other.mix.duration_tempering.is_some() {
            base.mix.duration_tempering = other.mix.duration_tempering;
        }
        if other.mix.duration_scale_minutes.is_some() {
            base.mix.duration_scale_minutes = other.mix.duration_scale_minutes;
        }

        // Range
        if other.range.motion_graphics_sensitivity.is_some() {
            base.range.motion_graphics_sensitivity = other.range.motion_graphics_sensitivity;
        }
        if other.range.cgfx_sensitivity.is_some() {
            base.range.cgfx_sensitivity = other.range.cgfx_sensitivity;
        }
        if other.range.upper_spread.is_some() {
            base.range.upper_spread = other.range.upper_spread;
        }

        // Distribution
        if other.distribution.sample_count.is_some() {
            base.distribution.sample_count = other.distribution.sample_count;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BLENDCOST_BASE_MIN`, `BLENDCOST_MIX_BASE_CGFX_SHARE`, etc.
    /// Unparseable values are logged and skipped.
    fn apply_env_overrides(config: &mut PricingConfig) {
        if let Some(v) = env_value::<f64>("BASE_MIN") {
            config.baseline.min_per_minute = Some(v);
        }
        if let Some(v) = env_value::<f64>("BASE_MEAN") {
            config.baseline.mean_per_minute = Some(v);
        }
        if let Some(v) = env_value::<f64>("BASE_MAX") {
            config.baseline.max_per_minute = Some(v);
        }
        if let Some(v) = env_value::<f64>("MIX_BASE_CGFX_SHARE") {
            config.mix.base_cgfx_share = Some(v);
        }
        if let Some(v) = env_value::<f64>("MIX_DURATION_TEMPERING") {
            config.mix.duration_tempering = Some(v);
        }
        if let Some(v) = env_value::<usize>("DISTRIBUTION_SAMPLE_COUNT") {
            config.distribution.sample_count = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PricingConfig, cli: &CliOverrides) {
        if let Some(v) = cli.base_min {
            config.baseline.min_per_minute = Some(v);
        }
        if let Some(v) = cli.base_mean {
            config.baseline.mean_per_minute = Some(v);
        }
        if let Some(v) = cli.base_max {
            config.baseline.max_per_minute = Some(v);
        }
        if let Some(v) = cli.base_cgfx_share {
            config.mix.base_cgfx_share = Some(v);
        }
        if let Some(v) = cli.sample_count {
            config.distribution.sample_count = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse `BLENDCOST_<suffix>`.
fn env_value<T: std::str::FromStr>(suffix: &str) -> Option<T> {
    let key = format!("{ENV_PREFIX}{suffix}");
    let raw = std::env::var(&key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(%key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
