//! Compiled defaults for every tunable model constant.

/// Baseline price per minute at zero complexity.
pub const DEFAULT_BASE_MIN_PER_MINUTE: f64 = 1_000.0;
pub const DEFAULT_BASE_MEAN_PER_MINUTE: f64 = 1_750.0;
pub const DEFAULT_BASE_MAX_PER_MINUTE: f64 = 2_500.0;

/// CGI/VFX share at full complexity for a one-minute video.
pub const DEFAULT_BASE_CGFX_SHARE: f64 = 0.85;
/// Exponent applied to the complexity factor when deriving the CGI/VFX share.
pub const DEFAULT_COMPLEXITY_EXPONENT: f64 = 1.5;
/// Largest fraction of the CGI/VFX share that long durations can remove.
pub const DEFAULT_DURATION_TEMPERING: f64 = 0.3;
/// Minutes over which the duration tempering approaches saturation.
pub const DEFAULT_DURATION_SCALE_MINUTES: f64 = 10.0;

/// Price sensitivity to complexity, per content type.
pub const DEFAULT_MOTION_GRAPHICS_SENSITIVITY: f64 = 0.5;
pub const DEFAULT_CGFX_SENSITIVITY: f64 = 1.5;
/// How much faster the upper bound grows than the lower bound.
pub const DEFAULT_UPPER_SPREAD: f64 = 1.25;

/// Samples in the visualized price distribution.
pub const DEFAULT_DISTRIBUTION_SAMPLES: usize = 100;
