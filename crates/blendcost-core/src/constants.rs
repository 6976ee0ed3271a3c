/// blendcost version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest duration the engine prices. Shorter requests are floored to this.
pub const MIN_MINUTES: u32 = 1;

/// Lower and upper bound of the complexity factor.
pub const MIN_COMPLEXITY: f64 = 0.0;
pub const MAX_COMPLEXITY: f64 = 1.0;

/// Complexity at or above which a project is labelled "Moderate".
pub const MODERATE_COMPLEXITY_THRESHOLD: f64 = 0.33;

/// Complexity at or above which a project is labelled "Complex".
pub const COMPLEX_COMPLEXITY_THRESHOLD: f64 = 0.66;

/// Upper limit on distribution samples a config may request.
pub const MAX_DISTRIBUTION_SAMPLES: usize = 10_000;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "blendcost.toml";

/// Prefix of every environment override (`BLENDCOST_BASE_MIN`, ...).
pub const ENV_PREFIX: &str = "BLENDCOST_";
