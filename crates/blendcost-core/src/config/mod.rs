//! Configuration system for blendcost.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod baseline_config;
pub mod defaults;
pub mod distribution_config;
pub mod mix_config;
pub mod pricing_config;
pub mod range_config;

pub use baseline_config::BaselineConfig;
pub use distribution_config::DistributionConfig;
pub use mix_config::MixConfig;
pub use pricing_config::{CliOverrides, PricingConfig};
pub use range_config::RangeConfig;
