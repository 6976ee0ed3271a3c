//! # blendcost-core
//!
//! Foundation crate for the blendcost pricing engine.
//! Defines the pricing data model, errors, config, tracing setup, and constants.
//! The engine and CLI crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::PricingConfig;
pub use errors::{ConfigError, PricingErrorCode};
pub use models::{
    ComplexityLevel, ContentType, MixRatio, PriceRange, PricingInput, PricingResult,
};
