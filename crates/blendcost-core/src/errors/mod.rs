//! Error handling for blendcost.
//! One error enum per subsystem, `thiserror` only. The pricing pipeline itself
//! is infallible; errors only arise at the configuration boundary.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::PricingErrorCode;
