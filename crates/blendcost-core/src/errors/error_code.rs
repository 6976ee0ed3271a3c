//! PricingErrorCode trait for callers across a language boundary.

/// Every error enum implements this to provide a stable, structured error
/// code string that a TypeScript presentation layer can match on.
pub trait PricingErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
