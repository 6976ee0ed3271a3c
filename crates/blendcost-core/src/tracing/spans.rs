//! Span definitions per pricing operation.

/// Create the span wrapping one price calculation.
#[macro_export]
macro_rules! calculate_span {
    ($minutes:expr, $complexity:expr) => {
        ::tracing::debug_span!(
            "blendcost.calculate",
            minutes = $minutes,
            complexity = $complexity
        )
    };
}

/// Create the span wrapping a batch of calculations.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        ::tracing::info_span!("blendcost.batch", batch_size = $batch_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CALCULATE: &str = "blendcost.calculate";
    pub const BATCH: &str = "blendcost.batch";
}
