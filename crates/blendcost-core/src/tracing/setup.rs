//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "BLENDCOST_LOG";

/// Filter used when `BLENDCOST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "blendcost=info";

/// Initialize the blendcost tracing/logging system.
///
/// Reads `BLENDCOST_LOG` for per-target log levels.
/// Format: `BLENDCOST_LOG=blendcost_engine=debug,blendcost_core=warn`
///
/// Falls back to `blendcost=info` if `BLENDCOST_LOG` is not set or is invalid.
/// Output goes to stderr so JSON on stdout stays clean.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = build_filter();

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Filter from `BLENDCOST_LOG`, or [`DEFAULT_FILTER`] when it is unset or
/// does not parse.
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
