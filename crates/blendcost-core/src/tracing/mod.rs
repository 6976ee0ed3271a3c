//! Observability for blendcost.
//! `tracing` crate with `EnvFilter`, per-target log levels, and span names
//! shared by the engine and CLI.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
