//! # blendcost-cli
//!
//! Argument parsing, config resolution and text rendering for the
//! `blendcost` binary.

pub mod cli;
pub mod render;

pub use cli::{Cli, Command, ConfigArgs, QuoteArgs};
