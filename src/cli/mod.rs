//! Command-line interface
//!
//! Argument parsing and the runner that turns flags into a configured
//! pagination driver. Defaults reproduce the behavior of the original
//! twurl-based tooling: helper on PATH, `followers/` output directory,
//! 15 minute backoff.

mod commands;
mod runner;

pub use commands::{Cli, TransportKind};
pub use runner::Runner;
