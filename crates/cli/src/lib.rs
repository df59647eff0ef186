// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use std::io::{BufWriter, Write};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Counts the configured inputs and writes the table to `out`.
///
/// Per-input failures are reported on stderr and do not stop the run.
///
/// # Errors
///
/// Returns an error in strict mode when an input fails, or when writing
/// the output fails.
pub fn execute<W: Write>(config: &Config, out: W) -> Result<()> {
    let result = occurs_engine::run(config)?;
    presentation::print_errors(&result.errors);

    let mut out = BufWriter::new(out);
    presentation::print_results(&mut out, result.table, config)
}

/// Installs the stderr logger; `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
