// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use occurs_engine::counter::DEFAULT_CHANNEL_CAPACITY;

use crate::{options::CliOutputFormat, parsers};

const LONG_ABOUT: &str = "\
Counts how many times each distinct line occurs across the given files.

With no files, or when a file is `-`, standard input is read.
Output order is unspecified unless --sort is given; pipe into `sort -nk1`
for a stable order.";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "occurs",
    version = crate::VERSION,
    about = "Count occurrences of distinct lines",
    long_about = LONG_ABOUT
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Trim leading and trailing whitespace from lines
    #[arg(long = "trim-space", visible_alias = "ts", help_heading = "Normalization")]
    pub trim_space: bool,

    /// Ignore case (all lines are converted to lower case)
    #[arg(long, visible_alias = "ic", help_heading = "Normalization")]
    pub ignore_case: bool,

    /// Ignore lines that are empty after normalization
    #[arg(long, visible_alias = "se", help_heading = "Normalization")]
    pub skip_empty: bool,

    /// Count files sequentially rather than concurrently
    #[arg(long, help_heading = "Counting")]
    pub seq: bool,

    /// Exit with an error on the first file that cannot be opened or read
    #[arg(long, help_heading = "Counting")]
    pub strict: bool,

    /// Line channel capacity used when counting concurrently
    #[arg(
        long,
        default_value_t = DEFAULT_CHANNEL_CAPACITY,
        value_parser = parsers::parse_channel_capacity,
        help_heading = "Counting"
    )]
    pub channel_capacity: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Output in aligned columns (same as --format cols)
    #[arg(long, conflicts_with = "format", help_heading = "Output")]
    pub cols: bool,

    /// Sort by count (descending), then by line
    #[arg(long, help_heading = "Output")]
    pub sort: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Files to read (`-` for standard input)
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}
