// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use occurs_engine::config::{Config, ConfigBuilder};
use occurs_engine::options::OutputFormat;
use occurs_core::CountOptions;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let options = CountOptions {
            trim_whitespace: args.trim_space,
            ignore_case: args.ignore_case,
            skip_empty: args.skip_empty,
            concurrent: !args.seq,
        };

        // --cols is shorthand for --format cols
        let format = if args.cols {
            OutputFormat::Columns
        } else {
            args.format.into()
        };

        ConfigBuilder::default()
            .inputs(args.paths)
            .options(options)
            .channel_capacity(args.channel_capacity)
            .strict(args.strict)
            .format(format)
            .sort(args.sort)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}
