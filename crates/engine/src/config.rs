use crate::counter::DEFAULT_CHANNEL_CAPACITY;
use crate::options::OutputFormat;
use derive_builder::Builder;
use occurs_core::CountOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files to count. Empty means standard input; `-` also means standard input.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    #[builder(default)]
    pub options: CountOptions,

    #[builder(default = "DEFAULT_CHANNEL_CAPACITY")]
    pub channel_capacity: usize,
    /// Fail on the first input error instead of reporting and continuing.
    #[builder(default)]
    pub strict: bool,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub sort: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            options: CountOptions::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            strict: false,
            format: OutputFormat::default(),
            sort: false,
        }
    }
}
