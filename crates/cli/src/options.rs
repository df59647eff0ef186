use clap::ValueEnum;
use occurs_engine::options::OutputFormat;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// `count line` pairs
    #[default]
    Plain,
    /// Counts aligned in a column
    #[value(name = "cols", alias = "columns")]
    Cols,
    /// A single JSON object mapping each line to its count
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => Self::Plain,
            CliOutputFormat::Cols => Self::Columns,
            CliOutputFormat::Json => Self::Json,
        }
    }
}
