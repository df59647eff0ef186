/// How the final table is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `count line` pairs
    #[default]
    Plain,
    /// Counts right-aligned in a column
    Columns,
    /// One JSON object mapping line to count
    Json,
}
