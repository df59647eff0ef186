use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read stream: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{label}: {source}")]
    Input {
        label: String,
        #[source]
        source: Box<EngineError>,
    },

    #[error("Aggregator stopped before the stream was drained")]
    ChannelClosed,

    #[error("Worker thread panicked")]
    WorkerPanicked,
}

impl EngineError {
    /// Attaches the input label to an error reported in strict mode.
    #[must_use]
    pub fn for_input(self, label: impl Into<String>) -> Self {
        match self {
            // Open errors already name the path
            Self::Open { .. } => self,
            other => Self::Input {
                label: label.into(),
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
