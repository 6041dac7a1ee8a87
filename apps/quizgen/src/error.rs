//! Error handling for the quiz generator

use std::path::PathBuf;

use thiserror::Error;

/// Pipeline error types
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Failed to read input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Dialect error: {0}")]
    Dialect(#[from] quiz_core::QuizError),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
