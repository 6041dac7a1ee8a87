//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors surfaced by the core library.
///
/// Parsing and assembly never fail on malformed content; errors only come
/// from configuration and from loading generated question files.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("{name} pattern needs {expected} capture groups")]
    MissingCaptureGroups { name: &'static str, expected: usize },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
