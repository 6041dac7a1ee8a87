//! Pipeline configuration.

use std::path::{Path, PathBuf};

use quiz_core::{Assembler, Dialect};

/// Default markdown source, relative to the project root.
pub const DEFAULT_INPUT: &str = "quiz-content.md";
/// Default generated bank, relative to the project root.
pub const DEFAULT_OUTPUT: &str = quiz_core::content::DEFAULT_BANK_PATH;

/// Everything a pipeline run needs, fixed at construction.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dialect: Dialect,
    pub assembler: Assembler,
}

impl PipelineConfig {
    /// Config with the default dialect and assembler.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            dialect: Dialect::default(),
            assembler: Assembler::default(),
        }
    }

    /// Default input and output paths under `root`.
    pub fn under_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_INPUT), root.join(DEFAULT_OUTPUT))
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}
