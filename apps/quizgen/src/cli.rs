//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quiz_core::Dialect;

use crate::config::{PipelineConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::Result;

/// Generate a multiple-choice question bank from a markdown document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root; relative input and output paths resolve against it
    #[arg(long, env = "QUIZGEN_ROOT", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Markdown document to read
    #[arg(short, long, env = "QUIZGEN_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(short, long, env = "QUIZGEN_OUTPUT", default_value = DEFAULT_OUTPUT, global = true)]
    pub output: PathBuf,

    /// Regex for question headings (captures: number, heading text)
    #[arg(long, env = "QUIZGEN_HEADER_PATTERN")]
    pub header_pattern: Option<String>,

    /// Regex for lines that end an entry early
    #[arg(long, env = "QUIZGEN_BACK_TO_TOP_PATTERN")]
    pub back_to_top_pattern: Option<String>,

    /// Keep running and regenerate whenever the input changes
    #[arg(short, long)]
    pub watch: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a generated question bank and check every question
    Check {
        /// Bank to check; defaults to the output path
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Pipeline configuration described by these arguments.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let config = PipelineConfig::new(self.root.join(&self.input), self.output_path());

        if self.header_pattern.is_none() && self.back_to_top_pattern.is_none() {
            return Ok(config);
        }

        let defaults = Dialect::default();
        let header = self
            .header_pattern
            .as_deref()
            .unwrap_or(defaults.question_header().as_str());
        let back_to_top = self
            .back_to_top_pattern
            .as_deref()
            .unwrap_or(defaults.back_to_top().as_str());

        Ok(config.with_dialect(Dialect::new(header, back_to_top)?))
    }

    /// Output path resolved against the root.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }
}
