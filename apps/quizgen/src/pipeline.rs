//! Markdown to question bank pipeline.

use std::fs;
use std::path::PathBuf;

use quiz_core::{parser, QuestionBank};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

/// Outcome of a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub questions: usize,
    pub output: PathBuf,
}

/// Read → parse → assemble → serialize → write, as one batch.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build the question bank for a markdown document.
    pub fn build(&self, markdown: &str) -> (usize, QuestionBank) {
        let entries = parser::parse_with(markdown, &self.config.dialect);
        let questions = self.config.assembler.assemble(&entries);
        (entries.len(), QuestionBank::new(questions))
    }

    /// Render a markdown document to the output JSON text.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let (_, bank) = self.build(markdown);
        Ok(bank.to_json_pretty()?)
    }

    /// Run the whole pipeline against the configured files.
    pub fn run(&self) -> Result<RunSummary> {
        let input = &self.config.input;
        let output = &self.config.output;

        tracing::debug!("Reading {}", input.display());
        let markdown = fs::read_to_string(input).map_err(|source| PipelineError::ReadInput {
            path: input.clone(),
            source,
        })?;

        let (entries, bank) = self.build(&markdown);
        let json = bank.to_json_pretty()?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PipelineError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(output, json).map_err(|source| PipelineError::WriteOutput {
            path: output.clone(),
            source,
        })?;

        tracing::info!(
            "Generated {} questions from {} entries -> {}",
            bank.questions.len(),
            entries,
            output.display()
        );

        Ok(RunSummary {
            entries,
            questions: bank.questions.len(),
            output: output.clone(),
        })
    }
}
