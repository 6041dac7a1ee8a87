//! Common test utilities and fixtures for integration tests.
#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};

use quizgen::config::PipelineConfig;
use quizgen::pipeline::Pipeline;
use tempfile::TempDir;

/// Scratch project directory, removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty directory whose name starts with `quizgen-<name>`.
    pub fn new(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("quizgen-{}-", name))
            .tempdir()
            .expect("Failed to create test directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write the markdown source at the default input location.
    pub fn write_input(&self, markdown: &str) -> PathBuf {
        let path = self.path().join("quiz-content.md");
        fs::write(&path, markdown).expect("Failed to write input");
        path
    }

    /// Pipeline using the default layout under this directory.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(PipelineConfig::under_root(self.path()))
    }

    pub fn read_output(&self) -> String {
        fs::read_to_string(self.path().join("public/quiz-questions.json"))
            .expect("Failed to read output")
    }
}
