//! Loading generated question banks on the consumer side.
//!
//! A [`QuizContent`] fetches its bank once and caches it. Once `Ready` it
//! never fetches again; a failed fetch is kept as `Error` until the caller
//! asks again.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result};
use crate::types::{Question, QuestionBank};

/// Default location of the generated bank, relative to the site root.
pub const DEFAULT_BANK_PATH: &str = "public/quiz-questions.json";

/// Where a question bank comes from.
pub trait QuestionSource {
    fn fetch(&self) -> Result<QuestionBank>;
}

/// Question bank stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for FileSource {
    fn fetch(&self) -> Result<QuestionBank> {
        let display = self.path.display().to_string();
        let json = fs::read_to_string(&self.path).map_err(|source| QuizError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| QuizError::Decode {
            path: display,
            source,
        })
    }
}

/// Loading state of a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<Question>),
    Error(String),
}

/// Cached question bank backed by a [`QuestionSource`].
pub struct QuizContent<S> {
    source: S,
    state: ContentState,
}

impl<S: QuestionSource> QuizContent<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ContentState::Idle,
        }
    }

    pub fn state(&self) -> &ContentState {
        &self.state
    }

    /// Loaded questions, if the bank is ready.
    pub fn questions(&self) -> Option<&[Question]> {
        match &self.state {
            ContentState::Ready(questions) => Some(questions.as_slice()),
            _ => None,
        }
    }

    /// Fetch the bank unless it is already loading or loaded.
    pub fn ensure_loaded(&mut self) -> &ContentState {
        if matches!(self.state, ContentState::Loading | ContentState::Ready(_)) {
            return &self.state;
        }

        self.state = ContentState::Loading;
        self.state = match self.source.fetch() {
            Ok(bank) => ContentState::Ready(bank.questions),
            Err(e) => ContentState::Error(e.to_string()),
        };
        &self.state
    }
}
