//! Core types for the quiz content pipeline.

use serde::{Deserialize, Serialize};

/// Label used when an entry yields no usable summary.
pub const FALLBACK_LABEL: &str = "See explanation";

/// Raw entry parsed from markdown: one numbered heading plus its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub question: String,
    pub explanation_markdown: String,
}

/// A single answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
}

/// Multiple-choice question assembled from an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub correct_option_id: String,
    pub explanation_markdown: String,
}

impl Question {
    /// The option whose id matches `correct_option_id`, if any.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == self.correct_option_id)
    }
}

/// Top-level output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Serialize as pretty-printed JSON (2-space indent) with a trailing newline.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
