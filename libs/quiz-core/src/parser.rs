//! Markdown parser for quiz content documents.
//!
//! # Format
//! ```markdown
//! 1. ### What is ownership?
//!
//! Ownership is a set of rules that govern how memory is managed.
//!
//! **[⬆ Back to Top](#table-of-contents)**
//!
//! 2. ### What is borrowing?
//! Borrowing lets code use a value without taking ownership.
//! ```
//!
//! A numbered `###` heading opens an entry; every following line belongs to
//! its explanation until the next heading, a "Back to Top" marker, or the
//! end of the document. Text outside an entry is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{QuizError, Result};
use crate::types::Entry;

static QUESTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\.\s+###\s+([^\r\n\u{2028}\u{2029}]*)\s*$").unwrap());
static BACK_TO_TOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[⬆\s*Back\s*to\s*Top\]").unwrap());

/// Line patterns recognised by the parser.
///
/// The heading pattern must have two capture groups: the entry number and
/// the heading text.
#[derive(Debug, Clone)]
pub struct Dialect {
    question_header: Regex,
    back_to_top: Regex,
}

impl Dialect {
    /// Build a dialect from custom patterns.
    pub fn new(question_header: &str, back_to_top: &str) -> Result<Self> {
        let question_header = Regex::new(question_header).map_err(|source| {
            QuizError::InvalidPattern {
                name: "question header",
                source,
            }
        })?;
        if question_header.captures_len() < 3 {
            return Err(QuizError::MissingCaptureGroups {
                name: "question header",
                expected: 2,
            });
        }
        let back_to_top = Regex::new(back_to_top).map_err(|source| QuizError::InvalidPattern {
            name: "back to top",
            source,
        })?;

        Ok(Self {
            question_header,
            back_to_top,
        })
    }

    pub fn question_header(&self) -> &Regex {
        &self.question_header
    }

    pub fn back_to_top(&self) -> &Regex {
        &self.back_to_top
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            question_header: QUESTION_HEADER.clone(),
            back_to_top: BACK_TO_TOP.clone(),
        }
    }
}

/// Parse markdown content into entries using the default dialect.
pub fn parse(content: &str) -> Vec<Entry> {
    parse_with(content, &Dialect::default())
}

/// Parse markdown content into entries using a custom dialect.
pub fn parse_with(content: &str, dialect: &Dialect) -> Vec<Entry> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut parser = Parser::new(dialect);

    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1);
    }

    parser.finalize()
}

struct EntryBuilder {
    id: String,
    question: String,
    explanation: Vec<String>,
    start_line: usize,
}

impl EntryBuilder {
    fn new(number: &str, question: &str, start_line: usize) -> Self {
        Self {
            id: format!("q{number}"),
            question: question.to_string(),
            explanation: Vec::new(),
            start_line,
        }
    }

    /// `None` when the heading text or the explanation is blank.
    fn build(self) -> Option<Entry> {
        let question = self.question.trim();
        let explanation_markdown = self.explanation.join("\n").trim_end().trim().to_string();

        if question.is_empty() || explanation_markdown.is_empty() {
            return None;
        }

        Some(Entry {
            id: self.id,
            question: question.to_string(),
            explanation_markdown,
        })
    }
}

enum State {
    Idle,
    Accumulating(EntryBuilder),
}

struct Parser<'d> {
    dialect: &'d Dialect,
    state: State,
    entries: Vec<Entry>,
}

impl<'d> Parser<'d> {
    fn new(dialect: &'d Dialect) -> Self {
        Self {
            dialect,
            state: State::Idle,
            entries: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) {
        match self.classify(line) {
            LineType::Header { number, text } => {
                self.flush();
                self.state = State::Accumulating(EntryBuilder::new(number, text, line_num));
            }
            LineType::BackToTop => self.flush(),
            LineType::Text => {
                if let State::Accumulating(ref mut entry) = self.state {
                    entry.explanation.push(line.to_string());
                }
            }
        }
    }

    fn classify<'l>(&self, line: &'l str) -> LineType<'l> {
        if let Some(caps) = self.dialect.question_header.captures(line) {
            let number = caps.get(1).map_or("", |m| m.as_str());
            let text = caps.get(2).map_or("", |m| m.as_str());
            return LineType::Header { number, text };
        }

        if self.dialect.back_to_top.is_match(line) {
            LineType::BackToTop
        } else {
            LineType::Text
        }
    }

    fn flush(&mut self) {
        let State::Accumulating(builder) = std::mem::replace(&mut self.state, State::Idle) else {
            return;
        };

        let start_line = builder.start_line;
        let id = builder.id.clone();
        match builder.build() {
            Some(entry) => self.entries.push(entry),
            None => tracing::debug!(
                id = %id,
                line = start_line,
                "dropping entry with empty question or explanation"
            ),
        }
    }

    fn finalize(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }
}

enum LineType<'a> {
    Header { number: &'a str, text: &'a str },
    BackToTop,
    Text,
}
