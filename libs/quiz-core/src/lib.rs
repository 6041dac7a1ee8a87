//! Core quiz content library.
//!
//! Provides:
//! - Markdown parser for numbered question documents
//! - Plain-text reduction and first-sentence summaries
//! - Deterministic seeded shuffle
//! - Multiple-choice question assembly
//! - Question bank loading and validation

pub mod assembler;
pub mod content;
pub mod error;
pub mod parser;
pub mod plaintext;
pub mod shuffle;
pub mod summary;
pub mod types;
pub mod validate;

pub use assembler::{build_questions, Assembler};
pub use content::{ContentState, FileSource, QuestionSource, QuizContent};
pub use error::{QuizError, Result};
pub use parser::{parse, parse_with, Dialect};
pub use plaintext::to_plain_text;
pub use shuffle::{seeded_shuffle, shuffled, XorShift32};
pub use summary::first_sentence;
pub use types::{Entry, Question, QuestionBank, QuizOption, FALLBACK_LABEL};
pub use validate::{check_question, Violation};
