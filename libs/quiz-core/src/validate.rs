//! Structural checks for generated questions.

use std::collections::HashSet;
use std::fmt;

use crate::types::Question;

/// A broken question invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NoOptions,
    TooManyOptions(usize),
    BlankLabel { option_id: String },
    DuplicateLabel { label: String },
    NonContiguousId { position: usize, id: String },
    UnknownCorrectOption(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoOptions => write!(f, "question has no options"),
            Violation::TooManyOptions(n) => write!(f, "question has {n} options (max 4)"),
            Violation::BlankLabel { option_id } => write!(f, "option {option_id} has a blank label"),
            Violation::DuplicateLabel { label } => write!(f, "duplicate option label {label:?}"),
            Violation::NonContiguousId { position, id } => {
                write!(f, "option at position {position} has id {id:?}")
            }
            Violation::UnknownCorrectOption(id) => {
                write!(f, "correct option id {id:?} matches no option")
            }
        }
    }
}

/// Check a question against the output invariants. Empty when valid.
pub fn check_question(question: &Question) -> Vec<Violation> {
    let mut violations = Vec::new();

    match question.options.len() {
        0 => violations.push(Violation::NoOptions),
        n if n > 4 => violations.push(Violation::TooManyOptions(n)),
        _ => {}
    }

    let mut seen = HashSet::new();
    for (position, option) in question.options.iter().enumerate() {
        let key = option.label.trim().to_lowercase();
        if key.is_empty() {
            violations.push(Violation::BlankLabel {
                option_id: option.id.clone(),
            });
        } else if !seen.insert(key) {
            violations.push(Violation::DuplicateLabel {
                label: option.label.clone(),
            });
        }

        if option.id != position.to_string() {
            violations.push(Violation::NonContiguousId {
                position,
                id: option.id.clone(),
            });
        }
    }

    let matches = question
        .options
        .iter()
        .filter(|o| o.id == question.correct_option_id)
        .count();
    if matches != 1 {
        violations.push(Violation::UnknownCorrectOption(
            question.correct_option_id.clone(),
        ));
    }

    violations
}
