//! Multiple-choice question assembly.
//!
//! Each entry's first-sentence summary is the correct answer; the summaries
//! of the next few entries (wrapping around) are the distractors. Options
//! are deduplicated case-insensitively, then shuffled with a seed derived
//! from the entry's position so the output is reproducible.

use std::collections::HashSet;

use crate::shuffle::seeded_shuffle;
use crate::summary::first_sentence;
use crate::types::{Entry, Question, QuizOption, FALLBACK_LABEL};

/// Question assembler with configurable option limits.
#[derive(Debug, Clone)]
pub struct Assembler {
    /// Upper bound on options per question, correct answer included.
    pub max_options: usize,
    /// Distractors drawn from the following entries when enough exist.
    pub distractors: usize,
    /// Label used for entries whose explanation has no summary.
    pub fallback_label: String,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            max_options: 4,
            distractors: 3,
            fallback_label: FALLBACK_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    label: String,
    correct: bool,
}

impl Assembler {
    /// Build one question per entry with a non-blank question, in order.
    pub fn assemble(&self, entries: &[Entry]) -> Vec<Question> {
        let summaries: Vec<String> = entries
            .iter()
            .map(|e| first_sentence(&e.explanation_markdown))
            .collect();

        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.question.trim().is_empty())
            .map(|(index, entry)| self.build_question(entry, index, &summaries))
            .collect()
    }

    fn build_question(&self, entry: &Entry, index: usize, summaries: &[String]) -> Question {
        let candidates = std::iter::once(Candidate {
            label: self.label_for(&summaries[index]),
            correct: true,
        })
        .chain(
            self.distractor_indices(index, summaries.len())
                .into_iter()
                .map(|i| Candidate {
                    label: self.label_for(&summaries[i]),
                    correct: false,
                }),
        );

        let mut options = self.dedupe(candidates);
        seeded_shuffle(&mut options, index as i64 + 1);

        let correct_option_id = match options.iter().position(|c| c.correct) {
            Some(pos) => pos.to_string(),
            None => {
                tracing::warn!(id = %entry.id, "correct option lost during deduplication");
                "0".to_string()
            }
        };

        let options: Vec<QuizOption> = options
            .into_iter()
            .enumerate()
            .map(|(i, c)| QuizOption {
                id: i.to_string(),
                label: c.label,
            })
            .collect();

        tracing::debug!(id = %entry.id, options = options.len(), "assembled question");

        Question {
            id: entry.id.clone(),
            question: entry.question.clone(),
            options,
            correct_option_id,
            explanation_markdown: entry.explanation_markdown.clone(),
        }
    }

    fn label_for(&self, summary: &str) -> String {
        if summary.is_empty() {
            self.fallback_label.clone()
        } else {
            summary.to_string()
        }
    }

    /// Indices of the entries whose summaries serve as distractors.
    ///
    /// With more entries than `distractors`, the next `distractors` entries
    /// (wrapping); otherwise every other entry exactly once.
    pub fn distractor_indices(&self, index: usize, n: usize) -> Vec<usize> {
        let count = if n > self.distractors {
            self.distractors
        } else {
            n.saturating_sub(1)
        };
        (1..=count).map(|offset| (index + offset) % n).collect()
    }

    /// Drop blank labels and case-insensitive duplicates (first wins), up to
    /// `max_options`.
    fn dedupe(&self, candidates: impl Iterator<Item = Candidate>) -> Vec<Candidate> {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for candidate in candidates {
            if kept.len() >= self.max_options {
                break;
            }
            let key = candidate.label.trim().to_lowercase();
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            kept.push(candidate);
        }

        kept
    }
}

/// Assemble questions with the default assembler.
pub fn build_questions(entries: &[Entry]) -> Vec<Question> {
    Assembler::default().assemble(entries)
}
