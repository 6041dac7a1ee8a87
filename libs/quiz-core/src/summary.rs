//! First-sentence summaries used as option labels.

use std::sync::LazyLock;

use regex::Regex;

use crate::plaintext::to_plain_text;

/// Longest summary returned when a sentence terminator is found.
pub const MAX_SENTENCE_CHARS: usize = 160;
/// Length of the prefix returned when no sentence terminator exists.
pub const MAX_PREFIX_CHARS: usize = 140;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s").unwrap());

/// Derive a short summary from an explanation: its first sentence, bounded
/// in length. Returns an empty string when the explanation has no prose.
pub fn first_sentence(markdown: &str) -> String {
    let cleaned = normalize_whitespace(&to_plain_text(markdown));
    if cleaned.is_empty() {
        return String::new();
    }

    match SENTENCE_END.find(&cleaned) {
        // Terminators are single-byte, so the slice ends on a char boundary.
        Some(m) => truncate_chars(&cleaned[..m.start() + 1], MAX_SENTENCE_CHARS),
        None => truncate_chars(&cleaned, MAX_PREFIX_CHARS),
    }
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
