//! Best-effort reduction of markdown to plain prose.
//!
//! Rules run once each, in a fixed order, over the whole text. Nested or
//! overlapping markup is not resolved. Line-start rules treat a lone `\r`
//! as a line break.

use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Fenced code blocks
        Rule::new(r"```[\s\S]*?```", ""),
        // Inline code
        Rule::new(r"`([^`]*)`", "${1}"),
        // Images
        Rule::new(r"!\[[^\]]*\]\([^)]*\)", ""),
        // Links
        Rule::new(r"\[([^\]]+)\]\([^)]*\)", "${1}"),
        // Blockquotes
        Rule::new(r"(?mR)^\s*>\s?", ""),
        // Unordered list markers
        Rule::new(r"(?mR)^\s*[-*+]\s+", ""),
        // Ordered list markers
        Rule::new(r"(?mR)^\s*[0-9]+\.\s+", ""),
        // Headings
        Rule::new(r"(?mR)^\s*#{1,6}\s+", ""),
        // Emphasis
        Rule::new(r"\*\*([^*]+)\*\*", "${1}"),
        Rule::new(r"\*([^*]+)\*", "${1}"),
        Rule::new(r"_([^_]+)_", "${1}"),
        Rule::new(r"\r", ""),
    ]
});

/// Strip common markdown syntax, leaving approximate plain text.
pub fn to_plain_text(markdown: &str) -> String {
    let mut text = markdown.to_string();
    for rule in RULES.iter() {
        text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_fenced_code_blocks() {
        let input = "Before.\n```rust\nfn main() {}\n```\nAfter.";
        assert_eq!(to_plain_text(input), "Before.\n\nAfter.");
    }

    #[test]
    fn unwraps_inline_code() {
        assert_eq!(to_plain_text("Use `Vec<T>` here."), "Use Vec<T> here.");
    }

    #[test]
    fn removes_images_and_unwraps_links() {
        let input = "See ![diagram](img.png)[the docs](https://example.com).";
        assert_eq!(to_plain_text(input), "See the docs.");
    }

    #[test]
    fn strips_line_markers() {
        let input = "> quoted\n- bullet\n* star\n+ plus\n1. first\n## Heading";
        assert_eq!(
            to_plain_text(input),
            "quoted\nbullet\nstar\nplus\nfirst\nHeading"
        );
    }

    #[test]
    fn unwraps_emphasis() {
        let input = "**bold** and *italic* and _under_";
        assert_eq!(to_plain_text(input), "bold and italic and under");
    }

    #[test]
    fn removes_carriage_returns_and_trims() {
        assert_eq!(to_plain_text("  line one\r\nline two\r\n  "), "line one\nline two");
    }

    #[test]
    fn line_markers_after_lone_carriage_return() {
        assert_eq!(to_plain_text("a\r> quoted"), "aquoted");
        assert_eq!(to_plain_text("a\r- item"), "aitem");
    }

    #[test]
    fn code_removed_before_emphasis() {
        let input = "```\n**not bold**\n```\n**bold**";
        assert_eq!(to_plain_text(input), "bold");
    }

    #[test]
    fn unclosed_fence_is_left_alone() {
        assert_eq!(to_plain_text("```\ncode"), "`\ncode");
    }

    #[test]
    fn reducing_plain_prose_is_idempotent() {
        let inputs = [
            "**Ownership** is a set of rules. See [the book](https://doc.rust-lang.org).",
            "> Note: `unsafe` blocks\n- opt out of *some* checks\n- not all",
            "## Heading\n\n1. step one\n2. step two\n\n```\ncode\n```\ntail _text_",
            "Plain text with no markup at all.",
        ];
        for input in inputs {
            let once = to_plain_text(input);
            assert_eq!(to_plain_text(&once), once, "input: {input:?}");
        }
    }
}
