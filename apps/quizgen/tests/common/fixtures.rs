//! Test fixtures and factory functions for creating test data.

/// Generate markdown with a specified number of numbered entries.
///
/// # Arguments
/// * `num_entries` - Number of entries to generate
/// * `with_markers` - Whether to end each entry with a Back to Top marker
pub fn sample_md_content(num_entries: usize, with_markers: bool) -> String {
    let body = (0..num_entries)
        .map(|i| {
            let marker = if with_markers {
                "\n**[⬆ Back to Top](#table-of-contents)**\n"
            } else {
                ""
            };
            format!(
                "{}. ### Question {}?\n\nAnswer {} is **important**. It has details.\n{}",
                i + 1,
                i + 1,
                i + 1,
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("# Questions\n\nIntro text.\n\n{}", body)
}

/// Fixture document exercising code fences, lists, links and drops.
pub const FIXTURE_MD: &str = include_str!("../fixtures/quiz-content.md");

/// Expected byte-exact output for [`FIXTURE_MD`].
pub const FIXTURE_JSON: &str = include_str!("../fixtures/quiz-questions.json");
