//! Whitespace collapsing and trimming.

use std::sync::LazyLock;

use regex::Regex;

use super::Stage;

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("SPACE_RUN pattern should compile"));
static AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("AROUND_NEWLINE pattern should compile"));
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("NEWLINE_RUN pattern should compile"));

/// Collapse runs of spaces/tabs to a single space, tighten whitespace
/// around newlines, collapse blank lines, and trim both ends.
///
/// Every deleting stage (artifact removal, redaction, whitelist filtering)
/// leaves gaps behind; the pipeline re-runs this after each of them.
pub fn normalize_whitespace(text: &str) -> String {
    let s = SPACE_RUN.replace_all(text, " ");
    let s = AROUND_NEWLINE.replace_all(&s, "\n");
    NEWLINE_RUN.replace_all(&s, "\n").trim().to_string()
}

/// Stage wrapper around [`normalize_whitespace`].
pub struct WhitespaceNormalizer;

impl Stage for WhitespaceNormalizer {
    fn apply(&self, text: &str) -> String {
        normalize_whitespace(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_space_runs() {
        assert_eq!(normalize_whitespace("a   b\t\tc"), "a b c");
    }

    #[test]
    fn tightens_whitespace_around_newlines() {
        assert_eq!(normalize_whitespace("a \n b"), "a\nb");
        assert_eq!(normalize_whitespace("a\t\n\tb"), "a\nb");
    }

    #[test]
    fn collapses_blank_lines() {
        assert_eq!(normalize_whitespace("a\n\n\nb"), "a\nb");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(normalize_whitespace("  padded  \n"), "padded");
    }

    #[test]
    fn idempotent_on_own_output() {
        let once = normalize_whitespace("  a \n\n b\t c  ");
        assert_eq!(normalize_whitespace(&once), once);
    }
}
