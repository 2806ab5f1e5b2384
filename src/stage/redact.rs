//! Whole-word redaction of blacklisted terms.

use regex::Regex;

use super::Stage;

/// Stage that replaces each blacklisted word with a placeholder.
///
/// Matching is case-insensitive and bound to whole words (standard
/// alphanumeric/underscore boundaries), so `"art"` does not match inside
/// `"article"`. Blacklist entries are escaped before compilation, so regex
/// metacharacters in a word are literal text. Empty entries are skipped.
/// With an empty blacklist the stage is a pass-through.
pub struct Redactor {
    rules: Vec<(Regex, String)>,
}

impl Redactor {
    /// Build a redactor for the given words and replacement text.
    pub fn new<W: AsRef<str>>(blacklist: &[W], redact_with: &str) -> Self {
        let rules = blacklist
            .iter()
            .map(AsRef::as_ref)
            .filter(|word| !word.is_empty())
            .filter_map(|word| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
                match Regex::new(&pattern) {
                    Ok(re) => Some((re, redact_with.to_string())),
                    Err(err) => {
                        // Escaped words compile; reachable only via regex
                        // size limits on absurdly long entries.
                        tracing::warn!("skipping unusable blacklist word {word:?}: {err}");
                        None
                    }
                }
            })
            .collect();
        Self { rules }
    }

    /// Returns `true` if no usable blacklist words were supplied.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Stage for Redactor {
    fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (re, replacement)| {
                // NoExpand keeps a `$` in the placeholder literal.
                re.replace_all(&acc, regex::NoExpand(replacement)).into_owned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_whole_words_case_insensitively() {
        let redactor = Redactor::new(&["batman"], "[redacted]");
        assert_eq!(
            redactor.apply("Bruce is secretly Batman"),
            "Bruce is secretly [redacted]"
        );
        assert_eq!(redactor.apply("BATMAN returns"), "[redacted] returns");
    }

    #[test]
    fn does_not_match_inside_larger_words() {
        let redactor = Redactor::new(&["art"], "[redacted]");
        assert_eq!(redactor.apply("an article about art"), "an article about [redacted]");
    }

    #[test]
    fn metacharacters_in_words_are_literal() {
        let redactor = Redactor::new(&["c.o"], "[redacted]");
        assert_eq!(redactor.apply("cxo stays, c.o goes"), "cxo stays, [redacted] goes");
    }

    #[test]
    fn empty_entries_are_skipped() {
        let redactor = Redactor::new(&["", "word"], "X");
        assert_eq!(redactor.apply("a word here"), "a X here");
    }

    #[test]
    fn empty_blacklist_is_passthrough() {
        let redactor = Redactor::new::<&str>(&[], "[redacted]");
        assert!(redactor.is_empty());
        assert_eq!(redactor.apply("unchanged text"), "unchanged text");
    }

    #[test]
    fn replaces_every_occurrence() {
        let redactor = Redactor::new(&["spoiler"], "*");
        assert_eq!(redactor.apply("spoiler then spoiler"), "* then *");
    }
}
