//! Allowed-character filtering, the last line of defense for the output
//! alphabet.

use std::sync::LazyLock;

use regex::Regex;

use super::Stage;
use crate::error::{Result, SanitizeError};

static GT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">{2,}").expect("GT_RUN pattern should compile"));
static LT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<{2,}").expect("LT_RUN pattern should compile"));
static GT_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)>+\s?").expect("GT_BOUND pattern should compile"));
static LT_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?<+($|\s)").expect("LT_BOUND pattern should compile"));

/// Stage that removes every character outside the configured allowed class.
///
/// Before filtering, leftover angle brackets from malformed markup are
/// handled explicitly: runs of two or more `<`/`>` are deleted outright, and
/// an isolated bracket adjacent to a word or line boundary is replaced with
/// a single space. The class filter then drops whatever remains, so no
/// structural character can reach the output even if an earlier stage
/// missed it.
///
/// The characters of the redaction placeholder are appended to the class as
/// literals; without that, this stage would dismantle the markers the
/// [`Redactor`](super::Redactor) just inserted.
pub struct CharWhitelist {
    disallowed: Regex,
}

impl CharWhitelist {
    /// Build a whitelist from a regex character-class body plus extra
    /// literal characters to retain (the redaction placeholder).
    ///
    /// Returns [`SanitizeError::AllowedChars`] if the class does not
    /// compile.
    pub fn try_new(class: &str, keep_literals: &str) -> Result<Self> {
        let extras: String = keep_literals
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let pattern = format!("[^{class}{extras}]");
        let disallowed = Regex::new(&pattern).map_err(|source| SanitizeError::AllowedChars {
            class: class.to_string(),
            source,
        })?;
        Ok(Self { disallowed })
    }
}

impl Stage for CharWhitelist {
    fn apply(&self, text: &str) -> String {
        let s = GT_RUN.replace_all(text, "");
        let s = LT_RUN.replace_all(&s, "");
        let s = GT_BOUND.replace_all(&s, " ");
        let s = LT_BOUND.replace_all(&s, " ");
        self.disallowed.replace_all(&s, "").into_owned()
    }
}
