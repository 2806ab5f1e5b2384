//! Configuration for the sanitization pipeline.

/// Default upper bound on output length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 2000;

/// Default replacement text for blacklisted words.
pub const DEFAULT_REDACT_WITH: &str = "[redacted]";

/// Default allowed-character class: Latin letters (basic range plus common
/// accented/diacritic letters), whitespace, the punctuation `, ! . - ?`, and
/// the ellipsis appended by truncation.
///
/// The string is a regex character-class body, so a custom class can use
/// ranges and escapes (`A-Za-z`, `\s`, ...).
pub const DEFAULT_ALLOWED_CHARS: &str = r"A-Za-zÀ-ž\s,!.?…\-";

/// Default hard ceiling on *input* length, in characters. Inputs above this
/// are pre-truncated before any stage runs, bounding the scanning cost of
/// the pattern-matching stages independently of the output bound.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 50_000;

/// Immutable configuration for a [`Sanitizer`](crate::Sanitizer).
///
/// Provides a fluent API in the builder style; all setters consume and
/// return `self`.
///
/// # Example
///
/// ```
/// use desc_sanitizer::SanitizeOptions;
///
/// let options = SanitizeOptions::new()
///     .max_length(500)
///     .blacklist(["Batman"])
///     .redact_with("[spoiler]");
/// ```
#[derive(Clone, Debug)]
pub struct SanitizeOptions {
    pub(crate) max_length: usize,
    pub(crate) blacklist: Vec<String>,
    pub(crate) redact_with: String,
    pub(crate) allowed_chars: String,
    pub(crate) max_input_length: usize,
}

impl SanitizeOptions {
    /// Create options with the documented defaults: output capped at
    /// [`DEFAULT_MAX_LENGTH`] characters, empty blacklist,
    /// `"[redacted]"` placeholder, the default allowed-character class, and
    /// an input ceiling of [`DEFAULT_MAX_INPUT_LENGTH`] characters.
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            blacklist: Vec::new(),
            redact_with: DEFAULT_REDACT_WITH.to_string(),
            allowed_chars: DEFAULT_ALLOWED_CHARS.to_string(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }

    /// Maximum output length in characters. `0` disables truncation.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Words to redact, matched case-insensitively on whole-word boundaries.
    /// Empty entries are skipped at match time.
    pub fn blacklist<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.blacklist = words.into_iter().map(Into::into).collect();
        self
    }

    /// Literal replacement text for each blacklisted match.
    ///
    /// The placeholder's characters are implicitly retained by the
    /// character whitelist so that redaction markers survive filtering.
    pub fn redact_with(mut self, replacement: impl Into<String>) -> Self {
        self.redact_with = replacement.into();
        self
    }

    /// The retained character class, as a regex character-class body
    /// (e.g. `r"A-Za-z\s."`). Space and newline are always retained.
    ///
    /// An invalid class surfaces as
    /// [`SanitizeError::AllowedChars`](crate::SanitizeError::AllowedChars)
    /// when the sanitizer is built.
    pub fn allowed_chars(mut self, class: impl Into<String>) -> Self {
        self.allowed_chars = class.into();
        self
    }

    /// Hard ceiling on input length in characters, applied before any stage
    /// runs. `0` disables the ceiling.
    pub fn max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::new()
    }
}
