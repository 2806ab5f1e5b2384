//! Error types for the `desc_sanitizer` crate.
//!
//! Errors can only occur while *constructing* a sanitizer from custom rules
//! or a custom character class. Sanitizing itself is total: every stage is a
//! pure function from string to string and never fails on malformed input.

/// All errors that can occur while building a sanitizer.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    /// A custom artifact rule pattern failed to compile.
    #[error("invalid artifact rule `{pattern}`: {source}")]
    Rule {
        pattern: String,
        source: regex::Error,
    },

    /// A custom allowed-character class failed to compile.
    #[error("invalid allowed-character class `{class}`: {source}")]
    AllowedChars {
        class: String,
        source: regex::Error,
    },
}

/// A type alias for `Result<T, SanitizeError>`.
pub type Result<T> = std::result::Result<T, SanitizeError>;
