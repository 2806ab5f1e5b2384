//! The sanitizer service: fixed-order orchestration of the pipeline stages.

use std::sync::LazyLock;

use crate::error::Result;
use crate::options::SanitizeOptions;
use crate::stage::{
    ArtifactFilter, CharWhitelist, DomStripper, EntityDecoder, Pipeline, Redactor, TagStripper,
    Truncator, WhitespaceNormalizer,
};

/// A configured, immutable sanitization service.
///
/// Built once from [`SanitizeOptions`], holds no mutable state, and is
/// `Send + Sync`, so a single instance can be shared across threads and
/// requests without locking.
///
/// The stage order is fixed: entity decoding, markup stripping, artifact
/// filtering, whitespace normalization, redaction, character whitelisting,
/// a second normalization pass, truncation. Reordering breaks the output
/// guarantees -- for example, whitelisting before artifact filtering would
/// strip the very punctuation the artifact patterns match on, leaving the
/// token debris behind.
///
/// # Example
///
/// ```
/// use desc_sanitizer::{SanitizeOptions, Sanitizer};
///
/// let sanitizer = Sanitizer::new(
///     SanitizeOptions::new().blacklist(["Batman"]),
/// ).unwrap();
///
/// let out = sanitizer.sanitize(Some("<p>Bruce is secretly Batman</p>"));
/// assert_eq!(out, "Bruce is secretly [redacted]");
/// ```
pub struct Sanitizer {
    pipeline: Pipeline,
    max_input_length: usize,
}

impl Sanitizer {
    /// Build a sanitizer with the default DOM-backed markup stripper.
    ///
    /// Fails only if `options` carries an invalid custom
    /// [`allowed_chars`](SanitizeOptions::allowed_chars) class.
    pub fn new(options: SanitizeOptions) -> Result<Self> {
        Self::with_stripper(options, DomStripper)
    }

    /// Build a sanitizer with an injected markup-stripping backend.
    ///
    /// Any [`TagStripper`] satisfying the zero-tags-out contract can be
    /// substituted without changing the pipeline's guarantees.
    pub fn with_stripper(
        options: SanitizeOptions,
        stripper: impl TagStripper + 'static,
    ) -> Result<Self> {
        Self::custom(options, stripper, ArtifactFilter::new())
    }

    /// Build a sanitizer with both a custom markup stripper and a custom
    /// artifact rule set, for catalogs with different metadata leakage.
    pub fn custom(
        options: SanitizeOptions,
        stripper: impl TagStripper + 'static,
        artifacts: ArtifactFilter,
    ) -> Result<Self> {
        let whitelist = CharWhitelist::try_new(&options.allowed_chars, &options.redact_with)?;

        let mut pipeline = Pipeline::new();
        pipeline.add(EntityDecoder);
        pipeline.add(stripper);
        pipeline.add(artifacts);
        pipeline.add(WhitespaceNormalizer);
        pipeline.add(Redactor::new(&options.blacklist, &options.redact_with));
        pipeline.add(whitelist);
        pipeline.add(WhitespaceNormalizer);
        pipeline.add(Truncator::new(options.max_length));

        Ok(Self {
            pipeline,
            max_input_length: options.max_input_length,
        })
    }

    /// Sanitize raw catalog text into a display-safe plain-text string.
    ///
    /// `None` and `""` short-circuit to an empty string; no stage runs.
    /// Never errors: malformed entities, unterminated markup, and other
    /// upstream damage are normalized, not rejected.
    pub fn sanitize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw else {
            return String::new();
        };
        if raw.is_empty() {
            return String::new();
        }
        self.pipeline.run(self.cap_input(raw))
    }

    /// Pre-truncate oversized input so the scanning stages stay bounded.
    /// This caps processing cost; the output bound is the truncator's job.
    fn cap_input<'a>(&self, raw: &'a str) -> &'a str {
        if self.max_input_length == 0 {
            return raw;
        }
        match raw.char_indices().nth(self.max_input_length) {
            Some((cut, _)) => {
                tracing::debug!(
                    limit = self.max_input_length,
                    "capping oversized input before sanitization"
                );
                &raw[..cut]
            }
            None => raw,
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizeOptions::new()).expect("default options produce a valid sanitizer")
    }
}

static DEFAULT_SANITIZER: LazyLock<Sanitizer> = LazyLock::new(Sanitizer::default);

/// Sanitize with the default [`SanitizeOptions`].
///
/// Convenience entry point for callers that do not need redaction or custom
/// bounds; the underlying service is built once and reused.
pub fn sanitize_description(raw: Option<&str>) -> String {
    DEFAULT_SANITIZER.sanitize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::RegexStripper;

    #[test]
    fn none_and_empty_return_empty() {
        let sanitizer = Sanitizer::default();
        assert_eq!(sanitizer.sanitize(None), "");
        assert_eq!(sanitizer.sanitize(Some("")), "");
    }

    #[test]
    fn strips_markup_and_normalizes() {
        let sanitizer = Sanitizer::default();
        assert_eq!(
            sanitizer.sanitize(Some("<p>Hello <b>World</b></p>")),
            "Hello World"
        );
    }

    #[test]
    fn regex_stripper_backend_gives_same_result_on_wellformed_input() {
        let dom = Sanitizer::default();
        let re = Sanitizer::with_stripper(SanitizeOptions::new(), RegexStripper).unwrap();
        let input = Some("<p>Hello <b>World</b></p>");
        assert_eq!(dom.sanitize(input), re.sanitize(input));
    }

    #[test]
    fn input_cap_bounds_processing() {
        let sanitizer = Sanitizer::new(
            SanitizeOptions::new().max_input_length(10).max_length(0),
        )
        .unwrap();
        let long = format!("abcdefghij{}", "Z".repeat(100));
        assert_eq!(sanitizer.sanitize(Some(&long)), "abcdefghij");
    }

    #[test]
    fn invalid_allowed_chars_fails_at_construction() {
        let result = Sanitizer::new(SanitizeOptions::new().allowed_chars(r"A-Za-z["));
        assert!(result.is_err());
    }

    #[test]
    fn free_function_uses_defaults() {
        assert_eq!(sanitize_description(Some("Great read&#44; huh")), "Great read, huh");
        assert_eq!(sanitize_description(None), "");
    }
}
