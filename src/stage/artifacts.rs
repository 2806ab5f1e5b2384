//! Removal of catalog-metadata token groups from descriptive text.

use std::sync::LazyLock;

use regex::Regex;

use super::Stage;
use crate::error::{Result, SanitizeError};

/// The built-in artifact rules, in application order:
///
/// 1. Dot-joined uppercase acronym groups (`PGS.CARDSTOCK`,
///    `PGS.COVER.STOCK`).
/// 2. Rating-glue tokens: a capitalized word ending in `Rated`, optionally
///    followed by a single uppercase grade letter and a trailing period
///    (`COVERRated T .`).
/// 3. Residual single-letter-plus-period tokens (`T .`), typically a
///    dangling grade left behind after rule 2 fired elsewhere.
///
/// Each match is replaced by a single space; the whitespace normalizer
/// closes the gaps afterwards.
const DEFAULT_RULES: &[(&str, &str)] = &[
    (r"\b[A-Z]{2,}(?:\.[A-Z]{2,})+\b", " "),
    (r"\b[A-Z][A-Za-z]*Rated\s*[A-Z]?\s*\.?", " "),
    (r"\b[A-Z]\s*\.", " "),
];

static COMPILED_DEFAULTS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    DEFAULT_RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("default artifact rule should compile"),
                (*replacement).to_string(),
            )
        })
        .collect()
});

/// Stage that removes known non-semantic token groups -- print-production
/// and rating leakage from the upstream catalog feed, not prose.
///
/// The rules are heuristic and catalog-specific; a false positive on a
/// legitimate single-letter abbreviation ("J. Smith" losing the "J.") is an
/// accepted trade-off. The rule list is data-driven so alternative catalogs
/// can supply their own patterns via [`try_new`](Self::try_new).
///
/// This stage assumes plain text: it must run after entity decoding and
/// markup stripping, since a tag boundary splitting an artifact token would
/// hide it from the patterns.
pub struct ArtifactFilter {
    rules: Vec<(Regex, String)>,
}

impl ArtifactFilter {
    /// Create a filter with the built-in catalog rules.
    pub fn new() -> Self {
        Self {
            rules: COMPILED_DEFAULTS.clone(),
        }
    }

    /// Create a filter from custom `(pattern, replacement)` rules, applied
    /// in order. Returns [`SanitizeError::Rule`] for an invalid pattern.
    pub fn try_new(rules: Vec<(&str, &str)>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| match Regex::new(pattern) {
                Ok(re) => Ok((re, replacement.to_string())),
                Err(source) => Err(SanitizeError::Rule {
                    pattern: pattern.to_string(),
                    source,
                }),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }
}

impl Default for ArtifactFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ArtifactFilter {
    fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (re, replacement)| {
                re.replace_all(&acc, replacement.as_str()).into_owned()
            })
    }
}
