//! Pipeline stages for turning raw catalog text into display-safe output.
//!
//! Stages implement the [`Stage`] trait and are composed into a
//! [`Pipeline`] that runs them sequentially. Each stage is a pure, total
//! function from string to string; none of them errors on malformed input.
//!
//! Built-in stages, in the order the sanitizer runs them:
//!
//! - [`EntityDecoder`] -- decode HTML character references.
//! - [`DomStripper`] / [`RegexStripper`] -- remove markup, keep content.
//! - [`ArtifactFilter`] -- drop catalog-metadata token groups.
//! - [`WhitespaceNormalizer`] -- collapse and trim whitespace.
//! - [`Redactor`] -- replace blacklisted words with a placeholder.
//! - [`CharWhitelist`] -- drop characters outside the allowed set.
//! - [`Truncator`] -- bound the output length.

mod artifacts;
mod entities;
mod markup;
mod redact;
mod truncate;
mod whitelist;
mod whitespace;

pub use artifacts::ArtifactFilter;
pub use entities::EntityDecoder;
pub use markup::{DomStripper, RegexStripper, TagStripper};
pub use redact::Redactor;
pub use truncate::Truncator;
pub use whitelist::CharWhitelist;
pub use whitespace::{WhitespaceNormalizer, normalize_whitespace};

/// Trait for text transformation stages.
///
/// Each stage receives the previous stage's output and returns a transformed
/// version. Implementations must be `Send + Sync` so a built pipeline can be
/// shared freely across threads.
pub trait Stage: Send + Sync {
    /// Transform the given text, returning the result.
    fn apply(&self, text: &str) -> String;
}

/// An ordered chain of [`Stage`] implementations applied sequentially.
///
/// Each stage receives the output of the previous one. An empty pipeline
/// is a no-op.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to the end of the pipeline.
    pub fn add(&mut self, stage: impl Stage + 'static) {
        self.stages.push(Box::new(stage));
    }

    /// Run the full pipeline on the given text, returning the final result.
    pub fn run(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, s| s.apply(&acc))
    }

    /// Returns `true` if no stages have been added.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_empty_is_empty() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
    }

    #[test]
    fn pipeline_not_empty_after_add() {
        let mut pipeline = Pipeline::new();
        pipeline.add(WhitespaceNormalizer);
        assert!(!pipeline.is_empty());
    }

    #[test]
    fn pipeline_with_no_stages_returns_original() {
        let pipeline = Pipeline::new();
        assert_eq!(pipeline.run("  raw  text  "), "  raw  text  ");
    }

    #[test]
    fn pipeline_chains_stages_in_order() {
        // Decode entities first so the stripper sees real markup characters,
        // then strip, then tidy up.
        let mut pipeline = Pipeline::new();
        pipeline.add(EntityDecoder);
        pipeline.add(RegexStripper);
        pipeline.add(WhitespaceNormalizer);

        let result = pipeline.run("Tom &amp; Jerry <b>forever</b>   !");
        assert_eq!(result, "Tom & Jerry forever !");
    }
}
