//! # desc_sanitizer
//!
//! Turns raw, untrusted catalog descriptions -- embedded markup, HTML
//! character entities, leftover print-production tokens, arbitrary
//! punctuation and length -- into bounded, display-safe plain text, with
//! optional redaction of disallowed words.
//!
//! ## Overview
//!
//! A [`Sanitizer`] is built once from [`SanitizeOptions`] and runs a fixed
//! pipeline of [`Stage`]s:
//!
//! 1. [`EntityDecoder`] -- decode HTML character references.
//! 2. [`DomStripper`] (or any [`TagStripper`]) -- remove markup, keep
//!    content and line structure.
//! 3. [`ArtifactFilter`] -- drop catalog-metadata token groups
//!    (`PGS.CARDSTOCK`, rating glue).
//! 4. [`WhitespaceNormalizer`] -- collapse and trim whitespace.
//! 5. [`Redactor`] -- replace blacklisted whole words with a placeholder.
//! 6. [`CharWhitelist`] -- drop every character outside the allowed set.
//! 7. [`Truncator`] -- bound the output length, marking the cut with `…`.
//!
//! The pipeline is pure and stateless: no I/O, no shared mutable state, and
//! a built [`Sanitizer`] is `Send + Sync`. Sanitizing is total -- malformed
//! entities, unterminated tags, and empty input are normalized, never
//! errors. Applying the pipeline to its own output is a no-op.
//!
//! ## Quick start
//!
//! ```
//! use desc_sanitizer::{SanitizeOptions, Sanitizer};
//!
//! let sanitizer = Sanitizer::new(
//!     SanitizeOptions::new()
//!         .max_length(500)
//!         .blacklist(["Batman"]),
//! ).unwrap();
//!
//! let raw = "Cover PGS.CARDSTOCK <p>Bruce is secretly Batman&#33;</p>";
//! assert_eq!(
//!     sanitizer.sanitize(Some(raw)),
//!     "Cover Bruce is secretly [redacted]!"
//! );
//! ```
//!
//! For one-off calls with default options there is
//! [`sanitize_description`].
//!
//! ## Plain-text output only
//!
//! Entities are decoded *before* tags are stripped, so an entity-encoded tag
//! reappears as literal text and is then removed by the bracket cleanup and
//! character whitelist. That is safe only because the output is rendered
//! strictly as plain text. Callers must never re-interpret the result as
//! markup.

pub mod error;
pub mod options;
pub mod sanitizer;
pub mod stage;

pub use error::{Result, SanitizeError};
pub use options::{
    DEFAULT_ALLOWED_CHARS, DEFAULT_MAX_INPUT_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_REDACT_WITH,
    SanitizeOptions,
};
pub use sanitizer::{Sanitizer, sanitize_description};
pub use stage::{
    ArtifactFilter, CharWhitelist, DomStripper, EntityDecoder, Pipeline, Redactor, RegexStripper,
    Stage, TagStripper, Truncator, WhitespaceNormalizer,
};
