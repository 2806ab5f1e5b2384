//! Output length bounding.

use super::Stage;

/// Stage that bounds the final output length, in characters.
///
/// Text longer than `max_length` is cut to `max_length - 1` characters at a
/// character boundary, trailing whitespace at the cut point is trimmed, and
/// a single `…` marks the truncation, so the result is never longer than
/// `max_length`. A `max_length` of zero disables the bound entirely; the
/// pipeline documents this as "unbounded", not as an error.
pub struct Truncator {
    max_length: usize,
}

impl Truncator {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Stage for Truncator {
    fn apply(&self, text: &str) -> String {
        if self.max_length == 0 || text.chars().count() <= self.max_length {
            return text.to_string();
        }
        let kept: String = text.chars().take(self.max_length - 1).collect();
        let mut out = kept.trim_end().to_string();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let truncator = Truncator::new(10);
        assert_eq!(truncator.apply("short"), "short");
    }

    #[test]
    fn exact_length_is_untouched() {
        let truncator = Truncator::new(5);
        assert_eq!(truncator.apply("exact"), "exact");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let truncator = Truncator::new(10);
        let result = truncator.apply(&"A".repeat(3000));
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with('…'));
        assert_eq!(result, "AAAAAAAAA…");
    }

    #[test]
    fn no_whitespace_before_ellipsis() {
        let truncator = Truncator::new(8);
        // Cut lands inside a whitespace run; it must be trimmed away.
        let result = truncator.apply("seven   words more");
        assert_eq!(result, "seven…");
        assert!(result.chars().count() <= 8);
    }

    #[test]
    fn zero_means_unbounded() {
        let truncator = Truncator::new(0);
        let long = "B".repeat(5000);
        assert_eq!(truncator.apply(&long), long);
    }

    #[test]
    fn cuts_on_char_boundaries() {
        let truncator = Truncator::new(4);
        let result = truncator.apply("héllô wörld");
        assert_eq!(result.chars().count(), 4);
        assert_eq!(result, "hél…");
    }
}
