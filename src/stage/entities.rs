//! HTML character-reference decoding.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Stage;

/// Named references decoded by [`EntityDecoder`]. Anything outside this
/// table (and the generic numeric forms) is left verbatim.
const NAMED: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&#x27;", "'"),
];

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&[a-zA-Z#0-9]+;").expect("REFERENCE pattern should compile"));
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#([0-9]+);").expect("DECIMAL pattern should compile"));
static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").expect("HEX pattern should compile"));

/// Stage that decodes HTML character references into literal characters.
///
/// Handles the small named table above plus generic decimal (`&#NNN;`) and
/// hexadecimal (`&#xHHHH;`) references. Unrecognized or malformed escape
/// sequences pass through unchanged, as do numeric references that do not
/// name a valid Unicode scalar.
///
/// Runs before markup stripping so that entity-encoded structural characters
/// are normalized prior to tag removal. It is not a security boundary on its
/// own: a decoded `&lt;b&gt;` reappears as literal text and is cleaned up by
/// the later angle-bracket handling, which is safe only because output is
/// rendered strictly as plain text.
pub struct EntityDecoder;

impl Stage for EntityDecoder {
    fn apply(&self, text: &str) -> String {
        let decoded = REFERENCE.replace_all(text, |caps: &Captures| {
            NAMED
                .iter()
                .find(|(name, _)| *name == &caps[0])
                .map(|(_, literal)| (*literal).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        let decoded = DECIMAL.replace_all(&decoded, |caps: &Captures| {
            caps[1]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        });
        HEX.replace_all(&decoded, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_references() {
        let decoder = EntityDecoder;
        assert_eq!(decoder.apply("&lt;tag&gt;"), "<tag>");
        assert_eq!(decoder.apply("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decoder.apply("say &quot;hi&quot;"), "say \"hi\"");
    }

    #[test]
    fn decodes_numeric_decimal() {
        let decoder = EntityDecoder;
        assert_eq!(decoder.apply("Great read&#44; huh"), "Great read, huh");
        assert_eq!(decoder.apply("&#65;&#66;"), "AB");
    }

    #[test]
    fn decodes_numeric_hex() {
        let decoder = EntityDecoder;
        assert_eq!(decoder.apply("&#x41;"), "A");
        assert_eq!(decoder.apply("it&#x27;s"), "it's");
    }

    #[test]
    fn unknown_references_pass_through() {
        let decoder = EntityDecoder;
        assert_eq!(decoder.apply("&nosuchentity;"), "&nosuchentity;");
        assert_eq!(decoder.apply("a &lonely ampersand"), "a &lonely ampersand");
    }

    #[test]
    fn invalid_scalar_passes_through() {
        let decoder = EntityDecoder;
        // Surrogate range, not a valid scalar value.
        assert_eq!(decoder.apply("&#55296;"), "&#55296;");
        assert_eq!(decoder.apply("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn double_encoded_decodes_once() {
        let decoder = EntityDecoder;
        assert_eq!(decoder.apply("&amp;lt;"), "&lt;");
    }
}
