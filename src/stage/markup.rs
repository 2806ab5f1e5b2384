//! Markup removal: reduce text to pure content, preserving line structure.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, node::Node};

use super::Stage;

/// Capability contract for the markup-stripping stage.
///
/// Given text with arbitrary (possibly malformed) markup, return text with
/// zero tags and zero attributes, content preserved, with line-breaking
/// constructs rendered as `\n`. Implementations must be total: never error,
/// whatever the input.
///
/// Two implementations ship with the crate:
///
/// - [`DomStripper`] parses with a real HTML parser and extracts text from
///   the node tree, so no tag survives regardless of how broken the nesting
///   is. This is the default backend.
/// - [`RegexStripper`] is a minimal pattern-based stripper for callers that
///   want to avoid pulling a parser through hostile input.
pub trait TagStripper: Send + Sync {
    /// Remove all markup from `text`, returning the content.
    fn strip(&self, text: &str) -> String;
}

impl<T: TagStripper> Stage for T {
    fn apply(&self, text: &str) -> String {
        self.strip(text)
    }
}

/// Elements whose text content is not prose and is dropped entirely.
const NON_CONTENT: &[&str] = &["script", "style", "noscript", "template"];

/// Block-level elements whose close marks a line break in the extracted text.
const BLOCK: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dd", "dt", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
    "table", "blockquote", "pre", "article", "section", "header", "footer", "figure", "figcaption",
];

/// DOM-backed markup stripper.
///
/// Parses the input as an HTML fragment and walks the resulting tree,
/// emitting text nodes only. The allow-list of surviving tags is empty:
/// every element is either descended into or (for non-content subtrees like
/// `script`) skipped wholesale, so no tag or attribute can reach the output even from
/// malformed or unterminated markup. `<br>` and the end of each block-level
/// element become a single `\n`.
pub struct DomStripper;

fn extract_node(node: ego_tree::NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                extract_node(child, out);
            }
        }
        Node::Element(el) => {
            let tag = el.name();
            if NON_CONTENT.contains(&tag) {
                return;
            }
            if tag == "br" {
                out.push('\n');
                return;
            }
            for child in node.children() {
                extract_node(child, out);
            }
            if BLOCK.contains(&tag) {
                out.push('\n');
            }
        }
        Node::Text(text) => out.push_str(text.as_ref()),
        // Comments, doctypes and processing instructions carry no prose.
        _ => {}
    }
}

impl TagStripper for DomStripper {
    fn strip(&self, text: &str) -> String {
        let fragment = Html::parse_fragment(text);
        let mut out = String::with_capacity(text.len());
        extract_node(fragment.tree.root(), &mut out);
        out
    }
}

static BR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("BR pattern should compile"));
static CLOSING_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</(?:p|div|li|ul|ol|h[1-6]|tr|table|blockquote)\s*>")
        .expect("CLOSING_BLOCK pattern should compile")
});
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG pattern should compile"));

/// Pattern-based markup stripper.
///
/// Converts `<br>` variants and closing block tags to `\n`, then removes
/// every remaining `<...>` run (with any attributes) up to the nearest `>`.
/// Tag-like text with no closing delimiter is left as literal text; the
/// stray-bracket cleanup in [`CharWhitelist`](super::CharWhitelist) removes
/// what is left of it further down the pipeline.
pub struct RegexStripper;

impl TagStripper for RegexStripper {
    fn strip(&self, text: &str) -> String {
        let s = BR.replace_all(text, "\n");
        let s = CLOSING_BLOCK.replace_all(&s, "\n");
        TAG.replace_all(&s, "").into_owned()
    }
}
