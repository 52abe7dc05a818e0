//! Inline formatting rewrites
//!
//! Converts Markdown emphasis to the target's inline syntax: `*x*` and
//! `_x_` become `__x__`, `==x==` becomes `^^x^^`, and `**bold**` is kept
//! as written. Images become field-shaped nodes (`alt::!alt url`). Typed
//! references, raw URLs and `[label](url)` links are shielded first and
//! restored verbatim, so their interiors are never rewritten.

use crate::common::protect::{Protector, PROTECTED_SPANS};
use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());
static STAR_ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
// Underscore italics only fire at word edges so snake_case identifiers
// survive.
static UNDERSCORE_ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b_([^_]+)_\b").unwrap());
static HIGHLIGHT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"==([^=]+)==").unwrap());

/// Rewrites the inline formatting of one line of content.
pub fn format_inline(text: &str) -> String {
    // Images are rewritten before link shielding; their bracket syntax
    // would otherwise be captured as an ordinary link.
    let text = IMAGE_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let alt = &caps[1];
        let url = &caps[2];
        if alt.is_empty() {
            format!("!Image {url}")
        } else {
            format!("{alt}::!{alt} {url}")
        }
    });

    let mut protector = Protector::new();
    let text = protector.shield(&text, &PROTECTED_SPANS);
    // Bold spans stay as written; shielding them keeps the single-star
    // rule from eating their delimiters.
    let text = protector.shield(&text, &BOLD_RE);

    let text = STAR_ITALIC_RE.replace_all(&text, "__${1}__");
    let text = UNDERSCORE_ITALIC_RE.replace_all(&text, "__${1}__");
    let text = HIGHLIGHT_RE.replace_all(&text, "^^${1}^^");

    protector.restore(&text)
}
