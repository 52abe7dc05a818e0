//! Placeholder protection for rewrite passes
//!
//! The inline and date rewriters must not mangle text that is already in the
//! target syntax: `[[...]]` references, raw URLs and Markdown links. Each
//! pass shields those spans behind numbered placeholders, runs its rewrite
//! rules, then restores the originals byte-for-byte. The same mechanism
//! stands in for lookbehind when a rule must skip `**bold**` or `__italic__`
//! spans, since the regex engine used here has no lookaround.

use once_cell::sync::Lazy;
use regex::Regex;

/// Spans no rewrite pass may touch: typed references, raw URLs, Markdown links.
pub static PROTECTED_SPANS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[.*?\]\]|https?://[^\s)]+|\[[^\]]+\]\([^)]+\)").unwrap());

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__PROTECTED_(\d+)__").unwrap());

/// Shields matched spans behind placeholders and restores them afterwards.
#[derive(Debug, Default)]
pub struct Protector {
    slots: Vec<String>,
}

impl Protector {
    pub fn new() -> Self {
        Protector::default()
    }

    /// Replace every match of `pattern` with a placeholder, remembering the
    /// original text. May be called repeatedly with different patterns.
    pub fn shield(&mut self, text: &str, pattern: &Regex) -> String {
        let slots = &mut self.slots;
        pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let token = format!("__PROTECTED_{}__", slots.len());
                slots.push(caps[0].to_string());
                token
            })
            .into_owned()
    }

    /// Restore every placeholder to its original text.
    pub fn restore(&self, text: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let index: usize = caps[1].parse().unwrap_or(usize::MAX);
                self.slots
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
