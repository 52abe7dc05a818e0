//! Field-vs-prose disambiguation
//!
//! A colon in a line either introduces a Tana field (`Author: Jane Doe`
//! becomes `Author::Jane Doe`) or is ordinary prose punctuation
//! (`Topic: some details about the topic` stays as written). The call is
//! inherently fuzzy, so it is made by a prioritized rule list rather than a
//! single boolean: rules are evaluated in order and the first decisive one
//! wins, which keeps each rule individually testable and tunable. The
//! default, when nothing is decisive, is to not convert.

use crate::common::tuning::{
    FIELD_CAPITALIZED_VALUE_MAX_WORDS, FIELD_KEY_MAX_WORDS, FIELD_VALUE_MAX_WORDS,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Keys containing any of these read as instructions, not metadata.
pub const INSTRUCTIONAL_WORDS: &[&str] = &[
    "step", "steps", "click", "window", "tip", "tips", "note", "warning", "example", "press",
    "select", "open", "hint",
];

/// Values starting with one of these read as descriptive prose.
pub const VALUE_STOPWORDS: &[&str] = &[
    "the", "a", "an", "to", "of", "in", "on", "at", "for", "with", "from", "by", "about", "as",
    "into", "over", "after", "some", "any",
];

/// Keys in the common metadata vocabulary convert even when the value is
/// long, as long as it does not read as prose.
pub const METADATA_KEYS: &[&str] = &[
    "name", "title", "status", "author", "url", "email", "date", "type", "source", "tag", "tags",
    "category", "version", "owner", "priority", "due", "created", "updated", "published",
    "location", "company", "phone", "website", "channel", "duration", "rating",
];

/// Where the candidate line sits in the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext {
    pub is_bullet: bool,
    pub is_numbered: bool,
}

/// Outcome of the rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVerdict {
    Field,
    Prose,
}

// Key must not contain a colon itself; value needs real content after ": ".
static FIELD_CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+):\s+(\S.*)$").unwrap());

/// Converts `Key: Value` to `Key::Value` when the rule chain judges the colon
/// to introduce a true field. Lines already containing `::` or a table pipe
/// are returned unchanged.
pub fn convert_field(text: &str, ctx: &LineContext) -> String {
    if text.contains("::") || text.contains('|') {
        return text.to_string();
    }
    let Some(caps) = FIELD_CANDIDATE_RE.captures(text) else {
        return text.to_string();
    };
    let key = caps[1].trim();
    let value = caps[2].trim();
    match judge_field(key, value, ctx) {
        FieldVerdict::Field => format!("{key}::{value}"),
        FieldVerdict::Prose => text.to_string(),
    }
}

/// The prioritized rule list. First decisive rule wins; ambiguity defaults
/// to prose.
pub fn judge_field(key: &str, value: &str, ctx: &LineContext) -> FieldVerdict {
    if !ctx.is_bullet && !looks_like_metadata_line(key) {
        return FieldVerdict::Prose;
    }
    if ctx.is_numbered {
        return FieldVerdict::Prose;
    }
    if key_is_instructional(key) {
        return FieldVerdict::Prose;
    }
    if value_reads_as_prose(value) {
        return FieldVerdict::Prose;
    }
    if key_in_metadata_vocabulary(key) {
        return FieldVerdict::Field;
    }
    if short_key_short_value(key, value) {
        return FieldVerdict::Field;
    }
    FieldVerdict::Prose
}

/// A standalone line shaped like metadata: a short, capitalized key with no
/// sentence punctuation.
pub fn looks_like_metadata_line(key: &str) -> bool {
    word_count(key) <= FIELD_KEY_MAX_WORDS
        && key.chars().next().is_some_and(|c| c.is_uppercase())
        && !key.contains(['.', '!', '?', ','])
}

pub fn key_is_instructional(key: &str) -> bool {
    key.split_whitespace()
        .any(|word| INSTRUCTIONAL_WORDS.contains(&trim_word(word).as_str()))
}

pub fn value_reads_as_prose(value: &str) -> bool {
    let first = value
        .split_whitespace()
        .next()
        .map(|w| trim_word(w))
        .unwrap_or_default();
    VALUE_STOPWORDS.contains(&first.as_str()) || has_internal_punctuation(value)
}

pub fn key_in_metadata_vocabulary(key: &str) -> bool {
    METADATA_KEYS.contains(&key.to_lowercase().as_str())
}

pub fn short_key_short_value(key: &str, value: &str) -> bool {
    if word_count(key) > FIELD_KEY_MAX_WORDS {
        return false;
    }
    let value_words = word_count(value);
    if value_words <= FIELD_VALUE_MAX_WORDS {
        return true;
    }
    value.chars().next().is_some_and(|c| c.is_uppercase())
        && value_words <= FIELD_CAPITALIZED_VALUE_MAX_WORDS
}

fn has_internal_punctuation(value: &str) -> bool {
    value.contains([';', ',', '(', ')']) || value.contains(" - ")
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn trim_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_ctx() -> LineContext {
        LineContext {
            is_bullet: true,
            is_numbered: false,
        }
    }

    #[test]
    fn test_author_in_list_context_becomes_field() {
        assert_eq!(
            convert_field("Author: Jane Doe", &list_ctx()),
            "Author::Jane Doe"
        );
    }

    #[test]
    fn test_prose_colon_not_converted() {
        let text = "Topic: Some details about the topic";
        assert_eq!(convert_field(text, &LineContext::default()), text);
    }

    #[test]
    fn test_numbered_item_never_converts() {
        let ctx = LineContext {
            is_bullet: false,
            is_numbered: true,
        };
        assert_eq!(convert_field("Status: Done", &ctx), "Status: Done");
    }

    #[test]
    fn test_instructional_key_stays_prose() {
        let text = "Step 1: Open the terminal";
        assert_eq!(convert_field(text, &list_ctx()), text);
        assert_eq!(
            judge_field("Click here", "Submit", &list_ctx()),
            FieldVerdict::Prose
        );
    }

    #[test]
    fn test_value_starting_with_article_stays_prose() {
        let text = "Summary: The meeting went well";
        assert_eq!(convert_field(text, &list_ctx()), text);
    }

    #[test]
    fn test_value_with_internal_punctuation_stays_prose() {
        assert_eq!(
            judge_field("Result", "passed, mostly", &list_ctx()),
            FieldVerdict::Prose
        );
        assert_eq!(
            judge_field("Result", "see appendix - section two", &list_ctx()),
            FieldVerdict::Prose
        );
    }

    #[test]
    fn test_metadata_vocabulary_converts() {
        assert_eq!(
            convert_field("URL: https://example.com", &list_ctx()),
            "URL::https://example.com"
        );
        // A vocabulary key carries a value too long for the short-value rule.
        assert_eq!(
            judge_field("tags", "rust parsing tooling notes", &list_ctx()),
            FieldVerdict::Field
        );
    }

    #[test]
    fn test_prose_value_overrides_metadata_key() {
        assert_eq!(
            judge_field("status", "in review, waiting on Bob", &list_ctx()),
            FieldVerdict::Prose
        );
        assert_eq!(
            judge_field("Status", "in review", &list_ctx()),
            FieldVerdict::Prose
        );
    }

    #[test]
    fn test_short_key_short_value_converts() {
        assert_eq!(
            judge_field("Deadline", "next Friday", &list_ctx()),
            FieldVerdict::Field
        );
    }

    #[test]
    fn test_capitalized_medium_value_converts() {
        assert_eq!(
            judge_field("Venue", "Large Hall Near The Station", &list_ctx()),
            FieldVerdict::Field
        );
    }

    #[test]
    fn test_long_lowercase_value_defaults_to_prose() {
        assert_eq!(
            judge_field("Thing", "quite a few words going on here", &list_ctx()),
            FieldVerdict::Prose
        );
    }

    #[test]
    fn test_existing_field_and_table_row_untouched() {
        assert_eq!(convert_field("Author::Jane", &list_ctx()), "Author::Jane");
        assert_eq!(convert_field("| a | b |", &list_ctx()), "| a | b |");
    }

    #[test]
    fn test_standalone_metadata_line_converts_without_list_context() {
        assert_eq!(
            convert_field("Author: Jane Doe", &LineContext::default()),
            "Author::Jane Doe"
        );
    }
}
