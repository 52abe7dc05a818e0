//! Line classification
//!
//! Turns one physical input line into a [`Line`]: indentation measured in
//! columns (tabs count as two), content with the indentation stripped and
//! trailing whitespace trimmed, and structural flags for headers, code
//! fences, bullet items and numbered items. A line is classified exactly
//! once; the flags are informative, not exclusive.
//!
//! One wrinkle inherited from real-world input: text copied out of a
//! rendered outline sometimes flattens several list entries onto a single
//! physical line, separated by tab characters. [`split_flattened`] expands
//! such a line back into logical lines (re-spacing the markers) before
//! classification, so each entry classifies independently.

use crate::common::tuning::TAB_COLUMNS;
use once_cell::sync::Lazy;
use regex::Regex;

/// Parent reference of a placed line.
///
/// An explicit root sentinel instead of a magic index: the root boundary has
/// no off-by-one to get wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Top level of the document.
    Root,
    /// Child of the line at this (strictly earlier) index.
    Node(usize),
}

/// One physical input line after whitespace analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Content with leading indentation stripped and trailing whitespace trimmed.
    pub content: String,
    /// Leading whitespace measured in columns; a tab counts as two.
    pub indent_columns: usize,
    /// `indent_columns / 2`, forced to 0 for headers (their nesting depth
    /// comes from the number of `#` characters, never from indentation).
    pub indent_level: usize,
    pub is_header: bool,
    pub is_code_fence: bool,
    pub is_bullet: bool,
    pub is_numbered: bool,
    /// Assigned by the hierarchy builder; absent until then.
    pub parent: Option<Parent>,
}

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6}\s").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+•▪]\s").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+\.|[A-Za-z][.)])\s").unwrap());
static MARKER_RESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-*+•▪]|\d+\.)\s*(.*)$").unwrap());
static MARKER_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*+•▪]|\d+\.|[A-Za-z][.)])\s+").unwrap());

impl Line {
    /// A line with no content after trimming. Blank lines carry no type flags;
    /// they separate paragraphs but are never emitted.
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of leading `#` characters for a header line.
    pub fn heading_depth(&self) -> Option<usize> {
        if !self.is_header {
            return None;
        }
        Some(self.content.chars().take_while(|&c| c == '#').count())
    }
}

/// Classify one physical line.
pub fn classify(raw: &str) -> Line {
    let mut columns = 0usize;
    let mut start = raw.len();
    for (i, ch) in raw.char_indices() {
        match ch {
            ' ' => columns += 1,
            '\t' => columns += TAB_COLUMNS,
            _ => {
                start = i;
                break;
            }
        }
    }
    let content = raw[start..].trim_end().to_string();

    let is_header = HEADER_RE.is_match(&content);
    let is_code_fence = content.starts_with("```");
    let is_bullet = BULLET_RE.is_match(&content);
    let is_numbered = NUMBERED_RE.is_match(&content);
    let indent_level = if is_header { 0 } else { columns / 2 };

    Line {
        content,
        indent_columns: columns,
        indent_level,
        is_header,
        is_code_fence,
        is_bullet,
        is_numbered,
        parent: None,
    }
}

/// Expands a physical line that flattens several list entries onto one line
/// separated by tabs. The common leading indentation is preserved on every
/// piece and glued markers are re-spaced (`-item` becomes `- item`). Lines
/// without the pattern come back unchanged as a single element.
pub fn split_flattened(raw: &str) -> Vec<String> {
    let body_start = raw
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(raw.len());
    let indent = &raw[..body_start];
    let body = &raw[body_start..];

    if !body.contains('\t') {
        return vec![raw.to_string()];
    }

    let pieces: Vec<&str> = body
        .split('\t')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if pieces.len() < 2 || !pieces[1..].iter().any(|p| starts_with_marker(p)) {
        // An ordinary tab inside prose, not a flattened outline.
        return vec![raw.to_string()];
    }

    pieces
        .iter()
        .map(|piece| format!("{indent}{}", respace_marker(piece)))
        .collect()
}

fn starts_with_marker(piece: &str) -> bool {
    BULLET_RE.is_match(piece)
        || NUMBERED_RE.is_match(piece)
        || MARKER_RESPACE_RE
            .captures(piece)
            .map(|c| !c[2].is_empty())
            .unwrap_or(false)
}

fn respace_marker(piece: &str) -> String {
    match MARKER_RESPACE_RE.captures(piece) {
        Some(caps) if !caps[2].is_empty() => format!("{} {}", &caps[1], &caps[2]),
        _ => piece.to_string(),
    }
}

/// Content with its leading list marker removed. Checkbox markers
/// (`[ ]`, `[x]`) are part of the content and survive. Non-list content
/// comes back unchanged.
pub fn strip_marker(content: &str) -> &str {
    match MARKER_STRIP_RE.find(content) {
        Some(m) => &content[m.end()..],
        None => content,
    }
}

/// Header text without the leading `#` run.
pub fn strip_heading(content: &str) -> &str {
    content.trim_start_matches('#').trim_start()
}

/// Split input into physical lines, expand flattened entries, classify each.
pub fn classify_all(input: &str) -> Vec<Line> {
    input
        .lines()
        .flat_map(split_flattened)
        .map(|logical| classify(&logical))
        .collect()
}
