//! Text to Tana Paste conversion
//!
//!     This crate turns free-form text (plain prose, Markdown, speaker transcripts and
//!     YouTube extracts) into Tana Paste: a `%%tana%%` header line followed by a tree of
//!     two-space indented `- ` bullets, optionally carrying `Key::Value` fields and
//!     `[[date:...]]` typed references.
//!
//!     TLDR: For renderer authors:
//!         - Every source dialect is a TanaRenderer (./renderer.rs): a cheap `matches` fingerprint
//!           check plus a `render` that emits the full paste.
//!         - Renderers never re-implement the shared algorithms: line classification, hierarchy
//!           assignment, inline/field/date rewriting and transcript chunking all live in ./common.
//!         - Register new renderers in the RendererRegistry (./registry.rs); registration order is
//!           detection priority, and the standard renderer always matches last.
//!
//! Architecture
//!
//!     The goal here is to split what is common to all conversions into a dialect agnostic
//!     layer (./common), leaving each renderer to deal only with the shape of its own input.
//!     Data flows one direction: raw string -> classified lines -> hierarchy -> per-line
//!     field/date/inline rewriting -> rendered text. No component holds state between calls,
//!     so the converter is safe to invoke concurrently on independent inputs.
//!
//!     This is a pure lib, that is, it powers the tana CLI but is shell agnostic: no code
//!     here should suppose a shell environment, be it to std print, env vars etc.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── renderer.rs             # TanaRenderer trait definition
//!     ├── registry.rs             # RendererRegistry for priority-ordered detection
//!     ├── formats
//!     │   ├── standard            # Markdown / plain prose
//!     │   ├── pendant             # Pendant speaker transcripts
//!     │   ├── app                 # App speaker transcripts
//!     │   └── youtube             # Transcript-bearing documents
//!     ├── common                  # Shared algorithms
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The most complex part of the work is reconstructing a nested outline from flat text:
//!     classifying physical lines (./common/line.rs) and assigning each a parent from heading
//!     depth, list nesting and indentation (./common/hierarchy.rs). The remaining heavy
//!     lifting is textual: field-vs-prose disambiguation (./common/fields.rs), date literal
//!     recognition (./common/dates.rs), inline emphasis rewriting (./common/inline.rs) and
//!     boundary-aware chunking of oversized transcripts (./common/chunk.rs).
//!
//! Dialect Selection
//!
//!     Transcript dialects have cheap, unambiguous structural fingerprints, so they are
//!     checked before general Markdown; otherwise timestamp-heavy transcript text would be
//!     misread as a numbered list. The standard renderer is the total fallback: any string
//!     converts to something.

pub mod common;
pub mod error;
pub mod formats;
pub mod registry;
pub mod renderer;

pub use common::chunk::{chunk_text, split_paste, ChunkerLimits, TranscriptChunk};
pub use error::ConvertError;
pub use registry::RendererRegistry;
pub use renderer::TanaRenderer;

use common::tuning;

/// The fixed first line of every Tana Paste document.
pub const TANA_HEADER: &str = "%%tana%%";

/// Inputs above this size are rejected before any processing.
pub const MAX_INPUT_BYTES: usize = 1_048_576;

/// Bullet emitted when there is nothing to convert.
pub const EMPTY_INPUT_PLACEHOLDER: &str = "No text selected";

/// Tunable knobs threaded through detection and rendering.
///
/// Defaults come from [`common::tuning`]; applications can override them via
/// configuration (see the `tana-config` crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Size bounds for transcript chunking.
    pub chunking: ChunkerLimits,
    /// Minimum fingerprint lines before the Pendant renderer claims an input.
    pub pendant_min_lines: usize,
    /// Minimum weekday+time stamp lines before the App renderer claims an input.
    pub app_min_timestamps: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            chunking: ChunkerLimits::default(),
            pendant_min_lines: tuning::PENDANT_MIN_LINES,
            app_min_timestamps: tuning::APP_MIN_TIMESTAMPS,
        }
    }
}

/// Converts any input to Tana Paste. Total: never panics, never errors.
///
/// `None`, empty and whitespace-only input produce the header plus a single
/// placeholder bullet. Internal failures are reported as a conversion-failure
/// bullet rather than a partial document.
pub fn convert_to_tana(input: Option<&str>) -> String {
    let Some(text) = input else {
        return empty_result();
    };
    if text.trim().is_empty() {
        return empty_result();
    }
    match try_convert(text) {
        Ok(output) => output,
        Err(e) => format!("{TANA_HEADER}\n- Conversion failed: {e}"),
    }
}

/// Fallible conversion boundary with default options.
///
/// Rejects inputs above [`MAX_INPUT_BYTES`] with [`ConvertError::InvalidInput`].
pub fn try_convert(input: &str) -> Result<String, ConvertError> {
    convert_with_options(input, &ConvertOptions::default())
}

/// Fallible conversion with caller-supplied options.
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    if input.len() > MAX_INPUT_BYTES {
        return Err(ConvertError::InvalidInput(format!(
            "input is {} bytes, the limit is {MAX_INPUT_BYTES}",
            input.len()
        )));
    }
    if input.trim().is_empty() {
        return Ok(empty_result());
    }
    let input = strip_existing_header(input);
    RendererRegistry::with_options(options).convert(input)
}

fn empty_result() -> String {
    format!("{TANA_HEADER}\n- {EMPTY_INPUT_PLACEHOLDER}")
}

/// Drops a pre-existing `%%tana%%` first line so the header is never doubled.
fn strip_existing_header(input: &str) -> &str {
    let mut lines = input.splitn(2, '\n');
    match (lines.next(), lines.next()) {
        (Some(first), Some(rest)) if first.trim() == TANA_HEADER => rest,
        (Some(first), None) if first.trim() == TANA_HEADER => "",
        _ => input,
    }
}
