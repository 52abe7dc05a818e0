//! Pendant transcript renderer
//!
//! The pendant recorder exports one utterance per line as
//! `> [Speaker](#startMs=1000&endMs=2000): text`. The whole transcript
//! collapses into a single `Speaker: utterance` stream (timestamps
//! discarded), which is chunked and emitted as sibling bullets under the
//! header. An input that fingerprints as pendant but yields no usable
//! utterances falls back to the standard renderer.

use crate::common::chunk::{chunk_text, ChunkerLimits};
use crate::error::ConvertError;
use crate::formats::standard::render_standard;
use crate::formats::transcript_bullets;
use crate::renderer::TanaRenderer;
use crate::{ConvertOptions, TANA_HEADER};
use once_cell::sync::Lazy;
use regex::Regex;

static PENDANT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^>\s*\[([^\]]+)\]\(#startMs=\d+&endMs=\d+\):\s*(.*)$").unwrap());

/// Renderer for pendant-recorder speaker transcripts
pub struct PendantRenderer {
    min_lines: usize,
    limits: ChunkerLimits,
}

impl PendantRenderer {
    pub fn new(options: &ConvertOptions) -> Self {
        PendantRenderer {
            min_lines: options.pendant_min_lines,
            limits: options.chunking,
        }
    }
}

impl TanaRenderer for PendantRenderer {
    fn name(&self) -> &str {
        "pendant"
    }

    fn description(&self) -> &str {
        "Pendant recorder speaker transcripts"
    }

    fn matches(&self, input: &str) -> bool {
        input
            .lines()
            .filter(|line| PENDANT_LINE_RE.is_match(line.trim()))
            .count()
            >= self.min_lines
    }

    fn render(&self, input: &str) -> Result<String, ConvertError> {
        let mut segments = Vec::new();
        for line in input.lines() {
            if let Some(caps) = PENDANT_LINE_RE.captures(line.trim()) {
                let text = caps[2].trim().to_string();
                if !text.is_empty() {
                    segments.push(format!("{}: {text}", &caps[1]));
                }
            }
        }
        if segments.is_empty() {
            return render_standard(input);
        }

        let transcript = segments.join(" ");
        let chunks = chunk_text(&transcript, &self.limits)?;
        if chunks.is_empty() {
            return render_standard(input);
        }

        let mut out = vec![TANA_HEADER.to_string()];
        out.extend(
            transcript_bullets(&chunks)
                .into_iter()
                .map(|bullet| format!("- {bullet}")),
        );
        Ok(out.join("\n"))
    }
}
