//! YouTube transcript renderer
//!
//! Handles web-page extracts that carry a transcript inside an otherwise
//! ordinary document: a case-insensitive `Transcript:` (or `Transcript::`)
//! label, followed by the transcript text with optional leading `[h:]mm:ss`
//! timestamps per line. The surrounding document renders through the
//! standard walker with the transcript region replaced by a literal
//! `Transcript::` field line; the chunked transcript is spliced one level
//! beneath that bullet. An empty transcript falls back to the standard
//! renderer on the original input.

use crate::common::chunk::{chunk_text, ChunkerLimits};
use crate::error::ConvertError;
use crate::formats::standard::{render_body, render_standard};
use crate::formats::transcript_bullets;
use crate::renderer::TanaRenderer;
use crate::{ConvertOptions, TANA_HEADER};
use once_cell::sync::Lazy;
use regex::Regex;

static TRANSCRIPT_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)transcript::?").unwrap());
static TIMESTAMP_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d{1,2}:)?\d{1,2}:\d{2}\s*").unwrap());

/// Renderer for transcript-bearing web-page extracts
pub struct YoutubeRenderer {
    limits: ChunkerLimits,
}

impl YoutubeRenderer {
    pub fn new(options: &ConvertOptions) -> Self {
        YoutubeRenderer {
            limits: options.chunking,
        }
    }
}

impl TanaRenderer for YoutubeRenderer {
    fn name(&self) -> &str {
        "youtube"
    }

    fn description(&self) -> &str {
        "Documents carrying a YouTube transcript"
    }

    fn matches(&self, input: &str) -> bool {
        TRANSCRIPT_LABEL_RE.is_match(input)
    }

    fn render(&self, input: &str) -> Result<String, ConvertError> {
        let lines: Vec<&str> = input.lines().collect();
        let Some((label_index, label_end)) = find_label(&lines) else {
            return render_standard(input);
        };

        // Transcript text: the label line's inline remainder plus every
        // following line, leading timestamps stripped.
        let mut pieces = Vec::new();
        push_transcript_piece(&mut pieces, &lines[label_index][label_end..]);
        for line in &lines[label_index + 1..] {
            push_transcript_piece(&mut pieces, line);
        }
        if pieces.is_empty() {
            return render_standard(input);
        }
        let transcript = pieces.join(" ");

        let chunks = chunk_text(&transcript, &self.limits)?;
        if chunks.is_empty() {
            return render_standard(input);
        }

        // The surrounding document, with the transcript region replaced by
        // a bare field line the standard walker renders in place.
        let mut doc: Vec<String> = lines[..label_index]
            .iter()
            .map(|l| l.to_string())
            .collect();
        let label_start = TRANSCRIPT_LABEL_RE
            .find(lines[label_index])
            .map(|m| m.start())
            .unwrap_or(0);
        doc.push(format!("{}Transcript::", &lines[label_index][..label_start]));

        let body = render_body(&doc.join("\n"))?;
        // No line before the label can contain the label text, so the only
        // line ending in `Transcript::` is the one injected above, whatever
        // prefix the original label line carried.
        let Some(anchor) = body.iter().position(|line| line.ends_with("Transcript::")) else {
            return render_standard(input);
        };
        let anchor_depth = leading_spaces(&body[anchor]) / 2;
        let child_indent = "  ".repeat(anchor_depth + 1);

        let mut out = vec![TANA_HEADER.to_string()];
        out.extend(body[..=anchor].iter().cloned());
        out.extend(
            transcript_bullets(&chunks)
                .into_iter()
                .map(|bullet| format!("{child_indent}- {bullet}")),
        );
        out.extend(body[anchor + 1..].iter().cloned());
        Ok(out.join("\n"))
    }
}

/// First line carrying the transcript label, with the byte offset just past
/// the label on that line.
fn find_label(lines: &[&str]) -> Option<(usize, usize)> {
    for (i, line) in lines.iter().enumerate() {
        if let Some(m) = TRANSCRIPT_LABEL_RE.find(line) {
            return Some((i, m.end()));
        }
    }
    None
}

fn push_transcript_piece(pieces: &mut Vec<String>, line: &str) {
    let trimmed = line.trim();
    let without_stamp = TIMESTAMP_PREFIX_RE.replace(trimmed, "");
    let text = without_stamp.trim();
    if !text.is_empty() {
        pieces.push(text.to_string());
    }
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}
