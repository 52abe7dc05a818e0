//! App transcript renderer
//!
//! The app recorder exports blocks of the shape
//!
//! ```text
//! Alice Smith
//!
//! Monday 10:30 AM
//! The first thing Alice said.
//! ```
//!
//! A short line followed by a blank line names the current speaker;
//! weekday + `HH:MM AM/PM` stamp lines are dropped; every other line is an
//! utterance attributed to the current speaker. The attributed stream is
//! chunked and emitted as sibling bullets, exactly like the pendant
//! dialect. No usable utterances falls back to the standard renderer.

use crate::common::chunk::{chunk_text, ChunkerLimits};
use crate::common::dates::WEEKDAY_PAT;
use crate::common::tuning::{APP_MIN_SPEAKER_LINES, APP_SPEAKER_MAX_WORDS};
use crate::error::ConvertError;
use crate::formats::standard::render_standard;
use crate::formats::transcript_bullets;
use crate::renderer::TanaRenderer;
use crate::{ConvertOptions, TANA_HEADER};
use once_cell::sync::Lazy;
use regex::Regex;

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{WEEKDAY_PAT},?\s+\d{{1,2}}:\d{{2}}\s*(?:AM|PM)$"
    ))
    .unwrap()
});

/// Renderer for app-recorder speaker transcripts
pub struct AppRenderer {
    min_timestamps: usize,
    limits: ChunkerLimits,
}

impl AppRenderer {
    pub fn new(options: &ConvertOptions) -> Self {
        AppRenderer {
            min_timestamps: options.app_min_timestamps,
            limits: options.chunking,
        }
    }
}

fn is_timestamp(line: &str) -> bool {
    TIMESTAMP_RE.is_match(line.trim())
}

/// A short non-stamp line directly followed by a blank line names a speaker.
fn is_speaker_name(lines: &[&str], i: usize) -> bool {
    let line = lines[i].trim();
    if line.is_empty() || is_timestamp(line) {
        return false;
    }
    if line.split_whitespace().count() > APP_SPEAKER_MAX_WORDS {
        return false;
    }
    matches!(lines.get(i + 1), Some(next) if next.trim().is_empty())
}

impl TanaRenderer for AppRenderer {
    fn name(&self) -> &str {
        "app"
    }

    fn description(&self) -> &str {
        "App recorder speaker transcripts"
    }

    fn matches(&self, input: &str) -> bool {
        let lines: Vec<&str> = input.lines().collect();
        let speaker_lines = (0..lines.len())
            .filter(|&i| is_speaker_name(&lines, i))
            .count();
        let timestamps = lines.iter().filter(|line| is_timestamp(line)).count();
        speaker_lines >= APP_MIN_SPEAKER_LINES && timestamps >= self.min_timestamps
    }

    fn render(&self, input: &str) -> Result<String, ConvertError> {
        let lines: Vec<&str> = input.lines().collect();
        let mut speaker: Option<String> = None;
        let mut segments = Vec::new();

        for i in 0..lines.len() {
            let line = lines[i].trim();
            if line.is_empty() || is_timestamp(line) {
                continue;
            }
            if is_speaker_name(&lines, i) {
                speaker = Some(line.to_string());
                continue;
            }
            match &speaker {
                Some(name) => segments.push(format!("{name}: {line}")),
                None => segments.push(line.to_string()),
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
