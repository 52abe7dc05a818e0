//! Transcript chunking
//!
//! Long transcripts are split into pieces small enough to paste as single
//! nodes. Cuts prefer a sentence end inside a search window below the size
//! target, fall back to the nearest word boundary, and as a last resort
//! move forward to the next whitespace. A cut never lands mid-word, so a
//! piece may exceed the target when a single unbroken token does.
//!
//! `split_paste` is the coarser, line-oriented variant used on a finished
//! rendered document: it never cuts inside a line and restarts every piece
//! with the paste header.

use crate::common::tuning::{CHUNK_WINDOW_CAP, TRANSCRIPT_CHUNK_MAX, TRANSCRIPT_CHUNK_MIN};
use crate::error::ConvertError;
use crate::TANA_HEADER;
use serde::Serialize;

/// Size bounds for transcript chunking, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerLimits {
    pub max_size: usize,
    pub min_size: usize,
}

impl Default for ChunkerLimits {
    fn default() -> Self {
        ChunkerLimits {
            max_size: TRANSCRIPT_CHUNK_MAX,
            min_size: TRANSCRIPT_CHUNK_MIN,
        }
    }
}

/// One piece of a chunked transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptChunk {
    pub content: String,
    /// 1-based position within the chunk sequence.
    pub number: usize,
    pub total: usize,
    pub word_count: usize,
}

/// Splits `text` into chunks of at most `limits.max_size` bytes where the
/// content allows it. Returns `ConvertError::Chunking` when `max_size` is
/// zero; empty input yields no chunks.
pub fn chunk_text(text: &str, limits: &ChunkerLimits) -> Result<Vec<TranscriptChunk>, ConvertError> {
    if limits.max_size == 0 {
        return Err(ConvertError::Chunking(
            "chunk max_size must be positive".to_string(),
        ));
    }

    let mut pieces = Vec::new();
    let mut remaining = text.trim();
    while !remaining.is_empty() {
        if remaining.len() <= limits.max_size {
            push_piece(&mut pieces, remaining);
            break;
        }
        let cut = find_cut(remaining, limits);
        let (piece, rest) = remaining.split_at(cut);
        push_piece(&mut pieces, piece);
        remaining = rest.trim_start();
    }

    let total = pieces.len();
    Ok(pieces
        .into_iter()
        .enumerate()
        .map(|(i, content)| TranscriptChunk {
            number: i + 1,
            total,
            word_count: content.split_whitespace().count(),
            content,
        })
        .collect())
}

fn push_piece(pieces: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        pieces.push(piece.to_string());
    }
}

/// Finds the byte offset to cut at. Only ever returns an offset sitting on
/// ASCII whitespace or the end of the text, so slicing there is safe.
fn find_cut(text: &str, limits: &ChunkerLimits) -> usize {
    let bytes = text.as_bytes();
    let target = limits.max_size;
    let window = (text.len() / 10).min(CHUNK_WINDOW_CAP);
    let floor = target.saturating_sub(window);

    let mut word_cut = None;
    let mut i = target.min(bytes.len() - 1);
    while i > floor {
        if matches!(bytes[i - 1], b'.' | b'!' | b'?') && bytes[i].is_ascii_whitespace() {
            // Sentence end: keep the punctuation, drop the whitespace.
            if text[..i].trim().len() >= limits.min_size {
                return i;
            }
            break;
        }
        if word_cut.is_none() && bytes[i].is_ascii_whitespace() {
            word_cut = Some(i);
        }
        i -= 1;
    }

    match word_cut {
        Some(cut) if text[..cut].trim().len() >= limits.min_size => cut,
        _ => forward_cut(bytes, target),
    }
}

fn forward_cut(bytes: &[u8], target: usize) -> usize {
    bytes[target..]
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .map(|offset| target + offset)
        .unwrap_or(bytes.len())
}

/// Splits a rendered document into pieces of at most `max_size` bytes,
/// cutting only between lines. Every piece starts with the paste header.
/// A `max_size` of zero disables splitting.
pub fn split_paste(content: &str, max_size: usize) -> Vec<String> {
    if max_size == 0 || content.len() <= max_size {
        return vec![content.to_string()];
    }

    let mut lines: Vec<&str> = content.lines().collect();
    if lines.first() == Some(&TANA_HEADER) {
        lines.remove(0);
    }

    let mut pieces = Vec::new();
    let mut current: Vec<&str> = vec![TANA_HEADER];
    let mut size = TANA_HEADER.len() + 1;
    for line in lines {
        let line_size = line.len() + 1;
        if size + line_size > max_size && current.len() > 1 {
            pieces.push(current.join("\n"));
            current = vec![TANA_HEADER];
            size = TANA_HEADER.len() + 1;
        }
        current.push(line);
        size += line_size;
    }
    if current.len() > 1 {
        pieces.push(current.join("\n"));
    }
    pieces
}
