//! Renderer implementations
//!
//! Each module implements [`crate::renderer::TanaRenderer`] for one input
//! dialect. The transcript dialects share the chunk-to-bullet step here.

pub mod app;
pub mod pendant;
pub mod standard;
pub mod youtube;

use crate::common::chunk::TranscriptChunk;

/// Bullet text for each transcript chunk: the bare content when the
/// transcript fits one chunk, a `Part n/total (w words):` prefix per chunk
/// otherwise.
pub(crate) fn transcript_bullets(chunks: &[TranscriptChunk]) -> Vec<String> {
    if chunks.len() == 1 {
        return vec![chunks[0].content.clone()];
    }
    chunks
        .iter()
        .map(|c| {
            format!(
                "Part {}/{} ({} words): {}",
                c.number, c.total, c.word_count, c.content
            )
        })
        .collect()
}
