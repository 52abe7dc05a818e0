//! Transcript dialect tests
//!
//! Detection priority, speaker attribution, chunk splicing and the chunk
//! reassembly property.

mod chunking;
mod detection;
mod rendering;
