//! Chunk reassembly properties

use proptest::prelude::*;
use tana_convert::{chunk_text, split_paste, ChunkerLimits};

fn limits(max_size: usize, min_size: usize) -> ChunkerLimits {
    ChunkerLimits { max_size, min_size }
}

#[test]
fn test_single_chunk_identity() {
    let chunks = chunk_text("a short transcript", &ChunkerLimits::default()).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "a short transcript");
}

#[test]
fn test_no_chunk_is_empty() {
    let text = "word. ".repeat(200);
    for chunk in chunk_text(&text, &limits(40, 5)).unwrap() {
        assert!(!chunk.content.trim().is_empty());
    }
}

proptest! {
    /// Reassembling chunk contents with single spaces reproduces the source
    /// up to whitespace normalization at cut points.
    #[test]
    fn prop_chunk_reassembly(
        words in proptest::collection::vec("[a-zA-Z]{1,12}(\\.?)", 1..200),
        max_size in 20usize..200,
    ) {
        let text = words.join(" ");
        let chunks = chunk_text(&text, &limits(max_size, 5)).unwrap();

        let rejoined = chunks
            .iter()
            .map(|c| c.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let normalized: Vec<&str> = text.split_whitespace().collect();
        let recovered: Vec<&str> = rejoined.split_whitespace().collect();
        prop_assert_eq!(recovered, normalized);
    }

    /// No cut falls inside a word: every chunk's content is a substring of
    /// the source bounded by whitespace or the text's ends.
    #[test]
    fn prop_chunks_never_split_words(
        words in proptest::collection::vec("[a-z]{1,10}", 1..150),
        max_size in 15usize..120,
    ) {
        let text = words.join(" ");
        for chunk in chunk_text(&text, &limits(max_size, 3)).unwrap() {
            for word in chunk.content.split_whitespace() {
                prop_assert!(
                    words.iter().any(|w| {
                        let w: &str = w;
                        w == word || format!("{w}.") == word
                    }),
                    "fragment {word:?} is not a source word"
                );
            }
        }
    }

    /// Chunk numbering is dense and consistent.
    #[test]
    fn prop_chunk_numbering(
        words in proptest::collection::vec("[a-z]{1,8}", 1..150),
        max_size in 20usize..100,
    ) {
        let chunks = chunk_text(&words.join(" "), &limits(max_size, 3)).unwrap();
        let total = chunks.len();
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.number, i + 1);
            prop_assert_eq!(chunk.total, total);
            prop_assert_eq!(chunk.word_count, chunk.content.split_whitespace().count());
        }
    }

    /// Splitting a rendered paste loses no body lines and re-heads each piece.
    #[test]
    fn prop_split_paste_preserves_lines(
        body in proptest::collection::vec("- [a-z ]{1,40}", 1..60),
        max_size in 60usize..400,
    ) {
        let doc = format!("%%tana%%\n{}", body.join("\n"));
        let pieces = split_paste(&doc, max_size);
        let mut recovered = Vec::new();
        for piece in &pieces {
            let mut lines = piece.lines();
            prop_assert_eq!(lines.next(), Some("%%tana%%"));
            recovered.extend(lines.map(str::to_string));
        }
        prop_assert_eq!(recovered, body);
    }
}
