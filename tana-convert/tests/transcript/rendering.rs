//! Transcript rendering end to end

use tana_convert::{convert_to_tana, convert_with_options, ChunkerLimits, ConvertOptions};

#[test]
fn test_pendant_collapses_to_speaker_stream() {
    let input = "\
> [Alice](#startMs=0&endMs=1000): Hello there.
> [Bob](#startMs=1000&endMs=2000): Hi Alice.
> [Alice](#startMs=2000&endMs=3000): Shall we?";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- Alice: Hello there. Bob: Hi Alice. Alice: Shall we?"
    );
}

#[test]
fn test_app_attributes_speakers() {
    let input = "Alice\n\nMonday 10:30 AM\nHello.\nBob\n\nMonday 10:31 AM\nHi.";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- Alice: Hello. Bob: Hi."
    );
}

#[test]
fn test_youtube_transcript_spliced_into_document() {
    let input = "# Video\nAuthor: Jane Doe\nTranscript:\n0:00 first words\n0:10 second words";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- Video\n  - Author::Jane Doe\n  - Transcript::\n    - first words second words"
    );
}

#[test]
fn test_youtube_label_with_prefix_still_splices() {
    let input = "# Video\nFull Transcript: welcome to the talk everyone";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- Video\n  - Full Transcript::\n    - welcome to the talk everyone"
    );
}

#[test]
fn test_youtube_empty_transcript_falls_back() {
    let input = "# Video\nTranscript:";
    assert_eq!(
        convert_to_tana(Some(input)),
        "%%tana%%\n- Video\n  - Transcript:"
    );
}

#[test]
fn test_multi_part_output_is_labelled_and_flat() {
    let mut lines = Vec::new();
    for i in 0..40 {
        lines.push(format!(
            "> [Speaker](#startMs={i}&endMs={i}): Utterance number {i} with several words."
        ));
    }
    let options = ConvertOptions {
        chunking: ChunkerLimits {
            max_size: 250,
            min_size: 25,
        },
        ..ConvertOptions::default()
    };
    let output = convert_with_options(&lines.join("\n"), &options).unwrap();

    let body: Vec<&str> = output.lines().skip(1).collect();
    assert!(body.len() > 1);
    let total = body.len();
    for (i, line) in body.iter().enumerate() {
        // Flat sibling bullets with part labels.
        assert!(
            line.starts_with(&format!("- Part {}/{total} (", i + 1)),
            "line {line:?}"
        );
    }
}
