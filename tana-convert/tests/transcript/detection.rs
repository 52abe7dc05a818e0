//! Format detection priority

use tana_convert::RendererRegistry;

fn detected(input: &str) -> String {
    RendererRegistry::with_defaults()
        .detect(input)
        .expect("standard always matches")
        .name()
        .to_string()
}

#[test]
fn test_priority_order_is_fixed() {
    assert_eq!(
        RendererRegistry::with_defaults().list_renderers(),
        vec!["pendant", "app", "youtube", "standard"]
    );
}

#[test]
fn test_pendant_fingerprint() {
    let input = "\
> [Alice](#startMs=0&endMs=1000): Hello.
> [Bob](#startMs=1000&endMs=2000): Hi.
> [Alice](#startMs=2000&endMs=3000): Bye.";
    assert_eq!(detected(input), "pendant");
}

#[test]
fn test_two_pendant_lines_are_not_enough() {
    let input = "\
> [Alice](#startMs=0&endMs=1000): Hello.
> [Bob](#startMs=1000&endMs=2000): Hi.";
    assert_eq!(detected(input), "standard");
}

#[test]
fn test_app_fingerprint() {
    let input = "Alice\n\nMonday 10:30 AM\nHello.\nBob\n\nMonday 10:31 AM\nHi.";
    assert_eq!(detected(input), "app");
}

#[test]
fn test_youtube_label_detected() {
    assert_eq!(detected("# Video page\nTranscript:\n0:00 hello"), "youtube");
    assert_eq!(detected("# Video page\ntranscript:: hello"), "youtube");
}

#[test]
fn test_pendant_beats_youtube_label() {
    // Both fingerprints present: the earlier detector in the chain wins.
    let input = "\
Transcript:
> [Alice](#startMs=0&endMs=1000): Hello.
> [Bob](#startMs=1000&endMs=2000): Hi.
> [Alice](#startMs=2000&endMs=3000): Bye.";
    assert_eq!(detected(input), "pendant");
}

#[test]
fn test_markdown_falls_through_to_standard() {
    assert_eq!(detected("# Doc\n- item\n1. step"), "standard");
    assert_eq!(detected("plain prose only"), "standard");
}
