//! Field vs. prose disambiguation through the full pipeline

use tana_convert::convert_to_tana;

#[test]
fn test_prose_colon_not_converted() {
    let output = convert_to_tana(Some("Topic: Some details about the topic"));
    assert_eq!(output, "%%tana%%\n- Topic: Some details about the topic");
}

#[test]
fn test_short_value_in_list_becomes_field() {
    let output = convert_to_tana(Some("- Author: Jane Doe"));
    assert_eq!(output, "%%tana%%\n- Author::Jane Doe");
}

#[test]
fn test_metadata_vocabulary_key_becomes_field() {
    let output = convert_to_tana(Some("- URL: https://example.com/page"));
    assert_eq!(output, "%%tana%%\n- URL::https://example.com/page");
}

#[test]
fn test_numbered_item_colon_stays_prose() {
    let output = convert_to_tana(Some("1. Step one: open the terminal"));
    assert_eq!(output, "%%tana%%\n- Step one: open the terminal");
}

#[test]
fn test_instructional_key_stays_prose() {
    let output = convert_to_tana(Some("- Click here: the settings window"));
    assert_eq!(output, "%%tana%%\n- Click here: the settings window");
}

#[test]
fn test_existing_field_marker_untouched() {
    let output = convert_to_tana(Some("- Status::done"));
    assert_eq!(output, "%%tana%%\n- Status::done");
}

#[test]
fn test_table_pipe_line_untouched() {
    let output = convert_to_tana(Some("| Name: value | other |"));
    assert_eq!(output, "%%tana%%\n- | Name: value | other |");
}

#[test]
fn test_prose_value_after_metadata_key_stays_prose() {
    let output = convert_to_tana(Some("- Status: in review, waiting on Bob"));
    assert_eq!(output, "%%tana%%\n- Status: in review, waiting on Bob");
}

#[test]
fn test_punctuated_value_stays_prose() {
    let output = convert_to_tana(Some("- Result: passed, mostly"));
    assert_eq!(output, "%%tana%%\n- Result: passed, mostly");
}
