//! Outline construction tests (headings, lists, indentation)

use insta::assert_snapshot;
use tana_convert::convert_to_tana;

#[test]
fn test_header_always_first_and_unique() {
    for input in [
        "plain prose",
        "# A heading",
        "%%tana%%\n- already pasted",
        "- a\n- b",
    ] {
        let output = convert_to_tana(Some(input));
        assert!(output.starts_with("%%tana%%\n"), "input {input:?}");
        assert_eq!(output.matches("%%tana%%").count(), 1, "input {input:?}");
    }
}

#[test]
fn test_null_safety_placeholder() {
    for input in [None, Some(""), Some("   "), Some(" \n \t ")] {
        assert_eq!(convert_to_tana(input), "%%tana%%\n- No text selected");
    }
}

#[test]
fn test_heading_nesting_increases_indent_per_depth() {
    assert_eq!(
        convert_to_tana(Some("# A\n## B\n### C")),
        "%%tana%%\n- A\n  - B\n    - C"
    );
}

#[test]
fn test_list_round_trip_three_siblings() {
    assert_eq!(
        convert_to_tana(Some("- First item\n- Second item\n- Third item")),
        "%%tana%%\n- First item\n- Second item\n- Third item"
    );
}

#[test]
fn test_numbered_list_normalized_to_plain_bullets() {
    assert_eq!(
        convert_to_tana(Some("1. First item\n2. Second item")),
        "%%tana%%\n- First item\n- Second item"
    );
}

#[test]
fn test_plain_markdown_scenario() {
    assert_eq!(
        convert_to_tana(Some("# My Heading\n- List item")),
        "%%tana%%\n- My Heading\n  - List item"
    );
}

#[test]
fn test_every_line_is_header_or_bullet_shaped() {
    let input = "# Doc\nSome prose\n- item\n  - nested\n1. step\n```\ncode here\n```";
    let output = convert_to_tana(Some(input));
    for (i, line) in output.lines().enumerate() {
        if i == 0 {
            assert_eq!(line, "%%tana%%");
            continue;
        }
        let trimmed = line.trim_start();
        assert!(trimmed.starts_with("- "), "line {line:?}");
        assert_eq!(
            (line.len() - trimmed.len()) % 2,
            0,
            "indent is two spaces per level: {line:?}"
        );
    }
}

#[test]
fn test_flattened_tab_separated_entries_split() {
    let output = convert_to_tana(Some("- alpha\t- beta\t- gamma"));
    assert_eq!(output, "%%tana%%\n- alpha\n- beta\n- gamma");
}

#[test]
fn test_mixed_document_snapshot() {
    let input = "\
# Project kickoff

Status: active
Attendees list below.

## Agenda
1. Introductions
   - everyone says hello
2. Planning

## Notes
Shipped the prototype on 14th March 2016.
Some *emphasis* and ==highlights== here.

```
fn main() {}
```
";
    assert_snapshot!(convert_to_tana(Some(input)), @r###"
    %%tana%%
    - Project kickoff
      - Status::active
      - Attendees list below.
      - Agenda
        - Introductions
          - everyone says hello
        - Planning
      - Notes
        - Shipped the prototype on [[date:2016-03-14]].
        - Some __emphasis__ and ^^highlights^^ here.
        - fn main() {}
    "###);
}
