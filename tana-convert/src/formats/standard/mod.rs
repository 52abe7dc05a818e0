//! Standard renderer: Markdown and plain prose
//!
//! The catch-all dialect. Classifies lines, builds the hierarchy and walks
//! it in input order. A node's render indent is its parent's plus one,
//! starting at zero for top-level nodes. List markers are stripped (checkbox
//! markers stay, they are content), headers emit their text undecorated, and
//! every other line runs through the field, date and inline rewrites. Code
//! fence interiors are emitted verbatim, one bullet per code line, with the
//! fence lines themselves dropped.

use crate::common::fields::{convert_field, LineContext};
use crate::common::hierarchy::build_hierarchy;
use crate::common::line::{classify_all, strip_heading, strip_marker, Line, Parent};
use crate::common::{dates, inline};
use crate::error::ConvertError;
use crate::renderer::TanaRenderer;
use crate::TANA_HEADER;

/// Renderer for ordinary Markdown and plain text
pub struct StandardRenderer;

impl TanaRenderer for StandardRenderer {
    fn name(&self) -> &str {
        "standard"
    }

    fn description(&self) -> &str {
        "Markdown and plain prose"
    }

    fn matches(&self, _input: &str) -> bool {
        // Total fallback: any string converts to something.
        true
    }

    fn render(&self, input: &str) -> Result<String, ConvertError> {
        render_standard(input)
    }
}

/// Full standard conversion: header line plus rendered body.
pub fn render_standard(input: &str) -> Result<String, ConvertError> {
    let body = render_body(input)?;
    if body.is_empty() {
        return Ok(TANA_HEADER.to_string());
    }
    Ok(format!("{TANA_HEADER}\n{}", body.join("\n")))
}

/// Rendered bullet lines without the header. Shared with the YouTube
/// renderer, which splices transcript chunks into this output.
pub(crate) fn render_body(input: &str) -> Result<Vec<String>, ConvertError> {
    let mut lines = classify_all(input);
    build_hierarchy(&mut lines)?;
    render_lines(&lines)
}

fn render_lines(lines: &[Line]) -> Result<Vec<String>, ConvertError> {
    let mut depths = vec![0usize; lines.len()];
    let mut out = Vec::new();
    let mut in_code = false;

    for (i, line) in lines.iter().enumerate() {
        // Blank lines never receive a parent and are never emitted.
        let Some(parent) = line.parent else {
            continue;
        };
        let depth = match parent {
            Parent::Root => 0,
            Parent::Node(j) => depths[j] + 1,
        };
        depths[i] = depth;

        if line.is_code_fence {
            in_code = !in_code;
            continue;
        }

        let content = if in_code {
            line.content.clone()
        } else if line.is_header {
            strip_heading(&line.content).to_string()
        } else {
            let stripped = if line.is_bullet || line.is_numbered {
                strip_marker(&line.content)
            } else {
                line.content.as_str()
            };
            let ctx = LineContext {
                is_bullet: line.is_bullet,
                is_numbered: line.is_numbered,
            };
            let text = convert_field(stripped, &ctx);
            let text = dates::convert_dates(&text);
            inline::format_inline(&text)
        };

        out.push(format!("{}- {content}", "  ".repeat(depth)));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_list_item() {
        assert_eq!(
            render_standard("# My Heading\n- List item").unwrap(),
            "%%tana%%\n- My Heading\n  - List item"
        );
    }

    #[test]
    fn test_heading_depths_nest() {
        assert_eq!(
            render_standard("# A\n## B\n### C").unwrap(),
            "%%tana%%\n- A\n  - B\n    - C"
        );
    }

    #[test]
    fn test_plain_prose_is_one_bullet_per_line() {
        assert_eq!(
            render_standard("first line\nsecond line").unwrap(),
            "%%tana%%\n- first line\n- second line"
        );
    }

    #[test]
    fn test_markers_stripped_checkboxes_kept() {
        let output = render_standard("- [x] done\n- [ ] pending\n1. step").unwrap();
        assert_eq!(
            output,
            "%%tana%%\n- [x] done\n- [ ] pending\n- step"
        );
    }

    #[test]
    fn test_field_and_inline_pipeline_applied() {
        let output = render_standard("- Author: Jane Doe\n- some *emphasis*").unwrap();
        assert_eq!(
            output,
            "%%tana%%\n- Author::Jane Doe\n- some __emphasis__"
        );
    }

    #[test]
    fn test_header_text_left_undecorated() {
        let output = render_standard("# Meeting 2016-03-14 with *notes*").unwrap();
        assert_eq!(output, "%%tana%%\n- Meeting 2016-03-14 with *notes*");
    }

    #[test]
    fn test_code_fence_emitted_verbatim() {
        let input = "# Setup\n```rust\nlet x: i32 = 1; // Note: not a field\n*raw*\n```";
        let output = render_standard(input).unwrap();
        assert_eq!(
            output,
            "%%tana%%\n- Setup\n  - let x: i32 = 1; // Note: not a field\n  - *raw*"
        );
    }

    #[test]
    fn test_blank_lines_not_emitted() {
        let output = render_standard("- a\n\n\n- b").unwrap();
        assert_eq!(output, "%%tana%%\n- a\n- b");
    }

    #[test]
    fn test_dates_rewritten_in_list_content() {
        let output = render_standard("- Shipped 14th March 2016").unwrap();
        assert_eq!(output, "%%tana%%\n- Shipped [[date:2016-03-14]]");
    }
}
