//! Parent resolution for classified lines
//!
//! Assigns every line a parent (another line or the root) from three
//! signals, in priority order:
//!
//! 1. Heading depth. A stack of open headings tracks the section the
//!    cursor is inside; a new heading pops entries of equal or greater
//!    depth and attaches to what remains.
//! 2. Numbered-list anchoring. A bullet indented deeper than the most
//!    recent numbered item becomes that item's child even when plain
//!    indent math would say otherwise.
//! 3. Indentation. Deeper than the previous content line means child,
//!    equal means sibling, shallower climbs the ancestor chain until a
//!    line of lesser indent (or a heading boundary) is found.
//!
//! Blank lines take no parent and reset the numbered anchor. Lines inside
//! a fenced code block inherit the fence's parent so the block renders as
//! a flat verbatim run.

use crate::common::line::{Line, Parent};
use crate::error::ConvertError;

/// Resolves the parent of every line in place.
///
/// Every assigned `Parent::Node(j)` satisfies `j < i` for the line at
/// index `i`; a violation reports `ConvertError::Hierarchy`.
pub fn build_hierarchy(lines: &mut [Line]) -> Result<(), ConvertError> {
    // (line index, heading depth) for each heading still open above the cursor.
    let mut heading_stack: Vec<(usize, usize)> = Vec::new();
    let mut last_content: Option<usize> = None;
    let mut last_numbered: Option<usize> = None;
    let mut in_code = false;
    let mut fence_parent: Option<Parent> = None;

    for i in 0..lines.len() {
        if lines[i].is_code_fence {
            if in_code {
                // Closing fence ends the verbatim run.
                lines[i].parent = fence_parent;
                in_code = false;
                fence_parent = None;
            } else {
                let parent = resolve_parent(lines, i, &heading_stack, last_content, last_numbered);
                lines[i].parent = Some(parent);
                fence_parent = Some(parent);
                in_code = true;
            }
            last_content = Some(i);
            continue;
        }

        if in_code {
            lines[i].parent = fence_parent;
            continue;
        }

        if lines[i].is_blank() {
            last_numbered = None;
            continue;
        }

        if lines[i].is_header {
            let depth = lines[i].heading_depth().unwrap_or(1);
            while heading_stack.last().is_some_and(|&(_, d)| d >= depth) {
                heading_stack.pop();
            }
            let parent = match heading_stack.last() {
                Some(&(idx, _)) => Parent::Node(idx),
                None => Parent::Root,
            };
            lines[i].parent = Some(parent);
            heading_stack.push((i, depth));
            last_content = Some(i);
            last_numbered = None;
            continue;
        }

        // Numbered items always sit at the top of their section; deeper
        // bullets attach to them through the anchor rule instead.
        let parent = if lines[i].is_numbered {
            match heading_stack.last() {
                Some(&(idx, _)) => Parent::Node(idx),
                None => Parent::Root,
            }
        } else {
            resolve_parent(lines, i, &heading_stack, last_content, last_numbered)
        };
        lines[i].parent = Some(parent);
        if lines[i].is_numbered {
            last_numbered = Some(i);
        }
        last_content = Some(i);
    }

    for (i, line) in lines.iter().enumerate() {
        if let Some(Parent::Node(j)) = line.parent {
            if j >= i {
                return Err(ConvertError::Hierarchy(format!(
                    "line {i} resolved to non-earlier parent {j}"
                )));
            }
        }
    }
    Ok(())
}

fn resolve_parent(
    lines: &[Line],
    i: usize,
    heading_stack: &[(usize, usize)],
    last_content: Option<usize>,
    last_numbered: Option<usize>,
) -> Parent {
    let section_top = match heading_stack.last() {
        Some(&(idx, _)) => Parent::Node(idx),
        None => Parent::Root,
    };

    // A bullet indented past the most recent numbered item attaches to it.
    if lines[i].is_bullet {
        if let Some(n) = last_numbered {
            if lines[i].indent_columns > lines[n].indent_columns {
                return Parent::Node(n);
            }
        }
    }

    let Some(prev) = last_content else {
        return section_top;
    };

    if lines[prev].is_header {
        return Parent::Node(prev);
    }

    let indent = lines[i].indent_columns;
    if indent > lines[prev].indent_columns {
        return Parent::Node(prev);
    }

    // Walk up the previous line's ancestor chain to find where this
    // indent level attaches. A heading boundary stops the climb.
    let mut cursor = prev;
    loop {
        if lines[cursor].is_header {
            return Parent::Node(cursor);
        }
        if lines[cursor].indent_columns < indent {
            return Parent::Node(cursor);
        }
        if lines[cursor].indent_columns == indent {
            // Sibling: share its parent.
            return match lines[cursor].parent {
                Some(p) => p,
                None => section_top,
            };
        }
        match lines[cursor].parent {
            Some(Parent::Node(j)) => cursor = j,
            Some(Parent::Root) | None => return section_top,
        }
    }
}
