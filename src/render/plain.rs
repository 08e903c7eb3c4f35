//! Plain text output of element trees.

use super::Element;

/// Tags after which a newline is emitted.
const BLOCK_TAGS: &[&str] = &[
    "p", "blockquote", "pre", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "ul", "img",
    "figure", "section", "div", "aside",
];

/// Convert rendered elements to plain text.
///
/// Markers are skipped and line breaks become `\n`. Block-level tags end
/// their content with a newline; runs of blank lines are not collapsed.
/// Only the newline closing the last block is dropped, so breaks and
/// whitespace written by the content itself are kept.
pub fn to_plain_text(elements: &[Element]) -> String {
    let mut out = String::new();
    let mut block_break = false;
    for element in elements {
        write_text(element, &mut out, &mut block_break);
    }
    if block_break {
        out.pop();
    }
    out
}

/// `block_break` is set while the last character written is a newline
/// added by a closing block tag.
fn write_text(element: &Element, out: &mut String, block_break: &mut bool) {
    match element {
        Element::Text { value } => {
            if !value.is_empty() {
                out.push_str(value);
                *block_break = false;
            }
        }
        Element::LineBreak => {
            out.push('\n');
            *block_break = false;
        }
        Element::Marker { .. } => {}
        Element::Tag { name, children, .. } => {
            for child in children {
                write_text(child, out, block_break);
            }
            if BLOCK_TAGS.contains(&name.as_str()) && !out.ends_with('\n') {
                out.push('\n');
                *block_break = true;
            }
        }
    }
}
