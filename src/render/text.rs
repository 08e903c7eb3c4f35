//! Text leaf rendering: line-break segmentation and modifier composition.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::TextNode;

use super::{Element, ModifierProps, RenderContext};

fn line_terminator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\r|\n").unwrap())
}

/// Split text on line terminators, with a line break between segments.
///
/// `\r\n` counts as one terminator. Empty segments produce no text
/// element, but the surrounding breaks are kept. Text without any
/// terminator comes back as a single element, even when empty.
pub fn split_line_breaks(text: &str) -> Vec<Element> {
    let mut parts = line_terminator().split(text);
    let first = parts.next().unwrap_or_default();

    let mut elements = Vec::new();
    let mut segmented = false;
    for part in parts {
        if !segmented {
            if !first.is_empty() {
                elements.push(Element::text(first));
            }
            segmented = true;
        }
        elements.push(Element::LineBreak);
        if !part.is_empty() {
            elements.push(Element::text(part));
        }
    }

    if !segmented {
        return vec![Element::text(text)];
    }
    elements
}

/// Render one text leaf.
///
/// Active modifiers wrap the content in declaration order (bold, italic,
/// underline, strikethrough, code, then any extra names), so each one
/// ends up outside the previous. Modifiers without a renderer are recorded
/// in the context and leave the content unwrapped.
pub fn render_text(node: &TextNode, ctx: &mut RenderContext) -> Vec<Element> {
    let mut content = split_line_breaks(&node.text);

    for name in node.modifiers.active_names() {
        let Some(renderer) = ctx.lookup_modifier(name) else {
            ctx.record_missing_modifier(name);
            continue;
        };
        let wrapped = renderer(ModifierProps { children: content }, &*ctx);
        content = vec![wrapped];
    }

    content
}
