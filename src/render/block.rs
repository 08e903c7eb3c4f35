//! Recursive node dispatch.

use crate::model::Node;

use super::text::render_text;
use super::{BlockProps, Element, RenderContext};

/// Render one node and its subtree.
///
/// Returns `None` when no renderer is registered for the node's type; the
/// type is recorded in the context and the subtree is not visited.
pub fn render_block(node: &Node, ctx: &mut RenderContext) -> Option<Element> {
    let type_name = node.type_name();
    let Some(renderer) = ctx.lookup_block(type_name) else {
        ctx.record_missing_block(type_name);
        return None;
    };

    let kind = node.kind();

    if kind.is_some_and(|k| k.is_void()) {
        let props = BlockProps {
            node,
            children: None,
            plain_text: None,
        };
        return Some(renderer(props, &*ctx));
    }

    if kind.is_some_and(|k| k.is_block_level()) && is_blank(node.children()) {
        return Some(Element::LineBreak);
    }

    let plain_text = kind
        .filter(|k| k.carries_plain_text())
        .map(|_| node.plain_text());

    let children = render_children(node.children(), ctx);

    let props = BlockProps {
        node,
        children: Some(children),
        plain_text,
    };
    Some(renderer(props, &*ctx))
}

/// Render a child sequence, skipping nodes that produced nothing.
pub fn render_children(children: &[Node], ctx: &mut RenderContext) -> Vec<Element> {
    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Node::Text(text) => out.extend(render_text(text, ctx)),
            other => out.extend(render_block(other, ctx)),
        }
    }
    out
}

/// A lone empty text leaf: the editor's representation of a blank line.
fn is_blank(children: &[Node]) -> bool {
    matches!(children, [Node::Text(text)] if text.text.is_empty())
}
