//! Entry point: render a whole document.

use crate::error::{Error, Result};
use crate::model::{BlockKind, Modifier, Node};

use super::block::render_block;
use super::{
    BlockProps, BlockRenderers, Element, ModifierProps, ModifierRenderers, RenderContext,
    RenderResult,
};

/// Document renderer holding the caller's renderer overrides.
///
/// Overrides are layered on top of the default tables at the start of
/// every call to [`render`](Self::render); entries not overridden keep
/// their default renderer. The renderer is immutable while rendering and
/// can be shared between threads.
///
/// # Example
///
/// ```
/// use blockrender::model::{BlockKind, Node};
/// use blockrender::render::{BlocksRenderer, Element};
///
/// let renderer = BlocksRenderer::new().with_block(BlockKind::Paragraph, |props, _| {
///     Element::tag("p")
///         .with_attr("class", "text-red")
///         .with_children(props.into_children())
/// });
///
/// let content = vec![Node::paragraph_text("Hello")];
/// let elements = renderer.render(Some(content.as_slice())).unwrap();
/// assert_eq!(elements[0].attr("class"), Some("text-red"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlocksRenderer {
    blocks: BlockRenderers,
    modifiers: ModifierRenderers,
}

impl BlocksRenderer {
    /// Create a renderer that uses the default tables only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the block override table.
    pub fn with_blocks(mut self, blocks: BlockRenderers) -> Self {
        self.blocks = blocks;
        self
    }

    /// Replace the modifier override table.
    pub fn with_modifiers(mut self, modifiers: ModifierRenderers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Override the renderer of one taxonomy kind.
    pub fn with_block<F>(mut self, kind: BlockKind, renderer: F) -> Self
    where
        F: Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.blocks = self.blocks.with(kind, renderer);
        self
    }

    /// Register a renderer for a type outside the taxonomy.
    pub fn with_custom_block<F>(mut self, type_name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.blocks = self.blocks.with_type(type_name, renderer);
        self
    }

    /// Override the renderer of one modifier.
    pub fn with_modifier<F>(mut self, modifier: Modifier, renderer: F) -> Self
    where
        F: Fn(ModifierProps, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.modifiers = self.modifiers.with(modifier, renderer);
        self
    }

    /// Register a renderer for a modifier name outside the known set.
    pub fn with_custom_modifier<F>(mut self, name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(ModifierProps, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.modifiers = self.modifiers.with_name(name, renderer);
        self
    }

    /// Block overrides.
    pub fn block_overrides(&self) -> &BlockRenderers {
        &self.blocks
    }

    /// Modifier overrides.
    pub fn modifier_overrides(&self) -> &ModifierRenderers {
        &self.modifiers
    }

    /// Build a fresh context with the merged tables.
    pub fn context(&self) -> RenderContext {
        RenderContext::new(
            BlockRenderers::defaults().merged(&self.blocks),
            ModifierRenderers::defaults().merged(&self.modifiers),
        )
    }

    /// Render a document.
    ///
    /// Fails with [`Error::EmptyInput`] when `content` is `None`. An empty
    /// document renders to an empty list. When unknown types were met, the
    /// output starts with marker elements naming them.
    pub fn render(&self, content: Option<&[Node]>) -> Result<Vec<Element>> {
        Ok(self.render_with_stats(content)?.elements)
    }

    /// Render a document and collect diagnostics and statistics.
    pub fn render_with_stats(&self, content: Option<&[Node]>) -> Result<RenderResult> {
        let content = content.ok_or(Error::EmptyInput)?;

        log::debug!("Rendering {} top-level nodes", content.len());

        let mut ctx = self.context();
        let mut elements: Vec<Element> = content
            .iter()
            .filter_map(|node| render_block(node, &mut ctx))
            .collect();

        let (missing_blocks, missing_modifiers) = ctx.into_diagnostics();

        if !missing_blocks.is_empty() {
            elements.insert(
                0,
                Element::marker(format!("missingBlockTypes: {}", missing_blocks.joined())),
            );
        }
        if !missing_modifiers.is_empty() {
            elements.insert(
                0,
                Element::marker(format!(
                    "missingModifierTypes: {}",
                    missing_modifiers.joined()
                )),
            );
        }

        Ok(RenderResult::new(
            elements,
            missing_blocks.into_names(),
            missing_modifiers.into_names(),
        ))
    }
}

/// Render a document with the default renderers.
pub fn render(content: Option<&[Node]>) -> Result<Vec<Element>> {
    BlocksRenderer::new().render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextNode;

    #[test]
    fn test_none_is_empty_input() {
        let result = render(None);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_empty_document() {
        let elements = render(Some(&[][..])).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_markers_come_first() {
        let mut glowing = TextNode::new("x");
        glowing.modifiers.extra.push("glow".to_string());

        let content = vec![
            Node::custom("foo", vec![]),
            Node::paragraph(vec![Node::Text(glowing)]),
            Node::custom("bar", vec![]),
            Node::custom("foo", vec![]),
        ];
        let elements = render(Some(content.as_slice())).unwrap();

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0], Element::marker("missingModifierTypes: glow"));
        assert_eq!(elements[1], Element::marker("missingBlockTypes: foo,bar"));
        assert_eq!(elements[2].name(), Some("p"));
    }

    #[test]
    fn test_each_invocation_gets_a_fresh_context() {
        let renderer = BlocksRenderer::new();
        let with_unknown = vec![Node::custom("foo", vec![])];
        let clean = vec![Node::paragraph_text("ok")];

        let first = renderer.render_with_stats(Some(with_unknown.as_slice())).unwrap();
        let second = renderer.render_with_stats(Some(clean.as_slice())).unwrap();

        assert_eq!(first.missing_block_types, vec!["foo".to_string()]);
        assert!(second.missing_block_types.is_empty());
        assert!(!second.elements.iter().any(Element::is_marker));
    }

    #[test]
    fn test_override_keeps_other_defaults() {
        let renderer = BlocksRenderer::new().with_block(BlockKind::Paragraph, |props, _| {
            Element::tag("p")
                .with_attr("class", "text-red")
                .with_children(props.into_children())
        });
        let content = vec![
            Node::paragraph_text("a"),
            Node::quote(vec![Node::text("b")]),
        ];
        let elements = renderer.render(Some(content.as_slice())).unwrap();

        assert_eq!(elements[0].attr("class"), Some("text-red"));
        assert_eq!(elements[1].name(), Some("blockquote"));
    }

    #[test]
    fn test_custom_block_registration() {
        let renderer = BlocksRenderer::new().with_custom_block("callout", |props, _| {
            Element::tag("aside").with_children(props.into_children())
        });
        let content = vec![Node::custom("callout", vec![Node::text("Note")])];
        let elements = renderer.render(Some(content.as_slice())).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name(), Some("aside"));
        assert_eq!(elements[0].text_content(), "Note");
    }

    #[test]
    fn test_renderer_reads_context() {
        let renderer = BlocksRenderer::new().with_block(BlockKind::Quote, |_, ctx| {
            Element::tag("blockquote").with_attr(
                "data-missing",
                ctx.missing_block_types().joined(),
            )
        });
        let content = vec![Node::quote(vec![Node::custom("foo", vec![])])];
        let elements = renderer.render(Some(content.as_slice())).unwrap();

        let quote = elements.iter().find(|e| e.is_content()).unwrap();
        assert_eq!(quote.attr("data-missing"), Some("foo"));
    }
}
