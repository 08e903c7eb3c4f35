//! Default renderers producing a minimal semantic HTML element tree.

use crate::model::{BlockKind, ListFormat, Modifier};

use super::{BlockRenderers, Element, ModifierRenderers};

/// One renderer per taxonomy kind.
pub(crate) fn block_renderers() -> BlockRenderers {
    BlockRenderers::new()
        .with(BlockKind::Paragraph, |props, _| {
            Element::tag("p").with_children(props.into_children())
        })
        .with(BlockKind::Quote, |props, _| {
            Element::tag("blockquote").with_children(props.into_children())
        })
        .with(BlockKind::Code, |props, _| {
            let code = props.plain_text.unwrap_or_default();
            Element::tag("pre").with_child(Element::tag("code").with_child(Element::text(code)))
        })
        .with(BlockKind::Heading, |props, _| {
            let tag = props.level().map(|l| l.tag_name()).unwrap_or("h1");
            Element::tag(tag).with_children(props.into_children())
        })
        .with(BlockKind::Link, |props, _| {
            let mut element = Element::tag("a");
            if let Some(link) = props.link() {
                element = element
                    .with_attr("href", link.url.as_str())
                    .with_attr_opt("target", link.target.as_deref())
                    .with_attr_opt("rel", link.rel.as_deref());
            }
            element.with_children(props.into_children())
        })
        .with(BlockKind::List, |props, _| {
            let tag = match props.format() {
                Some(ListFormat::Ordered) => "ol",
                _ => "ul",
            };
            Element::tag(tag).with_children(props.into_children())
        })
        .with(BlockKind::ListItem, |props, _| {
            Element::tag("li").with_children(props.into_children())
        })
        .with(BlockKind::Image, |props, _| {
            let mut element = Element::tag("img");
            if let Some(image) = props.image() {
                element = element
                    .with_attr("src", image.url.as_str())
                    .with_attr_opt("alt", image.alt());
            }
            element
        })
}

/// One renderer per known modifier.
pub(crate) fn modifier_renderers() -> ModifierRenderers {
    Modifier::ALL
        .into_iter()
        .fold(ModifierRenderers::new(), |table, modifier| {
            let tag = modifier_tag(modifier);
            table.with(modifier, move |props, _| {
                Element::tag(tag).with_children(props.children)
            })
        })
}

/// Tag name used by the default renderer of a modifier.
pub fn modifier_tag(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Bold => "strong",
        Modifier::Italic => "em",
        Modifier::Underline => "u",
        Modifier::Strikethrough => "del",
        Modifier::Code => "code",
    }
}
