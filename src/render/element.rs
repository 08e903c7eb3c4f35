//! Presentation element tree produced by renderers.
//!
//! This is the host side of the render pipeline: renderers construct
//! labeled elements, raw line breaks, and non-rendering markers. The
//! serializers in this module's siblings turn a tree into HTML, JSON, or
//! plain text.

use serde::{Deserialize, Serialize};

/// One node of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    /// A labeled element with ordered attributes and children
    Tag {
        /// Tag name (`p`, `strong`, ...)
        name: String,
        /// Attributes in insertion order
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attrs: Vec<(String, String)>,
        /// Child elements
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Element>,
    },

    /// A run of text
    Text {
        /// The text content
        value: String,
    },

    /// A hard line break
    LineBreak,

    /// Diagnostic text that is never displayed
    Marker {
        /// The diagnostic message
        message: String,
    },
}

impl Element {
    /// Create an empty labeled element.
    pub fn tag(name: impl Into<String>) -> Self {
        Element::Tag {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text element.
    pub fn text(value: impl Into<String>) -> Self {
        Element::Text {
            value: value.into(),
        }
    }

    /// Create a hard line break.
    pub fn line_break() -> Self {
        Element::LineBreak
    }

    /// Create a marker.
    pub fn marker(message: impl Into<String>) -> Self {
        Element::Marker {
            message: message.into(),
        }
    }

    /// Add an attribute. No effect on non-tag elements.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Element::Tag { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    /// Add an attribute when a non-empty value is present.
    pub fn with_attr_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.with_attr(key, v),
            _ => self,
        }
    }

    /// Append children. No effect on non-tag elements.
    pub fn with_children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        if let Element::Tag { children, .. } = &mut self {
            children.extend(new_children);
        }
        self
    }

    /// Append one child.
    pub fn with_child(self, child: Element) -> Self {
        self.with_children(std::iter::once(child))
    }

    /// Replace the tag name. No effect on non-tag elements.
    pub fn renamed(mut self, new_name: impl Into<String>) -> Self {
        if let Element::Tag { name, .. } = &mut self {
            *name = new_name.into();
        }
        self
    }

    /// Tag name, for labeled elements.
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Tag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Attribute value by key, for labeled elements.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Element::Tag { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Children of a labeled element; empty for everything else.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Tag { children, .. } => children,
            _ => &[],
        }
    }

    /// Check if this is a diagnostic marker.
    pub fn is_marker(&self) -> bool {
        matches!(self, Element::Marker { .. })
    }

    /// Check if this is a hard line break.
    pub fn is_line_break(&self) -> bool {
        matches!(self, Element::LineBreak)
    }

    /// Check if this element contributes visible content.
    pub fn is_content(&self) -> bool {
        !self.is_marker()
    }

    /// Concatenated text of the subtree; markers and breaks contribute nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text { value } => out.push_str(value),
            Element::Tag { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Element::LineBreak | Element::Marker { .. } => {}
        }
    }

    /// Depth-first iterator over this element and its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Depth-first, document-order traversal of an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().iter().rev());
        Some(next)
    }
}
