//! The node taxonomy.

use super::{ImageMeta, TextNode};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A full document: the ordered list of top-level nodes.
pub type BlocksContent = Vec<Node>;

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A paragraph of inline content
    Paragraph {
        /// Inline children
        children: Vec<Node>,
    },

    /// A block quote
    Quote {
        /// Inline children
        children: Vec<Node>,
    },

    /// A code block
    Code {
        /// Inline children
        children: Vec<Node>,
    },

    /// A heading
    Heading {
        /// Heading level
        level: HeadingLevel,
        /// Inline children
        children: Vec<Node>,
    },

    /// An ordered or unordered list
    List {
        /// List format
        format: ListFormat,
        /// List items and nested lists
        children: Vec<Node>,
    },

    /// A list item (only valid inside a list)
    ListItem {
        /// Inline children
        children: Vec<Node>,
    },

    /// An image; the editor always stores one empty text child, which is ignored
    Image {
        /// Asset metadata
        image: ImageMeta,
        /// Placeholder children
        children: Vec<Node>,
    },

    /// A text leaf
    Text(TextNode),

    /// A hyperlink
    Link(LinkNode),

    /// A node whose type is outside the taxonomy.
    ///
    /// Rendered only when a renderer was registered for `kind`.
    Custom {
        /// The `type` value from the source
        kind: String,
        /// Remaining attributes, excluding `type` and `children`
        attributes: Map<String, Value>,
        /// Children, if the source carried any
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a paragraph.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    /// Create a paragraph holding one plain text leaf.
    pub fn paragraph_text(text: impl Into<String>) -> Self {
        Node::Paragraph {
            children: vec![Node::text(text)],
        }
    }

    /// Create a quote.
    pub fn quote(children: Vec<Node>) -> Self {
        Node::Quote { children }
    }

    /// Create a code block.
    pub fn code(children: Vec<Node>) -> Self {
        Node::Code { children }
    }

    /// Create a heading.
    pub fn heading(level: HeadingLevel, children: Vec<Node>) -> Self {
        Node::Heading { level, children }
    }

    /// Create a list.
    pub fn list(format: ListFormat, children: Vec<Node>) -> Self {
        Node::List { format, children }
    }

    /// Create a list item.
    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem { children }
    }

    /// Create an image block with the editor's placeholder child.
    pub fn image(image: ImageMeta) -> Self {
        Node::Image {
            image,
            children: vec![Node::text("")],
        }
    }

    /// Create a plain text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::new(text))
    }

    /// Create a link.
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(LinkNode::new(url, children))
    }

    /// Create a node of a type outside the taxonomy.
    pub fn custom(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Custom {
            kind: kind.into(),
            attributes: Map::new(),
            children,
        }
    }

    /// The type name as it appears in the source document.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::Custom { kind, .. } => kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    /// The taxonomy kind used for renderer lookup, if this node has one.
    ///
    /// Text leaves and custom nodes have no `BlockKind`.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Node::Paragraph { .. } => Some(BlockKind::Paragraph),
            Node::Quote { .. } => Some(BlockKind::Quote),
            Node::Code { .. } => Some(BlockKind::Code),
            Node::Heading { .. } => Some(BlockKind::Heading),
            Node::List { .. } => Some(BlockKind::List),
            Node::ListItem { .. } => Some(BlockKind::ListItem),
            Node::Image { .. } => Some(BlockKind::Image),
            Node::Link(_) => Some(BlockKind::Link),
            Node::Text(_) | Node::Custom { .. } => None,
        }
    }

    /// Child nodes, in authoring order. Leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph { children }
            | Node::Quote { children }
            | Node::Code { children }
            | Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Image { children, .. }
            | Node::Custom { children, .. } => children,
            Node::Link(link) => &link.children,
            Node::Text(_) => &[],
        }
    }

    /// The text leaf, if this node is one.
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Check whether this node is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Heading level, for headings.
    pub fn level(&self) -> Option<HeadingLevel> {
        match self {
            Node::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// List format, for lists.
    pub fn format(&self) -> Option<ListFormat> {
        match self {
            Node::List { format, .. } => Some(*format),
            _ => None,
        }
    }

    /// Image metadata, for images.
    pub fn image_meta(&self) -> Option<&ImageMeta> {
        match self {
            Node::Image { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Link attributes, for links.
    pub fn as_link(&self) -> Option<&LinkNode> {
        match self {
            Node::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Raw attributes, for custom nodes.
    pub fn attributes(&self) -> Option<&Map<String, Value>> {
        match self {
            Node::Custom { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Plain text of the subtree's direct text leaves and links.
    ///
    /// Modifier flags are ignored; children other than text and links
    /// contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_plain_text(self.children(), &mut out);
        out
    }
}

fn collect_plain_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(&text.text),
            Node::Link(link) => collect_plain_text(&link.children, out),
            _ => {}
        }
    }
}

/// A hyperlink node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkNode {
    /// Target URL
    pub url: String,

    /// Browsing context (`_blank`, ...)
    pub target: Option<String>,

    /// Link relationship (`noopener`, ...)
    pub rel: Option<String>,

    /// Text children
    pub children: Vec<Node>,
}

impl LinkNode {
    /// Create a link without target or rel.
    pub fn new(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            url: url.into(),
            target: None,
            rel: None,
            children,
        }
    }

    /// Set the target attribute.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the rel attribute.
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }
}

/// Keys of the block renderer table that belong to the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `paragraph`
    Paragraph,
    /// `quote`
    Quote,
    /// `code`
    Code,
    /// `heading`
    Heading,
    /// `list`
    List,
    /// `list-item`
    ListItem,
    /// `link`
    Link,
    /// `image`
    Image,
}

impl BlockKind {
    /// Every kind with a default renderer.
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Paragraph,
        BlockKind::Quote,
        BlockKind::Code,
        BlockKind::Heading,
        BlockKind::List,
        BlockKind::ListItem,
        BlockKind::Link,
        BlockKind::Image,
    ];

    /// The type name used in the source document.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::Heading => "heading",
            BlockKind::List => "list",
            BlockKind::ListItem => "list-item",
            BlockKind::Link => "link",
            BlockKind::Image => "image",
        }
    }

    /// Void kinds never render their children.
    pub fn is_void(&self) -> bool {
        matches!(self, BlockKind::Image)
    }

    /// Kinds that may appear at the top of a document.
    pub fn is_block_level(&self) -> bool {
        !matches!(self, BlockKind::ListItem | BlockKind::Link)
    }

    /// Kinds whose renderer receives a derived `plain_text`.
    pub fn carries_plain_text(&self) -> bool {
        matches!(self, BlockKind::Code | BlockKind::Heading)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown block type: {}", s))
    }
}

/// Heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Top-level heading.
    pub const H1: HeadingLevel = HeadingLevel(1);

    /// Create a level, rejecting values outside 1..=6.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(HeadingLevel(level))
    }

    /// Create a level, clamping into 1..=6.
    pub fn clamped(level: i64) -> Self {
        HeadingLevel(level.clamp(1, 6) as u8)
    }

    /// Numeric level.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// HTML tag name (`h1`..`h6`).
    pub fn tag_name(&self) -> &'static str {
        match self.0 {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }
}

/// List format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListFormat {
    /// Numbered list
    Ordered,
    /// Bulleted list
    #[default]
    Unordered,
}

impl ListFormat {
    /// The literal used in the source document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListFormat::Ordered => "ordered",
            ListFormat::Unordered => "unordered",
        }
    }
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordered" => Ok(ListFormat::Ordered),
            "unordered" => Ok(ListFormat::Unordered),
            other => Err(format!("unknown list format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Node::paragraph_text("x").type_name(), "paragraph");
        assert_eq!(Node::list_item(vec![]).type_name(), "list-item");
        assert_eq!(Node::text("x").type_name(), "text");
        assert_eq!(Node::custom("callout", vec![]).type_name(), "callout");
        assert_eq!(Node::link("https://a", vec![]).type_name(), "link");
    }

    #[test]
    fn test_block_kind_flags() {
        assert!(BlockKind::Image.is_void());
        assert!(!BlockKind::Paragraph.is_void());
        assert!(BlockKind::Code.carries_plain_text());
        assert!(BlockKind::Heading.carries_plain_text());
        assert!(!BlockKind::Quote.carries_plain_text());
        assert!(!BlockKind::ListItem.is_block_level());
        assert!(BlockKind::List.is_block_level());
        assert_eq!("list-item".parse::<BlockKind>(), Ok(BlockKind::ListItem));
        assert!("text".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_none());
        assert!(HeadingLevel::new(7).is_none());
        assert_eq!(HeadingLevel::new(3).unwrap().tag_name(), "h3");
        assert_eq!(HeadingLevel::clamped(42).get(), 6);
        assert_eq!(HeadingLevel::clamped(-1).get(), 1);
    }

    #[test]
    fn test_plain_text_follows_links() {
        let heading = Node::heading(
            HeadingLevel::H1,
            vec![
                Node::Text(TextNode::bold("Hello ")),
                Node::link("https://test.com", vec![Node::text("World")]),
                Node::custom("mention", vec![Node::text("ignored")]),
            ],
        );
        assert_eq!(heading.plain_text(), "Hello World");
    }

    #[test]
    fn test_image_placeholder_child() {
        let image = Node::image(ImageMeta::new("a.png"));
        assert_eq!(image.children().len(), 1);
        assert_eq!(image.children()[0].as_text().map(|t| t.is_empty()), Some(true));
    }
}
