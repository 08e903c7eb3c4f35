//! # blockrender
//!
//! Renderer for headless-CMS rich-text block documents.
//!
//! This library reads the JSON node tree produced by a block editor and
//! turns it into a tree of presentation elements through a table of
//! per-type renderer functions, which callers can partially override.
//! The element tree can then be serialized to HTML, JSON, or plain text.
//!
//! ## Quick Start
//!
//! ```
//! fn main() -> blockrender::Result<()> {
//!     let json = r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "Hello", "bold": true }] }]"#;
//!
//!     let html = blockrender::to_html(json)?;
//!     assert_eq!(html, "<p><strong>Hello</strong></p>");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Overridable renderers**: replace any block or modifier renderer, keep the rest
//! - **Unknown type diagnostics**: unmapped types are omitted and reported once
//! - **Multiple output formats**: HTML, plain text, JSON element trees
//! - **Lenient parsing**: repair malformed editor output instead of failing

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BlockKind, BlocksContent, HeadingLevel, ImageMeta, LinkNode, ListFormat, Modifier, Modifiers,
    Node, TextNode,
};
pub use parser::{parse_file, parse_str, ErrorMode, ParseOptions};
pub use render::{
    BlockProps, BlocksRenderer, Element, HtmlOptions, JsonFormat, ModifierProps, RenderContext,
    RenderResult, RenderStats,
};

use std::path::Path;

/// Render a JSON document with the default renderers.
///
/// # Example
///
/// ```
/// let elements = blockrender::render_str(r#"[{ "type": "quote", "children": [{ "type": "text", "text": "Hi" }] }]"#).unwrap();
/// assert_eq!(elements[0].name(), Some("blockquote"));
/// ```
pub fn render_str(json: &str) -> Result<Vec<Element>> {
    Blockrender::new().parse_str(json)?.elements()
}

/// Convert a JSON document to HTML with the default renderers.
pub fn to_html(json: &str) -> Result<String> {
    Blockrender::new().parse_str(json)?.to_html()
}

/// Builder for parsing and rendering block documents.
///
/// # Example
///
/// ```
/// use blockrender::{BlockKind, Blockrender, Element};
///
/// let html = Blockrender::new()
///     .lenient()
///     .with_block(BlockKind::Paragraph, |props, _| {
///         Element::tag("div").with_children(props.into_children())
///     })
///     .parse_str(r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "x" }] }]"#)?
///     .to_html()?;
/// assert_eq!(html, "<div>x</div>");
/// # Ok::<(), blockrender::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Blockrender {
    parse_options: ParseOptions,
    renderer: BlocksRenderer,
    html_options: HtmlOptions,
}

impl Blockrender {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Use a preconfigured document renderer.
    pub fn with_renderer(mut self, renderer: BlocksRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Override the renderer of one block kind.
    pub fn with_block<F>(mut self, kind: BlockKind, renderer: F) -> Self
    where
        F: Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.renderer = self.renderer.with_block(kind, renderer);
        self
    }

    /// Override the renderer of one modifier.
    pub fn with_modifier<F>(mut self, modifier: Modifier, renderer: F) -> Self
    where
        F: Fn(ModifierProps, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.renderer = self.renderer.with_modifier(modifier, renderer);
        self
    }

    /// Set HTML output options.
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.html_options = options;
        self
    }

    /// Parse a JSON string and return a result wrapper.
    pub fn parse_str(self, json: &str) -> Result<BlockrenderResult> {
        let content = parser::parse_str_with_options(json, self.parse_options.clone())?;
        Ok(self.into_result(content))
    }

    /// Parse a JSON file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<BlockrenderResult> {
        let content = parser::parse_file_with_options(path, self.parse_options.clone())?;
        Ok(self.into_result(content))
    }

    /// Wrap an already parsed document.
    pub fn from_content(self, content: BlocksContent) -> BlockrenderResult {
        self.into_result(Some(content))
    }

    fn into_result(self, content: Option<BlocksContent>) -> BlockrenderResult {
        BlockrenderResult {
            content,
            renderer: self.renderer,
            html_options: self.html_options,
        }
    }
}

/// Result of parsing a block document.
#[derive(Debug, Clone)]
pub struct BlockrenderResult {
    /// The parsed document; `None` for a JSON `null` document
    pub content: Option<BlocksContent>,
    renderer: BlocksRenderer,
    html_options: HtmlOptions,
}

impl BlockrenderResult {
    /// Render the document, with diagnostics and statistics.
    pub fn render(&self) -> Result<RenderResult> {
        self.renderer.render_with_stats(self.content.as_deref())
    }

    /// Render the document to elements.
    pub fn elements(&self) -> Result<Vec<Element>> {
        self.renderer.render(self.content.as_deref())
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        Ok(render::to_html(&self.elements()?, &self.html_options))
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.elements()?, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        Ok(render::to_plain_text(&self.elements()?))
    }

    /// Get the parsed document.
    pub fn content(&self) -> Option<&[Node]> {
        self.content.as_deref()
    }
}
