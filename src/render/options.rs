//! Serialization options and configuration.

/// Options for HTML serialization of an element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit diagnostic markers as HTML comments
    pub include_markers: bool,

    /// Close void elements XHTML style (`<br />`)
    pub xhtml: bool,

    /// Put each top-level element on its own line
    pub newline_between_blocks: bool,
}

impl HtmlOptions {
    /// Create new HTML options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable marker comments.
    pub fn with_markers(mut self, include: bool) -> Self {
        self.include_markers = include;
        self
    }

    /// Enable or disable XHTML-style void elements.
    pub fn with_xhtml(mut self, xhtml: bool) -> Self {
        self.xhtml = xhtml;
        self
    }

    /// Enable or disable newlines between top-level elements.
    pub fn with_block_newlines(mut self, newline: bool) -> Self {
        self.newline_between_blocks = newline;
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            include_markers: true,
            xhtml: false,
            newline_between_blocks: false,
        }
    }
}
