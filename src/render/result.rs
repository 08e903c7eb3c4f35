//! Rendering result with diagnostics and statistics.

use serde::{Deserialize, Serialize};

use super::Element;

/// A recoverable problem met during a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A node type had no renderer; the node was omitted
    UnknownBlockType(String),
    /// A modifier had no renderer; the text was left unwrapped
    UnknownModifierType(String),
}

/// Result of rendering a document, including diagnostics and statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    /// Rendered elements, diagnostic markers first
    pub elements: Vec<Element>,

    /// Node types without a renderer, in first-seen order
    pub missing_block_types: Vec<String>,

    /// Modifiers without a renderer, in first-seen order
    pub missing_modifier_types: Vec<String>,

    /// Output statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result, computing statistics from the elements.
    pub fn new(
        elements: Vec<Element>,
        missing_block_types: Vec<String>,
        missing_modifier_types: Vec<String>,
    ) -> Self {
        let stats = RenderStats::from_elements(&elements);
        Self {
            elements,
            missing_block_types,
            missing_modifier_types,
            stats,
        }
    }

    /// Rendered elements without diagnostic markers.
    pub fn content(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_content())
    }

    /// Every recoverable problem, block types first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.missing_block_types
            .iter()
            .cloned()
            .map(Diagnostic::UnknownBlockType)
            .chain(
                self.missing_modifier_types
                    .iter()
                    .cloned()
                    .map(Diagnostic::UnknownModifierType),
            )
            .collect()
    }

    /// Check if any unknown type was met.
    pub fn has_diagnostics(&self) -> bool {
        !self.missing_block_types.is_empty() || !self.missing_modifier_types.is_empty()
    }
}

/// Statistics about a rendered element tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of labeled elements
    pub element_count: usize,

    /// Number of text elements
    pub text_count: usize,

    /// Number of hard line breaks
    pub line_break_count: usize,

    /// Number of diagnostic markers
    pub marker_count: usize,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: usize,

    /// Character count (excluding whitespace)
    pub char_count: usize,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk a list of trees and count what they contain.
    pub fn from_elements(elements: &[Element]) -> Self {
        let mut stats = Self::new();
        for element in elements.iter().flat_map(Element::descendants) {
            match element {
                Element::Tag { .. } => stats.element_count += 1,
                Element::Text { value } => {
                    stats.text_count += 1;
                    stats.count_text(value);
                }
                Element::LineBreak => stats.line_break_count += 1,
                Element::Marker { .. } => stats.marker_count += 1,
            }
        }
        stats
    }

    /// Add words and characters of a text run.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count();
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count();
    }
}
