//! Text leaves and their modifier flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An inline run of text with modifier flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// The raw text, possibly containing line terminators
    pub text: String,

    /// Styling flags
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl TextNode {
    /// Create a text leaf with no active modifiers.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modifiers: Modifiers::default(),
        }
    }

    /// Create a bold text leaf.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with(Modifier::Bold)
    }

    /// Create an italic text leaf.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text).with(Modifier::Italic)
    }

    /// Activate a modifier.
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.modifiers.set(modifier, true);
        self
    }

    /// Check if the leaf carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A known text modifier, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Bold text
    Bold,
    /// Italic text
    Italic,
    /// Underlined text
    Underline,
    /// Struck-through text
    Strikethrough,
    /// Inline code
    Code,
}

impl Modifier {
    /// All modifiers in the order they are applied.
    pub const ALL: [Modifier; 5] = [
        Modifier::Bold,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Strikethrough,
        Modifier::Code,
    ];

    /// The name used in the document JSON and in renderer tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Bold => "bold",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Strikethrough => "strikethrough",
            Modifier::Code => "code",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown modifier: {}", s))
    }
}

/// Modifier flags of a text leaf.
///
/// Absent flags are inactive. `extra` holds names outside the known set
/// that the source marked as active, in source order; they go through the
/// same renderer lookup as the known ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Bold text
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    /// Italic text
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    /// Underlined text
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    /// Struck-through text
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,

    /// Inline code
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,

    /// Active modifiers with no known meaning
    #[serde(skip)]
    pub extra: Vec<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Modifiers {
    /// Check whether a known modifier is active.
    pub fn is_active(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Bold => self.bold,
            Modifier::Italic => self.italic,
            Modifier::Underline => self.underline,
            Modifier::Strikethrough => self.strikethrough,
            Modifier::Code => self.code,
        }
    }

    /// Set a known modifier flag.
    pub fn set(&mut self, modifier: Modifier, active: bool) {
        let flag = match modifier {
            Modifier::Bold => &mut self.bold,
            Modifier::Italic => &mut self.italic,
            Modifier::Underline => &mut self.underline,
            Modifier::Strikethrough => &mut self.strikethrough,
            Modifier::Code => &mut self.code,
        };
        *flag = active;
    }

    /// Names of the active modifiers, known ones first in declaration order.
    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        Modifier::ALL
            .into_iter()
            .filter(|m| self.is_active(*m))
            .map(|m| m.as_str())
            .chain(self.extra.iter().map(String::as_str))
    }

    /// Check if any modifier is active.
    pub fn has_styling(&self) -> bool {
        self.active_names().next().is_some()
    }
}
