//! Renderer tables mapping node types and modifier names to functions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::{BlockKind, HeadingLevel, ImageMeta, LinkNode, ListFormat, Modifier, Node};

use super::{Element, RenderContext};

/// Properties handed to a block renderer.
#[derive(Debug)]
pub struct BlockProps<'a> {
    /// The node being rendered; attributes are read from it
    pub node: &'a Node,

    /// Rendered children. `None` for void kinds such as images.
    pub children: Option<Vec<Element>>,

    /// Text of the node's leaves, for kinds that carry it (code, heading)
    pub plain_text: Option<String>,
}

impl<'a> BlockProps<'a> {
    /// Rendered children, or an empty list for void kinds.
    pub fn children(&self) -> Vec<Element> {
        self.children.clone().unwrap_or_default()
    }

    /// Take ownership of the rendered children.
    pub fn into_children(self) -> Vec<Element> {
        self.children.unwrap_or_default()
    }

    /// Heading level, for headings.
    pub fn level(&self) -> Option<HeadingLevel> {
        self.node.level()
    }

    /// List format, for lists.
    pub fn format(&self) -> Option<ListFormat> {
        self.node.format()
    }

    /// Link attributes, for links.
    pub fn link(&self) -> Option<&'a LinkNode> {
        self.node.as_link()
    }

    /// Image metadata, for images.
    pub fn image(&self) -> Option<&'a ImageMeta> {
        self.node.image_meta()
    }
}

/// Properties handed to a modifier renderer.
#[derive(Debug)]
pub struct ModifierProps {
    /// The content being wrapped
    pub children: Vec<Element>,
}

/// A block renderer. Receives the props and read-only access to the active context.
pub type BlockFn = Arc<dyn Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync>;

/// A modifier renderer.
pub type ModifierFn = Arc<dyn Fn(ModifierProps, &RenderContext) -> Element + Send + Sync>;

/// Table of block renderers keyed by node type name.
///
/// Keys are plain strings so that types outside the taxonomy can be
/// rendered by registering a renderer under their name.
#[derive(Clone, Default)]
pub struct BlockRenderers {
    renderers: HashMap<String, BlockFn>,
}

impl BlockRenderers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the table of default renderers.
    pub fn defaults() -> Self {
        super::defaults::block_renderers()
    }

    /// Register a renderer for a taxonomy kind.
    pub fn with<F>(self, kind: BlockKind, renderer: F) -> Self
    where
        F: Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.with_type(kind.as_str(), renderer)
    }

    /// Register a renderer for any type name.
    pub fn with_type<F>(mut self, type_name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(BlockProps<'_>, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.insert(type_name, Arc::new(renderer));
        self
    }

    /// Insert a renderer, replacing any previous one for the same name.
    pub fn insert(&mut self, type_name: impl Into<String>, renderer: BlockFn) {
        self.renderers.insert(type_name.into(), renderer);
    }

    /// Remove a renderer.
    pub fn remove(&mut self, type_name: &str) -> Option<BlockFn> {
        self.renderers.remove(type_name)
    }

    /// Look up a renderer.
    pub fn get(&self, type_name: &str) -> Option<&BlockFn> {
        self.renderers.get(type_name)
    }

    /// Check if a renderer is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.renderers.contains_key(type_name)
    }

    /// Layer `overrides` on top of this table; overriding entries win.
    pub fn merged(&self, overrides: &BlockRenderers) -> Self {
        let mut merged = self.clone();
        for (name, renderer) in &overrides.renderers {
            merged.renderers.insert(name.clone(), Arc::clone(renderer));
        }
        merged
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for BlockRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockRenderers")
            .field("types", &self.type_names())
            .finish()
    }
}

/// Table of modifier renderers keyed by modifier name.
#[derive(Clone, Default)]
pub struct ModifierRenderers {
    renderers: HashMap<String, ModifierFn>,
}

impl ModifierRenderers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the table of default renderers.
    pub fn defaults() -> Self {
        super::defaults::modifier_renderers()
    }

    /// Register a renderer for a known modifier.
    pub fn with<F>(self, modifier: Modifier, renderer: F) -> Self
    where
        F: Fn(ModifierProps, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.with_name(modifier.as_str(), renderer)
    }

    /// Register a renderer for any modifier name.
    pub fn with_name<F>(mut self, name: impl Into<String>, renderer: F) -> Self
    where
        F: Fn(ModifierProps, &RenderContext) -> Element + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(renderer));
        self
    }

    /// Insert a renderer, replacing any previous one for the same name.
    pub fn insert(&mut self, name: impl Into<String>, renderer: ModifierFn) {
        self.renderers.insert(name.into(), renderer);
    }

    /// Remove a renderer.
    pub fn remove(&mut self, name: &str) -> Option<ModifierFn> {
        self.renderers.remove(name)
    }

    /// Look up a renderer.
    pub fn get(&self, name: &str) -> Option<&ModifierFn> {
        self.renderers.get(name)
    }

    /// Check if a renderer is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Layer `overrides` on top of this table; overriding entries win.
    pub fn merged(&self, overrides: &ModifierRenderers) -> Self {
        let mut merged = self.clone();
        for (name, renderer) in &overrides.renderers {
            merged.renderers.insert(name.clone(), Arc::clone(renderer));
        }
        merged
    }

    /// Registered modifier names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered renderers.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for ModifierRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierRenderers")
            .field("names", &self.names())
            .finish()
    }
}
