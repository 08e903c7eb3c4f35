//! Per-invocation render state.

use super::{BlockFn, BlockRenderers, ModifierFn, ModifierRenderers};

/// Ordered set of type names that had no renderer.
///
/// Append-only; each name is kept once, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingTypes {
    names: Vec<String>,
}

impl MissingTypes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name. Returns `true` if it was not present before.
    pub fn record(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Check if a name was recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Recorded names in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names joined with commas, as used in diagnostic markers.
    pub fn joined(&self) -> String {
        self.names.join(",")
    }

    /// Number of recorded names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the set, returning the names.
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Active renderer tables and diagnostics for one render pass.
///
/// A context is created by [`super::BlocksRenderer`] at the start of each
/// invocation and dropped at its end. The walker holds it mutably;
/// renderers receive it read-only so nested custom logic can inspect the
/// tables and the diagnostics gathered so far.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    blocks: BlockRenderers,
    modifiers: ModifierRenderers,
    missing_block_types: MissingTypes,
    missing_modifier_types: MissingTypes,
}

impl RenderContext {
    /// Create a context over already-merged tables.
    pub fn new(blocks: BlockRenderers, modifiers: ModifierRenderers) -> Self {
        Self {
            blocks,
            modifiers,
            missing_block_types: MissingTypes::new(),
            missing_modifier_types: MissingTypes::new(),
        }
    }

    /// Create a context over the default tables.
    pub fn with_defaults() -> Self {
        Self::new(BlockRenderers::defaults(), ModifierRenderers::defaults())
    }

    /// Renderer for a node type name.
    pub fn lookup_block(&self, type_name: &str) -> Option<BlockFn> {
        self.blocks.get(type_name).cloned()
    }

    /// Renderer for a modifier name.
    pub fn lookup_modifier(&self, name: &str) -> Option<ModifierFn> {
        self.modifiers.get(name).cloned()
    }

    /// Record a node type with no renderer. Warns on first occurrence.
    pub fn record_missing_block(&mut self, type_name: &str) {
        if self.missing_block_types.record(type_name) {
            log::warn!("No renderer found for block type \"{}\"", type_name);
        }
    }

    /// Record a modifier with no renderer. Warns on first occurrence.
    pub fn record_missing_modifier(&mut self, name: &str) {
        if self.missing_modifier_types.record(name) {
            log::warn!("No renderer found for modifier \"{}\"", name);
        }
    }

    /// Active block renderers.
    pub fn blocks(&self) -> &BlockRenderers {
        &self.blocks
    }

    /// Active modifier renderers.
    pub fn modifiers(&self) -> &ModifierRenderers {
        &self.modifiers
    }

    /// Block types seen without a renderer so far.
    pub fn missing_block_types(&self) -> &MissingTypes {
        &self.missing_block_types
    }

    /// Modifiers seen without a renderer so far.
    pub fn missing_modifier_types(&self) -> &MissingTypes {
        &self.missing_modifier_types
    }

    /// Consume the context, returning both diagnostic sets.
    pub fn into_diagnostics(self) -> (MissingTypes, MissingTypes) {
        (self.missing_block_types, self.missing_modifier_types)
    }
}
