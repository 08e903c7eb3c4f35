//! Rendering module: the document walker and output serializers.
//!
//! [`BlocksRenderer`] walks a document and produces an [`Element`] tree
//! through the renderer tables; [`to_html`], [`to_json`], and
//! [`to_plain_text`] serialize the tree.

mod block;
mod components;
mod context;
mod defaults;
mod document;
mod element;
mod html;
mod json;
mod options;
mod plain;
mod result;
mod text;

pub use block::{render_block, render_children};
pub use components::{
    BlockFn, BlockProps, BlockRenderers, ModifierFn, ModifierProps, ModifierRenderers,
};
pub use context::{MissingTypes, RenderContext};
pub use defaults::modifier_tag;
pub use document::{render, BlocksRenderer};
pub use element::{Descendants, Element};
pub use html::{element_to_html, escape_html, to_html};
pub use json::{to_json, JsonFormat};
pub use options::HtmlOptions;
pub use plain::to_plain_text;
pub use result::{Diagnostic, RenderResult, RenderStats};
pub use text::{render_text, split_line_breaks};
