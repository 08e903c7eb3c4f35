//! Document model types for block content.
//!
//! This module defines the node taxonomy produced by the block editor.
//! The model is pure data: the render pipeline only ever borrows it, so a
//! parsed document can be rendered any number of times.

mod image;
mod node;
mod text;

pub use image::ImageMeta;
pub use node::{BlockKind, BlocksContent, HeadingLevel, LinkNode, ListFormat, Node};
pub use text::{Modifier, Modifiers, TextNode};
