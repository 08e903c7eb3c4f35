//! Block document parsing module.
//!
//! Reads editor JSON into [`Node`](crate::model::Node) trees. A JSON `null`
//! document parses to `None`, which the renderer rejects as empty input.

mod json;
mod options;

pub use json::NodeReader;
pub use options::{ErrorMode, ParseOptions};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::model::BlocksContent;

/// Parse a document from a JSON string.
pub fn parse_str(json: &str) -> Result<Option<BlocksContent>> {
    parse_str_with_options(json, ParseOptions::default())
}

/// Parse a document from a JSON string with custom options.
pub fn parse_str_with_options(json: &str, options: ParseOptions) -> Result<Option<BlocksContent>> {
    let value: Value = serde_json::from_str(json)?;
    parse_value_with_options(&value, options)
}

/// Parse a document from JSON bytes.
pub fn parse_slice(data: &[u8]) -> Result<Option<BlocksContent>> {
    parse_slice_with_options(data, ParseOptions::default())
}

/// Parse a document from JSON bytes with custom options.
pub fn parse_slice_with_options(
    data: &[u8],
    options: ParseOptions,
) -> Result<Option<BlocksContent>> {
    let value: Value = serde_json::from_slice(data)?;
    parse_value_with_options(&value, options)
}

/// Parse a document from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Option<BlocksContent>> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Parse a document from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<Option<BlocksContent>> {
    let value: Value = serde_json::from_reader(reader)?;
    parse_value_with_options(&value, options)
}

/// Parse a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use blockrender::parser::parse_file;
///
/// let content = parse_file("article.json").unwrap();
/// println!("Blocks: {}", content.map_or(0, |c| c.len()));
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Option<BlocksContent>> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a document from a JSON file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Option<BlocksContent>> {
    let path = path.as_ref();
    log::debug!("Reading block document from {}", path.display());
    let file = File::open(path)?;
    parse_reader_with_options(BufReader::new(file), options)
}

/// Parse a document from an already decoded JSON value.
pub fn parse_value(value: &Value) -> Result<Option<BlocksContent>> {
    parse_value_with_options(value, ParseOptions::default())
}

/// Parse a document from an already decoded JSON value with custom options.
pub fn parse_value_with_options(
    value: &Value,
    options: ParseOptions,
) -> Result<Option<BlocksContent>> {
    NodeReader::new(options).read_content(value)
}
