//! Conversion of editor JSON into the node model.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{
    BlocksContent, HeadingLevel, ImageMeta, LinkNode, ListFormat, Modifier, Modifiers, Node,
    TextNode,
};

use super::ParseOptions;

type Object = Map<String, Value>;

/// Reads node trees out of JSON values.
///
/// Type names outside the taxonomy are never an error: they become
/// [`Node::Custom`] and are left to the renderer to report.
pub struct NodeReader {
    options: ParseOptions,
}

impl NodeReader {
    /// Create a reader.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Read a whole document. JSON `null` yields `None`.
    pub fn read_content(&self, value: &Value) -> Result<Option<BlocksContent>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => self.read_nodes(items, "").map(Some),
            Value::Object(_) if self.options.is_lenient() => {
                log::warn!("Document root is a single node, wrapping it in a list");
                Ok(Some(self.read_node(value, "/0")?.into_iter().collect()))
            }
            _ => Err(Error::invalid_node("/", "document root must be an array")),
        }
    }

    /// Read a list of nodes.
    pub fn read_nodes(&self, items: &[Value], path: &str) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{}/{}", path, index);
            if let Some(node) = self.read_node(item, &item_path)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    /// Read one node. `None` means a malformed node was skipped.
    pub fn read_node(&self, value: &Value, path: &str) -> Result<Option<Node>> {
        let Some(obj) = value.as_object() else {
            return self.skip(path, "node is not an object");
        };
        let Some(type_name) = obj.get("type").and_then(Value::as_str) else {
            return self.skip(path, "node has no string `type`");
        };

        let node = match type_name {
            "text" => Node::Text(self.read_text(obj, path)?),
            "paragraph" => Node::Paragraph {
                children: self.read_children(obj, path)?,
            },
            "quote" => Node::Quote {
                children: self.read_children(obj, path)?,
            },
            "code" => Node::Code {
                children: self.read_children(obj, path)?,
            },
            "heading" => Node::Heading {
                level: self.read_level(obj, path)?,
                children: self.read_children(obj, path)?,
            },
            "list" => Node::List {
                format: self.read_format(obj, path)?,
                children: self.read_children(obj, path)?,
            },
            "list-item" => Node::ListItem {
                children: self.read_children(obj, path)?,
            },
            "link" => Node::Link(LinkNode {
                url: self.read_string(obj, "url", path)?,
                target: optional_string(obj, "target"),
                rel: optional_string(obj, "rel"),
                children: self.read_children(obj, path)?,
            }),
            "image" => Node::Image {
                image: self.read_image(obj, path)?,
                children: self.read_optional_children(obj, path)?,
            },
            other => Node::Custom {
                kind: other.to_string(),
                attributes: obj
                    .iter()
                    .filter(|(k, _)| k.as_str() != "type" && k.as_str() != "children")
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
                children: self.read_optional_children(obj, path)?,
            },
        };
        Ok(Some(node))
    }

    fn read_text(&self, obj: &Object, path: &str) -> Result<TextNode> {
        let text = self.read_string(obj, "text", path)?;
        let mut modifiers = Modifiers::default();

        for (key, value) in obj {
            if key == "type" || key == "text" {
                continue;
            }
            match key.parse::<Modifier>() {
                Ok(modifier) => {
                    let active = match value {
                        Value::Bool(b) => *b,
                        Value::Null => false,
                        _ => self.repair(
                            path,
                            &format!("modifier `{}` is not a boolean", key),
                            false,
                        )?,
                    };
                    modifiers.set(modifier, active);
                }
                Err(_) if value == &Value::Bool(true) => modifiers.extra.push(key.clone()),
                Err(_) => {}
            }
        }

        Ok(TextNode { text, modifiers })
    }

    fn read_children(&self, obj: &Object, path: &str) -> Result<Vec<Node>> {
        match obj.get("children") {
            Some(Value::Array(items)) => self.read_nodes(items, &format!("{}/children", path)),
            Some(_) => self.repair(path, "`children` is not an array", Vec::new()),
            None => self.repair(path, "node has no `children`", Vec::new()),
        }
    }

    /// Children for kinds that may legitimately omit them.
    fn read_optional_children(&self, obj: &Object, path: &str) -> Result<Vec<Node>> {
        match obj.get("children") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(_) => self.read_children(obj, path),
        }
    }

    fn read_string(&self, obj: &Object, key: &str, path: &str) -> Result<String> {
        match obj.get(key).and_then(Value::as_str) {
            Some(s) => Ok(s.to_string()),
            None => self.repair(path, &format!("missing string `{}`", key), String::new()),
        }
    }

    fn read_level(&self, obj: &Object, path: &str) -> Result<HeadingLevel> {
        let raw = obj.get("level").and_then(Value::as_i64);
        match raw {
            Some(level) => match u8::try_from(level).ok().and_then(HeadingLevel::new) {
                Some(level) => Ok(level),
                None => self.repair(
                    path,
                    &format!("heading level {} is out of range", level),
                    HeadingLevel::clamped(level),
                ),
            },
            None => self.repair(path, "heading has no numeric `level`", HeadingLevel::H1),
        }
    }

    fn read_format(&self, obj: &Object, path: &str) -> Result<ListFormat> {
        let raw = obj.get("format").and_then(Value::as_str).unwrap_or_default();
        match raw.parse::<ListFormat>() {
            Ok(format) => Ok(format),
            Err(reason) => self.repair(path, &reason, ListFormat::Unordered),
        }
    }

    fn read_image(&self, obj: &Object, path: &str) -> Result<ImageMeta> {
        let Some(raw) = obj.get("image").filter(|v| v.is_object()) else {
            return self.repair(path, "image has no `image` object", ImageMeta::default());
        };

        let mut image = match serde_json::from_value::<ImageMeta>(raw.clone()) {
            Ok(image) => image,
            Err(e) => {
                let url = raw.get("url").and_then(Value::as_str).unwrap_or_default();
                self.repair(
                    path,
                    &format!("invalid image metadata: {}", e),
                    ImageMeta::new(url),
                )?
            }
        };

        image.created_at = timestamp(raw, "createdAt");
        image.updated_at = timestamp(raw, "updatedAt");
        Ok(image)
    }

    fn skip(&self, path: &str, reason: &str) -> Result<Option<Node>> {
        if self.options.is_lenient() {
            log::warn!("Skipping node at {}: {}", path, reason);
            Ok(None)
        } else {
            Err(Error::invalid_node(path_or_root(path), reason))
        }
    }

    fn repair<T>(&self, path: &str, reason: &str, fallback: T) -> Result<T> {
        if self.options.is_lenient() {
            log::warn!("Repairing node at {}: {}", path, reason);
            Ok(fallback)
        } else {
            Err(Error::invalid_node(path_or_root(path), reason))
        }
    }
}

impl Default for NodeReader {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

fn path_or_root(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn optional_string(obj: &Object, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn timestamp(raw: &Value, key: &str) -> Option<DateTime<Utc>> {
    let value = raw.get(key)?.as_str()?;
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Ignoring unparseable {} {:?}: {}", key, value, e);
            None
        }
    }
}
