//! JSON serialization of element trees.

use crate::error::{Error, Result};

use super::Element;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert rendered elements to JSON.
pub fn to_json(elements: &[Element], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(elements),
        JsonFormat::Compact => serde_json::to_string(elements),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Element> {
        vec![
            Element::marker("missingBlockTypes: foo"),
            Element::tag("p").with_children(vec![Element::text("Hello"), Element::LineBreak]),
        ]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"kind\": \"tag\""));
        assert!(json.contains("\"kind\": \"line_break\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
        assert!(json.starts_with(r#"[{"kind":"marker","message":"missingBlockTypes: foo"}"#));
    }

    #[test]
    fn test_json_reads_back() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let parsed: Vec<Element> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
