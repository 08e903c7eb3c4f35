//! HTML serialization of element trees.

use super::{Element, HtmlOptions};

/// Tags that never have a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serialize elements to an HTML string.
pub fn to_html(elements: &[Element], options: &HtmlOptions) -> String {
    let mut out = String::new();
    let mut first = true;
    for element in elements {
        if element.is_marker() && !options.include_markers {
            continue;
        }
        if options.newline_between_blocks && !first {
            out.push('\n');
        }
        write_element(element, options, &mut out);
        first = false;
    }
    out
}

/// Serialize one element subtree.
pub fn element_to_html(element: &Element, options: &HtmlOptions) -> String {
    let mut out = String::new();
    write_element(element, options, &mut out);
    out
}

fn write_element(element: &Element, options: &HtmlOptions, out: &mut String) {
    match element {
        Element::Text { value } => out.push_str(&escape_html(value)),
        Element::LineBreak => write_void("br", &[], options, out),
        Element::Marker { message } => {
            if options.include_markers {
                out.push_str("<!--");
                out.push_str(&escape_comment(message));
                out.push_str("-->");
            }
        }
        Element::Tag {
            name,
            attrs,
            children,
        } => {
            if is_void_tag(name) {
                write_void(name, attrs, options, out);
                return;
            }
            write_open(name, attrs, out);
            out.push('>');
            for child in children {
                write_element(child, options, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn write_open(name: &str, attrs: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(name);
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_html(value));
        out.push('"');
    }
}

fn write_void(name: &str, attrs: &[(String, String)], options: &HtmlOptions, out: &mut String) {
    write_open(name, attrs, out);
    if options.xhtml {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name.to_ascii_lowercase().as_str())
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make text safe inside `<!-- -->`.
///
/// Markup characters are escaped, adjacent dashes are split apart and a
/// trailing dash is padded, so the text can never close the comment.
fn escape_comment(s: &str) -> String {
    let escaped = escape_html(s);
    let mut out = String::with_capacity(escaped.len());
    let mut prev_dash = false;
    for c in escaped.chars() {
        if c == '-' && prev_dash {
            out.push(' ');
        }
        out.push(c);
        prev_dash = c == '-';
    }
    if prev_dash {
        out.push(' ');
    }
    out
}
