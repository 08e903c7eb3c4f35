//! Integration tests for rendering block documents.

use blockrender::model::{BlockKind, HeadingLevel, ListFormat, Modifier, Node, TextNode};
use blockrender::render::{self, BlocksRenderer, Element, HtmlOptions};
use blockrender::{parse_str, Blockrender, Error};

const BLOCKS: &str = include_str!("fixtures/blocks.json");
const BLOCKS_WITH_ERRORS: &str = include_str!("fixtures/blocks-with-errors.json");

fn html_of(json: &str) -> String {
    blockrender::to_html(json).unwrap()
}

// ==================== Default Renderers ====================

#[test]
fn test_headings() {
    let html = html_of(BLOCKS);
    for level in 1..=6 {
        assert!(html.contains(&format!("<h{0}>Header {0}</h{0}>", level)));
    }
}

#[test]
fn test_paragraph_modifiers() {
    let html = html_of(BLOCKS);
    assert!(html.contains("<p>Normal text.</p>"));
    assert!(html.contains("<p><strong>Bold text</strong></p>"));
    assert!(html.contains("<p><em>Italic text</em></p>"));
    assert!(html.contains("<p><u>Underlined text</u></p>"));
    assert!(html.contains("<p><code>Code string</code></p>"));
}

#[test]
fn test_modifier_nesting_order() {
    let html = html_of(BLOCKS);
    assert!(html.contains(
        "<p><del><u><em><strong>Bold, italic, underlined, and strikethrough text</strong></em></u></del></p>"
    ));
}

#[test]
fn test_all_five_modifiers() {
    let html = html_of(
        r#"[{ "type": "paragraph", "children": [{
            "type": "text",
            "text": "x",
            "bold": true,
            "italic": true,
            "underline": true,
            "strikethrough": true,
            "code": true
        }] }]"#,
    );
    assert_eq!(
        html,
        "<p><code><del><u><em><strong>x</strong></em></u></del></code></p>"
    );
}

#[test]
fn test_false_modifiers_render_plain_text() {
    let html = html_of(BLOCKS);
    assert!(html.contains("<p>Text with false modifiers</p>"));
}

#[test]
fn test_links() {
    let html = html_of(BLOCKS);
    assert!(html.contains(r#"<a href="https://google.com">Root link</a>"#));
    assert!(html.contains(
        r#"<a href="https://external.com" target="_blank" rel="noopener noreferrer">External link with target and rel</a>"#
    ));
    assert!(html.contains(
        r#"<p><a href="https://google.com">Inline link</a><del><u><em><strong></strong></em></u></del></p>"#
    ));
}

#[test]
fn test_code_block_uses_plain_text() {
    let html = html_of(BLOCKS);
    assert!(html.contains("<pre><code>Code blocklink</code></pre>"));
}

#[test]
fn test_lists_and_quote() {
    let html = html_of(BLOCKS);
    assert!(html.contains("<ol><li>Ordered list 1</li><li>Ordered list 2</li></ol>"));
    assert!(html.contains("<ul><li>Unordered list 1</li><li>Unordered list 2</li></ul>"));
    assert!(html.contains("<blockquote>Quote</blockquote>"));
}

#[test]
fn test_images() {
    let html = html_of(BLOCKS);
    assert!(html.contains(
        r#"<img src="https://cdn.pixabay.com/photo/2016/12/03/15/44/fireworks-1880045_960_720.jpg" alt="Alternative text">"#
    ));
    assert!(html.contains(r#"<img src="https://example.com/image-no-alt.png">"#));
}

#[test]
fn test_valid_document_has_no_markers() {
    let result = Blockrender::new().parse_str(BLOCKS).unwrap().render().unwrap();
    assert!(!result.has_diagnostics());
    assert_eq!(result.stats.marker_count, 0);
    assert!(result.elements.iter().all(|e| !e.is_marker()));
}

// ==================== Special Cases ====================

#[test]
fn test_empty_paragraph_is_line_break() {
    let elements =
        blockrender::render_str(r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "" }] }]"#)
            .unwrap();
    assert_eq!(elements, vec![Element::LineBreak]);
    assert_eq!(
        html_of(r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "" }] }]"#),
        "<br>"
    );
}

#[test]
fn test_line_breaks_in_text() {
    let html = html_of(
        r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "First line\nSecond line" }] }]"#,
    );
    assert_eq!(html, "<p>First line<br>Second line</p>");

    let html = html_of(
        r#"[{ "type": "paragraph", "children": [{ "type": "text", "text": "First\n\nThird" }] }]"#,
    );
    assert_eq!(html.matches("<br>").count(), 2);
    assert_eq!(html, "<p>First<br><br>Third</p>");
}

#[test]
fn test_line_break_flavours() {
    let content = vec![Node::paragraph(vec![Node::text("a\r\nb\rc\nd")])];
    let elements = render::render(Some(content.as_slice())).unwrap();

    let breaks = elements[0].descendants().filter(|e| e.is_line_break()).count();
    assert_eq!(breaks, 3);
}

#[test]
fn test_image_renderer_gets_no_children() {
    let renderer = BlocksRenderer::new().with_block(BlockKind::Image, |props, _| {
        assert!(props.children.is_none());
        Element::tag("figure")
    });
    let content = vec![Node::image(blockrender::ImageMeta::new("https://cdn.test/a.png"))];

    let elements = renderer.render(Some(content.as_slice())).unwrap();
    assert_eq!(elements, vec![Element::tag("figure")]);
}

#[test]
fn test_heading_plain_text() {
    let json = r#"[{
        "type": "heading",
        "level": 1,
        "children": [
            { "type": "text", "text": "Hello ", "bold": true },
            { "type": "link", "url": "https://test.com", "children": [{ "type": "text", "text": "World" }] }
        ]
    }]"#;

    let html = Blockrender::new()
        .with_block(BlockKind::Heading, |props, _| {
            let tag = props.level().map(|l| l.tag_name()).unwrap_or("h1");
            let plain = props.plain_text.clone();
            Element::tag(tag)
                .with_attr_opt("data-plain-text", plain.as_deref())
                .with_children(props.into_children())
        })
        .parse_str(json)
        .unwrap()
        .to_html()
        .unwrap();

    assert!(html.starts_with(r#"<h1 data-plain-text="Hello World">"#));
    assert!(html.contains("<strong>Hello </strong>"));
}

#[test]
fn test_nested_lists() {
    let content = vec![Node::list(
        ListFormat::Ordered,
        vec![
            Node::list_item(vec![Node::text("one")]),
            Node::list(
                ListFormat::Ordered,
                vec![Node::list_item(vec![Node::text("nested")])],
            ),
        ],
    )];
    let html = render::to_html(
        &render::render(Some(content.as_slice())).unwrap(),
        &HtmlOptions::default(),
    );
    assert_eq!(html, "<ol><li>one</li><ol><li>nested</li></ol></ol>");
}

// ==================== Diagnostics ====================

#[test]
fn test_missing_types_are_markers() {
    let elements = blockrender::render_str(BLOCKS_WITH_ERRORS).unwrap();

    assert_eq!(
        elements[0],
        Element::marker("missingModifierTypes: nonExistingModifier1,nonExistingModifier2")
    );
    assert_eq!(
        elements[1],
        Element::marker("missingBlockTypes: nonExistingType1,text2,nonExistingType2")
    );
    assert_eq!(elements.len(), 4);
}

#[test]
fn test_unknown_types_are_omitted() {
    let html = html_of(BLOCKS_WITH_ERRORS);
    assert!(!html.contains("hidden"));
    assert!(html.contains("<p>Styled twice</p>"));
    assert!(html.contains("<p>Still rendered</p>"));
    assert!(html.starts_with(
        "<!--missingModifierTypes: nonExistingModifier1,nonExistingModifier2--><!--missingBlockTypes:"
    ));
}

#[test]
fn test_unknown_type_names_stay_inside_marker_comment() {
    let html = html_of(r#"[{ "type": "---><script>alert(1)</script>", "children": [] }]"#);

    assert!(!html.contains("<script>"));
    assert!(html.starts_with("<!--missingBlockTypes: "));
    assert!(html.ends_with("-->"));
    assert_eq!(html.matches("-->").count(), 1);
}

#[test]
fn test_custom_type_with_registered_renderer() {
    let json = r#"[{ "type": "callout", "tone": "warn", "children": [{ "type": "text", "text": "Careful" }] }]"#;
    let content = parse_str(json).unwrap();

    let renderer = BlocksRenderer::new().with_custom_block("callout", |props, _| {
        let tone = props
            .node
            .attributes()
            .and_then(|a| a.get("tone"))
            .and_then(|v| v.as_str())
            .map(str::to_string);
        Element::tag("aside")
            .with_attr_opt("class", tone.as_deref())
            .with_children(props.into_children())
    });

    let result = renderer.render_with_stats(content.as_deref()).unwrap();
    assert!(!result.has_diagnostics());
    assert_eq!(
        render::to_html(&result.elements, &HtmlOptions::default()),
        r#"<aside class="warn">Careful</aside>"#
    );
}

#[test]
fn test_custom_modifier_renderer() {
    let mut text = TextNode::new("shine");
    text.modifiers.extra.push("glow".to_string());
    let content = vec![Node::paragraph(vec![Node::Text(text)])];

    let renderer = BlocksRenderer::new().with_custom_modifier("glow", |props, _| {
        Element::tag("mark").with_children(props.children)
    });
    let elements = renderer.render(Some(content.as_slice())).unwrap();
    assert_eq!(
        render::to_html(&elements, &HtmlOptions::default()),
        "<p><mark>shine</mark></p>"
    );
}

// ==================== Overrides ====================

#[test]
fn test_overrides_keep_other_defaults() {
    let parsed = Blockrender::new()
        .with_block(BlockKind::Paragraph, |props, _| {
            Element::tag("p")
                .with_attr("class", "text-red")
                .with_children(props.into_children())
        })
        .with_modifier(Modifier::Code, |props, _| {
            Element::tag("code")
                .with_attr("class", "text-blue")
                .with_children(props.children)
        })
        .parse_str(BLOCKS)
        .unwrap();
    let html = parsed.to_html().unwrap();

    assert!(html.contains(r#"<p class="text-red">Normal text.</p>"#));
    assert!(html.contains(r#"<code class="text-blue">Code string</code>"#));
    assert!(html.contains("<h1>Header 1</h1>"));
    assert!(html.contains("<blockquote>Quote</blockquote>"));
}

#[test]
fn test_renderer_reads_context() {
    let renderer = BlocksRenderer::new().with_block(BlockKind::Quote, |props, ctx| {
        let label = format!("{} block renderers", ctx.blocks().len());
        Element::tag("blockquote")
            .with_attr("title", label)
            .with_children(props.into_children())
    });
    let content = vec![Node::quote(vec![Node::text("q")])];
    let elements = renderer.render(Some(content.as_slice())).unwrap();

    assert_eq!(elements[0].attr("title"), Some("8 block renderers"));
}

#[test]
fn test_renderer_is_reusable() {
    let renderer = BlocksRenderer::new();
    let first = vec![Node::custom("foo", vec![])];
    let second = vec![Node::heading(HeadingLevel::H1, vec![Node::text("t")])];

    let a = renderer.render(Some(first.as_slice())).unwrap();
    let b = renderer.render(Some(second.as_slice())).unwrap();

    assert_eq!(a, vec![Element::marker("missingBlockTypes: foo")]);
    assert_eq!(b.len(), 1);
    assert!(b.iter().all(|e| !e.is_marker()));
}

// ==================== Empty Input ====================

#[test]
fn test_empty_input() {
    assert!(matches!(render::render(None), Err(Error::EmptyInput)));
    assert!(matches!(blockrender::render_str("null"), Err(Error::EmptyInput)));
    assert_eq!(
        Error::EmptyInput.to_string(),
        "Render content is empty"
    );
    assert!(render::render(Some(&[][..])).unwrap().is_empty());
}
