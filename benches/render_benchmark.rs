//! Benchmarks for blockrender parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic block documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(section_count: usize) -> String {
    let mut blocks = Vec::with_capacity(section_count * 3);

    for i in 0..section_count {
        blocks.push(format!(
            r#"{{ "type": "heading", "level": 2, "children": [{{ "type": "text", "text": "Section {}" }}] }}"#,
            i + 1
        ));
        blocks.push(
            r#"{ "type": "paragraph", "children": [
                { "type": "text", "text": "Benchmark content\nwith a line break, " },
                { "type": "text", "text": "bold and italic", "bold": true, "italic": true },
                { "type": "link", "url": "https://example.com", "children": [{ "type": "text", "text": " and a link" }] }
            ] }"#
                .to_string(),
        );
        blocks.push(
            r#"{ "type": "list", "format": "unordered", "children": [
                { "type": "list-item", "children": [{ "type": "text", "text": "first" }] },
                { "type": "list", "format": "ordered", "children": [
                    { "type": "list-item", "children": [{ "type": "text", "text": "nested", "code": true }] }
                ] }
            ] }"#
                .to_string(),
        );
    }

    format!("[{}]", blocks.join(","))
}

/// Benchmark JSON parsing at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for section_count in [1, 10, 100].iter() {
        let json = create_test_document(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| blockrender::parse_str(black_box(&json)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering of an already parsed document.
fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for section_count in [1, 10, 100].iter() {
        let content = blockrender::parse_str(&create_test_document(*section_count))
            .unwrap()
            .unwrap();
        let renderer = blockrender::BlocksRenderer::new();

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| renderer.render(Some(black_box(content.as_slice()))).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full JSON to HTML pipeline.
fn bench_to_html(c: &mut Criterion) {
    let json = create_test_document(10);

    c.bench_function("to_html_10_sections", |b| {
        b.iter(|| blockrender::to_html(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_rendering, bench_to_html);
criterion_main!(benches);
