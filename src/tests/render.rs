use super::{escape_html, inlines_html, plain_text, render_document, RenderOptions};
use crate::blocks::{parse_inlines, Inline};
use crate::parser::parse_sections;

#[test]
fn test_bold_conversion_alters_nothing_else() {
    let inlines = parse_inlines("Check-in after **3 pm**, check-out by 11.");
    assert_eq!(
        inlines_html(&inlines),
        "Check-in after <strong>3 pm</strong>, check-out by 11."
    );
}

#[test]
fn test_bold_only() {
    assert_eq!(
        inlines_html(&[Inline::Strong("Bold".to_string())]),
        "<strong>Bold</strong>"
    );
}

#[test]
fn test_plain_text_strips_anchor_markup() {
    let text = r#"Map: <a href="https://example.com/map" target="_blank">https://example.com/map</a>."#;
    assert_eq!(plain_text(text), "Map: https://example.com/map.");
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"Tom & Jerry's <"villa">"#),
        "Tom &amp; Jerry&#39;s &lt;&quot;villa&quot;&gt;"
    );
}

#[test]
fn test_render_document_structure() {
    let doc = "## 1. Beach & sun\nIntro **bold**.\n\n* **One:** a\n* **Two:** b\n\nYouTube: https://youtu.be/dQw4w9WgXcQ\nGallery:\nhttps://img.example/1.jpg";
    let sections = parse_sections(doc);
    let html = render_document(&sections, &RenderOptions::default());

    assert!(html.starts_with(r#"<section id="section-1" class="content-section">"#));
    assert!(html.contains(r#"<h2 data-icon="beach">Beach &amp; sun</h2>"#));
    assert!(html.contains("<p>Intro <strong>bold</strong>.</p>"));
    assert!(html.contains("<li><strong>One:</strong> a</li>"));
    assert!(html.contains(r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
    assert!(html.contains(r#"<img src="https://img.example/1.jpg" alt="Beach &amp; sun image 1""#));
    assert!(html.trim_end().ends_with("</section>"));
}

#[test]
fn test_render_without_embedding_links_videos() {
    let sections = parse_sections("YouTube: https://youtu.be/dQw4w9WgXcQ");
    let html = render_document(
        &sections,
        &RenderOptions {
            embed_videos: false,
        },
    );
    assert!(!html.contains("<iframe"));
    assert!(html.contains(r#"<a href="https://youtu.be/dQw4w9WgXcQ""#));
}

#[test]
fn test_unembeddable_video_falls_back_to_link() {
    let sections = parse_sections("YouTube: https://vimeo.com/123456");
    let html = render_document(&sections, &RenderOptions::default());
    assert!(!html.contains("<iframe"));
    assert!(html.contains(r#"<a href="https://vimeo.com/123456""#));
}

#[test]
fn test_render_empty_document() {
    assert_eq!(render_document(&[], &RenderOptions::default()), "");
}
