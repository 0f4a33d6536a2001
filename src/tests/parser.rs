use super::{is_absolute_http_url, parse_sections};
use crate::blocks::split_blocks;
use crate::icon::Icon;

const GUIDE: &str = "## 1. Getting to the villa
The nearest airport is an hour away. Details at https://example.com/directions.

YouTube: https://youtu.be/AAAAAAAAAAA
---
## 2. Best beaches nearby
* **Cala Blanca:** ten minutes on foot
* **Playa Mar:** a short drive

Gallery:
https://cdn.example.com/beach/1.jpg
https://cdn.example.com/beach/2.jpg

Bring water shoes.
---
Just some closing words.
";

#[test]
fn test_empty_input_yields_no_sections() {
    assert!(parse_sections("").is_empty());
    assert!(parse_sections("   \n\t ").is_empty());
}

#[test]
fn test_trailing_delimiter_is_discarded() {
    let sections = parse_sections("A---B---");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].body, "A");
    assert_eq!(sections[1].body, "B");
}

#[test]
fn test_blank_fragments_do_not_count_towards_position() {
    let sections = parse_sections("---\n\n---First\n---   \n---Second");
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Section 1", "Section 2"]);
    assert_eq!(sections[1].identifier, "section-2");
}

#[test]
fn test_title_fallback_uses_position() {
    let sections = parse_sections(GUIDE);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[2].title, "Section 3");
    assert_eq!(sections[2].body, "Just some closing words.");
}

#[test]
fn test_heading_becomes_title_and_leaves_body() {
    let sections = parse_sections(GUIDE);
    assert_eq!(sections[0].title, "Getting to the villa");
    assert_eq!(sections[1].title, "Best beaches nearby");
    assert!(
        !sections[0].body.contains("## 1."),
        "Heading line should be removed, got: {}",
        sections[0].body
    );
}

#[test]
fn test_heading_without_number_is_not_a_title() {
    let sections = parse_sections("## Overview\nText");
    assert_eq!(sections[0].title, "Section 1");
    assert!(sections[0].body.starts_with("## Overview"));
}

#[test]
fn test_only_first_heading_is_taken() {
    let sections = parse_sections("## 1. First\nbody\n## 2. Second");
    assert_eq!(sections[0].title, "First");
    assert!(sections[0].body.contains("## 2. Second"));
}

#[test]
fn test_videos_extracted_in_order_and_lines_removed() {
    let doc = "Intro\nYouTube: https://youtu.be/AAAAAAAAAAA\nMiddle\nYouTube: https://youtu.be/BBBBBBBBBBB\nEnd";
    let sections = parse_sections(doc);
    assert_eq!(
        sections[0].videos,
        [
            "https://youtu.be/AAAAAAAAAAA",
            "https://youtu.be/BBBBBBBBBBB"
        ]
    );
    assert!(!sections[0].body.contains("YouTube:"));
    assert_eq!(sections[0].body, "Intro\nMiddle\nEnd");
}

#[test]
fn test_video_label_without_url_stays_in_body() {
    let sections = parse_sections("YouTube: coming soon");
    assert!(sections[0].videos.is_empty());
    assert_eq!(sections[0].body, "YouTube: coming soon");
}

#[test]
fn test_gallery_block_boundary() {
    let sections = parse_sections("Gallery:\nhttp://x/1.jpg\nhttp://x/2.jpg\n\nNext paragraph.");
    assert_eq!(sections[0].images, ["http://x/1.jpg", "http://x/2.jpg"]);
    assert_eq!(sections[0].body, "Next paragraph.");
}

#[test]
fn test_gallery_runs_to_end_of_fragment() {
    let sections = parse_sections("Before\n\nGallery: https://a.example/1.png https://a.example/2.png");
    assert_eq!(
        sections[0].images,
        ["https://a.example/1.png", "https://a.example/2.png"]
    );
    assert_eq!(sections[0].body, "Before");
}

#[test]
fn test_gallery_skips_non_urls() {
    let sections = parse_sections("Gallery:\nnot-a-url\nftp://files.example/x.jpg\nhttps://ok.example/y.jpg");
    assert_eq!(sections[0].images, ["https://ok.example/y.jpg"]);
}

#[test]
fn test_gallery_removal_keeps_paragraph_break() {
    let sections = parse_sections(GUIDE);
    let body = &sections[1].body;
    assert!(!body.contains("Gallery:"));
    assert!(!body.contains("cdn.example.com"));
    assert!(
        body.ends_with("* **Playa Mar:** a short drive\n\nBring water shoes."),
        "got: {body}"
    );
    assert_eq!(sections[1].images.len(), 2);
}

#[test]
fn test_gallery_right_after_text_keeps_paragraph_break() {
    let sections = parse_sections("Intro.\nGallery:\nhttp://x/1.jpg\n\nNext paragraph.");
    assert_eq!(sections[0].images, ["http://x/1.jpg"]);
    assert_eq!(sections[0].body, "Intro.\n\nNext paragraph.");
    assert_eq!(split_blocks(&sections[0].body).len(), 2);
}

#[test]
fn test_inline_gallery_label_does_not_join_paragraphs() {
    let sections = parse_sections("See photos. Gallery: http://x/1.jpg\n\nNext paragraph.");
    assert_eq!(sections[0].images, ["http://x/1.jpg"]);
    assert!(
        sections[0].body.starts_with("See photos.") && sections[0].body.ends_with("\n\nNext paragraph."),
        "got: {}",
        sections[0].body
    );
    assert_eq!(split_blocks(&sections[0].body).len(), 2);
}

#[test]
fn test_video_line_removal_takes_leading_text() {
    let sections = parse_sections("Watch it here YouTube: https://youtu.be/AAAAAAAAAAA\nAfter");
    assert_eq!(sections[0].videos, ["https://youtu.be/AAAAAAAAAAA"]);
    assert_eq!(sections[0].body, "After");
}

#[test]
fn test_bare_urls_become_links() {
    let sections = parse_sections("See https://example.com/map for details.");
    assert_eq!(
        sections[0].body,
        r#"See <a href="https://example.com/map" target="_blank" rel="noopener noreferrer">https://example.com/map</a> for details."#
    );
}

#[test]
fn test_trailing_punctuation_stays_outside_link() {
    let sections = parse_sections(GUIDE);
    assert!(
        sections[0].body.contains(
            r#"<a href="https://example.com/directions" target="_blank" rel="noopener noreferrer">https://example.com/directions</a>."#
        ),
        "got: {}",
        sections[0].body
    );
}

#[test]
fn test_existing_anchor_not_double_wrapped() {
    let doc = r#"Book via <a href="https://example.com/book">https://example.com/book</a> today."#;
    let sections = parse_sections(doc);
    assert_eq!(sections[0].body, doc);
    assert_eq!(sections[0].body.matches("<a ").count(), 1);
}

#[test]
fn test_urls_inside_other_tags_are_left_alone() {
    let doc = r#"<img src="https://x.example/a.jpg"> ok"#;
    let sections = parse_sections(doc);
    assert_eq!(sections[0].body, doc);
}

#[test]
fn test_url_after_tag_is_still_linked() {
    let sections = parse_sections("<em>Map</em> https://example.com/map");
    assert_eq!(
        sections[0].body,
        r#"<em>Map</em> <a href="https://example.com/map" target="_blank" rel="noopener noreferrer">https://example.com/map</a>"#
    );
}

#[test]
fn test_icon_follows_title() {
    let sections = parse_sections(GUIDE);
    assert_eq!(sections[0].icon, Icon::Home);
    assert_eq!(sections[1].icon, Icon::Beach);
    assert_eq!(sections[2].icon, Icon::Info);
}

#[test]
fn test_parsing_is_deterministic() {
    assert_eq!(parse_sections(GUIDE), parse_sections(GUIDE));
}

#[test]
fn test_media_lists_only_hold_absolute_urls() {
    for section in parse_sections(GUIDE) {
        for url in section.videos.iter().chain(&section.images) {
            assert!(is_absolute_http_url(url), "not an absolute URL: {url}");
        }
    }
}

#[test]
fn test_absolute_url_check() {
    assert!(is_absolute_http_url("https://example.com"));
    assert!(is_absolute_http_url("http://x/1.jpg"));
    assert!(!is_absolute_http_url("/relative/path.jpg"));
    assert!(!is_absolute_http_url("mailto:someone@example.com"));
    assert!(!is_absolute_http_url("https://"));
}
