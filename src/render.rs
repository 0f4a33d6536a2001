//! HTML rendering of parsed sections.
//!
//! Bodies are trusted editorial copy: they already carry the anchors produced during parsing and
//! are emitted without escaping. Titles and media URLs end up inside attributes and headings, so
//! those are escaped.

use crate::blocks::{split_blocks, Block, Inline};
use crate::section::Section;
use crate::video::{embed_url, is_embeddable};
use regex::Regex;
use std::fmt::{self, Display, Write};
use std::sync::LazyLock;

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\b[^>]*>(.*?)</a>").expect("anchor pattern compiles"));

#[derive(Clone, Copy, Debug)]
/// Switches that change how sections are turned into HTML.
pub struct RenderOptions {
    /// Render recognised video links as embedded players rather than plain links.
    pub embed_videos: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { embed_videos: true }
    }
}

#[must_use]
/// Renders sections as an HTML fragment, one `<section>` element per record.
pub fn render_document(sections: &[Section], options: &RenderOptions) -> String {
    HtmlDocument { sections, options }.to_string()
}

struct HtmlDocument<'a> {
    sections: &'a [Section],
    options: &'a RenderOptions,
}

impl Display for HtmlDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections {
            write_section(f, section, self.options)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut impl Write, section: &Section, options: &RenderOptions) -> fmt::Result {
    let title = escape_html(&section.title);
    writeln!(
        f,
        r#"<section id="{}" class="content-section">"#,
        escape_html(&section.identifier)
    )?;
    writeln!(f, r#"  <h2 data-icon="{}">{title}</h2>"#, section.icon.name())?;

    if !section.videos.is_empty() {
        writeln!(f, r#"  <div class="videos">"#)?;
        for (n, video) in section.videos.iter().enumerate() {
            if options.embed_videos && is_embeddable(video) {
                writeln!(
                    f,
                    r#"    <iframe src="{}" title="{title} video {}" loading="lazy" allowfullscreen></iframe>"#,
                    escape_html(&embed_url(video)),
                    n + 1
                )?;
            } else {
                let href = escape_html(video);
                writeln!(
                    f,
                    r#"    <a href="{href}" target="_blank" rel="noopener noreferrer">{href}</a>"#
                )?;
            }
        }
        writeln!(f, "  </div>")?;
    }

    for block in split_blocks(&section.body) {
        write_block(f, &block)?;
    }

    if !section.images.is_empty() {
        writeln!(f, r#"  <div class="gallery">"#)?;
        for (n, image) in section.images.iter().enumerate() {
            writeln!(
                f,
                r#"    <img src="{}" alt="{title} image {}" loading="lazy">"#,
                escape_html(image),
                n + 1
            )?;
        }
        writeln!(f, "  </div>")?;
    }

    writeln!(f, "</section>")
}

fn write_block(f: &mut impl Write, block: &Block) -> fmt::Result {
    match block {
        Block::Paragraph { inlines } => writeln!(f, "  <p>{}</p>", inlines_html(inlines)),
        Block::BoldList { lead, items } | Block::DotList { lead, items } => {
            if let Some(lead) = lead {
                writeln!(f, "  <p>{}</p>", inlines_html(lead))?;
            }
            writeln!(f, "  <ul>")?;
            for item in items {
                writeln!(f, "    <li>{}</li>", inlines_html(item))?;
            }
            writeln!(f, "  </ul>")
        }
    }
}

#[must_use]
/// Joins inline spans into HTML, wrapping strong spans in `<strong>`.
pub fn inlines_html(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(text) => text.clone(),
            Inline::Strong(text) => format!("<strong>{text}</strong>"),
        })
        .collect()
}

#[must_use]
/// Replaces anchors with their label, for display where markup cannot be rendered.
pub fn plain_text(text: &str) -> String {
    ANCHOR_RE.replace_all(text, "$1").into_owned()
}

#[must_use]
/// Escapes the five HTML special characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
