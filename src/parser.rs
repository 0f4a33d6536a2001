//! Parser for the house content convention.
//!
//! A content document is one hand-authored string. Sections are separated by `---`; each section
//! may open with a numbered heading (`## 3. Getting around`), carry `YouTube: <url>` lines and a
//! `Gallery:` block of image URLs, and otherwise holds free text with bullet lists and `**bold**`
//! spans. [`parse_sections`] turns such a document into [`Section`] records.
//!
//! The parser is lenient by construction: the input is editorial copy, so a fragment without a
//! heading gets a placeholder title and a fragment without media gets empty media lists. Nothing
//! here returns an error.

use crate::icon::Icon;
use crate::section::Section;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, trace};
use url::Url;

/// Literal separator between sections.
pub const DELIMITER: &str = "---";

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*\d+\.[ \t]*(\S.*?)[ \t]*\r?$\n?")
        .expect("heading pattern compiles")
});

static VIDEO_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^.*?YouTube:[ \t]+(\S+).*\r?$\n?").expect("video line pattern compiles")
});

static GALLERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Gallery:(?s:.*?)(\n[ \t]*\r?\n|\z)").expect("gallery pattern compiles")
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"']+"#).expect("url pattern compiles"));

static ANCHOR_OR_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(<a\b[^>]*>.*?</a>|</?[a-z!][^<>]*>)|(https?://[^\s<>"']+)"#)
        .expect("anchor pattern compiles")
});

static EXCESS_BLANK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\r?\n){2,}").expect("blank run pattern compiles"));

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

#[must_use]
/// Splits a content document into sections.
///
/// Fragments are taken between literal `---` delimiters; fragments that are blank after trimming
/// are dropped and do not count towards section numbering. The same input always yields the same
/// output.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let sections: Vec<Section> = text
        .split(DELIMITER)
        .filter(|fragment| !fragment.trim().is_empty())
        .enumerate()
        .map(|(index, fragment)| parse_fragment(fragment, index + 1))
        .collect();

    debug!(
        sections = sections.len(),
        videos = sections.iter().map(|s| s.videos.len()).sum::<usize>(),
        images = sections.iter().map(|s| s.images.len()).sum::<usize>(),
        "parsed content document"
    );

    sections
}

/// Builds one section from a raw fragment at 1-based `position`.
fn parse_fragment(fragment: &str, position: usize) -> Section {
    let (title, rest) = extract_title(fragment);
    let title = title.unwrap_or_else(|| format!("Section {position}"));
    let (videos, rest) = extract_videos(&rest);
    let (images, rest) = extract_gallery(&rest);
    let body = linkify(EXCESS_BLANK_RE.replace_all(&rest, "\n\n").trim());
    let icon = Icon::for_title(&title);

    trace!(
        position,
        %title,
        videos = videos.len(),
        images = images.len(),
        "parsed section"
    );

    Section {
        identifier: format!("section-{position}"),
        title,
        body,
        videos,
        images,
        icon,
    }
}

/// Finds the first numbered heading line and removes it from the fragment.
fn extract_title(fragment: &str) -> (Option<String>, String) {
    let Some((title, line)) = HEADING_RE
        .captures(fragment)
        .and_then(|caps| Some((caps.get(1)?.as_str().to_string(), caps.get(0)?.range())))
    else {
        return (None, fragment.to_string());
    };
    let rest = format!("{}{}", &fragment[..line.start], &fragment[line.end..]);
    (Some(title), rest)
}

/// Collects `YouTube:` URLs in order and drops their lines.
///
/// The whole line goes, including any text before the label. A label followed by something that
/// is not an absolute http(s) URL is left in place as text.
fn extract_videos(text: &str) -> (Vec<String>, String) {
    let mut videos = Vec::new();
    let rest = VIDEO_LINE_RE.replace_all(text, |caps: &Captures| {
        let candidate = &caps[1];
        if is_absolute_http_url(candidate) {
            videos.push(candidate.to_string());
            String::new()
        } else {
            caps[0].to_string()
        }
    });
    (videos, rest.into_owned())
}

/// Collects image URLs from `Gallery:` blocks and drops the blocks.
///
/// The blank line ending a block is a paragraph boundary and is put back in its place.
fn extract_gallery(text: &str) -> (Vec<String>, String) {
    let mut images = Vec::new();
    let rest = GALLERY_RE.replace_all(text, |caps: &Captures| {
        images.extend(
            URL_RE
                .find_iter(&caps[0])
                .map(|m| m.as_str())
                .filter(|candidate| is_absolute_http_url(candidate))
                .map(str::to_string),
        );
        if caps[1].is_empty() {
            String::new()
        } else {
            "\n\n".to_string()
        }
    });
    (images, rest.into_owned())
}

/// Wraps bare URLs in anchors, leaving existing anchors and URLs inside other tags alone.
fn linkify(text: &str) -> String {
    ANCHOR_OR_URL_RE
        .replace_all(text, |caps: &Captures| {
            if let Some(anchor) = caps.get(1) {
                return anchor.as_str().to_string();
            }
            let raw = &caps[2];
            let url = raw.trim_end_matches(TRAILING_PUNCTUATION);
            let trailing = &raw[url.len()..];
            if is_absolute_http_url(url) {
                format!(
                    r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>{trailing}"#
                )
            } else {
                raw.to_string()
            }
        })
        .into_owned()
}

/// Whether `candidate` is a well-formed absolute URL with an http or https scheme.
pub(crate) fn is_absolute_http_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
