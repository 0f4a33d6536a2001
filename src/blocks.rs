//! Classification of a section body into display blocks.
//!
//! Bodies are split on blank lines. Each chunk becomes a paragraph unless it uses one of the two
//! bullet conventions found in the content: `* **Lead:** text` lines, or tab separated `•\ttext`
//! lines pasted from word processors. Paired `**` markers become strong spans.

use serde::{Deserialize, Serialize};

const BOLD_BULLET: &str = "* **";
const DOT_BULLET: &str = "•\t";
const STRONG_MARKER: &str = "**";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
/// A run of inline text, either plain or emphasised.
pub enum Inline {
    /// Text rendered as-is.
    Text(String),
    /// Text that was wrapped in `**` markers.
    Strong(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One display block of a section body.
pub enum Block {
    /// Free text.
    Paragraph {
        /// Inline spans of the paragraph.
        inlines: Vec<Inline>,
    },
    /// List written with `* **Lead**` bullets.
    BoldList {
        /// Text preceding the first bullet, if any.
        lead: Option<Vec<Inline>>,
        /// One entry per bullet.
        items: Vec<Vec<Inline>>,
    },
    /// List written with `•<tab>` bullets.
    DotList {
        /// Text preceding the first bullet, if any.
        lead: Option<Vec<Inline>>,
        /// One entry per bullet.
        items: Vec<Vec<Inline>>,
    },
}

#[must_use]
/// Splits a body into paragraphs and lists.
pub fn split_blocks(body: &str) -> Vec<Block> {
    paragraphs(body)
        .iter()
        .map(String::as_str)
        .map(classify)
        .collect()
}

/// Blank-line separated chunks, trailing whitespace removed from each line.
fn paragraphs(body: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }
    chunks
}

fn classify(chunk: &str) -> Block {
    if chunk
        .lines()
        .any(|line| line.trim_start().starts_with(BOLD_BULLET))
    {
        let (lead, items) = collect_items(chunk, |line| line.trim_start().strip_prefix("* "));
        Block::BoldList { lead, items }
    } else if chunk.contains(DOT_BULLET) {
        let (lead, items) = collect_items(chunk, |line| {
            line.split_once(DOT_BULLET).map(|(_, item)| item.trim_start())
        });
        Block::DotList { lead, items }
    } else {
        Block::Paragraph {
            inlines: parse_inlines(chunk.trim_start()),
        }
    }
}

/// Groups lines into an optional lead and bullet items.
///
/// `bullet` returns the item text for bullet lines. Other lines before the first bullet form the
/// lead; after that they continue the previous item.
fn collect_items<'a, F>(chunk: &'a str, bullet: F) -> (Option<Vec<Inline>>, Vec<Vec<Inline>>)
where
    F: Fn(&'a str) -> Option<&'a str>,
{
    let mut lead: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();

    for line in chunk.lines() {
        if let Some(item) = bullet(line) {
            items.push(item.trim_end().to_string());
        } else if let Some(last) = items.last_mut() {
            last.push(' ');
            last.push_str(line.trim());
        } else {
            lead.push(line.trim());
        }
    }

    let lead = (!lead.is_empty()).then(|| parse_inlines(&lead.join(" ")));
    let items = items.iter().map(String::as_str).map(parse_inlines).collect();
    (lead, items)
}

#[must_use]
/// Splits text on paired `**` markers into plain and strong spans.
///
/// A trailing unpaired marker is kept as literal text. Empty spans are omitted.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(STRONG_MARKER) {
        let after_open = &rest[open + STRONG_MARKER.len()..];
        let Some(close) = after_open.find(STRONG_MARKER) else {
            break;
        };
        push_text(&mut inlines, &rest[..open]);
        let strong = &after_open[..close];
        if !strong.is_empty() {
            inlines.push(Inline::Strong(strong.to_string()));
        }
        rest = &after_open[close + STRONG_MARKER.len()..];
    }
    push_text(&mut inlines, rest);

    inlines
}

fn push_text(inlines: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(previous)) = inlines.last_mut() {
        previous.push_str(text);
    } else {
        inlines.push(Inline::Text(text.to_string()));
    }
}

#[cfg(test)]
#[path = "tests/blocks.rs"]
mod tests;
