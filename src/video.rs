//! Video link normalisation.
//!
//! Content authors paste whatever link their browser gave them: short links, watch pages with
//! extra parameters, embeds, shorts. Everything that carries an 11 character video id is turned
//! into the canonical embed URL. Anything else is handed back untouched so the caller can fall back
//! to a plain link.

use regex::Regex;
use std::sync::LazyLock;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Length of a YouTube video identifier.
const VIDEO_ID_LEN: usize = 11;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w/|/embed/|/shorts/|/live/|[?&]v=)([^#&?/]*)")
        .expect("video id pattern compiles")
});

#[must_use]
/// Extracts the video identifier from any accepted link shape.
///
/// Returns `None` when no known shape matches or the candidate is not exactly eleven characters of
/// the identifier alphabet.
pub fn video_id(url: &str) -> Option<&str> {
    let id = VIDEO_ID_RE.captures(url)?.get(1)?.as_str();
    let well_formed = id.len() == VIDEO_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    well_formed.then_some(id)
}

#[must_use]
/// Produces the embeddable URL for a video link, or returns the link unchanged.
pub fn embed_url(url: &str) -> String {
    video_id(url).map_or_else(|| url.to_string(), |id| format!("{EMBED_BASE}{id}"))
}

#[must_use]
/// Whether [`embed_url`] would produce an embed rather than echo the input.
pub fn is_embeddable(url: &str) -> bool {
    video_id(url).is_some()
}

#[cfg(test)]
#[path = "tests/video.rs"]
mod tests;
