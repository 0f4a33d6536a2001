//! Section representation for parsed editorial content.
//!
//! A section is one delimiter-separated fragment of a content document, reduced to a title, a
//! cleaned body and the media references that were pulled out of it. Sections are rebuilt from
//! scratch on every parse and carry no link back to the source text.

use crate::icon::Icon;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One structured unit of content, ready for display.
pub struct Section {
    /// Position-derived key (`section-1`, `section-2`, ...).
    pub identifier: String,
    /// Heading text, or `Section <n>` when the fragment has no numbered heading.
    pub title: String,
    /// Remaining text with bare URLs wrapped in anchors.
    pub body: String,
    /// Video URLs from `YouTube:` lines, in order of appearance.
    pub videos: Vec<String>,
    /// Image URLs from the `Gallery:` block, in order of appearance.
    pub images: Vec<String>,
    /// Category icon chosen from the title.
    pub icon: Icon,
}

impl Section {
    #[must_use]
    /// Whether the section carries any extracted video or image references.
    pub fn has_media(&self) -> bool {
        !self.videos.is_empty() || !self.images.is_empty()
    }
}
