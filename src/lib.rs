//! folio: section parser and browser for hand-authored editorial content.
//!
//! Content is written as one long document in a light markdown-like convention: sections are
//! separated by `---`, open with a numbered heading (`## 2. The villa`), and may carry
//! `YouTube: <url>` lines and a `Gallery:` block of image URLs. [`parse_sections`] turns such a
//! document into [`Section`] records; [`blocks::split_blocks`] classifies a section body into
//! paragraphs and bullet lists; [`render::render_document`] produces HTML and the [`ui`] module
//! draws a terminal browser over the same records.
//!
//! ```
//! let doc = "## 1. The beach\nFive minutes on foot.\nYouTube: https://youtu.be/dQw4w9WgXcQ\n---\nNo heading";
//! let sections = folio::parse_sections(doc);
//! assert_eq!(sections[0].title, "The beach");
//! assert_eq!(sections[0].videos, ["https://youtu.be/dQw4w9WgXcQ"]);
//! assert_eq!(sections[1].title, "Section 2");
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod blocks;
pub mod config;
pub mod error;
pub mod icon;
pub mod input;
pub mod parser;
pub mod render;
pub mod section;
pub mod ui;
pub mod video;

pub use error::{Error, Result};
pub use parser::parse_sections;
pub use section::Section;
