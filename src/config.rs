//! Configuration to acknowledge author preferences as well as set defaults.
//!
//! Specifically, we try to find a folio.toml, and if present we load settings from there.
//! This provides wrapping width, file extension and output preferences.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for wrapping section text in the browser.
    pub wrap_width: usize,
    #[facet(default = vec!["md".to_string(), "txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = true)]
    /// Render recognised video links as embedded players in HTML output.
    pub embed_videos: bool,
    #[facet(default = true)]
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            file_extensions: vec!["md".to_string(), "txt".to_string()],
            embed_videos: true,
            pretty_json: true,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from folio.toml if present.
    ///
    /// An unreadable or malformed file is reported and the defaults are used instead.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring {CONFIG_FILE}");
            Self::default()
        })
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid configuration TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
