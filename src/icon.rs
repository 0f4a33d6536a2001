//! Category icons attached to sections for display.
//!
//! The icon is purely cosmetic metadata. It is chosen by a case-insensitive substring match of the
//! section title against an ordered keyword table, so when a title mentions several topics the
//! keyword listed first decides.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Symbolic category tag chosen from a section title.
pub enum Icon {
    /// Beaches, coastline, sea.
    Beach,
    /// Restaurants, food and wine.
    Dining,
    /// Hiking, gardens, outdoors.
    Nature,
    /// History, museums, local culture.
    Culture,
    /// The property itself.
    Home,
    /// Getting there and getting around.
    Travel,
    /// Weather and seasons.
    Weather,
    /// Festivals, weddings and other events.
    Events,
    /// Photos and views.
    Camera,
    /// Fallback when no keyword matches.
    #[default]
    Info,
}

/// Keyword table in priority order; the first keyword contained in the title wins.
const KEYWORDS: &[(&str, Icon)] = &[
    ("beach", Icon::Beach),
    ("coast", Icon::Beach),
    ("seaside", Icon::Beach),
    ("restaurant", Icon::Dining),
    ("food", Icon::Dining),
    ("dining", Icon::Dining),
    ("cuisine", Icon::Dining),
    ("wine", Icon::Dining),
    ("hike", Icon::Nature),
    ("trail", Icon::Nature),
    ("mountain", Icon::Nature),
    ("nature", Icon::Nature),
    ("garden", Icon::Nature),
    ("history", Icon::Culture),
    ("culture", Icon::Culture),
    ("museum", Icon::Culture),
    ("heritage", Icon::Culture),
    ("villa", Icon::Home),
    ("property", Icon::Home),
    ("house", Icon::Home),
    ("home", Icon::Home),
    ("stay", Icon::Home),
    ("getting", Icon::Travel),
    ("transport", Icon::Travel),
    ("airport", Icon::Travel),
    ("driving", Icon::Travel),
    ("location", Icon::Travel),
    ("weather", Icon::Weather),
    ("season", Icon::Weather),
    ("climate", Icon::Weather),
    ("summer", Icon::Weather),
    ("winter", Icon::Weather),
    ("event", Icon::Events),
    ("festival", Icon::Events),
    ("wedding", Icon::Events),
    ("photo", Icon::Camera),
    ("gallery", Icon::Camera),
    ("view", Icon::Camera),
];

impl Icon {
    #[must_use]
    /// Picks the icon for a title using the first matching keyword, or [`Icon::Info`].
    pub fn for_title(title: &str) -> Self {
        let lowered = title.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map_or(Self::Info, |(_, icon)| *icon)
    }

    #[must_use]
    /// Symbolic tag used in serialised output and HTML `data-icon` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Dining => "dining",
            Self::Nature => "nature",
            Self::Culture => "culture",
            Self::Home => "home",
            Self::Travel => "travel",
            Self::Weather => "weather",
            Self::Events => "events",
            Self::Camera => "camera",
            Self::Info => "info",
        }
    }

    #[must_use]
    /// Glyph shown next to the title in the terminal browser.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Beach => "🏖",
            Self::Dining => "🍽",
            Self::Nature => "⛰",
            Self::Culture => "🏛",
            Self::Home => "🏠",
            Self::Travel => "🚗",
            Self::Weather => "☀",
            Self::Events => "🎉",
            Self::Camera => "📷",
            Self::Info => "ℹ",
        }
    }
}

#[cfg(test)]
#[path = "tests/icon.rs"]
mod tests;
