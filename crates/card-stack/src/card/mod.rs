//! Card content module
//!
//! Cards are immutable content records built once at startup.

mod deck;
mod face;

pub use deck::Deck;
pub use face::{CardFace, FaceLibrary, Rgb, TextureId, FALLBACK_COLOR};

use serde::{Deserialize, Serialize};

/// Content of a single card as it appears in configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// Decoration drawn beside the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CardContent {
    /// Create card content without decoration
    pub fn new(title: &str, subtitle: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            body: body.to_string(),
            emoji: None,
        }
    }

    /// Attach a decoration
    pub fn with_emoji(mut self, emoji: &str) -> Self {
        self.emoji = Some(emoji.to_string());
        self
    }
}

/// A card at a fixed position in the deck
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Position in the deck (0-based)
    pub index: usize,
    #[serde(flatten)]
    pub content: CardContent,
}

impl Card {
    #[inline]
    pub fn title(&self) -> &str {
        &self.content.title
    }

    #[inline]
    pub fn subtitle(&self) -> &str {
        &self.content.subtitle
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.content.body
    }
}
