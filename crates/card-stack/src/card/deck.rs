//! Ordered, immutable card collection

use super::{Card, CardContent};
use crate::error::DeckError;

/// The fixed sequence of cards shown in the stack
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, assigning indices by position
    pub fn new(entries: Vec<CardContent>) -> Result<Self, DeckError> {
        if entries.is_empty() {
            return Err(DeckError::Empty);
        }
        let cards = entries
            .into_iter()
            .enumerate()
            .map(|(index, content)| Card { index, content })
            .collect();
        Ok(Self { cards })
    }

    /// Parse a deck from a JSON array of card entries
    pub fn from_json(json: &str) -> Result<Self, DeckError> {
        let entries: Vec<CardContent> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The built-in Rose Day greeting deck
    pub fn rose_day() -> Self {
        let cards = vec![
            Card {
                index: 0,
                content: CardContent::new(
                    "Happy Rose Day",
                    "A Special Day",
                    "On this Rose Day, I just want you to know how grateful I am to have you in \
                     my life. You’ve become someone I think about without trying, someone who \
                     makes my days lighter just by being there. This rose may fade with time, but \
                     what I feel for you only grows stronger. Thank you for being you — for your \
                     smile, your care, and the way you make everything feel a little more \
                     meaningful.",
                )
                .with_emoji("🌹"),
            },
            Card {
                index: 1,
                content: CardContent::new(
                    "For You",
                    "You are special",
                    "This rose is just a small reminder of how beautifully you’ve become a part \
                     of my life.",
                )
                .with_emoji("💕"),
            },
            Card {
                index: 2,
                content: CardContent::new(
                    "With Love",
                    "Happy Rose Day!",
                    "One rose for the girl who makes my normal days feel special",
                ),
            },
        ];
        Self { cards }
    }

    /// Number of cards
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; a deck holds at least one card
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in order
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_assigns_indices() {
        let deck = Deck::new(vec![
            CardContent::new("A", "a", "first"),
            CardContent::new("B", "b", "second"),
        ])
        .unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(1).unwrap().index, 1);
        assert_eq!(deck.get(1).unwrap().title(), "B");
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
        assert!(matches!(Deck::from_json("[]"), Err(DeckError::Empty)));
    }

    #[test]
    fn test_deck_from_json() {
        let json = r#"[
            { "title": "Hello", "subtitle": "there", "body": "text", "emoji": "🌹" },
            { "title": "Bye", "subtitle": "now", "body": "more text" }
        ]"#;
        let deck = Deck::from_json(json).unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().content.emoji.as_deref(), Some("🌹"));
        assert_eq!(deck.get(1).unwrap().content.emoji, None);
        assert_eq!(deck.get(1).unwrap().body(), "more text");
    }

    #[test]
    fn test_deck_from_json_rejects_malformed() {
        assert!(matches!(Deck::from_json(r#"[{ "title": 1 }]"#), Err(DeckError::Parse(_))));
    }

    #[test]
    fn test_rose_day_deck() {
        let deck = Deck::rose_day();
        assert_eq!(deck.len(), 3);
        assert!(!deck.is_empty());
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index, i);
            assert!(!card.title().is_empty());
        }
        assert_eq!(deck.get(2).unwrap().subtitle(), "Happy Rose Day!");
        let body = deck.get(1).unwrap().body();
        assert!(body.starts_with("This rose is just a small reminder"));
        assert!(body.ends_with("how beautifully you’ve become a part of my life."));
        assert!(deck.get(0).unwrap().body().contains("being you — for your smile"));
    }
}
