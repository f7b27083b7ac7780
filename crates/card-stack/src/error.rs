//! Error types for the card stack
//!
//! Only construction (configuration and deck loading) returns errors to the
//! caller. Runtime gesture handling reports rejected input through
//! [`GestureOutcome`](crate::GestureOutcome) instead of failing.

/// Errors raised at the gesture boundary.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GestureError {
    /// A pointer coordinate was NaN or infinite.
    #[error("non-finite pointer coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f32, y: f32 },
}

/// Errors that can occur while loading a [`StackConfig`](crate::StackConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the animator cannot work with.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Errors that can occur while building a [`Deck`](crate::Deck).
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// The card list was empty.
    #[error("deck must contain at least one card")]
    Empty,

    /// The card list JSON could not be parsed.
    #[error("deck parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
