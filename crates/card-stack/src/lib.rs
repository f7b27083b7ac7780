//! Card Stack Animator for the greeting card presentation
//!
//! This crate turns pointer input into the animation of a swipeable stack of
//! greeting cards:
//! - Gesture tracking (mouse and touch normalized to one drag delta)
//! - A phase state machine deciding commit vs. snap-back
//! - Release animations (ease-out advance, spring settle)
//! - Per-card transforms for an external 3D renderer
//!
//! ## Architecture
//!
//! - [`input`]: Gesture events and the drag tracker
//! - [`transition`]: Easing curves and the release tween
//! - [`card`]: Card content, deck and face lookup
//! - [`config`]: Tuning constants
//!
//! ## Example
//!
//! ```rust
//! use card_stack::{Deck, Phase, StackAnimator};
//!
//! let mut stack = StackAnimator::with_defaults(Deck::rose_day());
//! stack.resize(800.0, 600.0);
//!
//! stack.begin(400.0, 300.0);
//! stack.move_to(520.0);
//! stack.end();
//! assert_eq!(stack.phase(), Phase::Advancing);
//!
//! stack.tick(0.0);
//! stack.tick(500.0);
//! assert_eq!(stack.current_index(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Frame timestamps are passed in for deterministic testing
//! 3. **Snapshots Out**: The renderer reads transforms and never writes back

pub mod card;
pub mod config;
pub mod error;
pub mod input;
pub mod transition;

mod stack;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use card::{Card, CardContent, CardFace, Deck, FaceLibrary, Rgb, TextureId, FALLBACK_COLOR};
pub use config::{ProjectionConfig, StackConfig};
pub use error::{ConfigError, DeckError, GestureError};
pub use input::{GestureEvent, GestureOutcome, GestureTracker, PointerSource};
pub use transition::{SwipeTween, TweenKind};

pub use stack::{CardTransform, Phase, StackAnimator, StackSignal, StackSnapshot, StackState};
pub use viewport::Viewport;
