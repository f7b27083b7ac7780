//! Gesture input module
//!
//! Normalizes mouse and touch events and tracks the horizontal drag.

mod event;
mod result;
mod tracker;

pub use event::{GestureEvent, PointerSource};
pub use result::GestureOutcome;
pub use tracker::{validate_point, DragAnchor, DragSample, GestureTracker};
