//! Transition and animation module
//!
//! Provides easing curves and the release tween that drives the top card
//! after a gesture ends.

mod easing;
mod tween;

pub use easing::{approach, ease_out_cubic, ease_out_quad, lerp, spring_settle, SNAP_EPSILON};
pub use tween::{SwipeTween, TweenKind};
