//! Release animation for the top card

use super::{ease_out_cubic, lerp, spring_settle};
use crate::config::StackConfig;

/// Which release animation is running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
    /// Card flies off-stage
    Advance,
    /// Card springs back to rest
    Settle,
}

/// Animation of the top card's drag offset and rotation after release
///
/// The tween is created when the gesture ends, which carries no timestamp.
/// Its clock starts on the first frame tick that sees it (see [`arm`]).
///
/// [`arm`]: SwipeTween::arm
#[derive(Clone, Debug)]
pub struct SwipeTween {
    /// Kind of animation
    pub kind: TweenKind,
    /// Start time (ms timestamp), latched by the first frame
    pub start_ms: Option<f64>,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Offset at release
    pub from_offset: f32,
    /// Rotation at release
    pub from_rotation: f32,
    /// Final offset
    pub to_offset: f32,
    /// Final rotation
    pub to_rotation: f32,
    /// Spring amplitude (settle only)
    pub overshoot: f32,
}

impl SwipeTween {
    /// Create an advance animation toward the off-stage target on `direction`'s side
    pub fn advance(
        from_offset: f32,
        from_rotation: f32,
        direction: f32,
        config: &StackConfig,
    ) -> Self {
        Self {
            kind: TweenKind::Advance,
            start_ms: None,
            duration_ms: config.advance_duration_ms,
            from_offset,
            from_rotation,
            to_offset: direction * config.exit_offset,
            to_rotation: direction * config.exit_rotation,
            overshoot: 0.0,
        }
    }

    /// Create a settle-back animation toward rest
    pub fn settle(from_offset: f32, from_rotation: f32, config: &StackConfig) -> Self {
        Self {
            kind: TweenKind::Settle,
            start_ms: None,
            duration_ms: config.settle_duration_ms,
            from_offset,
            from_rotation,
            to_offset: 0.0,
            to_rotation: 0.0,
            overshoot: config.settle_overshoot,
        }
    }

    /// Latch the start time if it is not set yet
    #[inline]
    pub fn arm(&mut self, now_ms: f64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
    }

    /// Check if the clock has started
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let start_ms = match self.start_ms {
            Some(start) => start,
            None => return 0.0,
        };
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = (now_ms - start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if the animation is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Get the eased progress
    pub fn eased_progress(&self, now_ms: f64) -> f32 {
        let t = self.progress(now_ms);
        match self.kind {
            TweenKind::Advance => ease_out_cubic(t),
            TweenKind::Settle => spring_settle(t, self.overshoot),
        }
    }

    /// Offset and rotation at `now_ms`
    pub fn sample(&self, now_ms: f64) -> (f32, f32) {
        let t = self.eased_progress(now_ms);
        (
            lerp(self.from_offset, self.to_offset, t),
            lerp(self.from_rotation, self.to_rotation, t),
        )
    }
}
