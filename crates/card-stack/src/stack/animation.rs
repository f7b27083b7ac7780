//! Frame ticking for release animations

use tracing::{debug, info, warn};

use super::{Phase, StackAnimator, StackSignal};
use crate::transition::TweenKind;

impl StackAnimator {
    /// Advance animations to `now_ms`, returns true if another frame is needed
    ///
    /// Call once per rendered frame with the frame clock's timestamp. A NaN
    /// or infinite timestamp is dropped without touching any state.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            warn!(now_ms, "dropped non-finite frame timestamp");
            return self.is_animating();
        }
        let tween_active = self.tick_tween(now_ms);
        let poses_moving = self.update_live_poses();
        tween_active || poses_moving
    }

    /// Check if a release animation is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.phase.is_animating()
    }

    /// Step the release tween, returns true while it is still running
    fn tick_tween(&mut self, now_ms: f64) -> bool {
        let tween = match self.tween.as_mut() {
            Some(tween) => tween,
            None => return false,
        };

        if !tween.is_armed() {
            tween.arm(now_ms);
            debug!(kind = ?tween.kind, start_ms = now_ms, "release animation started");
        }
        if !tween.is_complete(now_ms) {
            let (offset, rotation) = tween.sample(now_ms);
            self.state.drag_offset = offset;
            self.state.drag_rotation = rotation;
            return true;
        }

        let kind = tween.kind;
        self.tween = None;
        match kind {
            TweenKind::Advance => self.commit_advance(),
            TweenKind::Settle => self.enter_phase(Phase::Idle),
        }
        false
    }

    /// Promote the next card, or report the stack exhausted
    fn commit_advance(&mut self) {
        let len = self.deck.len();
        let next_index = (self.state.current_index + 1).min(len);
        self.state.current_index = next_index;
        self.enter_phase(Phase::Idle);
        self.on_index_changed();

        if next_index < len {
            debug!(index = next_index, "advanced to next card");
            self.signals.push(StackSignal::Advanced { index: next_index });
        } else if !self.exhausted_signaled {
            info!(cards = len, "card stack exhausted");
            self.exhausted_signaled = true;
            self.signals.push(StackSignal::Exhausted);
        }
    }
}
