//! Gesture handling: begin, move and end of a swipe

use tracing::{debug, warn};

use super::{Phase, StackAnimator};
use crate::error::GestureError;
use crate::input::{validate_point, DragSample, GestureEvent, GestureOutcome, PointerSource};
use crate::transition::SwipeTween;

impl StackAnimator {
    /// Apply a normalized pointer event
    ///
    /// This is the single entry point for input plumbing. Every release or
    /// cancel, whatever its source, ends an active drag.
    pub fn apply_gesture_event(&mut self, event: GestureEvent) -> GestureOutcome {
        match event {
            GestureEvent::Press { x, y, source } => self.begin_with(x, y, source),
            GestureEvent::Move { x, y, source } => match validate_point(x, y) {
                Ok(()) => self.move_with(x, source),
                Err(err) => reject(err),
            },
            GestureEvent::Release { .. } | GestureEvent::Cancel { .. } => self.end(),
        }
    }

    /// Start a drag at `(x, y)`
    ///
    /// Ignored unless the stack is idle (or settling back with re-grab
    /// enabled) and not yet exhausted.
    pub fn begin(&mut self, x: f32, y: f32) -> GestureOutcome {
        self.begin_with(x, y, PointerSource::Mouse)
    }

    /// Move the active drag to `x`
    pub fn move_to(&mut self, x: f32) -> GestureOutcome {
        let source = match self.tracker.anchor() {
            Some(anchor) => anchor.source,
            None => return GestureOutcome::Ignored,
        };
        self.move_with(x, source)
    }

    /// Release the active drag, committing or settling back
    pub fn end(&mut self) -> GestureOutcome {
        if self.state.phase != Phase::Dragging {
            return GestureOutcome::Ignored;
        }

        let delta = self.tracker.finish().unwrap_or(0.0);
        let threshold = self.commit_threshold();
        let offset = self.state.drag_offset;
        let rotation = self.state.drag_rotation;

        if delta.abs() > threshold {
            let direction = self.tracker.direction();
            debug!(delta, threshold, direction, "swipe committed");
            self.tween = Some(SwipeTween::advance(offset, rotation, direction, &self.config));
            self.enter_phase(Phase::Advancing);
        } else {
            debug!(delta, threshold, "swipe below threshold, settling back");
            self.tween = Some(SwipeTween::settle(offset, rotation, &self.config));
            self.enter_phase(Phase::SettlingBack);
        }
        GestureOutcome::Handled
    }

    fn begin_with(&mut self, x: f32, y: f32, source: PointerSource) -> GestureOutcome {
        if self.is_exhausted() {
            return GestureOutcome::Ignored;
        }

        match self.state.phase {
            Phase::Idle => {
                if let Err(err) = self.tracker.start(x, y, source) {
                    return reject(err);
                }
                self.enter_phase(Phase::Dragging);
                GestureOutcome::Handled
            }
            Phase::SettlingBack if self.config.allow_regrab_while_settling => {
                self.regrab(x, y, source)
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Catch the top card mid-settle and resume dragging from where it is
    fn regrab(&mut self, x: f32, y: f32, source: PointerSource) -> GestureOutcome {
        let delta = self.state.drag_offset / self.config.swipe_sensitivity;
        if let Err(err) = self.tracker.resume(x, y, source, delta) {
            return reject(err);
        }

        self.tween = None;
        self.apply_sample(DragSample::from_delta(delta, &self.config));
        self.enter_phase(Phase::Dragging);
        GestureOutcome::Handled
    }

    fn move_with(&mut self, x: f32, source: PointerSource) -> GestureOutcome {
        if self.state.phase != Phase::Dragging {
            return GestureOutcome::Ignored;
        }

        match self.tracker.track(x, source) {
            Ok(Some(delta)) => {
                self.apply_sample(DragSample::from_delta(delta, &self.config));
                GestureOutcome::Handled
            }
            Ok(None) => GestureOutcome::Ignored,
            Err(err) => reject(err),
        }
    }

    fn apply_sample(&mut self, sample: DragSample) {
        self.state.drag_offset = sample.offset;
        self.state.drag_rotation = sample.rotation;
    }
}

fn reject(err: GestureError) -> GestureOutcome {
    warn!(%err, "rejected gesture input");
    GestureOutcome::Rejected
}
