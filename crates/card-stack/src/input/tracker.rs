//! Gesture tracker turning pointer positions into a horizontal drag delta

use super::PointerSource;
use crate::config::StackConfig;
use crate::error::GestureError;

/// Where the current drag started
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// Start x position (screen pixels)
    pub start_x: f32,
    /// Start y position (screen pixels)
    pub start_y: f32,
    /// Device that owns the drag
    pub source: PointerSource,
}

/// Offset and rotation derived from a drag delta
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    pub offset: f32,
    pub rotation: f32,
}

impl DragSample {
    /// Project a pixel delta through the configured gains
    #[inline]
    pub fn from_delta(delta_x: f32, config: &StackConfig) -> Self {
        Self {
            offset: delta_x * config.swipe_sensitivity,
            rotation: delta_x * config.rotation_gain,
        }
    }
}

/// Tracks a single one-dimensional drag
///
/// Knows nothing about cards; the stack animator decides when a drag may
/// start and what a finished drag means.
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    /// Active drag, if any
    anchor: Option<DragAnchor>,
    /// Most recent delta
    last_delta: f32,
    /// Most recent nonzero delta, kept after the drag ends
    last_nonzero_delta: f32,
}

impl GestureTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the active drag anchor
    #[inline]
    pub fn anchor(&self) -> Option<&DragAnchor> {
        self.anchor.as_ref()
    }

    /// Start tracking a drag at `(x, y)`
    pub fn start(&mut self, x: f32, y: f32, source: PointerSource) -> Result<(), GestureError> {
        self.resume(x, y, source, 0.0)
    }

    /// Start tracking a drag that already has `delta_x` of travel
    ///
    /// The anchor is placed so that a move to `x` reports `delta_x`.
    pub fn resume(
        &mut self,
        x: f32,
        y: f32,
        source: PointerSource,
        delta_x: f32,
    ) -> Result<(), GestureError> {
        validate_point(x, y)?;
        self.anchor = Some(DragAnchor {
            start_x: x - delta_x,
            start_y: y,
            source,
        });
        self.last_delta = delta_x;
        self.last_nonzero_delta = delta_x;
        Ok(())
    }

    /// Record a move to `x`, returning the new delta
    ///
    /// Returns `Ok(None)` when no drag is active or the move comes from a
    /// device that does not own the drag.
    pub fn track(&mut self, x: f32, source: PointerSource) -> Result<Option<f32>, GestureError> {
        let anchor = match self.anchor {
            Some(anchor) if anchor.source == source => anchor,
            _ => return Ok(None),
        };
        validate_point(x, anchor.start_y)?;

        let delta = x - anchor.start_x;
        self.last_delta = delta;
        if delta != 0.0 {
            self.last_nonzero_delta = delta;
        }
        Ok(Some(delta))
    }

    /// Stop tracking, returning the final delta if a drag was active
    pub fn finish(&mut self) -> Option<f32> {
        self.anchor.take().map(|_| self.last_delta)
    }

    /// Most recent delta
    #[inline]
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Sign of the last nonzero delta (+1 when nothing moved yet)
    #[inline]
    pub fn direction(&self) -> f32 {
        if self.last_nonzero_delta < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Reject NaN and infinite coordinates
pub fn validate_point(x: f32, y: f32) -> Result<(), GestureError> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(GestureError::NonFiniteCoordinate { x, y })
    }
}
