//! Gesture outcome type

use serde::Serialize;

/// Result of applying a gesture event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureOutcome {
    /// Event changed the stack state
    Handled,
    /// Event was not applicable in the current phase
    Ignored,
    /// Event carried malformed coordinates and was dropped
    Rejected,
}

impl GestureOutcome {
    /// Check if the event was applied
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, GestureOutcome::Handled)
    }

    /// Check if the event was dropped as malformed
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, GestureOutcome::Rejected)
    }
}
