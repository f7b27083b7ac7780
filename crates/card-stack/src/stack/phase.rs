//! Stack phase and state

use serde::Serialize;

/// Discrete mode of the stack animator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Top card at rest, accepting a new gesture
    #[default]
    Idle,
    /// Top card follows the pointer
    Dragging,
    /// Top card springs back to rest
    SettlingBack,
    /// Top card flies off-stage
    Advancing,
}

impl Phase {
    /// Check if the stack is at rest
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    /// Check if a release animation is running
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self, Phase::SettlingBack | Phase::Advancing)
    }

    /// Check if `self -> next` is a legal transition
    ///
    /// `SettlingBack -> Dragging` is legal only when re-grabbing is enabled.
    pub fn can_transition_to(&self, next: Phase, allow_regrab: bool) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Dragging)
                | (Phase::Dragging, Phase::Advancing)
                | (Phase::Dragging, Phase::SettlingBack)
                | (Phase::Advancing, Phase::Idle)
                | (Phase::SettlingBack, Phase::Idle)
        ) || (allow_regrab && *self == Phase::SettlingBack && next == Phase::Dragging)
    }
}

/// Mutable state of the stack, owned by the animator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackState {
    /// Index of the top card; equals the deck length once exhausted
    pub current_index: usize,
    /// Current phase
    pub phase: Phase,
    /// Horizontal displacement of the top card
    pub drag_offset: f32,
    /// Z-rotation of the top card
    pub drag_rotation: f32,
}

impl StackState {
    /// Zero the drag values
    #[inline]
    pub fn reset_drag(&mut self) {
        self.drag_offset = 0.0;
        self.drag_rotation = 0.0;
    }
}

/// Notification for the external view controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StackSignal {
    /// A swipe committed and `index` is the new top card
    Advanced { index: usize },
    /// The last card was swiped away; move on to the next view
    Exhausted,
}
