//! Normalized gesture events

use serde::{Deserialize, Serialize};

/// Device that produced a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A pointer event, normalized across mouse and touch
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Button pressed or finger down
    Press { x: f32, y: f32, source: PointerSource },
    /// Pointer moved
    Move { x: f32, y: f32, source: PointerSource },
    /// Button released or finger lifted
    Release { source: PointerSource },
    /// Pointer left the surface or the touch was cancelled
    Cancel { source: PointerSource },
}

impl GestureEvent {
    /// Map a browser event name to a gesture event
    ///
    /// `mouseleave` is treated as a cancel so that leaving the surface
    /// mid-drag ends the gesture the same way a release does.
    pub fn from_dom(name: &str, x: f32, y: f32) -> Option<Self> {
        let event = match name {
            "mousedown" => GestureEvent::Press { x, y, source: PointerSource::Mouse },
            "mousemove" => GestureEvent::Move { x, y, source: PointerSource::Mouse },
            "mouseup" => GestureEvent::Release { source: PointerSource::Mouse },
            "mouseleave" => GestureEvent::Cancel { source: PointerSource::Mouse },
            "touchstart" => GestureEvent::Press { x, y, source: PointerSource::Touch },
            "touchmove" => GestureEvent::Move { x, y, source: PointerSource::Touch },
            "touchend" => GestureEvent::Release { source: PointerSource::Touch },
            "touchcancel" => GestureEvent::Cancel { source: PointerSource::Touch },
            _ => return None,
        };
        Some(event)
    }
}
