//! Easing functions for swipe animations
//!
//! Every function takes progress `t` in `[0, 1]` (clamped) and returns the
//! exact endpoint at `t = 0` and `t = 1`.

use std::f32::consts::PI;

/// Values closer than this to their target snap onto it
pub const SNAP_EPSILON: f32 = 0.001;

/// Ease-out quadratic function
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv
}

/// Ease-out cubic function
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Ease-out cubic with a sine overshoot term
///
/// Multiplies the eased value by `1 + overshoot * sin(t * PI)`. The sine term
/// vanishes at both ends; `t >= 1` still returns exactly 1.
#[inline]
pub fn spring_settle(t: f32, overshoot: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    if t <= 0.0 {
        return 0.0;
    }
    ease_out_cubic(t) * (1.0 + overshoot * (t * PI).sin())
}

/// Linear interpolation, exact at both endpoints
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// One step of exponential smoothing toward `target`
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    if (target - current).abs() <= SNAP_EPSILON {
        target
    } else {
        current + (target - current) * factor
    }
}
