//! Animator configuration
//!
//! All tuning constants live here instead of being scattered through the
//! animation code. JSON keys are camelCase and every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the stack animator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackConfig {
    /// Card offset per pixel of horizontal drag
    pub swipe_sensitivity: f32,
    /// Card z-rotation (radians) per pixel of horizontal drag
    pub rotation_gain: f32,
    /// Commit threshold as a fraction of viewport width
    pub commit_threshold_fraction: f32,
    /// Upper bound on the commit threshold in pixels
    pub max_commit_threshold: f32,
    /// Offset the top card travels to when it leaves the stack
    pub exit_offset: f32,
    /// Rotation the top card reaches when it leaves the stack
    pub exit_rotation: f32,
    /// Duration of the advance animation
    pub advance_duration_ms: u32,
    /// Duration of the settle-back animation
    pub settle_duration_ms: u32,
    /// Amplitude of the spring wobble while settling back
    pub settle_overshoot: f32,
    /// Allow grabbing the top card again while it is settling back
    pub allow_regrab_while_settling: bool,
    /// Per-card projection tuning
    pub projection: ProjectionConfig,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            swipe_sensitivity: 0.055,
            rotation_gain: 0.014,
            commit_threshold_fraction: 0.2,
            max_commit_threshold: 80.0,
            exit_offset: 20.0,
            exit_rotation: 0.6,
            advance_duration_ms: 500,
            settle_duration_ms: 400,
            settle_overshoot: 0.1,
            allow_regrab_while_settling: false,
            projection: ProjectionConfig::default(),
        }
    }
}

/// Tuning for the per-card transform projection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionConfig {
    /// Y-axis tilt per unit of drag offset
    pub tilt_gain: f32,
    /// Smallest scale the top card shrinks to
    pub min_scale: f32,
    /// Scale lost per unit of drag offset
    pub scale_falloff: f32,
    /// Drag offset at which the next card is fully promoted
    pub max_swipe: f32,
    /// Per-frame smoothing factor for the top card
    pub top_smoothing: f32,
    /// Per-frame smoothing factor for the next card
    pub next_smoothing: f32,
    /// Depth between neighbouring resting cards
    pub depth_step: f32,
    /// Scale lost per position down the stack
    pub scale_step: f32,
    /// Opacity of cards that are not in focus
    pub stacked_opacity: f32,
    /// Opacity of the next card before the swipe starts revealing it
    pub next_opacity_floor: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            tilt_gain: 0.05,
            min_scale: 0.7,
            scale_falloff: 0.04,
            max_swipe: 8.0,
            top_smoothing: 0.2,
            next_smoothing: 0.15,
            depth_step: 0.15,
            scale_step: 0.05,
            stacked_opacity: 0.8,
            next_opacity_floor: 0.7,
        }
    }
}

impl StackConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("swipeSensitivity", self.swipe_sensitivity)?;
        finite("rotationGain", self.rotation_gain)?;
        unit_interval("commitThresholdFraction", self.commit_threshold_fraction)?;
        positive("maxCommitThreshold", self.max_commit_threshold)?;
        finite("exitOffset", self.exit_offset)?;
        finite("exitRotation", self.exit_rotation)?;
        finite("settleOvershoot", self.settle_overshoot)?;
        if !(0.0..1.0).contains(&self.settle_overshoot) {
            return Err(invalid("settleOvershoot", "must be in [0, 1)"));
        }
        self.projection.validate()
    }

    /// Commit threshold in pixels for a viewport of the given width
    #[inline]
    pub fn commit_threshold(&self, viewport_width: f32) -> f32 {
        (viewport_width * self.commit_threshold_fraction).min(self.max_commit_threshold)
    }
}

impl ProjectionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        finite("projection.tiltGain", self.tilt_gain)?;
        unit_interval("projection.minScale", self.min_scale)?;
        finite("projection.scaleFalloff", self.scale_falloff)?;
        positive("projection.maxSwipe", self.max_swipe)?;
        unit_interval("projection.topSmoothing", self.top_smoothing)?;
        unit_interval("projection.nextSmoothing", self.next_smoothing)?;
        finite("projection.depthStep", self.depth_step)?;
        finite("projection.scaleStep", self.scale_step)?;
        unit_interval("projection.stackedOpacity", self.stacked_opacity)?;
        unit_interval("projection.nextOpacityFloor", self.next_opacity_floor)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be positive"))
    }
}

/// Accepts (0, 1]
fn unit_interval(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be in (0, 1]"))
    }
}
