//! Per-card transform projection for the renderer

use serde::Serialize;

use super::{Phase, StackAnimator};
use crate::config::ProjectionConfig;
use crate::transition::{approach, ease_out_quad, lerp};

/// Transform of a single card for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransform {
    /// Card index in the deck
    pub index: usize,
    pub horizontal_offset: f32,
    pub z_rotation: f32,
    pub y_rotation_tilt: f32,
    pub scale: f32,
    /// Distance behind the top card (negative is further back)
    pub depth_offset: f32,
    pub opacity: f32,
}

impl CardTransform {
    /// Resting pose of a card `depth` positions below the top
    pub fn resting(index: usize, depth: usize, config: &ProjectionConfig) -> Self {
        let pose = LivePose::resting(index, depth, config);
        Self {
            index,
            horizontal_offset: 0.0,
            z_rotation: 0.0,
            y_rotation_tilt: 0.0,
            scale: pose.scale,
            depth_offset: pose.depth_offset,
            opacity: config.stacked_opacity,
        }
    }
}

/// All visible card transforms for one frame, top card first
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackSnapshot {
    pub current_index: usize,
    pub phase: Phase,
    pub cards: Vec<CardTransform>,
}

/// Smoothed scale and depth of a dynamically animated card
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LivePose {
    pub index: usize,
    pub scale: f32,
    pub depth_offset: f32,
}

impl LivePose {
    pub fn resting(index: usize, depth: usize, config: &ProjectionConfig) -> Self {
        let depth = depth as f32;
        Self {
            index,
            scale: (1.0 - depth * config.scale_step).max(0.0),
            depth_offset: -depth * config.depth_step,
        }
    }

    /// One smoothing step, returns true if not yet at the target
    fn approach(&mut self, scale: f32, depth_offset: f32, factor: f32) -> bool {
        self.scale = approach(self.scale, scale, factor);
        self.depth_offset = approach(self.depth_offset, depth_offset, factor);
        self.scale != scale || self.depth_offset != depth_offset
    }
}

impl StackAnimator {
    /// Transforms of the top and next card (at most two)
    pub fn dynamic_transforms(&self) -> Vec<CardTransform> {
        self.top_transform().into_iter().chain(self.next_transform()).collect()
    }

    /// Cached resting transforms for cards two or more below the top
    #[inline]
    pub fn resting_transforms(&self) -> &[CardTransform] {
        &self.resting
    }

    /// Number of times the resting cache has been rebuilt
    #[inline]
    pub fn resting_generation(&self) -> u64 {
        self.resting_generation
    }

    /// All visible transforms for this frame
    pub fn snapshot(&self) -> StackSnapshot {
        let mut cards = self.dynamic_transforms();
        cards.extend_from_slice(&self.resting);
        StackSnapshot {
            current_index: self.state.current_index,
            phase: self.state.phase,
            cards,
        }
    }

    /// Transform of the top card
    pub fn top_transform(&self) -> Option<CardTransform> {
        if self.is_exhausted() {
            return None;
        }
        let projection = &self.config.projection;
        let offset = self.state.drag_offset;
        let opacity = if self.state.phase.is_idle() {
            1.0
        } else {
            projection.stacked_opacity
        };

        Some(CardTransform {
            index: self.state.current_index,
            horizontal_offset: offset,
            z_rotation: self.state.drag_rotation,
            y_rotation_tilt: offset * projection.tilt_gain,
            scale: self.top_pose.scale,
            depth_offset: self.top_pose.depth_offset,
            opacity,
        })
    }

    /// Transform of the card directly below the top
    pub fn next_transform(&self) -> Option<CardTransform> {
        let index = self.state.current_index + 1;
        if index >= self.deck.len() {
            return None;
        }
        let projection = &self.config.projection;
        let reveal = self.state.drag_offset.abs() / projection.max_swipe;
        let floor = projection.next_opacity_floor;

        Some(CardTransform {
            index,
            horizontal_offset: 0.0,
            z_rotation: 0.0,
            y_rotation_tilt: 0.0,
            scale: self.next_pose.scale,
            depth_offset: self.next_pose.depth_offset,
            opacity: (floor + reveal * (1.0 - floor)).min(1.0),
        })
    }

    /// Smooth the top and next card toward their targets
    ///
    /// Returns true while either card is still moving.
    pub(crate) fn update_live_poses(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        let projection = &self.config.projection;
        let distance = self.state.drag_offset.abs();

        let top_scale = (1.0 - distance * projection.scale_falloff).max(projection.min_scale);
        let top_moving = self.top_pose.approach(top_scale, 0.0, projection.top_smoothing);

        let next_moving = if self.state.phase.is_idle() {
            self.next_pose = LivePose::resting(self.state.current_index + 1, 1, projection);
            false
        } else {
            let progress = ease_out_quad((distance / projection.max_swipe).min(1.0));
            let rest = LivePose::resting(self.state.current_index + 1, 1, projection);
            let scale = lerp(rest.scale, 1.0, progress);
            let depth_offset = lerp(rest.depth_offset, 0.0, progress);
            self.next_pose.approach(scale, depth_offset, projection.next_smoothing)
        };

        top_moving || next_moving
    }

    /// Hand the next card's pose to the new top card and rebuild the cache
    pub(crate) fn on_index_changed(&mut self) {
        let current = self.state.current_index;
        let projection = &self.config.projection;

        self.top_pose = if self.next_pose.index == current {
            LivePose {
                index: current,
                ..self.next_pose
            }
        } else {
            LivePose::resting(current, 0, projection)
        };
        self.next_pose = LivePose::resting(current + 1, 1, projection);
        self.rebuild_resting();
    }

    pub(crate) fn rebuild_resting(&mut self) {
        let current = self.state.current_index;
        let projection = &self.config.projection;

        self.resting = (current + 2..self.deck.len())
            .map(|index| CardTransform::resting(index, index - current, projection))
            .collect();
        self.resting_generation += 1;
    }
}
