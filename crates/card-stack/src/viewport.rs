//! Viewport dimensions used for the commit threshold

use serde::{Deserialize, Serialize};

use crate::config::StackConfig;

/// Screen size in pixels
///
/// The animator only needs the width, to scale the commit threshold so that
/// narrow screens commit on a shorter swipe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given screen size
    pub fn new(width: f32, height: f32) -> Self {
        let mut viewport = Self::default();
        viewport.resize(width, height);
        viewport
    }

    /// Resize the viewport, ignoring non-finite or negative dimensions
    pub fn resize(&mut self, width: f32, height: f32) {
        if width.is_finite() && width >= 0.0 {
            self.width = width;
        }
        if height.is_finite() && height >= 0.0 {
            self.height = height;
        }
    }

    /// Commit threshold in pixels for this viewport
    #[inline]
    pub fn commit_threshold(&self, config: &StackConfig) -> f32 {
        config.commit_threshold(self.width)
    }
}
