//! Card face lookup with a flat-color fallback

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::warn;

/// Handle of a rasterized card face owned by the renderer
pub type TextureId = u32;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#FFB6C1`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color used for cards whose face image is missing
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xFF, 0xB6, 0xC1);

/// What the renderer should paint on a card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardFace {
    /// Rasterized face image
    Image { texture: TextureId },
    /// Flat color, used when no image is available
    Fallback { color: Rgb },
}

/// Registry of face images by card index
///
/// Lookups never fail: a missing face degrades to [`FALLBACK_COLOR`] and is
/// logged once per card.
#[derive(Debug, Default)]
pub struct FaceLibrary {
    faces: HashMap<usize, TextureId>,
    warned: RefCell<HashSet<usize>>,
}

impl FaceLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the face image for a card
    pub fn insert(&mut self, index: usize, texture: TextureId) {
        self.faces.insert(index, texture);
        self.warned.borrow_mut().remove(&index);
    }

    /// Forget the face image for a card
    pub fn remove(&mut self, index: usize) -> Option<TextureId> {
        self.faces.remove(&index)
    }

    /// Check if a card has a face image
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.faces.contains_key(&index)
    }

    /// Resolve what to paint on a card
    pub fn face_for(&self, index: usize) -> CardFace {
        match self.faces.get(&index) {
            Some(&texture) => CardFace::Image { texture },
            None => {
                if self.warned.borrow_mut().insert(index) {
                    warn!(card = index, "missing card face, using fallback color");
                }
                CardFace::Fallback { color: FALLBACK_COLOR }
            }
        }
    }
}
