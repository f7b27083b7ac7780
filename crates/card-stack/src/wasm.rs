//! WASM exports for the card stack
//!
//! This module provides wasm-bindgen exports for the StackAnimator, allowing
//! the page to forward DOM pointer events and read transforms each frame.

use wasm_bindgen::prelude::*;

use crate::card::{Deck, FaceLibrary, TextureId};
use crate::config::StackConfig;
use crate::input::GestureEvent;
use crate::stack::StackAnimator;

/// Stack controller for WASM - wraps StackAnimator with JS-friendly API
#[wasm_bindgen]
pub struct StackController {
    animator: StackAnimator,
    faces: FaceLibrary,
}

#[wasm_bindgen]
impl StackController {
    /// Create a controller
    ///
    /// Empty JSON strings select the default config and the built-in deck.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        deck_json: &str,
        width: f32,
        height: f32,
    ) -> Result<StackController, JsValue> {
        let config = if config_json.trim().is_empty() {
            StackConfig::default()
        } else {
            StackConfig::from_json(config_json).map_err(to_js_error)?
        };
        let deck = if deck_json.trim().is_empty() {
            Deck::rose_day()
        } else {
            Deck::from_json(deck_json).map_err(to_js_error)?
        };

        let mut animator = StackAnimator::new(deck, config).map_err(to_js_error)?;
        animator.resize(width, height);
        Ok(Self {
            animator,
            faces: FaceLibrary::new(),
        })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.animator.resize(width, height);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Forward a DOM pointer event by name, returns the outcome as JSON
    #[wasm_bindgen]
    pub fn pointer_event(&mut self, name: &str, x: f32, y: f32) -> String {
        let event = match GestureEvent::from_dom(name, x, y) {
            Some(event) => event,
            None => return r#"{"type":"ignored"}"#.to_string(),
        };
        let outcome = self.animator.apply_gesture_event(event);
        if outcome.is_rejected() {
            let message = format!("[card-stack] rejected {} at ({}, {})", name, x, y);
            web_sys::console::warn_1(&message.into());
        }
        serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Check if the top card is held (for a grabbing cursor)
    #[wasm_bindgen]
    pub fn is_grabbing(&self) -> bool {
        self.animator.is_grabbing()
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance animations, returns true if another frame is needed
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.animator.tick(now_ms)
    }

    /// Get visible card transforms as JSON
    #[wasm_bindgen]
    pub fn transforms_json(&self) -> String {
        serde_json::to_string(&self.animator.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Drain pending stack signals as a JSON array
    #[wasm_bindgen]
    pub fn take_signals_json(&mut self) -> String {
        serde_json::to_string(&self.animator.take_signals()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Index of the top card
    #[wasm_bindgen]
    pub fn current_index(&self) -> usize {
        self.animator.current_index()
    }

    // =========================================================================
    // Card faces
    // =========================================================================

    /// Register the rasterized face for a card
    #[wasm_bindgen]
    pub fn set_face(&mut self, index: usize, texture: TextureId) {
        self.faces.insert(index, texture);
    }

    /// Get the face to paint on a card as JSON
    #[wasm_bindgen]
    pub fn face_json(&self, index: usize) -> String {
        serde_json::to_string(&self.faces.face_for(index)).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the deck as JSON
    #[wasm_bindgen]
    pub fn deck_json(&self) -> String {
        serde_json::to_string(self.animator.deck().cards()).unwrap_or_else(|_| "[]".to_string())
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
