//! Stack animator coordinating gestures, animation and projection
//!
//! This module is split into focused submodules:
//! - `phase`: Phase enum, stack state and outgoing signals
//! - `gestures`: Gesture entry points (begin/move/end)
//! - `animation`: Frame ticking and release animations
//! - `projection`: Per-card transforms for the renderer

mod animation;
mod gestures;
mod phase;
mod projection;

use tracing::debug;

use crate::card::{Card, Deck};
use crate::config::StackConfig;
use crate::error::ConfigError;
use crate::input::GestureTracker;
use crate::transition::SwipeTween;
use crate::viewport::Viewport;

pub use phase::{Phase, StackSignal, StackState};
pub use projection::{CardTransform, StackSnapshot};

use projection::LivePose;

/// Stack animator owning the card stack and its state machine
///
/// Gesture events mutate the state immediately; frame ticks advance release
/// animations and smoothing. The renderer reads transforms and never writes
/// back.
#[derive(Debug)]
pub struct StackAnimator {
    /// Tuning constants
    pub(crate) config: StackConfig,
    /// Cards in stack order
    pub(crate) deck: Deck,
    /// Screen size for the commit threshold
    pub(crate) viewport: Viewport,
    /// Index, phase and drag values
    pub(crate) state: StackState,
    /// Active drag tracking
    pub(crate) tracker: GestureTracker,
    /// Running release animation
    pub(crate) tween: Option<SwipeTween>,
    /// Smoothed pose of the top card
    pub(crate) top_pose: LivePose,
    /// Smoothed pose of the next card
    pub(crate) next_pose: LivePose,
    /// Cached resting transforms for cards two or more below the top
    pub(crate) resting: Vec<CardTransform>,
    /// Number of times `resting` has been rebuilt
    pub(crate) resting_generation: u64,
    /// Pending signals for the view controller
    pub(crate) signals: Vec<StackSignal>,
    /// Set once the exhausted signal has been queued
    pub(crate) exhausted_signaled: bool,
}

impl StackAnimator {
    /// Create an animator after validating `config`
    pub fn new(deck: Deck, config: StackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_validated(deck, config))
    }

    /// Create an animator with the default configuration
    pub fn with_defaults(deck: Deck) -> Self {
        Self::with_validated(deck, StackConfig::default())
    }

    fn with_validated(deck: Deck, config: StackConfig) -> Self {
        let mut animator = Self {
            top_pose: LivePose::resting(0, 0, &config.projection),
            next_pose: LivePose::resting(1, 1, &config.projection),
            config,
            deck,
            viewport: Viewport::default(),
            state: StackState::default(),
            tracker: GestureTracker::new(),
            tween: None,
            resting: Vec::new(),
            resting_generation: 0,
            signals: Vec::new(),
            exhausted_signaled: false,
        };
        animator.rebuild_resting();
        animator
    }

    /// Set the viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Get the current viewport
    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Get the configuration
    #[inline]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Get the deck
    #[inline]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Get the stack state
    #[inline]
    pub fn state(&self) -> &StackState {
        &self.state
    }

    /// Get the current phase
    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Index of the top card
    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Current top card, `None` once exhausted
    pub fn top_card(&self) -> Option<&Card> {
        self.deck.get(self.state.current_index)
    }

    /// Check if every card has been swiped away
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state.current_index >= self.deck.len()
    }

    /// Check if the pointer is holding the top card (for a grab cursor)
    #[inline]
    pub fn is_grabbing(&self) -> bool {
        self.state.phase == Phase::Dragging
    }

    /// Commit threshold in pixels for the current viewport
    #[inline]
    pub fn commit_threshold(&self) -> f32 {
        self.viewport.commit_threshold(&self.config)
    }

    /// Drain pending signals
    pub fn take_signals(&mut self) -> Vec<StackSignal> {
        std::mem::take(&mut self.signals)
    }

    /// Move to `next`, zeroing the drag when entering Idle
    pub(crate) fn enter_phase(&mut self, next: Phase) {
        let from = self.state.phase;
        debug_assert!(
            from.can_transition_to(next, self.config.allow_regrab_while_settling),
            "illegal phase transition {:?} -> {:?}",
            from,
            next
        );
        debug!(?from, to = ?next, index = self.state.current_index, "phase transition");

        self.state.phase = next;
        if next == Phase::Idle {
            self.state.reset_drag();
        }
    }
}
