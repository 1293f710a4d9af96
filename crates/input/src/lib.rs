//! Keyboard state tracking for the simulation.
//!
//! The external windowing shell translates its key events into [`Key`] and
//! feeds them through [`InputState::key_down`]/[`InputState::key_up`]. Flight
//! controls are level-triggered (held), everything else edge-triggered
//! (pressed this frame).

use std::collections::HashSet;

/// The keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Wireframe fill mode.
    W,
    /// Solid fill mode.
    S,
    /// Pause toggle.
    P,
    /// Speed the simulation clock up.
    Plus,
    /// Slow the simulation clock down.
    Minus,
    /// Camera presets.
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    /// Climb.
    ArrowUp,
    /// Descend.
    ArrowDown,
    /// Accelerate forward along the flight ring.
    ArrowLeft,
    /// Drop a supply crate.
    Space,
    /// Toggle building visibility.
    B,
}

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<Key>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the end of each tick.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    /// Process a key-down event.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_held.contains(&key) {
            self.keys_pressed.insert(key);
        }
        self.keys_held.insert(key);
    }

    /// Process a key-up event.
    pub fn key_up(&mut self, key: Key) {
        self.keys_held.remove(&key);
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    // Semantic queries

    /// Climb input is held (ArrowUp).
    pub fn is_climb_held(&self) -> bool {
        self.is_key_held(Key::ArrowUp)
    }

    /// Descend input is held (ArrowDown).
    pub fn is_descend_held(&self) -> bool {
        self.is_key_held(Key::ArrowDown)
    }

    /// Forward acceleration is held (ArrowLeft).
    pub fn is_forward_held(&self) -> bool {
        self.is_key_held(Key::ArrowLeft)
    }

    /// Crate drop was pressed this frame (Space, one-shot per press).
    pub fn is_drop_pressed(&self) -> bool {
        self.is_key_pressed(Key::Space)
    }

    /// Pause toggle was pressed (P).
    pub fn is_pause_pressed(&self) -> bool {
        self.is_key_pressed(Key::P)
    }

    /// Building visibility toggle was pressed (B).
    pub fn is_buildings_pressed(&self) -> bool {
        self.is_key_pressed(Key::B)
    }
}
