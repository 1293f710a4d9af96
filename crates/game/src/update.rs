//! Per-frame advancement: one call per rendered frame.

use input::Key;
use log::debug;
use renderer::{CameraView, Topology};

use crate::flight::FlightInput;
use crate::state::SimState;
use crate::supply::SupplyCrate;

const CAMERA_KEYS: [(Key, CameraView); 5] = [
    (Key::Digit1, CameraView::Axonometric),
    (Key::Digit2, CameraView::Front),
    (Key::Digit3, CameraView::Top),
    (Key::Digit4, CameraView::Side),
    (Key::Digit5, CameraView::Chase),
];

/// Run one tick: edge-triggered toggles first (they work while paused),
/// then clock-gated entity updates.
pub fn tick(state: &mut SimState) {
    if state.input.is_pause_pressed() {
        state.clock.toggle_pause();
    }
    if state.input.is_key_pressed(Key::Plus) {
        state.clock.speed_up();
    }
    if state.input.is_key_pressed(Key::Minus) {
        state.clock.slow_down();
    }
    if state.input.is_key_pressed(Key::W) {
        state.topology = Topology::Wireframe;
    }
    if state.input.is_key_pressed(Key::S) {
        state.topology = Topology::Filled;
    }
    if state.input.is_buildings_pressed() {
        state.show_buildings = !state.show_buildings;
    }
    for (key, view) in CAMERA_KEYS {
        if state.input.is_key_pressed(key) {
            state.camera = view;
        }
    }
    if state.input.is_drop_pressed() {
        state.crates.push(SupplyCrate::dropped_from(&state.helicopter));
    }

    // Pausing freezes the simulation clock, not the render: entity state
    // only advances while the clock is running, but the caller still draws.
    let dt = state.clock.advance();
    if dt > 0.0 {
        let wind = state.wind.sample(state.clock.elapsed_seconds());
        let input = FlightInput::from_input(&state.input);
        state.helicopter.update(&input, wind, dt);

        for crate_ in &mut state.crates {
            crate_.update(dt);
        }
        let before = state.crates.len();
        state.crates.retain(|c| !c.is_expired());
        if state.crates.len() != before {
            debug!("removed {} expired crate(s)", before - state.crates.len());
        }

        let half = state.half_extent;
        for cloud in &mut state.clouds {
            cloud.advance(dt, half, &mut state.rng);
        }
    }

    state.input.begin_frame();
}
