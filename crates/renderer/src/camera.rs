//! Fixed view presets plus the helicopter chase view.

use engine_core::yaw_forward;
use glam::{Mat4, Vec3};

/// Distance from the origin for the four fixed presets.
const PRESET_DISTANCE: f32 = 60.0;

/// Chase view placement relative to the helicopter.
const CHASE_BACK: f32 = 14.0;
const CHASE_RISE: f32 = 5.0;
const CHASE_AHEAD: f32 = 10.0;

/// The five selectable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    /// Diagonal overview of the whole scene.
    #[default]
    Axonometric,
    Front,
    Top,
    Side,
    /// Follows the helicopter from behind and above its heading.
    Chase,
}

/// Build the view matrix for a preset.
///
/// The chase view reads exactly two fields of helicopter state: world
/// position and heading. Everything else is fixed placement.
pub fn view_matrix(view: CameraView, heli_position: Vec3, heli_heading: f32) -> Mat4 {
    match view {
        CameraView::Axonometric => Mat4::look_at_rh(
            Vec3::splat(PRESET_DISTANCE),
            Vec3::ZERO,
            Vec3::Y,
        ),
        CameraView::Front => Mat4::look_at_rh(
            Vec3::new(-PRESET_DISTANCE, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        ),
        // Looking straight down: up is +Z so the view basis stays well formed.
        CameraView::Top => Mat4::look_at_rh(
            Vec3::new(0.0, PRESET_DISTANCE, 0.0),
            Vec3::ZERO,
            Vec3::Z,
        ),
        CameraView::Side => Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, PRESET_DISTANCE),
            Vec3::ZERO,
            Vec3::Y,
        ),
        CameraView::Chase => {
            let forward = yaw_forward(heli_heading);
            let eye = heli_position - forward * CHASE_BACK + Vec3::Y * CHASE_RISE;
            let target = heli_position + forward * CHASE_AHEAD;
            Mat4::look_at_rh(eye, target, Vec3::Y)
        }
    }
}
