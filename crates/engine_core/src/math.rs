//! Angle and heading helpers.

use glam::Vec3;

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// World-space forward direction for a yaw heading in degrees.
///
/// The airframe's nose sits on local -X (the tail boom extends along +X), so
/// heading 0 faces world -X and positive headings turn toward +Z.
#[inline]
pub fn yaw_forward(heading_degrees: f32) -> Vec3 {
    let r = heading_degrees.to_radians();
    Vec3::new(-r.cos(), 0.0, r.sin())
}
