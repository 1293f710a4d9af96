//! Supply crates dropped from the helicopter.
//!
//! Each crate freezes the helicopter's heading and forward speed at the
//! moment of release: its glide direction never changes afterwards, even as
//! the helicopter keeps turning around the ring. Vertical motion is plain
//! gravity integration with a ground clamp; a landed crate sits for a fixed
//! time and is then removed.

use engine_core::{yaw_forward, Vec3};
use log::debug;

use crate::flight::{Helicopter, TRAJECTORY_RADIUS};
use crate::scene::FLOOR_TOP_Y;

/// Edge length of the cube model.
pub const CRATE_SIZE: f32 = 1.0;

/// Seconds a landed crate persists before removal.
pub const CRATE_LIFETIME: f32 = 5.0;

/// Downward acceleration, world units per second squared.
pub const GRAVITY: f32 = 9.8;

/// Converts the frozen phase speed (radians/second on the ring) into world
/// units/second of horizontal glide.
pub const CARRY_FACTOR: f32 = TRAJECTORY_RADIUS;

/// Resting height of a landed crate.
pub const CRATE_GROUND_Y: f32 = FLOOR_TOP_Y + CRATE_SIZE / 2.0;

/// One falling or landed crate.
#[derive(Debug, Clone)]
pub struct SupplyCrate {
    pub position: Vec3,
    /// Yaw in degrees, frozen at spawn.
    pub heading: f32,
    /// Phase speed frozen at spawn; drives horizontal glide while falling.
    pub forward_speed: f32,
    /// Accumulated fall speed, world units per second.
    pub fall_speed: f32,
    /// True once the ground clamp has engaged.
    pub grounded: bool,
    /// Seconds since landing.
    pub age: f32,
}

impl SupplyCrate {
    /// Release a crate from the helicopter's current pose.
    pub fn dropped_from(heli: &Helicopter) -> Self {
        debug!(
            "crate dropped at ({:.1}, {:.1}, {:.1}) heading {:.0}°",
            heli.position.x, heli.position.y, heli.position.z, heli.heading()
        );
        Self {
            position: heli.position,
            heading: heli.heading(),
            forward_speed: heli.forward_speed,
            fall_speed: 0.0,
            grounded: heli.position.y <= CRATE_GROUND_Y,
            age: 0.0,
        }
    }

    /// Advance one tick: integrate the fall, glide along the frozen heading,
    /// clamp at the ground, then age out.
    pub fn update(&mut self, dt: f32) {
        if self.grounded {
            self.age += dt;
            return;
        }
        self.fall_speed += GRAVITY * dt;
        self.position.y -= self.fall_speed * dt;
        self.position += yaw_forward(self.heading) * self.forward_speed * CARRY_FACTOR * dt;

        if self.position.y <= CRATE_GROUND_Y {
            self.position.y = CRATE_GROUND_Y;
            self.fall_speed = 0.0;
            self.grounded = true;
        }
    }

    /// True once the landed crate has outlived its welcome.
    pub fn is_expired(&self) -> bool {
        self.age > CRATE_LIFETIME
    }
}
