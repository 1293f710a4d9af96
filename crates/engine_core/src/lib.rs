//! Core types shared across the simulation: the model-matrix stack that
//! drives scene traversal, the fixed-step simulation clock, and small
//! angle/heading helpers.

pub mod math;
pub mod stack;
pub mod time;

pub use math::*;
pub use stack::*;
pub use time::*;

// Re-export commonly used types
pub use glam::{Mat4, Vec3, Vec4};
