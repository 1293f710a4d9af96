//! One-shot procedural scatter of the static scene (trees, buildings,
//! clouds) and the time-varying wind field.

pub mod scatter;
pub mod wind;

pub use scatter::*;
pub use wind::*;
