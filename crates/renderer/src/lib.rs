//! Draw-call boundary for the simulation core.
//!
//! The actual GPU backend (context setup, shader programs, tessellated
//! meshes) lives outside this workspace; scene traversal only needs a way to
//! upload the composed model-view matrix and a flat color, then issue a draw
//! for one of four unit primitives. `DrawTarget` is that capability, and
//! `DrawRecorder` is the headless implementation used by the demo binary and
//! the traversal tests.

pub mod camera;
pub mod color;
pub mod primitives;
pub mod target;

pub use camera::*;
pub use color::*;
pub use primitives::*;
pub use target::*;
