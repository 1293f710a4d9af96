//! Unit primitives and the global fill mode.

/// The tessellated unit meshes the external backend provides.
///
/// All primitives are unit-sized and centered at the origin; parts size
/// themselves purely through the matrix stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Cube,
    Cylinder,
    Pyramid,
}

/// Global fill mode, toggled by a key press and orthogonal to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Line mesh.
    #[default]
    Wireframe,
    /// Filled triangles.
    Filled,
}
