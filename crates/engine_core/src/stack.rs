//! Model-matrix stack for hierarchical scene traversal.
//!
//! Every drawable part composes its local transform onto the top of the
//! stack, uploads the result, and unwinds with `pop()`. Siblings are
//! isolated: after a subtree pops back to its entry depth, the top matrix is
//! bit-identical to what it was before the subtree ran.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// A LIFO stack of 4x4 model matrices with exactly one current (top) matrix.
///
/// Rotations take degrees and all composition is by right-multiplication in
/// invocation order, so `rotate_y(90.0)` followed by `translate(..)` moves
/// along the rotated axes, not the world axes.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    frames: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Create a stack holding a single identity frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Mat4::IDENTITY],
        }
    }

    /// Duplicate the current top so subsequent composition is local to the
    /// new frame.
    pub fn push(&mut self) {
        let top = *self.top();
        self.frames.push(top);
    }

    /// Discard the top frame, restoring the previous one exactly.
    ///
    /// Panics if it would pop the last frame: an unbalanced traversal is a
    /// programming error, not a recoverable condition.
    pub fn pop(&mut self) {
        assert!(
            self.frames.len() > 1,
            "MatrixStack::pop on the bottom frame: unbalanced push/pop in traversal"
        );
        self.frames.pop();
    }

    /// Replace the top frame wholesale (the render loop seeds the view
    /// matrix here once per frame).
    pub fn load(&mut self, m: Mat4) {
        *self.top_mut() = m;
    }

    /// Right-multiply a translation onto the top frame.
    pub fn translate(&mut self, v: Vec3) {
        self.compose(Mat4::from_translation(v));
    }

    /// Right-multiply a rotation about X onto the top frame.
    pub fn rotate_x(&mut self, degrees: f32) {
        self.compose(Mat4::from_rotation_x(degrees.to_radians()));
    }

    /// Right-multiply a rotation about Y onto the top frame.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.compose(Mat4::from_rotation_y(degrees.to_radians()));
    }

    /// Right-multiply a rotation about Z onto the top frame.
    pub fn rotate_z(&mut self, degrees: f32) {
        self.compose(Mat4::from_rotation_z(degrees.to_radians()));
    }

    /// Right-multiply a non-uniform scale onto the top frame.
    pub fn scale(&mut self, v: Vec3) {
        self.compose(Mat4::from_scale(v));
    }

    /// The composed matrix for upload.
    pub fn current(&self) -> Mat4 {
        *self.top()
    }

    /// Current stack depth. A balanced traversal leaves this unchanged.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn compose(&mut self, m: Mat4) {
        let top = self.top_mut();
        *top = *top * m;
    }

    fn top(&self) -> &Mat4 {
        self.frames.last().expect("MatrixStack is never empty")
    }

    fn top_mut(&mut self) -> &mut Mat4 {
        self.frames.last_mut().expect("MatrixStack is never empty")
    }
}

/// Raw model matrix for the upload boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ModelRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&Mat4> for ModelRaw {
    fn from(m: &Mat4) -> Self {
        Self {
            model: m.to_cols_array_2d(),
        }
    }
}

impl From<Mat4> for ModelRaw {
    fn from(m: Mat4) -> Self {
        Self::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mats_equal(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| x == y)
    }

    /// Popping a subtree restores the saved frame bit-for-bit.
    #[test]
    fn push_pop_restores_exactly() {
        let mut stack = MatrixStack::new();
        stack.translate(Vec3::new(1.5, -2.0, 0.25));
        stack.rotate_y(33.0);
        let before = stack.current();

        stack.push();
        stack.scale(Vec3::new(2.0, 0.5, 3.0));
        stack.rotate_z(-120.0);
        stack.translate(Vec3::new(0.0, 7.0, 0.0));
        stack.pop();

        assert!(mats_equal(before, stack.current()));
    }

    /// A balanced sequence of pushes and pops returns to the entry depth.
    #[test]
    fn balanced_traversal_preserves_depth() {
        let mut stack = MatrixStack::new();
        let depth = stack.depth();
        stack.push();
        stack.push();
        stack.rotate_x(90.0);
        stack.pop();
        stack.push();
        stack.pop();
        stack.pop();
        assert_eq!(stack.depth(), depth);
    }

    /// rotate-then-translate and translate-then-rotate must differ.
    #[test]
    fn composition_order_is_not_commutative() {
        let mut a = MatrixStack::new();
        a.rotate_y(90.0);
        a.translate(Vec3::new(1.0, 0.0, 0.0));

        let mut b = MatrixStack::new();
        b.translate(Vec3::new(1.0, 0.0, 0.0));
        b.rotate_y(90.0);

        assert!(!mats_equal(a.current(), b.current()));

        // rotate_y(90) maps local +X onto world -Z
        let origin = a.current().transform_point3(Vec3::ZERO);
        assert!((origin.x - 0.0).abs() < 1e-6);
        assert!((origin.z - (-1.0)).abs() < 1e-6);
    }

    /// A sibling subtree must not observe transforms from an earlier sibling.
    #[test]
    fn push_isolates_siblings() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.translate(Vec3::new(5.0, 0.0, 0.0));
        stack.pop();
        stack.push();
        // Second sibling must not see the first sibling's translation.
        let p = stack.current().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::ZERO);
        stack.pop();
    }

    #[test]
    #[should_panic(expected = "unbalanced push/pop")]
    fn pop_through_bottom_panics() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.pop();
        stack.pop();
    }

    #[test]
    fn model_raw_round_trips_columns() {
        let m = Mat4::from_rotation_y(1.0) * Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let raw = ModelRaw::from(&m);
        assert_eq!(raw.model, m.to_cols_array_2d());
    }
}
