//! The draw-call capability consumed by scene traversal.

use engine_core::ModelRaw;
use glam::Mat4;

use crate::color::Rgb;
use crate::primitives::{PrimitiveKind, Topology};

/// Matrix/color upload plus primitive draw, provided by the external
/// rendering backend.
///
/// Traversal uploads the color and the composed model-view matrix for a part
/// immediately before drawing it; neither upload is saved or restored by the
/// matrix stack.
pub trait DrawTarget {
    /// Bind the composed model-view matrix for the next draw.
    fn upload_model_view(&mut self, matrix: &Mat4);

    /// Bind a flat color for the next draw.
    fn upload_color(&mut self, color: Rgb);

    /// Draw one unit primitive with the current uploads.
    fn draw(&mut self, primitive: PrimitiveKind, topology: Topology);
}

/// One call recorded by [`DrawRecorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordedCall {
    UploadModelView(ModelRaw),
    UploadColor(Rgb),
    Draw(PrimitiveKind, Topology),
}

/// Headless [`DrawTarget`] that records the call stream.
///
/// Used by the demo binary for draw statistics and by tests to check the
/// per-part protocol (color and matrix bound before each draw).
#[derive(Debug, Default)]
pub struct DrawRecorder {
    calls: Vec<RecordedCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded call stream, in issue order.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Number of draw calls recorded.
    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::Draw(..)))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// True if every draw is preceded (somewhere earlier in the stream) by
    /// both a color upload and a matrix upload since the last clear.
    pub fn every_draw_has_uploads(&self) -> bool {
        let mut have_color = false;
        let mut have_matrix = false;
        for call in &self.calls {
            match call {
                RecordedCall::UploadColor(_) => have_color = true,
                RecordedCall::UploadModelView(_) => have_matrix = true,
                RecordedCall::Draw(..) => {
                    if !have_color || !have_matrix {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl DrawTarget for DrawRecorder {
    fn upload_model_view(&mut self, matrix: &Mat4) {
        self.calls.push(RecordedCall::UploadModelView(matrix.into()));
    }

    fn upload_color(&mut self, color: Rgb) {
        self.calls.push(RecordedCall::UploadColor(color));
    }

    fn draw(&mut self, primitive: PrimitiveKind, topology: Topology) {
        self.calls.push(RecordedCall::Draw(primitive, topology));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn recorder_preserves_call_order() {
        let mut rec = DrawRecorder::new();
        rec.upload_color(Rgb::new(1.0, 0.0, 0.0));
        rec.upload_model_view(&Mat4::IDENTITY);
        rec.draw(PrimitiveKind::Sphere, Topology::Wireframe);

        assert_eq!(rec.calls().len(), 3);
        assert!(matches!(rec.calls()[0], RecordedCall::UploadColor(_)));
        assert!(matches!(rec.calls()[2], RecordedCall::Draw(PrimitiveKind::Sphere, _)));
        assert_eq!(rec.draw_count(), 1);
        assert!(rec.every_draw_has_uploads());
    }

    #[test]
    fn missing_upload_is_detected() {
        let mut rec = DrawRecorder::new();
        rec.upload_model_view(&Mat4::from_translation(Vec3::X));
        rec.draw(PrimitiveKind::Cube, Topology::Filled);
        assert!(!rec.every_draw_has_uploads());
    }
}
