//! Flat RGB colors for the upload boundary.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A flat RGB triple, linear 0..1 per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Build from 0..255 byte channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Self(v.to_array())
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::from_array(c.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_normalizes() {
        let c = Rgb::from_u8(255, 0, 51);
        assert!((c.0[0] - 1.0).abs() < 1e-6);
        assert_eq!(c.0[1], 0.0);
        assert!((c.0[2] - 0.2).abs() < 1e-6);
    }
}
