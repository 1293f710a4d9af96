//! Smooth time-varying wind sampled from seeded Perlin noise.
//!
//! Same seed, same weather: the field is a pure function of (seed, t), so a
//! recorded flight replays identically.

use glam::Vec3;
use noise::{NoiseFn, Perlin};

/// Per-axis gust frequencies, offset from each other so the axes decorrelate.
const GUST_FREQ: [f64; 3] = [0.13, 0.07, 0.11];
const GUST_LANE: [f64; 3] = [0.0, 11.3, 29.7];

/// Derive a deterministic u32 noise seed from a world seed and an offset.
#[inline]
fn noise_seed(seed: u64, offset: u64) -> u32 {
    ((seed.wrapping_add(offset))
        .wrapping_mul(0x9e3779b97f4a7c15_u64)
        .wrapping_add(offset.wrapping_mul(0x6c078965_u64))
        >> 32) as u32
}

/// Continuous drift applied to airborne entities.
#[derive(Debug, Clone)]
pub struct WindField {
    strength: f32,
    axes: [Perlin; 3],
}

impl WindField {
    /// Build a field from a world seed and a strength in world units/second.
    pub fn new(seed: u64, strength: f32) -> Self {
        Self {
            strength,
            axes: [
                Perlin::new(noise_seed(seed, 1)),
                Perlin::new(noise_seed(seed, 2)),
                Perlin::new(noise_seed(seed, 3)),
            ],
        }
    }

    /// Configured strength.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Drift vector at simulated time `t` (seconds).
    pub fn sample(&self, t: f32) -> Vec3 {
        if self.strength == 0.0 {
            return Vec3::ZERO;
        }
        let t = t as f64;
        let mut v = [0.0f32; 3];
        for axis in 0..3 {
            v[axis] = self.axes[axis].get([t * GUST_FREQ[axis], GUST_LANE[axis]]) as f32;
        }
        Vec3::from_array(v) * self.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_strength_is_calm() {
        let wind = WindField::new(123, 0.0);
        assert_eq!(wind.sample(0.0), Vec3::ZERO);
        assert_eq!(wind.sample(57.3), Vec3::ZERO);
    }

    #[test]
    fn same_seed_same_weather() {
        let a = WindField::new(99, 0.4);
        let b = WindField::new(99, 0.4);
        for i in 0..20 {
            let t = i as f32 * 1.7;
            assert_eq!(a.sample(t), b.sample(t));
        }
    }

    /// Perlin output is in [-1, 1], so drift is bounded by the strength.
    #[test]
    fn drift_is_bounded_by_strength() {
        let strength = 0.25;
        let wind = WindField::new(7, strength);
        for i in 0..200 {
            let v = wind.sample(i as f32 * 0.31);
            assert!(v.x.abs() <= strength + 1e-6);
            assert!(v.y.abs() <= strength + 1e-6);
            assert!(v.z.abs() <= strength + 1e-6);
            assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        }
    }
}
