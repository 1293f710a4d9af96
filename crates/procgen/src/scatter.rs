//! Startup-time placement of static scene entities.
//!
//! Trees and buildings are rejection-sampled: candidates inside the
//! helicopter's flight corridor are discarded, and trees additionally keep a
//! minimum separation from each other. The retry loop is bounded; when the
//! bounds are too tight the generator degrades to fewer entities with a
//! single warning instead of spinning.

use glam::Vec3;
use log::{info, warn};
use rand::Rng;
use thiserror::Error;

/// Attempts allowed per requested entity before giving up on it.
const ATTEMPTS_PER_ENTITY: usize = 32;

/// The flight corridor disk is this factor times the trajectory radius.
const CORRIDOR_FACTOR: f32 = 1.5;

/// Trees keep at least twice the larger canopy width between each other.
const TREE_SPACING_FACTOR: f32 = 2.0;

/// Parameter ranges for randomized entities.
const TRUNK_HEIGHT_RANGE: std::ops::Range<f32> = 2.0..5.0;
const TRUNK_RADIUS_RANGE: std::ops::Range<f32> = 0.2..0.5;
const CANOPY_WIDTH_RANGE: std::ops::Range<f32> = 1.5..3.0;
const BUILDING_HEIGHT_RANGE: std::ops::Range<f32> = 6.0..16.0;
const BUILDING_FOOTPRINT_RANGE: std::ops::Range<f32> = 3.0..6.0;
const CLOUD_ALTITUDE_RANGE: std::ops::Range<f32> = 26.0..36.0;
const CLOUD_SCALE_RANGE: std::ops::Range<f32> = 1.0..2.5;
const CLOUD_SPEED_RANGE: std::ops::Range<f32> = 0.5..2.0;

/// Scatter parameters, derived from the sim config at startup.
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    /// Floor half-extent in world units (floor spans ±half_extent).
    pub half_extent: f32,
    /// Radius of the helicopter's circular flight path.
    pub trajectory_radius: f32,
    pub tree_count: usize,
    pub building_count: usize,
    pub cloud_count: usize,
}

/// Scatter failure: not a single entity of a requested kind could be placed.
#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("could not place any {kind} within {attempts} attempts; floor bounds too tight")]
    Exhausted { kind: &'static str, attempts: usize },
}

/// A scattered tree: trunk cylinder plus pyramid canopy.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Trunk base on the floor plane.
    pub position: Vec3,
    pub trunk_height: f32,
    pub trunk_radius: f32,
    pub canopy_width: f32,
    pub trunk_color: Vec3,
    pub canopy_color: Vec3,
}

/// A scattered building block.
#[derive(Debug, Clone)]
pub struct Building {
    /// Footprint center on the floor plane.
    pub position: Vec3,
    pub height: f32,
    pub footprint: f32,
    pub color: Vec3,
}

/// A drifting cloud on the circular conveyor.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub position: Vec3,
    /// Yaw in degrees, fixed at spawn.
    pub yaw: f32,
    pub scale: f32,
    /// Drift speed along +X, world units per second.
    pub drift_speed: f32,
}

impl Cloud {
    fn sample(half_extent: f32, rng: &mut impl Rng) -> Self {
        Self {
            position: Vec3::new(
                rng.gen_range(-half_extent..half_extent),
                rng.gen_range(CLOUD_ALTITUDE_RANGE),
                rng.gen_range(-half_extent..half_extent),
            ),
            yaw: rng.gen_range(0.0..360.0),
            scale: rng.gen_range(CLOUD_SCALE_RANGE),
            drift_speed: rng.gen_range(CLOUD_SPEED_RANGE),
        }
    }

    /// Advance the drift. Past twice the floor half-extent the cloud
    /// respawns at the far edge with fresh lateral position, scale and
    /// speed: a circular conveyor, not a bounce.
    pub fn advance(&mut self, dt: f32, half_extent: f32, rng: &mut impl Rng) {
        self.position.x += self.drift_speed * dt;
        let wrap = half_extent * 2.0;
        if self.position.x > wrap {
            self.position.x = -wrap;
            self.position.z = rng.gen_range(-half_extent..half_extent);
            self.scale = rng.gen_range(CLOUD_SCALE_RANGE);
            self.drift_speed = rng.gen_range(CLOUD_SPEED_RANGE);
        }
    }
}

/// Everything placed at startup.
#[derive(Debug)]
pub struct ScatteredWorld {
    pub trees: Vec<Tree>,
    pub buildings: Vec<Building>,
    pub clouds: Vec<Cloud>,
}

impl ScatteredWorld {
    /// Run the full one-shot scatter.
    pub fn generate(config: &ScatterConfig, rng: &mut impl Rng) -> Result<Self, ScatterError> {
        let trees = generate_trees(config, rng)?;
        let buildings = generate_buildings(config, rng)?;
        let clouds = generate_clouds(config, rng);
        info!(
            "scattered world: {} trees, {} buildings, {} clouds",
            trees.len(),
            buildings.len(),
            clouds.len()
        );
        Ok(Self {
            trees,
            buildings,
            clouds,
        })
    }
}

fn corridor_radius(config: &ScatterConfig) -> f32 {
    config.trajectory_radius * CORRIDOR_FACTOR
}

fn in_corridor(config: &ScatterConfig, x: f32, z: f32) -> bool {
    let r = corridor_radius(config);
    x * x + z * z < r * r
}

/// Place trees under both the corridor and mutual-separation constraints.
pub fn generate_trees(
    config: &ScatterConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Tree>, ScatterError> {
    let mut trees: Vec<Tree> = Vec::with_capacity(config.tree_count);

    for _ in 0..config.tree_count {
        let mut placed = false;
        for _ in 0..ATTEMPTS_PER_ENTITY {
            let trunk_radius = rng.gen_range(TRUNK_RADIUS_RANGE);
            let canopy_width = rng.gen_range(CANOPY_WIDTH_RANGE);
            let limit = config.half_extent - trunk_radius;
            let x = rng.gen_range(-limit..limit);
            let z = rng.gen_range(-limit..limit);

            if in_corridor(config, x, z) {
                continue;
            }
            let too_close = trees.iter().any(|other| {
                let spacing = TREE_SPACING_FACTOR * canopy_width.max(other.canopy_width);
                let dx = other.position.x - x;
                let dz = other.position.z - z;
                dx * dx + dz * dz < spacing * spacing
            });
            if too_close {
                continue;
            }

            trees.push(Tree {
                position: Vec3::new(x, 0.0, z),
                trunk_height: rng.gen_range(TRUNK_HEIGHT_RANGE),
                trunk_radius,
                canopy_width,
                trunk_color: Vec3::new(
                    rng.gen_range(0.35..0.5),
                    rng.gen_range(0.2..0.3),
                    rng.gen_range(0.05..0.15),
                ),
                canopy_color: Vec3::new(
                    rng.gen_range(0.05..0.2),
                    rng.gen_range(0.45..0.75),
                    rng.gen_range(0.05..0.25),
                ),
            });
            placed = true;
            break;
        }
        if !placed {
            break;
        }
    }

    finish_scatter("tree", config.tree_count, trees)
}

/// Place buildings outside the flight corridor; overlap between buildings is
/// allowed.
pub fn generate_buildings(
    config: &ScatterConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Building>, ScatterError> {
    let mut buildings = Vec::with_capacity(config.building_count);

    for _ in 0..config.building_count {
        let mut placed = false;
        for _ in 0..ATTEMPTS_PER_ENTITY {
            let footprint = rng.gen_range(BUILDING_FOOTPRINT_RANGE);
            let limit = config.half_extent - footprint / 2.0;
            let x = rng.gen_range(-limit..limit);
            let z = rng.gen_range(-limit..limit);
            if in_corridor(config, x, z) {
                continue;
            }
            let shade = rng.gen_range(0.4..0.7);
            buildings.push(Building {
                position: Vec3::new(x, 0.0, z),
                height: rng.gen_range(BUILDING_HEIGHT_RANGE),
                footprint,
                color: Vec3::new(shade, shade, rng.gen_range(0.45..0.75)),
            });
            placed = true;
            break;
        }
        if !placed {
            break;
        }
    }

    finish_scatter("building", config.building_count, buildings)
}

/// Clouds have no placement constraints and may overlap.
pub fn generate_clouds(config: &ScatterConfig, rng: &mut impl Rng) -> Vec<Cloud> {
    (0..config.cloud_count)
        .map(|_| Cloud::sample(config.half_extent, rng))
        .collect()
}

fn finish_scatter<T>(
    kind: &'static str,
    requested: usize,
    placed: Vec<T>,
) -> Result<Vec<T>, ScatterError> {
    if placed.is_empty() && requested > 0 {
        return Err(ScatterError::Exhausted {
            kind,
            attempts: ATTEMPTS_PER_ENTITY,
        });
    }
    if placed.len() < requested {
        warn!(
            "scatter exhausted: placed {}/{} {}s; continuing with fewer",
            placed.len(),
            requested,
            kind
        );
    }
    Ok(placed)
}
