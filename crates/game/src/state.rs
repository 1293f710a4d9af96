//! Top-level simulation state.
//!
//! One struct owns every registry (helicopter, crates, trees, buildings,
//! clouds) plus the clock, input and render toggles. Update and traversal
//! borrow it; nothing lives at module scope.

use engine_core::SimClock;
use input::InputState;
use procgen::{
    Building, Cloud, ScatterConfig, ScatterError, ScatteredWorld, Tree, WindField,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use renderer::{CameraView, Topology};

use crate::config::SimConfig;
use crate::flight::{Helicopter, TRAJECTORY_RADIUS};
use crate::supply::SupplyCrate;

/// Everything the per-frame driver owns.
pub struct SimState {
    pub clock: SimClock,
    pub input: InputState,
    pub wind: WindField,
    pub helicopter: Helicopter,
    pub crates: Vec<SupplyCrate>,
    pub trees: Vec<Tree>,
    pub buildings: Vec<Building>,
    pub clouds: Vec<Cloud>,
    pub camera: CameraView,
    pub topology: Topology,
    pub show_buildings: bool,
    pub half_extent: f32,
    /// Runtime randomness (cloud respawns), seeded on a separate stream from
    /// the one-shot scatter so mid-flight events don't perturb world layout.
    pub rng: StdRng,
}

impl SimState {
    /// Scatter the world and assemble the initial state.
    pub fn from_config(config: &SimConfig) -> Result<Self, ScatterError> {
        let scatter = ScatterConfig {
            half_extent: config.half_extent,
            trajectory_radius: TRAJECTORY_RADIUS,
            tree_count: config.tree_count,
            building_count: config.building_count,
            cloud_count: config.cloud_count,
        };
        let mut scatter_rng = StdRng::seed_from_u64(config.seed);
        let world = ScatteredWorld::generate(&scatter, &mut scatter_rng)?;

        let mut clock = SimClock::new();
        clock.set_base_rate(config.tick_rate);

        Ok(Self {
            clock,
            input: InputState::new(),
            wind: WindField::new(config.seed, config.wind_strength),
            helicopter: Helicopter::new(),
            crates: Vec::new(),
            trees: world.trees,
            buildings: world.buildings,
            clouds: world.clouds,
            camera: CameraView::default(),
            topology: Topology::default(),
            show_buildings: true,
            half_extent: config.half_extent,
            rng: StdRng::seed_from_u64(config.seed.wrapping_add(1)),
        })
    }
}
