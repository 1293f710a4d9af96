//! Simulation configuration. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent sim settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World seed driving scatter and wind. Same seed, same world.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Number of trees to scatter.
    #[serde(default = "default_tree_count")]
    pub tree_count: usize,
    /// Number of buildings to scatter.
    #[serde(default = "default_building_count")]
    pub building_count: usize,
    /// Number of clouds on the conveyor.
    #[serde(default = "default_cloud_count")]
    pub cloud_count: usize,
    /// Floor half-extent in world units.
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
    /// Wind drift strength in world units per second (0 = calm).
    #[serde(default = "default_wind_strength")]
    pub wind_strength: f32,
    /// Simulation steps per second at speed factor 1.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: f32,
}

fn default_seed() -> u64 {
    2024
}
fn default_tree_count() -> usize {
    25
}
fn default_building_count() -> usize {
    10
}
fn default_cloud_count() -> usize {
    8
}
fn default_half_extent() -> f32 {
    120.0
}
fn default_wind_strength() -> f32 {
    0.2
}
fn default_tick_rate() -> f32 {
    60.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            tree_count: default_tree_count(),
            building_count: default_building_count(),
            cloud_count: default_cloud_count(),
            half_extent: default_half_extent(),
            wind_strength: default_wind_strength(),
            tick_rate: default_tick_rate(),
        }
    }
}

impl SimConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        } else {
            log::info!("No config at {:?}, using defaults", path);
        }
        Self::default()
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}
