//! Demo Configuration
//!
//! Centralized scene parameters for the box-drop demos. The first two
//! binaries run with `GridConfig::default()`; the third loads overrides from
//! a JSON file.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Scene parameters for one demo run.
///
/// `Default` returns the values the demos shipped with: a 10x10x10 grid of
/// unit cubes above a 25x2x25 ground slab.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Boxes per grid edge (side³ boxes total)
    pub side: u32,
    /// Distance between neighboring home positions
    pub spacing: f32,
    /// Height of the lowest grid layer above the ground
    pub base_height: f32,
    /// Cube edge length
    pub box_size: f32,
    /// Random start positions are drawn from [-range, range] per axis
    pub start_pos_range: f32,
    /// Random start Euler angles are drawn from [-range, range] (radians)
    pub start_rot_range: f32,
    /// Interpolation speed toward the home pose in smooth mode
    pub smooth_speed: f32,
    /// Multiplier applied to wall-clock time before physics stepping
    pub time_scale: f32,
    /// Boxes falling below this height are put to sleep
    pub kill_y: f32,
    /// World gravity
    pub gravity: Vec3,
    /// Half-extents of the static ground slab
    pub ground_half_extents: Vec3,
    /// Center of the static ground slab (top face ends up at y = 0)
    pub ground_position: Vec3,
    /// Impulse applied per unit mass by the impulse action
    pub impulse: Vec3,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            side: 10,
            spacing: 1.5,
            base_height: 5.0,
            box_size: 1.0,
            start_pos_range: 75.0,
            start_rot_range: std::f32::consts::PI,
            smooth_speed: 1.5,
            time_scale: 1.5,
            kill_y: -200.0,
            gravity: Vec3::new(0.0, -12.0, 0.0),
            ground_half_extents: Vec3::new(12.5, 1.0, 12.5),
            ground_position: Vec3::new(0.0, -1.0, 0.0),
            impulse: Vec3::new(0.0, 8.0, 0.0),
        }
    }
}

impl GridConfig {
    /// Total number of boxes in the grid.
    pub fn box_count(&self) -> usize {
        (self.side as usize).pow(3)
    }

    /// Full side length of the ground slab footprint.
    pub fn ground_extent(&self) -> f32 {
        self.ground_half_extents.x * 2.0
    }
}

/// Errors that can occur while loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

/// Load a [`GridConfig`] from a JSON file. Missing fields fall back to
/// their defaults, so partial override files work.
pub fn load_config(path: &Path) -> Result<GridConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    Ok(config)
}
