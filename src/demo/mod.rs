//! Demo Module
//!
//! Contains demo-specific state that builds on top of the engine: the box
//! grid with its home poses and smooth/free mode handling, and the scene
//! configuration shared by the three binaries.

pub mod boxes;
pub mod config;

pub use boxes::{BoxGrid, PhysicsBox, Pose};
pub use config::{ConfigError, GridConfig, load_config};
