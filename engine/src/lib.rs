//! Box Rain Engine Library
//!
//! Shared infrastructure for the box-drop demo binaries: a grid of rigid
//! cubes dropped onto a ground slab, with a keyboard toggle between free
//! physics fall and a smooth return to each cube's home pose.
//!
//! Rigid-body dynamics are delegated to rapier3d; rendering to wgpu. This
//! library only owns scene setup, mode interpolation and event wiring.
//!
//! # Modules
//!
//! - [`render`] - wgpu context, instanced box pass and ground-grid pass
//! - [`input`] - key tracking with repeat suppression, demo key bindings
//! - [`camera`] - fixed perspective camera matching the demo framing
//! - [`physics`] - thin ownership wrapper around the rapier3d pipeline
//!
//! # Example
//!
//! ```ignore
//! use box_rain_engine::physics::PhysicsWorld;
//! use box_rain_engine::demo::{BoxGrid, GridConfig};
//!
//! let config = GridConfig::default();
//! let mut physics = PhysicsWorld::new(config.gravity);
//! physics.add_ground(config.ground_half_extents, config.ground_position);
//!
//! let mut grid = BoxGrid::build(&config, &mut physics);
//! loop {
//!     let delta = 1.0 / 60.0;
//!     physics.step(delta);
//!     grid.update(&mut physics, delta);
//! }
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod render;

// Demo-specific modules (located in src/demo/ directory)
#[path = "../../src/demo/mod.rs"]
pub mod demo;

// Re-export the render module contents at crate level for convenience
pub use render::*;
// Re-export commonly used input types
pub use input::{DemoAction, DemoBindings, KeyTracker};
// Re-export the camera
pub use camera::Camera;
