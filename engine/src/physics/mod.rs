//! Physics module for the Box Rain demos
//!
//! Rigid-body dynamics are fully delegated to rapier3d: broad/narrow phase,
//! constraint solving and integration are the library's job, not ours. This
//! module owns the rapier sets and exposes the handful of operations the
//! demos need (spawn, step, read pose, teleport, impulse, sleep).
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Mass in kg (a unit cube weighs 1 kg)
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam,
//!   plus the glam <-> nalgebra conversions used at the rapier boundary
//! - [`world`] - [`world::PhysicsWorld`], the rapier pipeline wrapper

pub mod types;
pub mod world;

// Re-export commonly used types at the physics module level
pub use types::{Quat, Vec3};
pub use world::{BodyHandle, PhysicsWorld, FIXED_DT, MAX_SUBSTEPS};
