//! Physics World
//!
//! Ownership wrapper around the rapier3d simulation pipeline. Everything
//! algorithmic (collision detection, islands, solver, integration) lives in
//! rapier; this struct owns the sets, advances them on a fixed timestep and
//! exposes the operations the demos need.

use glam::{Quat, Vec3};
use nalgebra as na;
use rapier3d::prelude::*;

use super::types::{from_isometry, from_vector, to_isometry, to_vector};

/// Fixed physics timestep (seconds).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Maximum substeps consumed per [`PhysicsWorld::step`] call. Frame time
/// beyond `MAX_SUBSTEPS * FIXED_DT` is dropped rather than replayed, so a
/// long hitch cannot trigger a catch-up spiral.
pub const MAX_SUBSTEPS: u32 = 5;

/// Handle to a rigid body owned by a [`PhysicsWorld`].
pub type BodyHandle = RigidBodyHandle;

/// The rapier3d simulation state for one demo scene.
///
/// Bodies are never removed: the demos build the scene once and keep every
/// handle for the lifetime of the world.
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    gravity: na::Vector3<f32>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    /// Unconsumed scaled simulation time (seconds)
    accumulator: f32,
    /// Multiplier applied to wall-clock delta before stepping
    pub time_scale: f32,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity.
    pub fn new(gravity: Vec3) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = FIXED_DT;

        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: to_vector(gravity),
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            accumulator: 0.0,
            time_scale: 1.0,
        }
    }

    /// Add the immovable ground slab.
    pub fn add_ground(&mut self, half_extents: Vec3, position: Vec3) -> BodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(to_vector(position))
            .build();
        let handle = self.bodies.insert(body);
        let collider =
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Add a dynamic cube of the given edge length at a pose.
    ///
    /// Density 1 gives the demo's mass rule: a cube of side `s` weighs `s³`.
    pub fn add_box(&mut self, size: f32, position: Vec3, rotation: Quat) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .position(to_isometry(position, rotation))
            .build();
        let handle = self.bodies.insert(body);
        let half = size / 2.0;
        let collider = ColliderBuilder::cuboid(half, half, half).density(1.0).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Advance the simulation by a wall-clock delta.
    ///
    /// The delta is scaled by `time_scale`, accumulated, and consumed in
    /// fixed `FIXED_DT` substeps, at most [`MAX_SUBSTEPS`] per call. Returns
    /// the number of substeps actually run.
    pub fn step(&mut self, delta: f32) -> u32 {
        self.accumulator += delta * self.time_scale;

        let mut substeps = 0;
        while self.accumulator >= FIXED_DT && substeps < MAX_SUBSTEPS {
            self.pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.islands,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                Some(&mut self.query_pipeline),
                &(),
                &(),
            );
            self.accumulator -= FIXED_DT;
            substeps += 1;
        }

        // Drop time we cannot catch up on instead of replaying it later
        if self.accumulator >= FIXED_DT {
            self.accumulator = FIXED_DT;
        }

        substeps
    }

    /// Read a body's world pose.
    pub fn body_pose(&self, handle: BodyHandle) -> (Vec3, Quat) {
        from_isometry(self.bodies[handle].position())
    }

    /// Move a body to a pose, zeroing its velocities and waking it.
    ///
    /// The body restarts its fall from the new pose as if freshly spawned
    /// there.
    pub fn teleport(&mut self, handle: BodyHandle, position: Vec3, rotation: Quat) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.set_position(to_isometry(position, rotation), true);
            body.set_linvel(na::Vector3::zeros(), true);
            body.set_angvel(na::Vector3::zeros(), true);
        }
    }

    /// Apply an instantaneous impulse (kg·m/s) to a body, waking it.
    pub fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.apply_impulse(to_vector(impulse), true);
        }
    }

    /// Force a body to sleep. Used by the kill-plane rule for boxes that
    /// fell off the ground slab.
    pub fn put_to_sleep(&mut self, handle: BodyHandle) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.sleep();
        }
    }

    /// Whether a body is currently sleeping.
    pub fn is_sleeping(&self, handle: BodyHandle) -> bool {
        self.bodies[handle].is_sleeping()
    }

    /// A body's linear velocity (m/s).
    pub fn linear_velocity(&self, handle: BodyHandle) -> Vec3 {
        from_vector(self.bodies[handle].linvel())
    }

    /// A body's mass (kg).
    pub fn body_mass(&self, handle: BodyHandle) -> f32 {
        self.bodies[handle].mass()
    }

    /// Number of rigid bodies in the world (ground included).
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
