//! Physics Boxes and the Box Grid
//!
//! Each box mirrors its rendered pose from one of two sources, switched by a
//! keyboard toggle: its rapier rigid body (free-fall mode) or an
//! interpolated approach to its fixed home slot in the grid (smooth mode).
//! While a box smooths home its body is left alone; when it switches back to
//! free fall the body is teleported to the pose the user currently sees, so
//! physics resumes without a visual jump.

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

use crate::physics::{BodyHandle, PhysicsWorld};
use crate::render::instancing::{BoxInstance, pack_rgba};

use super::config::GridConfig;

/// Alpha channel for all box colors (the demo renders boxes at 0.75 opacity).
const BOX_ALPHA: u8 = 191;

/// A position and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// One cube of the grid.
pub struct PhysicsBox {
    /// Fixed grid slot the box returns to in smooth mode
    pub home: Pose,
    /// The pose that gets rendered this frame
    pub pose: Pose,
    /// Rigid body simulated by rapier
    pub body: BodyHandle,
    /// Cube edge length
    pub size: f32,
    /// Packed RGBA display color
    pub color: u32,
    /// true = interpolate toward home, false = mirror the rigid body
    pub smooth_to_home: bool,
}

impl PhysicsBox {
    /// Flip between smooth-to-home and free physics fall.
    ///
    /// Leaving smooth mode hands the rigid body the currently rendered pose
    /// with zeroed velocities, so the fall starts from what is on screen.
    pub fn toggle_smooth(&mut self, physics: &mut PhysicsWorld) {
        self.smooth_to_home = !self.smooth_to_home;
        if !self.smooth_to_home {
            physics.teleport(self.body, self.pose.position, self.pose.rotation);
        }
    }

    /// Advance the rendered pose by one frame.
    pub fn update(&mut self, physics: &mut PhysicsWorld, delta: f32, speed: f32, kill_y: f32) {
        if self.smooth_to_home {
            // Ease toward home; the factor is clamped so a long frame lands
            // exactly on the target instead of overshooting
            let t = (delta * speed).min(1.0);
            self.pose.position = self.pose.position.lerp(self.home.position, t);
            self.pose.rotation = self.pose.rotation.slerp(self.home.rotation, t);
        } else {
            let (position, rotation) = physics.body_pose(self.body);
            if position.y < kill_y {
                // Fell off the slab; stop simulating it
                physics.put_to_sleep(self.body);
            }
            self.pose = Pose { position, rotation };
        }
    }
}

/// The full grid of boxes plus scene-level mode state.
pub struct BoxGrid {
    pub boxes: Vec<PhysicsBox>,
    /// true while the boxes are smoothing home (all boxes share the mode)
    pub smoothing: bool,
    config: GridConfig,
}

impl BoxGrid {
    /// Build the grid with randomized start poses from the thread RNG.
    pub fn build(config: &GridConfig, physics: &mut PhysicsWorld) -> Self {
        Self::build_with_rng(config, physics, &mut rand::thread_rng())
    }

    /// Build the grid using the given RNG (tests pass a seeded one).
    ///
    /// Each box's rigid body starts at its home slot; the rendered pose
    /// starts scattered across `start_pos_range` with a random orientation
    /// and smooths back in.
    pub fn build_with_rng<R: Rng>(
        config: &GridConfig,
        physics: &mut PhysicsWorld,
        rng: &mut R,
    ) -> Self {
        physics.time_scale = config.time_scale;

        let half_side = config.side as f32 / 2.0;
        let mut boxes = Vec::with_capacity(config.box_count());

        for x in 0..config.side {
            for y in 0..config.side {
                for z in 0..config.side {
                    let home = Pose::new(
                        Vec3::new(
                            (x as f32 - half_side) * config.spacing,
                            y as f32 * config.spacing + config.base_height,
                            (z as f32 - half_side) * config.spacing,
                        ),
                        Quat::IDENTITY,
                    );

                    let body = physics.add_box(config.box_size, home.position, home.rotation);

                    let p = config.start_pos_range;
                    let o = config.start_rot_range;
                    let start = Pose::new(
                        Vec3::new(
                            rng.gen_range(-p..p),
                            rng.gen_range(-p..p),
                            rng.gen_range(-p..p),
                        ),
                        Quat::from_euler(
                            EulerRot::XYZ,
                            rng.gen_range(-o..o),
                            rng.gen_range(-o..o),
                            rng.gen_range(-o..o),
                        ),
                    );

                    boxes.push(PhysicsBox {
                        home,
                        pose: start,
                        body,
                        size: config.box_size,
                        color: random_color(rng),
                        smooth_to_home: true,
                    });
                }
            }
        }

        Self {
            boxes,
            smoothing: true,
            config: config.clone(),
        }
    }

    /// Flip every box between smooth mode and free fall.
    pub fn toggle_all(&mut self, physics: &mut PhysicsWorld) {
        self.smoothing = !self.smoothing;
        for b in &mut self.boxes {
            b.toggle_smooth(physics);
        }
    }

    /// Per-frame update of every rendered pose.
    pub fn update(&mut self, physics: &mut PhysicsWorld, delta: f32) {
        let speed = self.config.smooth_speed;
        let kill_y = self.config.kill_y;
        for b in &mut self.boxes {
            b.update(physics, delta, speed, kill_y);
        }
    }

    /// Kick every box with the configured impulse, scaled by body mass.
    pub fn apply_impulse_all(&mut self, physics: &mut PhysicsWorld) {
        let per_mass = self.config.impulse;
        for b in &self.boxes {
            let mass = physics.body_mass(b.body);
            physics.apply_impulse(b.body, per_mass * mass);
        }
    }

    /// Instance data for this frame's instanced draw.
    pub fn instances(&self) -> Vec<BoxInstance> {
        self.boxes
            .iter()
            .map(|b| {
                BoxInstance::new(
                    b.pose.position.into(),
                    b.pose.rotation.into(),
                    b.size,
                    b.color,
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

/// Random display color, biased away from near-black so every box stays
/// visible against the white background.
fn random_color<R: Rng>(rng: &mut R) -> u32 {
    let r = rng.gen_range(0x05..=0xFFu16) as u8;
    let g = rng.gen_range(0x05..=0xFFu16) as u8;
    let b = rng.gen_range(0x05..=0xFFu16) as u8;
    pack_rgba(r, g, b, BOX_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> GridConfig {
        GridConfig {
            side: 2,
            ..GridConfig::default()
        }
    }

    fn build_scene(config: &GridConfig) -> (BoxGrid, PhysicsWorld) {
        let mut physics = PhysicsWorld::new(config.gravity);
        physics.add_ground(config.ground_half_extents, config.ground_position);
        let mut rng = StdRng::seed_from_u64(7);
        let grid = BoxGrid::build_with_rng(config, &mut physics, &mut rng);
        (grid, physics)
    }

    #[test]
    fn test_grid_box_count() {
        let config = small_config();
        let (grid, physics) = build_scene(&config);
        assert_eq!(grid.len(), 8);
        // ground + boxes
        assert_eq!(physics.body_count(), 9);
    }

    #[test]
    fn test_home_layout() {
        let config = small_config();
        let (grid, _physics) = build_scene(&config);
        // x-major, then y, then z: first box is cell (0, 0, 0)
        let first = &grid.boxes[0];
        assert_eq!(
            first.home.position,
            Vec3::new(-1.5, config.base_height, -1.5)
        );
        // Last box is cell (1, 1, 1)
        let last = grid.boxes.last().unwrap();
        assert_eq!(
            last.home.position,
            Vec3::new(0.0, config.spacing + config.base_height, 0.0)
        );
    }

    #[test]
    fn test_boxes_start_in_smooth_mode() {
        let (grid, _physics) = build_scene(&small_config());
        assert!(grid.smoothing);
        assert!(grid.boxes.iter().all(|b| b.smooth_to_home));
    }

    #[test]
    fn test_bodies_start_at_home() {
        let (grid, physics) = build_scene(&small_config());
        for b in &grid.boxes {
            let (position, _) = physics.body_pose(b.body);
            assert!((position - b.home.position).length() < 1e-5);
            // The rendered pose starts scattered, away from the body
            assert!((b.pose.position - b.home.position).length() > 1.0);
        }
    }

    #[test]
    fn test_smooth_update_converges_home() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        for _ in 0..600 {
            grid.update(&mut physics, 1.0 / 60.0);
        }
        for b in &grid.boxes {
            assert!((b.pose.position - b.home.position).length() < 0.01);
            assert!(b.pose.rotation.dot(b.home.rotation).abs() > 0.999);
        }
    }

    #[test]
    fn test_smooth_update_leaves_body_alone() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        let handle = grid.boxes[0].body;
        let before = physics.body_pose(handle);
        grid.update(&mut physics, 1.0 / 60.0);
        let after = physics.body_pose(handle);
        assert_eq!(before.0, after.0);
    }

    #[test]
    fn test_large_delta_lands_exactly_on_home() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        // delta * speed > 1 must clamp, not overshoot
        grid.update(&mut physics, 10.0);
        for b in &grid.boxes {
            assert!((b.pose.position - b.home.position).length() < 1e-4);
        }
    }

    #[test]
    fn test_toggle_hands_body_the_rendered_pose() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        let rendered = grid.boxes[0].pose;
        grid.toggle_all(&mut physics);
        assert!(!grid.smoothing);
        let (position, _) = physics.body_pose(grid.boxes[0].body);
        assert!((position - rendered.position).length() < 1e-5);
        assert_eq!(physics.linear_velocity(grid.boxes[0].body), Vec3::ZERO);
    }

    #[test]
    fn test_free_update_mirrors_body() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        grid.toggle_all(&mut physics);
        physics.step(1.0 / 30.0);
        grid.update(&mut physics, 1.0 / 30.0);
        let b = &grid.boxes[0];
        let (position, _) = physics.body_pose(b.body);
        assert_eq!(b.pose.position, position);
    }

    #[test]
    fn test_double_toggle_restores_mode() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        grid.toggle_all(&mut physics);
        grid.toggle_all(&mut physics);
        assert!(grid.smoothing);
        assert!(grid.boxes.iter().all(|b| b.smooth_to_home));
    }

    #[test]
    fn test_kill_plane_puts_body_to_sleep() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        grid.toggle_all(&mut physics);
        let handle = grid.boxes[0].body;
        physics.teleport(handle, Vec3::new(0.0, config.kill_y - 10.0, 0.0), Quat::IDENTITY);
        grid.update(&mut physics, 1.0 / 60.0);
        assert!(physics.is_sleeping(handle));
    }

    #[test]
    fn test_impulse_scales_with_mass() {
        let config = small_config();
        let (mut grid, mut physics) = build_scene(&config);
        grid.toggle_all(&mut physics);
        grid.apply_impulse_all(&mut physics);
        let v = physics.linear_velocity(grid.boxes[0].body);
        // impulse = config.impulse * mass, so velocity = config.impulse
        assert!((v - config.impulse).length() < 1e-3);
    }

    #[test]
    fn test_instances_match_rendered_poses() {
        let (grid, _physics) = build_scene(&small_config());
        let instances = grid.instances();
        assert_eq!(instances.len(), grid.len());
        let b = &grid.boxes[3];
        let i = &instances[3];
        assert_eq!(i.position, <[f32; 3]>::from(b.pose.position));
        assert_eq!(i.scale, b.size);
        assert_eq!(i.color, b.color);
        // Box colors carry the demo's 0.75 opacity
        assert_eq!(i.color & 0xFF, BOX_ALPHA as u32);
    }
}
