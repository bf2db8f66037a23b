//! Box Rain: Config - third iteration
//!
//! Run with: `cargo run --bin box-rain-config [scene.json]`
//!
//! The impulse iteration with the scene parameters lifted out of the code:
//! pass a JSON file to override grid size, gravity, speeds or the ground
//! slab. Missing fields keep their defaults, so a file like
//! `{ "side": 14, "gravity": [0.0, -20.0, 0.0] }` is enough.
//!
//! Controls:
//! - Space: toggle smooth-to-home / free physics fall
//! - ArrowUp: kick all boxes upward (free fall mode)
//! - ESC: Exit

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use box_rain_engine::camera::Camera;
use box_rain_engine::demo::{BoxGrid, GridConfig, load_config};
use box_rain_engine::input::{DemoAction, DemoBindings, KeyTracker};
use box_rain_engine::physics::PhysicsWorld;
use box_rain_engine::render::{GpuContext, GpuContextConfig, SceneRenderer, SceneUniforms};

// ============================================================================
// DEMO STATE
// ============================================================================

struct DemoState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: SceneRenderer,
    camera: Camera,
    physics: PhysicsWorld,
    grid: BoxGrid,

    // Input state
    keys: KeyTracker,
    bindings: DemoBindings,

    // Timing
    start_time: Instant,
    last_frame_time: Instant,

    // FPS tracking
    frame_count: u32,
    fps_update_time: Instant,
    current_fps: f32,
}

impl DemoState {
    fn new(window: Arc<Window>, config: GridConfig) -> Self {
        let gpu = GpuContext::new(Arc::clone(&window), GpuContextConfig::default());
        let renderer = SceneRenderer::new(&gpu, config.box_count(), config.ground_extent());

        let mut physics = PhysicsWorld::new(config.gravity);
        physics.add_ground(config.ground_half_extents, config.ground_position);
        let grid = BoxGrid::build(&config, &mut physics);

        println!(
            "[BoxRain] Scene: {} boxes ({}^3 grid) smoothing home",
            grid.len(),
            config.side
        );

        let now = Instant::now();
        Self {
            window,
            gpu,
            renderer,
            camera: Camera::default(),
            physics,
            grid,
            keys: KeyTracker::new(),
            bindings: DemoBindings::default(),
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
            fps_update_time: now,
            current_fps: 0.0,
        }
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.gpu.resize(new_size.width, new_size.height);
    }

    fn update(&mut self) {
        let now = Instant::now();
        let delta = (now - self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        // FPS tracking
        self.frame_count += 1;
        let fps_elapsed = (now - self.fps_update_time).as_secs_f32();
        if fps_elapsed >= 1.0 {
            self.current_fps = self.frame_count as f32 / fps_elapsed;
            self.frame_count = 0;
            self.fps_update_time = now;

            let mode = if self.grid.smoothing { "smooth" } else { "free fall" };
            self.window.set_title(&format!(
                "Box Rain: Config | FPS: {:.0} | Boxes: {} | Mode: {}",
                self.current_fps,
                self.grid.len(),
                mode
            ));
        }

        // Physics is paused while the boxes smooth home
        if !self.grid.smoothing {
            self.physics.step(delta);
        }
        self.grid.update(&mut self.physics, delta);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::new(
            self.camera.view_proj(self.gpu.aspect()),
            self.camera.position,
            self.start_time.elapsed().as_secs_f32(),
        );
        self.renderer.update_uniforms(&self.gpu, &uniforms);

        let instances = self.grid.instances();
        self.renderer.update_instances(&self.gpu, &instances);
        self.renderer.render(&self.gpu)
    }

    fn handle_action(&mut self, action: DemoAction) {
        match action {
            DemoAction::ToggleMode => {
                self.grid.toggle_all(&mut self.physics);
                let mode = if self.grid.smoothing {
                    "smooth to home"
                } else {
                    "free fall"
                };
                println!("[BoxRain] Mode: {mode}");
            }
            DemoAction::Impulse => {
                self.grid.apply_impulse_all(&mut self.physics);
                println!("[BoxRain] Impulse applied to {} boxes", self.grid.len());
            }
            // Exit is handled by the event loop
            DemoAction::Exit => {}
        }
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    state: Option<DemoState>,
    config: GridConfig,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        println!("[BoxRain] Creating window...");
        let window_attrs = WindowAttributes::default()
            .with_title("Box Rain: Config - Space: toggle, ArrowUp: kick")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );
        self.state = Some(DemoState::new(window, self.config.clone()));

        println!("[BoxRain] Ready! Controls:");
        println!("  Space - Toggle smooth-to-home / free physics fall");
        println!("  ArrowUp - Kick all boxes upward (free fall mode)");
        println!("  ESC - Exit");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.resize(new_size);
            }
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => match key_state {
                ElementState::Pressed => {
                    // Ignore OS auto-repeat
                    if !state.keys.press(key) {
                        return;
                    }
                    match state.bindings.classify(key) {
                        Some(DemoAction::Exit) => event_loop.exit(),
                        Some(action) => state.handle_action(action),
                        None => {}
                    }
                }
                ElementState::Released => state.keys.release(key),
            },
            WindowEvent::RedrawRequested => {
                state.update();

                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let size = state.window.inner_size();
                        state.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                    Err(e) => eprintln!("[BoxRain] Render error: {e:?}"),
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() {
    println!("=== Box Rain: Config ===");

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(Path::new(&path)) {
            Ok(config) => {
                println!("[BoxRain] Loaded scene config from {path}");
                config
            }
            Err(e) => {
                eprintln!("[BoxRain] Failed to load {path}: {e}");
                eprintln!("[BoxRain] Falling back to the default scene");
                GridConfig::default()
            }
        },
        None => GridConfig::default(),
    };

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        state: None,
        config,
    };
    event_loop.run_app(&mut app).expect("Event loop error");
}
