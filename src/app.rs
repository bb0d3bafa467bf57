//! Interactive viewer
//!
//! Controls:
//! - W/S/A/D: move, Q/E: up/down
//! - Mouse: look around, scroll to zoom
//! - P: toggle perspective/orthographic projection
//! - Escape: quit

use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use thiserror::Error;
use winit::{
    dpi::PhysicalSize,
    event::{DeviceEvent, ElementState, Event, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowBuilder},
};

use crate::backend::{BackendError, GpuContext};
use crate::mesh::MeshError;
use crate::pieces::PieceSet;
use crate::renderer::{FrameUniforms, Renderer};
use crate::resources::MaterialTextures;
use crate::scene::{
    standard_layout, Camera, CameraController, CameraInput, FirstPersonController, LightRig,
    ProjectionMode,
};
use crate::ViewerConfig;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

/// What the event loop should do after a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Exit,
}

/// Camera, input and projection state of the viewer, independent of the window
pub struct ViewerState {
    pub camera: Camera,
    pub controller: FirstPersonController,
    pub input: CameraInput,
    pub projection_mode: ProjectionMode,
    width: u32,
    height: u32,
    last_frame: Instant,
    frames_rendered: u64,
}

impl ViewerState {
    pub fn new(width: u32, height: u32) -> Self {
        let mut state = Self {
            camera: Camera::default(),
            controller: FirstPersonController::default(),
            input: CameraInput::new(),
            projection_mode: ProjectionMode::default(),
            width: width.max(1),
            height: height.max(1),
            last_frame: Instant::now(),
            frames_rendered: 0,
        };
        state.update(0.0);
        state
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) -> KeyAction {
        match key {
            KeyCode::Escape => return KeyAction::Exit,
            KeyCode::KeyP if pressed && !repeat => {
                self.projection_mode = self.projection_mode.toggled();
                log::info!("Projection: {:?}", self.projection_mode);
            }
            KeyCode::KeyW => self.input.forward = pressed,
            KeyCode::KeyS => self.input.backward = pressed,
            KeyCode::KeyA => self.input.left = pressed,
            KeyCode::KeyD => self.input.right = pressed,
            KeyCode::KeyQ => self.input.up = pressed,
            KeyCode::KeyE => self.input.down = pressed,
            _ => {}
        }
        KeyAction::None
    }

    pub fn add_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.input.mouse_delta += Vec2::new(dx as f32, dy as f32);
    }

    pub fn add_scroll(&mut self, lines: f32) {
        self.input.scroll_delta += lines;
    }

    /// Release all keys when the window loses focus
    pub fn focus_lost(&mut self) {
        self.input = CameraInput::new();
    }

    /// Seconds since the previous call
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    /// Apply the accumulated input and refresh the projection
    pub fn update(&mut self, dt: f32) {
        self.controller.update(&mut self.camera, &self.input, dt);
        self.camera.projection = self
            .projection_mode
            .projection(self.controller.zoom, self.aspect());
        self.input.reset_deltas();
    }

    pub fn frame_uniforms(&self, lights: &LightRig) -> FrameUniforms {
        FrameUniforms {
            camera: self.camera.uniform_data(),
            lights: lights.to_uniform(self.camera.position, self.controller.front()),
        }
    }

    /// Count a rendered frame; true once `limit` frames have been drawn
    pub fn frame_rendered(&mut self, limit: Option<u64>) -> bool {
        self.frames_rendered += 1;
        limit.is_some_and(|max| self.frames_rendered >= max)
    }
}

fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    if let Err(e) = grabbed {
        log::warn!("Could not grab the cursor: {}", e);
    }
    window.set_cursor_visible(false);
}

/// Open the window and run the viewer until it is closed
pub fn run(config: ViewerConfig) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .build(&event_loop)?,
    );

    let pieces = PieceSet::build(&config.lathe_options())?;
    let placements = standard_layout();
    let textures = MaterialTextures::load_all(&config.asset_dir);

    let mut gpu = GpuContext::new(Arc::clone(&window), config.vsync)?;
    let mut renderer = Renderer::new(&gpu, &pieces, &placements, &textures)?;
    let lights = LightRig::default();

    let (width, height) = gpu.surface_size();
    let mut state = ViewerState::new(width, height);
    grab_cursor(&window);

    log::info!(
        "Drawing {} placements at {}x{} ({} camera)",
        renderer.placement_count(),
        width,
        height,
        state.controller.name()
    );

    let mut failure: Option<BackendError> = None;

    event_loop.run(|event, elwt: &EventLoopWindowTarget<()>| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    gpu.resize(size.width, size.height);
                    let (width, height) = gpu.surface_size();
                    state.resize(width, height);
                }
                WindowEvent::RedrawRequested => {
                    let uniforms = state.frame_uniforms(&lights);
                    match renderer.render(&mut gpu, &uniforms) {
                        Ok(()) => {
                            if state.frame_rendered(config.max_frames) {
                                log::info!("Reached frame limit, exiting");
                                elwt.exit();
                            }
                        }
                        Err(e) => {
                            log::error!("Render failed: {}", e);
                            failure = Some(e);
                            elwt.exit();
                        }
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        let pressed = event.state == ElementState::Pressed;
                        if state.handle_key(key, pressed, event.repeat) == KeyAction::Exit {
                            elwt.exit();
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                    };
                    state.add_scroll(scroll);
                }
                WindowEvent::Focused(focused) => {
                    if focused {
                        grab_cursor(&window);
                    } else {
                        state.focus_lost();
                        let _ = window.set_cursor_grab(CursorGrabMode::None);
                        window.set_cursor_visible(true);
                    }
                }
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                state.add_mouse_motion(delta.0, delta.1);
            }
            Event::AboutToWait => {
                let dt = state.tick();
                state.update(dt);
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_projection_toggles_on_press_only() {
        let mut state = ViewerState::new(800, 600);
        assert!(!state.camera.projection.is_orthographic());

        state.handle_key(KeyCode::KeyP, true, false);
        // held key repeats and release do nothing
        state.handle_key(KeyCode::KeyP, true, true);
        state.handle_key(KeyCode::KeyP, false, false);
        state.update(0.0);
        assert_eq!(state.projection_mode, ProjectionMode::Orthographic);
        assert!(state.camera.projection.is_orthographic());

        state.handle_key(KeyCode::KeyP, true, false);
        state.update(0.0);
        assert!(!state.camera.projection.is_orthographic());
    }

    #[test]
    fn test_escape_exits() {
        let mut state = ViewerState::new(800, 600);
        assert_eq!(state.handle_key(KeyCode::Escape, true, false), KeyAction::Exit);
        assert_eq!(state.handle_key(KeyCode::KeyW, true, false), KeyAction::None);
        assert!(state.input.forward);
    }

    #[test]
    fn test_aspect_follows_resize() {
        let mut state = ViewerState::new(800, 600);
        assert!((state.aspect() - 800.0 / 600.0).abs() < 1e-6);
        state.resize(1000, 500);
        assert_eq!(state.aspect(), 2.0);
        state.resize(0, 0);
        assert_eq!(state.aspect(), 2.0);
    }

    #[test]
    fn test_update_moves_and_clears_deltas() {
        let mut state = ViewerState::new(800, 600);
        state.handle_key(KeyCode::KeyW, true, false);
        state.add_scroll(5.0);
        state.update(1.0);

        assert!((state.camera.position - Vec3::new(3.0, 2.0, 0.5)).length() < 1e-5);
        assert_eq!(state.controller.zoom, 40.0);
        assert_eq!(state.input.scroll_delta, 0.0);

        state.focus_lost();
        assert!(!state.input.forward);
    }

    #[test]
    fn test_frame_uniforms_attach_spot_to_camera() {
        let state = ViewerState::new(800, 600);
        let uniforms = state.frame_uniforms(&LightRig::default());
        assert_eq!(uniforms.lights.spot.position, state.camera.position.extend(1.0));
        assert!((uniforms.lights.spot.direction.truncate() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_frame_limit() {
        let mut state = ViewerState::new(800, 600);
        assert!(!state.frame_rendered(None));
        assert!(!state.frame_rendered(Some(3)));
        assert!(state.frame_rendered(Some(3)));
    }
}
