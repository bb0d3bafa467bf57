//! First-person camera control
//!
//! - W/S: move along the view direction
//! - A/D: strafe
//! - Q/E: move up/down along the camera's up vector
//! - Mouse: look around
//! - Scroll: zoom (narrows the perspective field of view)

use glam::{Vec2, Vec3};

use super::Camera;

/// Input state for camera controllers
#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    /// Mouse delta since last frame (in pixels, +y is down on screen)
    pub mouse_delta: Vec2,

    /// Mouse scroll delta (positive = scroll up)
    pub scroll_delta: f32,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame deltas (call after update)
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}

/// Abstract camera controller trait
pub trait CameraController {
    /// Update the camera based on input and delta time
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, dt: f32);

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;

    /// Reset the controller to default state
    fn reset(&mut self);
}

/// Pitch limit in degrees, keeps the view from flipping over the poles
pub const MAX_PITCH_DEGREES: f32 = 89.0;
/// Narrowest field of view reachable by zooming
pub const MIN_ZOOM_DEGREES: f32 = 1.0;
/// Default and widest field of view
pub const MAX_ZOOM_DEGREES: f32 = 45.0;

/// FPS-style controller with angles kept in degrees
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    /// Horizontal angle; -90 looks down -Z
    pub yaw: f32,
    /// Vertical angle, clamped to +-[`MAX_PITCH_DEGREES`]
    pub pitch: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Degrees per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for FirstPersonController {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            zoom: MAX_ZOOM_DEGREES,
        }
    }
}

impl FirstPersonController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Unit view direction from yaw and pitch
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Point the camera along the current angles
    pub fn apply(&self, camera: &mut Camera) {
        let front = self.front();
        camera.target = camera.position + front;
        camera.up = self.right().cross(front).normalize();
    }

    /// Turn by a mouse offset; `offset.y` is positive when looking up
    pub fn look(&mut self, offset: Vec2) {
        self.yaw += offset.x * self.mouse_sensitivity;
        self.pitch = (self.pitch + offset.y * self.mouse_sensitivity)
            .clamp(-MAX_PITCH_DEGREES, MAX_PITCH_DEGREES);
    }

    /// Scrolling up narrows the field of view
    pub fn zoom_by(&mut self, scroll: f32) {
        self.zoom = (self.zoom - scroll).clamp(MIN_ZOOM_DEGREES, MAX_ZOOM_DEGREES);
    }
}

impl CameraController for FirstPersonController {
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, dt: f32) {
        if input.scroll_delta != 0.0 {
            self.zoom_by(input.scroll_delta);
        }

        if input.mouse_delta != Vec2::ZERO {
            // screen y grows downward
            self.look(Vec2::new(input.mouse_delta.x, -input.mouse_delta.y));
        }

        let front = self.front();
        let right = self.right();
        let up = right.cross(front).normalize();
        let step = self.move_speed * dt;

        let mut velocity = Vec3::ZERO;
        if input.forward {
            velocity += front;
        }
        if input.backward {
            velocity -= front;
        }
        if input.right {
            velocity += right;
        }
        if input.left {
            velocity -= right;
        }
        if input.up {
            velocity += up;
        }
        if input.down {
            velocity -= up;
        }

        camera.position += velocity * step;
        self.apply(camera);
    }

    fn name(&self) -> &'static str {
        "FirstPerson"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let controller = FirstPersonController::default();
        assert!((controller.front() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut controller = FirstPersonController::default();
        controller.look(Vec2::new(0.0, 10_000.0));
        assert_eq!(controller.pitch, MAX_PITCH_DEGREES);
        controller.look(Vec2::new(0.0, -20_000.0));
        assert_eq!(controller.pitch, -MAX_PITCH_DEGREES);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut controller = FirstPersonController::default();
        controller.zoom_by(-5.0);
        assert_eq!(controller.zoom, MAX_ZOOM_DEGREES);
        controller.zoom_by(10.0);
        assert_eq!(controller.zoom, 35.0);
        controller.zoom_by(100.0);
        assert_eq!(controller.zoom, MIN_ZOOM_DEGREES);
    }

    #[test]
    fn test_mouse_up_looks_up() {
        let mut controller = FirstPersonController::default();
        let mut camera = Camera::default();
        let input = CameraInput {
            // moving the mouse up the screen
            mouse_delta: Vec2::new(0.0, -50.0),
            ..Default::default()
        };
        controller.update(&mut camera, &input, 0.0);
        assert_eq!(controller.pitch, 5.0);
        assert!(camera.target.y > camera.position.y);
    }

    #[test]
    fn test_movement() {
        let mut controller = FirstPersonController::default();
        let mut camera = Camera::default();
        let start = camera.position;

        let input = CameraInput {
            forward: true,
            ..Default::default()
        };
        controller.update(&mut camera, &input, 1.0);
        assert!((camera.position - (start + Vec3::new(0.0, 0.0, -2.5))).length() < 1e-5);

        let input = CameraInput {
            up: true,
            ..Default::default()
        };
        controller.update(&mut camera, &input, 2.0);
        assert!((camera.position.y - (start.y + 5.0)).abs() < 1e-5);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut controller = FirstPersonController::new().with_speed(10.0);
        controller.look(Vec2::new(30.0, 20.0));
        controller.zoom_by(10.0);
        controller.reset();
        assert_eq!(controller.yaw, -90.0);
        assert_eq!(controller.pitch, 0.0);
        assert_eq!(controller.zoom, MAX_ZOOM_DEGREES);
        assert_eq!(controller.move_speed, 2.5);
        assert_eq!(controller.name(), "FirstPerson");
    }

    #[test]
    fn test_reset_deltas() {
        let mut input = CameraInput {
            mouse_delta: Vec2::new(3.0, 4.0),
            scroll_delta: 1.0,
            forward: true,
            ..Default::default()
        };
        input.reset_deltas();
        assert_eq!(input.mouse_delta, Vec2::ZERO);
        assert_eq!(input.scroll_delta, 0.0);
        assert!(input.forward);
    }
}
