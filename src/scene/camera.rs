//! Camera and projection

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Near clip plane shared by both projection modes
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane shared by both projection modes
pub const FAR_PLANE: f32 = 100.0;
/// Half extent of the orthographic view volume
pub const ORTHO_HALF_EXTENT: f32 = 2.0;

/// Camera projection type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::perspective(45.0, 800.0 / 600.0)
    }
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32) -> Self {
        Projection::Perspective {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    /// Fixed square view volume centred on the view axis
    pub fn orthographic() -> Self {
        Projection::Orthographic {
            left: -ORTHO_HALF_EXTENT,
            right: ORTHO_HALF_EXTENT,
            bottom: -ORTHO_HALF_EXTENT,
            top: ORTHO_HALF_EXTENT,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }

    pub fn is_orthographic(&self) -> bool {
        matches!(self, Projection::Orthographic { .. })
    }
}

/// Which projection the viewer currently uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    /// Projection for this mode; `zoom` is the vertical field of view in degrees
    pub fn projection(self, zoom: f32, aspect: f32) -> Projection {
        match self {
            ProjectionMode::Perspective => Projection::perspective(zoom, aspect),
            ProjectionMode::Orthographic => Projection::orthographic(),
        }
    }
}

/// Camera for viewing the scene
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(3.0, 2.0, 3.0),
            target: Vec3::new(3.0, 2.0, 2.0),
            up: Vec3::Y,
            projection: Projection::default(),
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            projection: Projection::default(),
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector the camera looks along
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Build camera uniform data for shaders
    pub fn uniform_data(&self) -> CameraUniformData {
        CameraUniformData {
            view_proj: self.view_projection_matrix(),
            position: self.position.extend(1.0),
        }
    }
}

/// Camera uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    pub view_proj: Mat4,
    pub position: Vec4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        let mode = ProjectionMode::default();
        assert_eq!(mode, ProjectionMode::Perspective);
        assert_eq!(mode.toggled(), ProjectionMode::Orthographic);
        assert_eq!(mode.toggled().toggled(), ProjectionMode::Perspective);
    }

    #[test]
    fn test_orthographic_volume() {
        let projection = ProjectionMode::Orthographic.projection(45.0, 2.0);
        assert!(projection.is_orthographic());
        // zoom and aspect do not affect the fixed volume
        assert_eq!(projection, Projection::orthographic());

        let corner = projection.matrix().project_point3(Vec3::new(2.0, 2.0, -1.0));
        assert!((corner.x - 1.0).abs() < 1e-5);
        assert!((corner.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_uses_zoom() {
        match ProjectionMode::Perspective.projection(30.0, 1.5) {
            Projection::Perspective { fov_y, aspect, near, far } => {
                assert!((fov_y - 30f32.to_radians()).abs() < 1e-6);
                assert_eq!(aspect, 1.5);
                assert_eq!(near, NEAR_PLANE);
                assert_eq!(far, FAR_PLANE);
            }
            other => panic!("unexpected projection {:?}", other),
        }
    }

    #[test]
    fn test_uniform_position() {
        let camera = Camera::default();
        let data = camera.uniform_data();
        assert_eq!(data.position, Vec4::new(3.0, 2.0, 3.0, 1.0));
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }
}
