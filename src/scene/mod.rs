//! Scene description: camera, lights and piece placements

pub mod board;
mod camera;
mod camera_controller;
mod light;
mod transform;

pub use board::standard_layout;
pub use camera::*;
pub use camera_controller::*;
pub use light::*;
pub use transform::*;

use crate::pieces::MeshKind;
use crate::resources::MaterialKind;

/// One drawn instance of a shared mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub mesh: MeshKind,
    pub material: MaterialKind,
    pub transform: Transform,
}

impl Placement {
    pub fn new(mesh: MeshKind, material: MaterialKind, transform: Transform) -> Self {
        Self {
            mesh,
            material,
            transform,
        }
    }
}
