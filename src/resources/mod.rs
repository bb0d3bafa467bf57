//! Resource management
//!
//! Handles loading of the marble textures and the materials built from them.

mod material;
mod texture;

pub use material::*;
pub use texture::*;
