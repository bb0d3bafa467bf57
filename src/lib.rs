//! Lathe Chess - a marble chess set built from lathed piece outlines
//!
//! Every piece starts life as a flat outline of points in the XY plane. The
//! outline is swept around the Y axis into a surface of revolution, the
//! ornaments (knight heads, rook merlons, the king's cross) are built by
//! mirroring authored fragments, and the whole set is drawn with wgpu under
//! a small Phong light rig.
//!
//! # Modules
//! - [`mesh`]: lathe, mirror and stitching generators over flat point data
//! - [`pieces`]: the authored outline tables and the generated [`pieces::PieceSet`]
//! - [`scene`]: camera, lights and the starting position
//! - [`resources`]: marble textures with mip chains
//! - [`backend`], [`renderer`]: GPU setup and drawing
//! - [`app`]: the interactive viewer

pub mod app;
pub mod backend;
pub mod mesh;
pub mod pieces;
pub mod renderer;
pub mod resources;
pub mod scene;

#[cfg(not(target_arch = "wasm32"))]
pub mod args;

pub use app::{run, ViewerError, ViewerState};
pub use mesh::{LatheOptions, MeshData, MeshError};
pub use pieces::{MeshKind, PieceSet};

use std::path::PathBuf;

/// Crate version, logged at startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Enable vsync
    pub vsync: bool,
    /// Directory holding the marble textures
    pub asset_dir: PathBuf,
    /// Angular slices per lathed piece
    pub slice_count: u32,
    /// Exit after rendering N frames (useful for testing)
    pub max_frames: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Lathe Chess".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            asset_dir: PathBuf::from("assets"),
            slice_count: mesh::DEFAULT_SLICE_COUNT,
            max_frames: None,
        }
    }
}

impl ViewerConfig {
    /// Lathe settings for the configured slice count
    pub fn lathe_options(&self) -> LatheOptions {
        LatheOptions::default().with_slice_count(self.slice_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.slice_count, 20);
        assert_eq!(config.lathe_options().slice_count, 20);
        assert!(config.vsync);
    }
}
