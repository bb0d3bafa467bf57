//! Command line arguments
//!
//! ```bash
//! # Textures from another directory, finer lathing
//! lathe-chess --assets ./textures --slices 64
//!
//! # Render 100 frames then exit
//! lathe-chess --max-frames 100
//! ```

use crate::ViewerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Lathe Chess viewer arguments.
#[derive(Parser, Debug)]
#[command(
    name = "lathe-chess",
    about = "A marble chess set built from lathed outlines",
    long_about = "Renders a full chess set whose pieces are surfaces of revolution \
        swept from flat outlines.\n\n\
        CONTROLS:\n\
          W/S/A/D  move, Q/E up/down\n\
          mouse    look, scroll to zoom\n\
          P        toggle perspective/orthographic\n\
          Esc      quit\n\n\
        Set RUST_LOG=debug for verbose logging.",
    version
)]
pub struct Args {
    /// Initial window width in pixels.
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// Window title.
    #[arg(long, default_value = "Lathe Chess")]
    pub title: String,

    /// Directory holding the marble textures.
    #[arg(long, value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,

    /// Angular slices per lathed piece.
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
    pub slices: u32,

    /// Disable vertical sync (may cause tearing).
    #[arg(long)]
    pub no_vsync: bool,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl From<Args> for ViewerConfig {
    fn from(args: Args) -> Self {
        Self {
            title: args.title,
            width: args.width,
            height: args.height,
            vsync: !args.no_vsync,
            asset_dir: args.assets,
            slice_count: args.slices,
            max_frames: args.max_frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let args = Args::try_parse_from(["lathe-chess"]).unwrap();
        assert_eq!(ViewerConfig::from(args), ViewerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "lathe-chess",
            "--width",
            "1024",
            "--assets",
            "textures",
            "--slices",
            "64",
            "--no-vsync",
            "--max-frames",
            "10",
        ])
        .unwrap();
        let config = ViewerConfig::from(args);

        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.asset_dir, PathBuf::from("textures"));
        assert_eq!(config.slice_count, 64);
        assert!(!config.vsync);
        assert_eq!(config.max_frames, Some(10));
    }

    #[test]
    fn test_zero_slices_rejected() {
        assert!(Args::try_parse_from(["lathe-chess", "--slices", "0"]).is_err());
    }
}
