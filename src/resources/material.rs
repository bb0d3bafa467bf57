//! Marble materials

use std::path::{Path, PathBuf};

use super::{load_or_fallback, TextureData};

/// Surface used by a placement: one diffuse and one specular map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialKind {
    Black,
    White,
    Checker,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [MaterialKind::Black, MaterialKind::White, MaterialKind::Checker];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn diffuse_file(self) -> &'static str {
        match self {
            MaterialKind::Black => "blackMarble.jpg",
            MaterialKind::White => "whiteMarble.jpg",
            MaterialKind::Checker => "checkerMarble.jpg",
        }
    }

    pub fn specular_file(self) -> &'static str {
        match self {
            MaterialKind::Black => "blackMarble_specular.jpg",
            MaterialKind::White => "whiteMarble_specular.jpg",
            MaterialKind::Checker => "checkerMarble_specular.jpg",
        }
    }

    /// Diffuse and specular map paths under `asset_dir`
    pub fn texture_paths(self, asset_dir: &Path) -> (PathBuf, PathBuf) {
        (
            asset_dir.join(self.diffuse_file()),
            asset_dir.join(self.specular_file()),
        )
    }

    /// Flat colour drawn when the diffuse map is missing
    pub fn fallback_diffuse(self) -> [u8; 4] {
        match self {
            MaterialKind::Black => [40, 40, 44, 255],
            MaterialKind::White => [230, 228, 220, 255],
            MaterialKind::Checker => [128, 128, 128, 255],
        }
    }

    /// Flat specular strength drawn when the specular map is missing
    pub fn fallback_specular(self) -> [u8; 4] {
        [128, 128, 128, 255]
    }
}

/// Decoded diffuse and specular maps of one material
#[derive(Debug, Clone)]
pub struct MaterialTextures {
    pub kind: MaterialKind,
    pub diffuse: TextureData,
    pub specular: TextureData,
}

impl MaterialTextures {
    /// Load both maps from `asset_dir`, falling back to flat colours
    pub fn load(kind: MaterialKind, asset_dir: &Path) -> Self {
        let (diffuse, specular) = kind.texture_paths(asset_dir);
        Self {
            kind,
            diffuse: load_or_fallback(&diffuse, kind.fallback_diffuse()),
            specular: load_or_fallback(&specular, kind.fallback_specular()),
        }
    }

    /// Every material in [`MaterialKind::ALL`] order
    pub fn load_all(asset_dir: &Path) -> Vec<Self> {
        MaterialKind::ALL
            .iter()
            .map(|&kind| Self::load(kind, asset_dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_paths() {
        let (diffuse, specular) = MaterialKind::Checker.texture_paths(Path::new("assets"));
        assert_eq!(diffuse, Path::new("assets/checkerMarble.jpg"));
        assert_eq!(specular, Path::new("assets/checkerMarble_specular.jpg"));
    }

    #[test]
    fn test_load_all_without_assets() {
        let materials = MaterialTextures::load_all(Path::new("missing-assets"));
        assert_eq!(materials.len(), 3);
        for (material, kind) in materials.iter().zip(MaterialKind::ALL) {
            assert_eq!(material.kind, kind);
            assert_eq!(material.diffuse.mips[0].data, kind.fallback_diffuse().to_vec());
            assert_eq!(material.specular.name, kind.specular_file());
        }
    }

    #[test]
    fn test_indices_follow_all() {
        for (i, kind) in MaterialKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
