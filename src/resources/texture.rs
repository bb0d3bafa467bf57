//! Texture loading

use image::{imageops::FilterType, DynamicImage, GenericImageView, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("image has zero size")]
    Empty,
}

/// One level of a mip chain, tightly packed RGBA8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Loaded texture data with a full mip chain
#[derive(Debug, Clone)]
pub struct TextureData {
    pub name: String,
    /// Level 0 is the source image, each next level halves both sides
    pub mips: Vec<MipLevel>,
}

impl TextureData {
    /// Load texture from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let img = image::open(path)?;
        Self::from_image(img, &name)
    }

    /// Load texture from bytes
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(img, name)
    }

    fn from_image(img: DynamicImage, name: &str) -> Result<Self, TextureError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }

        Ok(Self {
            name: name.to_string(),
            mips: build_mip_chain(img.to_rgba8()),
        })
    }

    /// Create a solid color texture
    pub fn solid_color(color: [u8; 4], name: &str) -> Self {
        Self {
            name: name.to_string(),
            mips: vec![MipLevel {
                width: 1,
                height: 1,
                data: color.to_vec(),
            }],
        }
    }

    pub fn width(&self) -> u32 {
        self.mips.first().map_or(1, |m| m.width)
    }

    pub fn height(&self) -> u32 {
        self.mips.first().map_or(1, |m| m.height)
    }

    pub fn mip_level_count(&self) -> u32 {
        self.mips.len() as u32
    }
}

/// Load a texture, or log the failure and use a 1x1 texture of `fallback`
pub fn load_or_fallback(path: &Path, fallback: [u8; 4]) -> TextureData {
    match TextureData::from_file(path) {
        Ok(texture) => {
            log::debug!(
                "Loaded texture {} ({}x{}, {} mips)",
                path.display(),
                texture.width(),
                texture.height(),
                texture.mip_level_count()
            );
            texture
        }
        Err(e) => {
            log::warn!("Texture failed to load at path: {} ({})", path.display(), e);
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("fallback");
            TextureData::solid_color(fallback, name)
        }
    }
}

fn build_mip_chain(base: RgbaImage) -> Vec<MipLevel> {
    let mut mips = Vec::new();
    let (mut width, mut height) = base.dimensions();
    let mut current = base;

    loop {
        mips.push(MipLevel {
            width,
            height,
            data: current.as_raw().clone(),
        });
        if width == 1 && height == 1 {
            break;
        }
        width = (width / 2).max(1);
        height = (height / 2).max(1);
        current = image::imageops::resize(&current, width, height, FilterType::Triangle);
    }

    mips
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_solid_color() {
        let texture = TextureData::solid_color([1, 2, 3, 4], "solid");
        assert_eq!(texture.width(), 1);
        assert_eq!(texture.height(), 1);
        assert_eq!(texture.mip_level_count(), 1);
        assert_eq!(texture.mips[0].data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mip_chain_sizes() {
        let img = RgbaImage::from_pixel(8, 2, Rgba([200, 100, 50, 255]));
        let texture = TextureData::from_image(DynamicImage::ImageRgba8(img), "strip").unwrap();

        let sizes: Vec<(u32, u32)> = texture.mips.iter().map(|m| (m.width, m.height)).collect();
        assert_eq!(sizes, vec![(8, 2), (4, 1), (2, 1), (1, 1)]);
        for mip in &texture.mips {
            assert_eq!(mip.data.len(), (mip.width * mip.height * 4) as usize);
        }
        // a flat image stays flat at every level
        assert_eq!(&texture.mips[3].data[..], &[200, 100, 50, 255]);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("no/such/dir/blackMarble.jpg");
        assert!(TextureData::from_file(path).is_err());

        let texture = load_or_fallback(path, [9, 9, 9, 255]);
        assert_eq!(texture.name, "blackMarble.jpg");
        assert_eq!(texture.mip_level_count(), 1);
        assert_eq!(texture.mips[0].data, vec![9, 9, 9, 255]);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = TextureData::from_bytes(&[0, 1, 2, 3], "garbage");
        assert!(matches!(result, Err(TextureError::Image(_))));
    }
}
