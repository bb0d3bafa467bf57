//! CPU-side mesh data and generators
//!
//! Every generator in this module works on flat `f32` buffers laid out as
//! consecutive 8-float points (position, normal, uv) and produces 16-bit
//! index lists. Nothing here touches the GPU.

mod lathe;
mod mirror;
pub mod primitives;
mod stitch;

pub use lathe::*;
pub use mirror::*;
pub use stitch::*;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Number of floats in one packed point: position(3) + normal(3) + uv(2)
pub const FLOATS_PER_POINT: usize = 8;

/// Largest point count a `u16` index buffer can address
pub const MAX_INDEXED_POINTS: usize = u16::MAX as usize + 1;

/// Errors raised while generating meshes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("profile length {len} is not a positive multiple of 8")]
    InvalidProfileLength { len: usize },

    #[error("slice count must be at least 1")]
    SliceCountInvalid,

    #[error("{count} points cannot be addressed by 16-bit indices")]
    TooManyVertices { count: usize },

    #[error("{points} points cannot be split into rows of width {width}")]
    InvalidRowWidth { width: usize, points: usize },
}

pub type MeshResult<T> = Result<T, MeshError>;

/// A single packed point as it sits in a vertex buffer
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
pub struct ProfilePoint {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl ProfilePoint {
    /// Read the `index`-th point out of a flat buffer.
    ///
    /// Callers validate the buffer first; an out-of-range index panics.
    pub fn read(data: &[f32], index: usize) -> Self {
        let p = &data[index * FLOATS_PER_POINT..(index + 1) * FLOATS_PER_POINT];
        Self {
            position: [p[0], p[1], p[2]],
            normal: [p[3], p[4], p[5]],
            uv: [p[6], p[7]],
        }
    }

    /// Append this point to a flat buffer
    pub fn write_into(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(bytemuck::cast_slice::<ProfilePoint, f32>(std::slice::from_ref(self)));
    }
}

/// Check that a flat buffer holds at least one whole point and return the point count
pub fn validate_profile(data: &[f32]) -> MeshResult<usize> {
    if data.is_empty() || data.len() % FLOATS_PER_POINT != 0 {
        return Err(MeshError::InvalidProfileLength { len: data.len() });
    }
    Ok(data.len() / FLOATS_PER_POINT)
}

/// Check that `count` points fit a `u16` index buffer
pub(crate) fn ensure_indexable(count: usize) -> MeshResult<()> {
    if count > MAX_INDEXED_POINTS {
        return Err(MeshError::TooManyVertices { count });
    }
    Ok(())
}

/// Generated mesh: flat vertex floats plus a 16-bit index list
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub label: String,
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn new(label: &str, vertices: Vec<f32>, indices: Vec<u16>) -> Self {
        Self {
            label: label.to_string(),
            vertices,
            indices,
        }
    }

    /// Replace the label
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn point_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_POINT
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn point(&self, index: usize) -> ProfilePoint {
        ProfilePoint::read(&self.vertices, index)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// True if every index addresses an existing point
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.point_count();
        self.indices.iter().all(|&i| (i as usize) < count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_read_write() {
        let data = [1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.25, 0.75];
        let point = ProfilePoint::read(&data, 0);
        assert_eq!(point.position, [1.0, 2.0, 3.0]);
        assert_eq!(point.normal, [0.0, 1.0, 0.0]);
        assert_eq!(point.uv, [0.25, 0.75]);

        let mut out = Vec::new();
        point.write_into(&mut out);
        assert_eq!(out, data);
    }

    #[test]
    fn test_validate_profile() {
        assert_eq!(validate_profile(&[0.0; 16]), Ok(2));
        assert_eq!(
            validate_profile(&[]),
            Err(MeshError::InvalidProfileLength { len: 0 })
        );
        assert_eq!(
            validate_profile(&[0.0; 12]),
            Err(MeshError::InvalidProfileLength { len: 12 })
        );
    }

    #[test]
    fn test_mesh_accessors() {
        let mesh = MeshData::new("tri", vec![0.0; 24], vec![0, 1, 2]);
        assert_eq!(mesh.point_count(), 3);
        assert_eq!(mesh.vertex_bytes().len(), 96);
        assert_eq!(mesh.index_bytes().len(), 6);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.indices_in_bounds());

        let broken = MeshData::new("broken", vec![0.0; 16], vec![0, 1, 2]);
        assert!(!broken.indices_in_bounds());
    }
}
