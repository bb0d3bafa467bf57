//! Lathe generator: revolves a half outline around the Y axis

use std::f32::consts::TAU;

use super::{ensure_indexable, validate_profile, MeshData, MeshError, MeshResult, ProfilePoint};

/// Default number of angular steps in a full turn
pub const DEFAULT_SLICE_COUNT: u32 = 20;

/// Sign bands for the synthesized x/z normals of rotated slices.
///
/// Bounds are percentages of the slice count so the same bands work for
/// any slice count. Comparisons are done in integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalBands {
    /// x-normal points inward (-1) when `x_inward_from% < j < x_inward_to%` of the turn
    pub x_inward_from: u32,
    pub x_inward_to: u32,
    /// z-normal is +1 when `0 < j < z_positive_to%` of the turn, -1 otherwise
    pub z_positive_to: u32,
}

impl Default for NormalBands {
    fn default() -> Self {
        // 5 < j < 15 and 0 < j < 11 at 20 slices
        Self {
            x_inward_from: 25,
            x_inward_to: 75,
            z_positive_to: 55,
        }
    }
}

impl NormalBands {
    /// x-normal for slice `j` of `slice_count`
    pub fn x_sign(&self, j: u32, slice_count: u32) -> f32 {
        let scaled = j as u64 * 100;
        let from = self.x_inward_from as u64 * slice_count as u64;
        let to = self.x_inward_to as u64 * slice_count as u64;
        if scaled > from && scaled < to {
            -1.0
        } else {
            1.0
        }
    }

    /// z-normal for slice `j` of `slice_count`
    pub fn z_sign(&self, j: u32, slice_count: u32) -> f32 {
        let scaled = j as u64 * 100;
        let to = self.z_positive_to as u64 * slice_count as u64;
        if j > 0 && scaled < to {
            1.0
        } else {
            -1.0
        }
    }
}

/// Parameters for [`generate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatheOptions {
    /// Rotated copies emitted after the original outline
    pub slice_count: u32,
    pub normal_bands: NormalBands,
    /// Added to `v` once per slice index
    pub v_step: f32,
}

impl Default for LatheOptions {
    fn default() -> Self {
        Self {
            slice_count: DEFAULT_SLICE_COUNT,
            normal_bands: NormalBands::default(),
            v_step: 0.05,
        }
    }
}

impl LatheOptions {
    pub fn with_slice_count(mut self, slice_count: u32) -> Self {
        self.slice_count = slice_count;
        self
    }

    pub fn with_normal_bands(mut self, bands: NormalBands) -> Self {
        self.normal_bands = bands;
        self
    }

    pub fn with_v_step(mut self, v_step: f32) -> Self {
        self.v_step = v_step;
        self
    }
}

/// Revolve a half outline into a full surface of revolution.
///
/// The output holds the original points followed by `slice_count` rotated
/// copies, so it has `(slice_count + 1) * N` points. The last copy lands on
/// the full turn and overlaps the original, leaving the seam open.
///
/// # Arguments
/// * `profile` - Flat outline, 8 floats per point, z expected to be 0
/// * `options` - Slice count, normal bands and texture step
pub fn generate(profile: &[f32], options: &LatheOptions) -> MeshResult<MeshData> {
    let point_count = validate_profile(profile)?;
    if options.slice_count == 0 {
        return Err(MeshError::SliceCountInvalid);
    }
    let slices = options.slice_count;
    let total = (slices as usize + 1) * point_count;
    ensure_indexable(total)?;

    let outline: Vec<ProfilePoint> = (0..point_count)
        .map(|i| ProfilePoint::read(profile, i))
        .collect();

    let mut vertices = Vec::with_capacity(total * super::FLOATS_PER_POINT);
    vertices.extend_from_slice(profile);

    for j in 1..=slices {
        let theta = TAU * j as f32 / slices as f32;
        let (sin, cos) = theta.sin_cos();
        let nx = options.normal_bands.x_sign(j, slices);
        let nz = options.normal_bands.z_sign(j, slices);
        let dv = options.v_step * j as f32;

        for point in &outline {
            let [x, y, _] = point.position;
            ProfilePoint {
                position: [x * cos, y, x * sin],
                normal: [nx, point.normal[1], nz],
                uv: [point.uv[0], point.uv[1] + dv],
            }
            .write_into(&mut vertices);
        }
    }

    let indices = stitch_slices(point_count, total);
    Ok(MeshData::new("lathe", vertices, indices))
}

/// [`generate`] with [`LatheOptions::default`]
pub fn generate_default(profile: &[f32]) -> MeshResult<MeshData> {
    generate(profile, &LatheOptions::default())
}

/// Quads between each point and the point one outline-length further along.
///
/// Walks the flat point sequence, so neighbouring slices are joined and the
/// last slice is not wrapped back onto the first. A single-point outline has
/// nothing to pair and yields no triangles.
fn stitch_slices(point_count: usize, total: usize) -> Vec<u16> {
    if point_count < 2 {
        return Vec::new();
    }
    let quads = total - 1 - point_count;
    let mut indices = Vec::with_capacity(quads * 6);
    for start in 0..quads {
        let next = start + point_count;
        // total <= MAX_INDEXED_POINTS, so every value fits in u16
        let (a, b, c, d) = (start as u16, (start + 1) as u16, next as u16, (next + 1) as u16);
        indices.extend_from_slice(&[a, b, c, b, c, d]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::FLOATS_PER_POINT;
    use rstest::rstest;

    fn two_point_profile() -> Vec<f32> {
        vec![
            0.1, 0.5, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, //
            0.2, 0.0, 0.0, 1.0, -1.0, 0.0, 0.0, 0.5,
        ]
    }

    #[test]
    fn test_single_point_profile() {
        let profile = [0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0];
        let options = LatheOptions::default().with_slice_count(4);
        let mesh = generate(&profile, &options).unwrap();
        // 5 angular positions * 8 floats
        assert_eq!(mesh.vertices.len(), 40);
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn test_two_points_one_slice() {
        let options = LatheOptions::default().with_slice_count(1);
        let mesh = generate(&two_point_profile(), &options).unwrap();
        assert_eq!(mesh.vertices.len(), 32);
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 2, 3]);
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(20)]
    #[case(37)]
    fn test_vertex_count_and_bounds(#[case] slices: u32) {
        let profile = two_point_profile();
        let options = LatheOptions::default().with_slice_count(slices);
        let mesh = generate(&profile, &options).unwrap();

        let n = profile.len() / FLOATS_PER_POINT;
        assert_eq!(mesh.vertices.len(), 8 * (slices as usize + 1) * n);
        // S * N - 1 quads
        assert_eq!(mesh.indices.len(), 6 * (slices as usize * n - 1));
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_rotation_positions() {
        let profile = two_point_profile();
        let mesh = generate_default(&profile).unwrap();

        for j in 0..=20usize {
            let theta = std::f32::consts::TAU * j as f32 / 20.0;
            for i in 0..2 {
                let original = ProfilePoint::read(&profile, i);
                let rotated = mesh.point(j * 2 + i);
                let [x, y, _] = original.position;
                assert!((rotated.position[0] - x * theta.cos()).abs() < 1e-5);
                assert_eq!(rotated.position[1], y);
                assert!((rotated.position[2] - x * theta.sin()).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_normal_bands_at_twenty_slices() {
        let profile = two_point_profile();
        let mesh = generate_default(&profile).unwrap();

        for j in 1..=20u32 {
            let point = mesh.point(j as usize * 2);
            let expected_x = if j > 5 && j < 15 { -1.0 } else { 1.0 };
            let expected_z = if j > 0 && j < 11 { 1.0 } else { -1.0 };
            assert_eq!(point.normal[0], expected_x, "x-normal at slice {}", j);
            assert_eq!(point.normal[2], expected_z, "z-normal at slice {}", j);
            // y-normal is carried over from the outline
            assert_eq!(point.normal[1], 1.0);
        }
    }

    #[test]
    fn test_normal_bands_scale_with_slice_count() {
        let bands = NormalBands::default();
        assert_eq!(bands.x_sign(10, 40), 1.0);
        assert_eq!(bands.x_sign(11, 40), -1.0);
        assert_eq!(bands.x_sign(29, 40), -1.0);
        assert_eq!(bands.x_sign(30, 40), 1.0);
        assert_eq!(bands.z_sign(21, 40), 1.0);
        assert_eq!(bands.z_sign(22, 40), -1.0);
        assert_eq!(bands.z_sign(0, 40), -1.0);
    }

    #[test]
    fn test_texture_step() {
        let profile = two_point_profile();
        let options = LatheOptions::default().with_slice_count(4).with_v_step(0.1);
        let mesh = generate(&profile, &options).unwrap();

        let last = mesh.point(4 * 2 + 1);
        assert_eq!(last.uv[0], 0.0);
        assert!((last.uv[1] - (0.5 + 0.4)).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            generate_default(&[]).unwrap_err(),
            MeshError::InvalidProfileLength { len: 0 }
        );
        assert_eq!(
            generate_default(&[0.0; 7]).unwrap_err(),
            MeshError::InvalidProfileLength { len: 7 }
        );
        let options = LatheOptions::default().with_slice_count(0);
        assert_eq!(
            generate(&two_point_profile(), &options).unwrap_err(),
            MeshError::SliceCountInvalid
        );
    }

    #[test]
    fn test_too_many_vertices() {
        // 2 points * 40000 positions overflows 16-bit indices
        let options = LatheOptions::default().with_slice_count(39_999);
        assert_eq!(
            generate(&two_point_profile(), &options).unwrap_err(),
            MeshError::TooManyVertices { count: 80_000 }
        );
    }
}
