//! Mirror replicator for flat-sided ornaments
//!
//! Prism data is authored once for one side of a piece and reflected to
//! complete the symmetric shape. Each reflection appends a transformed copy
//! of everything produced so far, so `k` reflections multiply the point
//! count by `2^k`.

use bitflags::bitflags;

use super::{ensure_indexable, validate_profile, MeshResult, ProfilePoint, FLOATS_PER_POINT};

bitflags! {
    /// Reflections to apply, always in the order X, Z, DIAGONAL
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MirrorAxes: u8 {
        /// Negate x and the x-normal
        const X = 1 << 0;
        /// Negate z and the z-normal
        const Z = 1 << 1;
        /// Swap x with z (and the matching normals), a reflection across the x = z plane
        const DIAGONAL = 1 << 2;
    }
}

impl MirrorAxes {
    /// Single-axis reflections contained in this set, in application order
    pub fn steps(self) -> impl Iterator<Item = MirrorAxes> {
        [MirrorAxes::X, MirrorAxes::Z, MirrorAxes::DIAGONAL]
            .into_iter()
            .filter(move |axis| self.contains(*axis))
    }

    fn reflect(self, point: ProfilePoint) -> ProfilePoint {
        let ProfilePoint { position: p, normal: n, uv } = point;
        if self == MirrorAxes::X {
            ProfilePoint {
                position: [-p[0], p[1], p[2]],
                normal: [-n[0], n[1], n[2]],
                uv,
            }
        } else if self == MirrorAxes::Z {
            ProfilePoint {
                position: [p[0], p[1], -p[2]],
                normal: [n[0], n[1], -n[2]],
                uv,
            }
        } else {
            ProfilePoint {
                position: [p[2], p[1], p[0]],
                normal: [n[2], n[1], n[0]],
                uv,
            }
        }
    }
}

/// Configured reflection pass over a flat point buffer
#[derive(Debug, Clone, Copy)]
pub struct Mirror {
    axes: MirrorAxes,
    reversed: bool,
}

impl Mirror {
    pub fn new(axes: MirrorAxes) -> Self {
        Self {
            axes,
            reversed: false,
        }
    }

    /// Append each mirrored copy in reverse point order.
    ///
    /// Keeps row-structured data continuous: the last row of the source is
    /// followed by its own reflection.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    pub fn axes(&self) -> MirrorAxes {
        self.axes
    }

    /// Apply every configured reflection and return the extended buffer
    pub fn apply(&self, faces: &[f32]) -> MeshResult<Vec<f32>> {
        let point_count = validate_profile(faces)?;
        let copies = 1usize << self.axes.steps().count();
        ensure_indexable(point_count * copies)?;

        let mut out = Vec::with_capacity(faces.len() * copies);
        out.extend_from_slice(faces);

        for axis in self.axes.steps() {
            let current = out.len() / FLOATS_PER_POINT;
            let mirrored: Vec<ProfilePoint> = (0..current)
                .map(|i| axis.reflect(ProfilePoint::read(&out, i)))
                .collect();
            if self.reversed {
                mirrored.iter().rev().for_each(|p| p.write_into(&mut out));
            } else {
                mirrored.iter().for_each(|p| p.write_into(&mut out));
            }
        }

        Ok(out)
    }
}

/// Reflect prism faces across the given axes.
///
/// `MirrorAxes::X | MirrorAxes::Z` gives four-fold symmetry around the Y axis.
pub fn mirror_quadrants(faces: &[f32], axes: MirrorAxes) -> MeshResult<Vec<f32>> {
    Mirror::new(axes).apply(faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshError;

    fn prism_face() -> Vec<f32> {
        vec![
            0.075, 0.000, -0.04, -1.0, 0.0, 0.0, 0.0, 1.0, //
            0.075, 0.000, 0.04, -1.0, 0.0, 0.0, 1.0, 1.0, //
            0.101, 0.055, 0.04, 0.0, 1.0, 1.0, 1.0, 0.0,
        ]
    }

    fn approx_eq(a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn test_length_multiples() {
        let faces = prism_face();
        assert_eq!(mirror_quadrants(&faces, MirrorAxes::X).unwrap().len(), 2 * faces.len());
        assert_eq!(mirror_quadrants(&faces, MirrorAxes::Z).unwrap().len(), 2 * faces.len());
        assert_eq!(
            mirror_quadrants(&faces, MirrorAxes::X | MirrorAxes::Z).unwrap().len(),
            4 * faces.len()
        );
        assert_eq!(mirror_quadrants(&faces, MirrorAxes::all()).unwrap().len(), 8 * faces.len());
        assert_eq!(mirror_quadrants(&faces, MirrorAxes::empty()).unwrap(), faces);
    }

    #[test]
    fn test_x_mirror_negates_position_and_normal() {
        let faces = prism_face();
        let out = mirror_quadrants(&faces, MirrorAxes::X).unwrap();
        let original = ProfilePoint::read(&out, 0);
        let mirrored = ProfilePoint::read(&out, 3);
        assert_eq!(mirrored.position, [-original.position[0], original.position[1], original.position[2]]);
        assert_eq!(mirrored.normal, [-original.normal[0], original.normal[1], original.normal[2]]);
        assert_eq!(mirrored.uv, original.uv);
    }

    #[test]
    fn test_x_mirror_round_trip() {
        let faces = prism_face();
        let once = mirror_quadrants(&faces, MirrorAxes::X).unwrap();
        let mirrored_half = &once[faces.len()..];
        let back = mirror_quadrants(mirrored_half, MirrorAxes::X).unwrap();
        assert!(approx_eq(&back[faces.len()..], &faces));
    }

    #[test]
    fn test_quadrants_are_closed_under_negation() {
        let out = mirror_quadrants(&prism_face(), MirrorAxes::X | MirrorAxes::Z).unwrap();
        let points: Vec<ProfilePoint> = (0..out.len() / FLOATS_PER_POINT)
            .map(|i| ProfilePoint::read(&out, i))
            .collect();
        for p in &points {
            let [x, y, z] = p.position;
            for target in [[-x, y, z], [x, y, -z], [-x, y, -z]] {
                assert!(points.iter().any(|q| approx_eq(&q.position, &target)));
            }
        }
    }

    #[test]
    fn test_diagonal_swaps_axes() {
        let faces = prism_face();
        let out = mirror_quadrants(&faces, MirrorAxes::X | MirrorAxes::DIAGONAL).unwrap();
        // copies: original, X, diagonal(original), diagonal(X)
        let n = faces.len() / FLOATS_PER_POINT;
        for i in 0..n {
            let p = ProfilePoint::read(&out, i);
            let swapped = ProfilePoint::read(&out, 2 * n + i);
            let swapped_neg = ProfilePoint::read(&out, 3 * n + i);
            assert_eq!(swapped.position, [p.position[2], p.position[1], p.position[0]]);
            assert_eq!(swapped.normal, [p.normal[2], p.normal[1], p.normal[0]]);
            assert_eq!(swapped_neg.position, [p.position[2], p.position[1], -p.position[0]]);
            assert_eq!(swapped_neg.normal, [p.normal[2], p.normal[1], -p.normal[0]]);
        }
    }

    #[test]
    fn test_reversed_order() {
        let faces = prism_face();
        let out = Mirror::new(MirrorAxes::X).reversed().apply(&faces).unwrap();
        // the first mirrored point is the reflection of the last source point
        let last = ProfilePoint::read(&faces, 2);
        let first_mirrored = ProfilePoint::read(&out, 3);
        assert_eq!(first_mirrored.position[0], -last.position[0]);
        assert_eq!(first_mirrored.position[2], last.position[2]);
        let last_mirrored = ProfilePoint::read(&out, 5);
        assert_eq!(last_mirrored.position[0], -faces[0]);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            mirror_quadrants(&[1.0, 2.0, 3.0], MirrorAxes::X).unwrap_err(),
            MeshError::InvalidProfileLength { len: 3 }
        );
    }
}
