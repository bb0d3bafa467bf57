//! Fixed helper meshes: the board plane and the light marker cube

use super::{sequential_indices, MeshData, MeshResult, ProfilePoint};

/// Half the side length of the board plane
pub const BOARD_HALF_EXTENT: f32 = 1.38;

/// Number of times the board texture repeats along each edge
pub const BOARD_UV_REPEAT: f32 = 4.0;

/// Unit cube centred at the origin, already split into 12 triangles
#[rustfmt::skip]
const CUBE: &[f32] = &[
       -0.5,    -0.5,    -0.5,   0.0,  0.0, -1.0,  0.0, 0.0,
        0.5,    -0.5,    -0.5,   0.0,  0.0, -1.0,  1.0, 0.0,
        0.5,     0.5,    -0.5,   0.0,  0.0, -1.0,  1.0, 1.0,
        0.5,     0.5,    -0.5,   0.0,  0.0, -1.0,  1.0, 1.0,
       -0.5,     0.5,    -0.5,   0.0,  0.0, -1.0,  0.0, 1.0,
       -0.5,    -0.5,    -0.5,   0.0,  0.0, -1.0,  0.0, 0.0,
       -0.5,    -0.5,     0.5,   0.0,  0.0,  1.0,  0.0, 0.0,
        0.5,    -0.5,     0.5,   0.0,  0.0,  1.0,  1.0, 0.0,
        0.5,     0.5,     0.5,   0.0,  0.0,  1.0,  1.0, 1.0,
        0.5,     0.5,     0.5,   0.0,  0.0,  1.0,  1.0, 1.0,
       -0.5,     0.5,     0.5,   0.0,  0.0,  1.0,  0.0, 1.0,
       -0.5,    -0.5,     0.5,   0.0,  0.0,  1.0,  0.0, 0.0,
       -0.5,     0.5,     0.5,  -1.0,  0.0,  0.0,  1.0, 0.0,
       -0.5,     0.5,    -0.5,  -1.0,  0.0,  0.0,  1.0, 1.0,
       -0.5,    -0.5,    -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0,
       -0.5,    -0.5,    -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0,
       -0.5,    -0.5,     0.5,  -1.0,  0.0,  0.0,  0.0, 0.0,
       -0.5,     0.5,     0.5,  -1.0,  0.0,  0.0,  1.0, 0.0,
        0.5,     0.5,     0.5,   1.0,  0.0,  0.0,  1.0, 0.0,
        0.5,     0.5,    -0.5,   1.0,  0.0,  0.0,  1.0, 1.0,
        0.5,    -0.5,    -0.5,   1.0,  0.0,  0.0,  0.0, 1.0,
        0.5,    -0.5,    -0.5,   1.0,  0.0,  0.0,  0.0, 1.0,
        0.5,    -0.5,     0.5,   1.0,  0.0,  0.0,  0.0, 0.0,
        0.5,     0.5,     0.5,   1.0,  0.0,  0.0,  1.0, 0.0,
       -0.5,    -0.5,    -0.5,   0.0, -1.0,  0.0,  0.0, 1.0,
        0.5,    -0.5,    -0.5,   0.0, -1.0,  0.0,  1.0, 1.0,
        0.5,    -0.5,     0.5,   0.0, -1.0,  0.0,  1.0, 0.0,
        0.5,    -0.5,     0.5,   0.0, -1.0,  0.0,  1.0, 0.0,
       -0.5,    -0.5,     0.5,   0.0, -1.0,  0.0,  0.0, 0.0,
       -0.5,    -0.5,    -0.5,   0.0, -1.0,  0.0,  0.0, 1.0,
       -0.5,     0.5,    -0.5,   0.0,  1.0,  0.0,  0.0, 1.0,
        0.5,     0.5,    -0.5,   0.0,  1.0,  0.0,  1.0, 1.0,
        0.5,     0.5,     0.5,   0.0,  1.0,  0.0,  1.0, 0.0,
        0.5,     0.5,     0.5,   0.0,  1.0,  0.0,  1.0, 0.0,
       -0.5,     0.5,     0.5,   0.0,  1.0,  0.0,  0.0, 0.0,
       -0.5,     0.5,    -0.5,   0.0,  1.0,  0.0,  0.0, 1.0,
];

/// Flat square on the XZ plane facing +Y.
///
/// # Arguments
/// * `half_extent` - Half the side length
/// * `uv_repeat` - Texture repetitions along each edge
pub fn board_plane(half_extent: f32, uv_repeat: f32) -> MeshData {
    let corners = [
        ([half_extent, half_extent], [uv_repeat, uv_repeat]),
        ([half_extent, -half_extent], [uv_repeat, 0.0]),
        ([-half_extent, -half_extent], [0.0, 0.0]),
        ([-half_extent, half_extent], [0.0, uv_repeat]),
    ];

    let mut vertices = Vec::with_capacity(corners.len() * 8);
    for ([x, z], uv) in corners {
        ProfilePoint {
            position: [x, 0.0, z],
            normal: [0.0, 1.0, 0.0],
            uv,
        }
        .write_into(&mut vertices);
    }

    MeshData::new("board", vertices, vec![0, 1, 3, 1, 2, 3])
}

/// Unit cube used to mark point light positions
pub fn light_cube() -> MeshResult<MeshData> {
    let indices = sequential_indices(CUBE.len() / super::FLOATS_PER_POINT)?;
    Ok(MeshData::new("light cube", CUBE.to_vec(), indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_plane() {
        let plane = board_plane(BOARD_HALF_EXTENT, BOARD_UV_REPEAT);
        assert_eq!(plane.point_count(), 4);
        assert_eq!(plane.indices, vec![0, 1, 3, 1, 2, 3]);
        assert_eq!(plane.point(0).position, [1.38, 0.0, 1.38]);
        assert_eq!(plane.point(0).uv, [4.0, 4.0]);
        assert_eq!(plane.point(2).uv, [0.0, 0.0]);
        for i in 0..4 {
            assert_eq!(plane.point(i).normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_light_cube() {
        let cube = light_cube().unwrap();
        // 6 faces * 2 triangles * 3 points
        assert_eq!(cube.point_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
        for i in 0..cube.point_count() {
            let p = cube.point(i).position;
            assert!(p.iter().all(|c| c.abs() == 0.5));
        }
    }
}
