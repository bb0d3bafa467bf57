//! Index builders for pre-laid-out point data

use super::{ensure_indexable, MeshError, MeshResult};

/// Triangulate a grid of points stored row after row.
///
/// Each pair of neighbouring rows is joined with the "upper" triangles
/// `(a[c], a[c+1], b[c])` for every column first, followed by the "lower"
/// triangles `(a[c+1], b[c], b[c+1])`.
///
/// # Arguments
/// * `point_count` - Total number of points, a multiple of `row_width`
/// * `row_width` - Points per row, at least 2
pub fn stitch_rows(point_count: usize, row_width: usize) -> MeshResult<Vec<u16>> {
    if row_width < 2 || point_count % row_width != 0 {
        return Err(MeshError::InvalidRowWidth {
            width: row_width,
            points: point_count,
        });
    }
    ensure_indexable(point_count)?;

    let rows = point_count / row_width;
    let quads_per_pair = row_width - 1;
    let mut indices = Vec::with_capacity(rows.saturating_sub(1) * quads_per_pair * 6);

    for row in 0..rows.saturating_sub(1) {
        let a = row * row_width;
        let b = a + row_width;
        for c in 0..quads_per_pair {
            indices.extend_from_slice(&[(a + c) as u16, (a + c + 1) as u16, (b + c) as u16]);
        }
        for c in 0..quads_per_pair {
            indices.extend_from_slice(&[(a + c + 1) as u16, (b + c) as u16, (b + c + 1) as u16]);
        }
    }

    Ok(indices)
}

/// Ascending `0..point_count` for data that is already triangulated
pub fn sequential_indices(point_count: usize) -> MeshResult<Vec<u16>> {
    ensure_indexable(point_count)?;
    Ok((0..point_count).map(|i| i as u16).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Index sequence produced by hand-stepping a cursor over rows of three
    fn hand_stepped_rows(point_count: usize) -> Vec<u16> {
        let mut out = Vec::new();
        let mut s = 0usize;
        loop {
            for offset in [0, 1, 3, 1, 2, 4, 1, 3, 4, 2, 4, 5] {
                out.push((s + offset) as u16);
            }
            if s + 5 == point_count - 1 {
                break;
            }
            s += 3;
        }
        out
    }

    #[test]
    fn test_matches_hand_stepped_pattern() {
        // 84 authored knight-head points mirrored to 168
        let indices = stitch_rows(168, 3).unwrap();
        assert_eq!(indices, hand_stepped_rows(168));
        // 56 rows -> 55 row pairs * 4 triangles
        assert_eq!(indices.len(), 55 * 12);
        assert!(indices.iter().all(|&i| (i as usize) < 168));
    }

    #[test]
    fn test_single_row_has_no_triangles() {
        assert!(stitch_rows(4, 4).unwrap().is_empty());
        assert!(stitch_rows(0, 3).unwrap().is_empty());
    }

    #[test]
    fn test_wide_rows() {
        let indices = stitch_rows(8, 4).unwrap();
        assert_eq!(
            indices,
            vec![0, 1, 4, 1, 2, 5, 2, 3, 6, 1, 4, 5, 2, 5, 6, 3, 6, 7]
        );
    }

    #[test]
    fn test_invalid_row_width() {
        assert_eq!(
            stitch_rows(10, 3).unwrap_err(),
            MeshError::InvalidRowWidth { width: 3, points: 10 }
        );
        assert_eq!(
            stitch_rows(10, 1).unwrap_err(),
            MeshError::InvalidRowWidth { width: 1, points: 10 }
        );
    }

    #[test]
    fn test_sequential_indices() {
        assert_eq!(sequential_indices(4).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(
            sequential_indices(70_000).unwrap_err(),
            MeshError::TooManyVertices { count: 70_000 }
        );
    }
}
