//! Piece meshes built from the authored tables
//!
//! Every mesh kind is generated exactly once and shared by all of its
//! placements on the board.

pub mod profiles;

use crate::mesh::{
    generate, primitives, sequential_indices, stitch_rows, validate_profile, LatheOptions,
    MeshData, MeshResult, Mirror, MirrorAxes,
};

/// Points per row in the knight head grid
const KNIGHT_HEAD_ROW_WIDTH: usize = 3;

/// Every distinct mesh the viewer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    Bishop,
    KnightBase,
    KnightHead,
    Rook,
    RookMerlons,
    Queen,
    King,
    KingCross,
    Pawn,
    Board,
    LightCube,
}

impl MeshKind {
    pub const ALL: [MeshKind; 11] = [
        MeshKind::Bishop,
        MeshKind::KnightBase,
        MeshKind::KnightHead,
        MeshKind::Rook,
        MeshKind::RookMerlons,
        MeshKind::Queen,
        MeshKind::King,
        MeshKind::KingCross,
        MeshKind::Pawn,
        MeshKind::Board,
        MeshKind::LightCube,
    ];

    /// Position in [`MeshKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Bishop => "bishop",
            MeshKind::KnightBase => "knight base",
            MeshKind::KnightHead => "knight head",
            MeshKind::Rook => "rook",
            MeshKind::RookMerlons => "rook merlons",
            MeshKind::Queen => "queen",
            MeshKind::King => "king",
            MeshKind::KingCross => "king cross",
            MeshKind::Pawn => "pawn",
            MeshKind::Board => "board",
            MeshKind::LightCube => "light cube",
        }
    }

    /// Outline table for the lathed kinds
    pub fn lathe_profile(self) -> Option<&'static [f32]> {
        match self {
            MeshKind::Bishop => Some(profiles::BISHOP),
            MeshKind::KnightBase => Some(profiles::KNIGHT_BASE),
            MeshKind::Rook => Some(profiles::ROOK),
            MeshKind::Queen => Some(profiles::QUEEN),
            MeshKind::King => Some(profiles::KING),
            MeshKind::Pawn => Some(profiles::PAWN),
            _ => None,
        }
    }
}

/// One generated mesh per [`MeshKind`]
#[derive(Debug, Clone)]
pub struct PieceSet {
    meshes: Vec<MeshData>,
}

impl PieceSet {
    /// Generate every mesh
    pub fn build(options: &LatheOptions) -> MeshResult<Self> {
        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| build_mesh(kind, options).map(|mesh| mesh.with_label(kind.name())))
            .collect::<MeshResult<Vec<_>>>()?;

        let points: usize = meshes.iter().map(MeshData::point_count).sum();
        let triangles: usize = meshes.iter().map(MeshData::triangle_count).sum();
        log::info!(
            "Generated {} meshes ({} points, {} triangles) with {} slices",
            meshes.len(),
            points,
            triangles,
            options.slice_count
        );

        Ok(Self { meshes })
    }

    pub fn get(&self, kind: MeshKind) -> &MeshData {
        &self.meshes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshKind, &MeshData)> {
        MeshKind::ALL.into_iter().zip(self.meshes.iter())
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

fn build_mesh(kind: MeshKind, options: &LatheOptions) -> MeshResult<MeshData> {
    match kind {
        MeshKind::Bishop
        | MeshKind::KnightBase
        | MeshKind::Rook
        | MeshKind::Queen
        | MeshKind::King
        | MeshKind::Pawn => generate(kind.lathe_profile().unwrap_or_default(), options),
        MeshKind::KnightHead => knight_head(),
        MeshKind::RookMerlons => rook_merlons(),
        MeshKind::KingCross => king_cross(),
        MeshKind::Board => Ok(primitives::board_plane(
            primitives::BOARD_HALF_EXTENT,
            primitives::BOARD_UV_REPEAT,
        )),
        MeshKind::LightCube => primitives::light_cube(),
    }
}

/// Mirror the authored right half in reverse order and stitch the row grid
pub fn knight_head() -> MeshResult<MeshData> {
    let vertices = Mirror::new(MirrorAxes::X)
        .reversed()
        .apply(profiles::KNIGHT_HEAD)?;
    let points = vertices.len() / crate::mesh::FLOATS_PER_POINT;
    let indices = stitch_rows(points, KNIGHT_HEAD_ROW_WIDTH)?;
    Ok(MeshData::new("knight head", vertices, indices))
}

/// Four merlons at quarter turns from one authored prism
pub fn rook_merlons() -> MeshResult<MeshData> {
    let vertices = Mirror::new(MirrorAxes::X | MirrorAxes::DIAGONAL).apply(profiles::ROOK_MERLON)?;
    let points = vertices.len() / crate::mesh::FLOATS_PER_POINT;
    Ok(MeshData::new("rook merlons", vertices, sequential_indices(points)?))
}

/// The cross is authored whole and drawn as-is
pub fn king_cross() -> MeshResult<MeshData> {
    let points = validate_profile(profiles::KING_CROSS)?;
    Ok(MeshData::new(
        "king cross",
        profiles::KING_CROSS.to_vec(),
        sequential_indices(points)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{ProfilePoint, FLOATS_PER_POINT};

    #[test]
    fn test_build_default_set() {
        let set = PieceSet::build(&LatheOptions::default()).unwrap();
        assert_eq!(set.len(), MeshKind::ALL.len());

        for (kind, mesh) in set.iter() {
            assert_eq!(mesh.label, kind.name());
            assert!(mesh.indices_in_bounds(), "{} has out of range indices", kind.name());
            assert!(mesh.index_count() > 0);
            assert_eq!(mesh.index_count() % 3, 0);
        }
    }

    #[test]
    fn test_lathed_point_counts() {
        let set = PieceSet::build(&LatheOptions::default()).unwrap();
        for kind in MeshKind::ALL {
            if let Some(profile) = kind.lathe_profile() {
                let outline_points = profile.len() / FLOATS_PER_POINT;
                assert_eq!(set.get(kind).point_count(), 21 * outline_points);
            }
        }
        // bishop outline has 48 points
        assert_eq!(set.get(MeshKind::Bishop).point_count(), 21 * 48);
    }

    #[test]
    fn test_knight_head() {
        let head = knight_head().unwrap();
        assert_eq!(head.point_count(), 168);
        // 56 rows of 3 -> 55 row pairs, 4 triangles each
        assert_eq!(head.triangle_count(), 55 * 4);

        // last authored point is followed by its own reflection
        let last = ProfilePoint::read(profiles::KNIGHT_HEAD, 83);
        let reflected = head.point(84);
        assert_eq!(reflected.position, [-last.position[0], last.position[1], last.position[2]]);
    }

    #[test]
    fn test_rook_merlons() {
        let merlons = rook_merlons().unwrap();
        assert_eq!(merlons.point_count(), 144);
        assert_eq!(merlons.indices, (0..144).collect::<Vec<u16>>());

        let first = ProfilePoint::read(profiles::ROOK_MERLON, 0);
        let quarter = merlons.point(72);
        assert_eq!(quarter.position, [first.position[2], first.position[1], first.position[0]]);
        let three_quarter = merlons.point(108);
        assert_eq!(
            three_quarter.position,
            [first.position[2], first.position[1], -first.position[0]]
        );
    }

    #[test]
    fn test_king_cross_is_mirror_symmetric() {
        let points: Vec<[f32; 3]> = (0..profiles::KING_CROSS.len() / FLOATS_PER_POINT)
            .map(|i| ProfilePoint::read(profiles::KING_CROSS, i).position)
            .collect();
        assert_eq!(points.len(), 72);
        for [x, y, z] in &points {
            assert!(points.contains(&[-x, *y, *z]));
        }
    }

    #[test]
    fn test_outlines_are_flat() {
        for kind in MeshKind::ALL {
            if let Some(profile) = kind.lathe_profile() {
                assert_eq!(profile.len() % FLOATS_PER_POINT, 0);
                assert!(profile.chunks(FLOATS_PER_POINT).all(|p| p[2] == 0.0));
            }
        }
    }
}
