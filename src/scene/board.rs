//! Starting position of the chess set

use glam::Vec3;
use std::f32::consts::PI;

use super::{Placement, Transform};
use crate::pieces::MeshKind;
use crate::resources::MaterialKind;

/// Distance between neighbouring square centres
pub const SQUARE: f32 = 0.345;

/// Height of the rook merlons above the rook origin
pub const MERLON_HEIGHT: f32 = 0.489;
/// Height of the cross above the king origin
pub const CROSS_HEIGHT: f32 = 0.743;

/// Centre of file `index` (0..8), measured from the board centre
pub fn file_x(index: usize) -> f32 {
    (index as f32 - 3.5) * SQUARE
}

/// Back rank pieces from file 0 to file 7
const BACK_RANK: [MeshKind; 8] = [
    MeshKind::Rook,
    MeshKind::KnightBase,
    MeshKind::Bishop,
    MeshKind::King,
    MeshKind::Queen,
    MeshKind::Bishop,
    MeshKind::KnightBase,
    MeshKind::Rook,
];

/// Every placement of the starting position: 32 pieces with their ornaments,
/// plus the board
pub fn standard_layout() -> Vec<Placement> {
    let mut placements = Vec::with_capacity(43);
    placements.push(Placement::new(MeshKind::Board, MaterialKind::Checker, Transform::default()));

    for (material, side) in [(MaterialKind::Black, 1.0), (MaterialKind::White, -1.0)] {
        let back_z = side * 3.5 * SQUARE;
        let pawn_z = side * 2.5 * SQUARE;
        // white pieces face the other way
        let facing = if side > 0.0 { 0.0 } else { PI };

        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let origin = Vec3::new(file_x(file), 0.0, back_z);
            placements.push(Placement::new(kind, material, Transform::from_position(origin)));

            match kind {
                MeshKind::KnightBase => placements.push(Placement::new(
                    MeshKind::KnightHead,
                    material,
                    Transform::from_position(origin).with_rotation_y(facing),
                )),
                MeshKind::Rook => placements.push(Placement::new(
                    MeshKind::RookMerlons,
                    material,
                    Transform::from_position(origin + Vec3::Y * MERLON_HEIGHT),
                )),
                MeshKind::King => placements.push(Placement::new(
                    MeshKind::KingCross,
                    material,
                    Transform::from_position(origin + Vec3::Y * CROSS_HEIGHT),
                )),
                _ => {}
            }
        }

        for file in 0..8 {
            placements.push(Placement::new(
                MeshKind::Pawn,
                material,
                Transform::from_position(Vec3::new(file_x(file), 0.0, pawn_z)),
            ));
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_piece(kind: MeshKind) -> bool {
        matches!(
            kind,
            MeshKind::Bishop
                | MeshKind::KnightBase
                | MeshKind::Rook
                | MeshKind::Queen
                | MeshKind::King
                | MeshKind::Pawn
        )
    }

    #[test]
    fn test_piece_counts() {
        let layout = standard_layout();
        assert_eq!(layout.len(), 43);

        for material in [MaterialKind::Black, MaterialKind::White] {
            let pieces = layout
                .iter()
                .filter(|p| p.material == material && is_piece(p.mesh))
                .count();
            assert_eq!(pieces, 16);
        }

        let boards: Vec<_> = layout.iter().filter(|p| p.mesh == MeshKind::Board).collect();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].material, MaterialKind::Checker);
    }

    #[test]
    fn test_file_positions() {
        assert!((file_x(0) + 1.2075).abs() < 1e-6);
        assert!((file_x(3) + 0.1725).abs() < 1e-6);
        assert!((file_x(7) - 1.2075).abs() < 1e-6);

        let layout = standard_layout();
        let queen = |material| {
            layout
                .iter()
                .find(|p| p.mesh == MeshKind::Queen && p.material == material)
                .map(|p| p.transform.position)
                .unwrap()
        };
        assert!((queen(MaterialKind::Black) - Vec3::new(0.1725, 0.0, 1.2075)).length() < 1e-6);
        assert!((queen(MaterialKind::White) - Vec3::new(0.1725, 0.0, -1.2075)).length() < 1e-6);
    }

    #[test]
    fn test_ornaments() {
        let layout = standard_layout();

        for head in layout.iter().filter(|p| p.mesh == MeshKind::KnightHead) {
            let base = layout
                .iter()
                .find(|p| {
                    p.mesh == MeshKind::KnightBase
                        && p.material == head.material
                        && p.transform.position == head.transform.position
                })
                .unwrap();
            assert_eq!(base.transform.rotation, glam::Quat::IDENTITY);

            let (axis, angle) = head.transform.rotation.to_axis_angle();
            match head.material {
                MaterialKind::White => {
                    assert!((angle - PI).abs() < 1e-5);
                    assert!((axis.y.abs() - 1.0).abs() < 1e-5);
                }
                _ => assert!(angle.abs() < 1e-5),
            }
        }

        for merlons in layout.iter().filter(|p| p.mesh == MeshKind::RookMerlons) {
            assert!((merlons.transform.position.y - MERLON_HEIGHT).abs() < 1e-6);
            assert!((merlons.transform.position.x.abs() - 1.2075).abs() < 1e-6);
        }

        let crosses: Vec<_> = layout.iter().filter(|p| p.mesh == MeshKind::KingCross).collect();
        assert_eq!(crosses.len(), 2);
        for cross in crosses {
            assert!((cross.transform.position.x + 0.1725).abs() < 1e-6);
            assert!((cross.transform.position.y - CROSS_HEIGHT).abs() < 1e-6);
        }
    }

    #[test]
    fn test_layout_never_draws_light_cubes() {
        assert!(standard_layout().iter().all(|p| p.mesh != MeshKind::LightCube));
    }
}
