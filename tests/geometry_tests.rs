//! Geometry tests - shape catalog and rotation

use blockfall::core::{rotate, shape, Piece, PieceSpec};
use blockfall::types::{Color, ShapeKind, BOARD_WIDTH};

#[test]
fn test_every_shape_has_four_cells() {
    for kind in ShapeKind::ALL {
        assert_eq!(shape(kind).cell_count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_catalog_dimensions() {
    let dims: Vec<(u8, u8)> = ShapeKind::ALL
        .iter()
        .map(|k| (shape(*k).width(), shape(*k).height()))
        .collect();
    // I, T, L, J, O, Z, S
    assert_eq!(dims, vec![(4, 1), (3, 2), (3, 2), (3, 2), (2, 2), (3, 2), (3, 2)]);
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let s = shape(kind);
        let back = rotate(&rotate(&rotate(&rotate(&s))));
        assert_eq!(back, s, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions_and_keeps_cells() {
    for kind in ShapeKind::ALL {
        let s = shape(kind);
        let r = rotate(&s);
        assert_eq!((r.width(), r.height()), (s.height(), s.width()));
        assert_eq!(r.cell_count(), s.cell_count());
    }
}

#[test]
fn test_rotation_is_clockwise() {
    // ### / ..# -> .# / .# / ##
    let j = rotate(&shape(ShapeKind::J));
    assert_eq!(j.to_rows(), vec![vec![0, 1], vec![0, 1], vec![1, 1]]);

    // I lies flat, then stands up
    let i = rotate(&shape(ShapeKind::I));
    assert_eq!(i.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = shape(ShapeKind::O);
    assert_eq!(rotate(&o), o);
}

#[test]
fn test_spawn_is_centered_on_row_zero() {
    let cols: Vec<i32> = ShapeKind::ALL
        .iter()
        .map(|k| Piece::spawn(PieceSpec::new(*k, Color::Red), BOARD_WIDTH).x)
        .collect();
    // floor((10 - width) / 2)
    assert_eq!(cols, vec![3, 3, 3, 3, 4, 3, 3]);
    for kind in ShapeKind::ALL {
        assert_eq!(Piece::spawn(PieceSpec::new(kind, Color::Red), BOARD_WIDTH).y, 0);
    }
}

#[test]
fn test_piece_rotation_keeps_anchor() {
    let p = Piece::spawn(PieceSpec::new(ShapeKind::L, Color::Orange), BOARD_WIDTH).translated(2, 5);
    let r = p.rotated();
    assert_eq!((r.x, r.y), (p.x, p.y));
    assert_eq!(r.color, Color::Orange);
    assert_eq!(r.kind, ShapeKind::L);
}
