//! Board tests - grid queries, collision and line clearing

use blockfall::core::{shape, Board, Piece, PieceSpec};
use blockfall::types::{Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32, color: Color) {
    for x in 0..board.width() as i32 {
        board.set(x, y, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(None), "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    assert!(board.set(5, 10, Some(Color::Purple)));
    assert_eq!(board.get(5, 10), Some(Some(Color::Purple)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    // Out of range writes are refused
    assert!(!board.set(-1, 0, Some(Color::Red)));
    assert!(!board.set(0, BOARD_HEIGHT as i32, Some(Color::Red)));
}

#[test]
fn test_blocked_cells_at_the_edges() {
    let board = Board::default();
    assert!(board.is_blocked(-1, 5));
    assert!(board.is_blocked(BOARD_WIDTH as i32, 5));
    assert!(board.is_blocked(3, BOARD_HEIGHT as i32));
    // Above the grid is open space
    assert!(!board.is_blocked(3, -2));
    assert!(!board.is_blocked(3, BOARD_HEIGHT as i32 - 1));
}

#[test]
fn test_collides_at_walls_and_floor() {
    let board = Board::default();
    let o = shape(ShapeKind::O);

    assert!(!board.collides_at(&o, 0, 0));
    assert!(board.collides_at(&o, -1, 0));
    assert!(!board.collides_at(&o, BOARD_WIDTH as i32 - 2, 0));
    assert!(board.collides_at(&o, BOARD_WIDTH as i32 - 1, 0));
    assert!(!board.collides_at(&o, 0, BOARD_HEIGHT as i32 - 2));
    assert!(board.collides_at(&o, 0, BOARD_HEIGHT as i32 - 1));
}

#[test]
fn test_collides_with_locked_cells() {
    let mut board = Board::default();
    board.set(4, 10, Some(Color::Green));

    let t = Piece::spawn(PieceSpec::new(ShapeKind::T, Color::Purple), BOARD_WIDTH);
    // T spawns at x=3: top row covers columns 3..=5
    assert!(board.collides(&t.translated(0, 10)));
    assert!(!board.collides(&t.translated(0, 8)));
    // The stem reaches one row below the top row
    assert!(board.collides(&t.translated(0, 9)));
    assert!(!board.collides(&t.translated(3, 9)));
}

#[test]
fn test_merge_copies_color_and_skips_rows_above() {
    let mut board = Board::default();
    let i = Piece::spawn(PieceSpec::new(ShapeKind::I, Color::Cyan), BOARD_WIDTH).translated(0, 19);
    assert_eq!(board.merge(&i), 4);
    for x in 3..7 {
        assert_eq!(board.get(x, 19), Some(Some(Color::Cyan)));
    }

    let vertical = Piece::spawn(PieceSpec::new(ShapeKind::I, Color::Red), BOARD_WIDTH)
        .rotated()
        .translated(0, -2);
    assert_eq!(board.merge(&vertical), 2);
    assert_eq!(board.filled_count(), 6);
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::default();
    fill_row(&mut board, 19, Color::Blue);
    board.set(2, 18, Some(Color::Red));

    assert_eq!(board.clear_full_lines(), 1);
    assert_eq!(board.get(2, 19), Some(Some(Color::Red)));
    assert_eq!(board.filled_count(), 1);
    assert!(board.row(0).iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_non_adjacent_rows_keeps_order() {
    let mut board = Board::default();
    fill_row(&mut board, 19, Color::Blue);
    board.set(0, 18, Some(Color::Red));
    fill_row(&mut board, 17, Color::Blue);
    board.set(0, 16, Some(Color::Green));

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(0, 19), Some(Some(Color::Red)));
    assert_eq!(board.get(0, 18), Some(Some(Color::Green)));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.height(), BOARD_HEIGHT);
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y, Color::Yellow);
    }
    assert_eq!(board.clear_full_lines(), 4);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::default();
    for x in 0..9 {
        board.set(x, 19, Some(Color::Orange));
    }
    let before = board.clone();
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_rows_round_trip_through_nested_vectors() {
    let mut board = Board::new(4, 3);
    board.set(1, 2, Some(Color::Cyan));
    let rows = board.to_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2], vec![None, Some(Color::Cyan), None, None]);
    assert_eq!(Board::from_rows(rows), board);
}
