//! Piece module - the falling polyomino
//!
//! A piece owns a copy of its shape (current rotation state), a color and a
//! top-left position on the board. Transforms return new pieces and never
//! validate; the engine checks collisions and decides whether to keep them.

use crate::geometry::{rotate, shape, Shape};
use crate::rng::{PieceSource, PieceSpec};
use crate::types::{Color, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    /// Column of the shape's left edge
    pub x: i32,
    /// Row of the shape's top edge (negative = above the grid)
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn orientation, horizontally centered on a board
    /// `board_width` columns wide, at row 0.
    pub fn spawn(spec: PieceSpec, board_width: u8) -> Self {
        let shape = shape(spec.kind);
        Self {
            kind: spec.kind,
            shape,
            color: spec.color,
            x: spawn_column(board_width, shape.width()),
            y: 0,
        }
    }

    /// Spawn the next piece a source hands out
    pub fn spawn_from<S: PieceSource + ?Sized>(source: &mut S, board_width: u8) -> Self {
        Self::spawn(source.next_spec(), board_width)
    }

    /// Same piece shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece rotated clockwise in place
    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate(&self.shape),
            ..*self
        }
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }

    pub fn spec(&self) -> PieceSpec {
        PieceSpec {
            kind: self.kind,
            color: self.color,
        }
    }
}

/// `floor((board_width - shape_width) / 2)`
pub fn spawn_column(board_width: u8, shape_width: u8) -> i32 {
    (board_width as i32 - shape_width as i32).div_euclid(2)
}
