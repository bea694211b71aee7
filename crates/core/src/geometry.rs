//! Geometry module - shape catalog and rotation
//!
//! A shape is a small rectangular matrix of booleans. The catalog holds one
//! template per [`ShapeKind`]; rotating produces a new matrix and never touches
//! the catalog.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, MAX_SHAPE_SIZE};

/// Offset of an occupied cell from the shape's top-left corner (dx, dy)
pub type CellOffset = (i8, i8);

/// Occupied offsets of a shape, stack-only
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Boolean shape matrix with its bounding box.
///
/// Cells outside `width x height` are always false, so derived equality
/// compares only the meaningful part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major: `mask[y][x]`
    mask: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from 0/1 rows. Rows must be non-empty, equally long and
    /// fit in a `MAX_SHAPE_SIZE` square.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&height) && (1..=MAX_SHAPE_SIZE).contains(&width),
            "shape must be between 1x1 and {0}x{0}",
            MAX_SHAPE_SIZE
        );

        let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {}", y);
            for (x, &v) in row.iter().enumerate() {
                mask[y][x] = v != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            mask,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) inside the bounding box is occupied
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.mask[y][x]
    }

    /// Occupied offsets in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.mask[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    pub fn cell_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&v| v).count()
    }

    /// Rows as 0/1 vectors (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| self.mask[y][x] as u8)
                    .collect()
            })
            .collect()
    }
}

/// Rotate a shape 90 degrees clockwise.
///
/// Width and height swap: `new[r][c] = old[h - 1 - c][r]`.
pub fn rotate(shape: &Shape) -> Shape {
    let w = shape.width as usize;
    let h = shape.height as usize;

    let mut mask = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (r, row) in mask.iter_mut().enumerate().take(w) {
        for (c, cell) in row.iter_mut().enumerate().take(h) {
            *cell = shape.mask[h - 1 - c][r];
        }
    }

    Shape {
        width: h as u8,
        height: w as u8,
        mask,
    }
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const T_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 1, 0]];
const L_ROWS: &[&[u8]] = &[&[1, 1, 1], &[1, 0, 0]];
const J_ROWS: &[&[u8]] = &[&[1, 1, 1], &[0, 0, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];

/// Catalog rows for a kind, in spawn orientation
pub fn catalog_rows(kind: ShapeKind) -> &'static [&'static [u8]] {
    match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::T => T_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::J => J_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::S => S_ROWS,
    }
}

/// Catalog shape for a kind, in spawn orientation
pub fn shape(kind: ShapeKind) -> Shape {
    Shape::from_rows(catalog_rows(kind))
}
