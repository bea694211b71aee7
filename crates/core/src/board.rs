//! Board module - manages the game grid
//!
//! The board is a `width x height` grid (10x20 by default) where each cell is
//! empty or holds the color of the piece that locked there.
//! Cells live in one flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows to the right and y grows downwards;
//! y < 0 is the spawn area above the visible grid.

use crate::geometry::Shape;
use crate::piece::Piece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `width` columns and `height` rows
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a piece cell may not sit at (x, y).
    ///
    /// Side walls and the floor block; rows above the grid never do.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return true;
        }
        y >= 0 && self.is_occupied(x, y)
    }

    /// Whether `shape` placed with its top-left corner at (x, y) hits a wall,
    /// the floor or a locked cell
    pub fn collides_at(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape
            .cells()
            .iter()
            .any(|&(dx, dy)| self.is_blocked(x + dx as i32, y + dy as i32))
    }

    pub fn collides(&self, piece: &Piece) -> bool {
        self.collides_at(&piece.shape, piece.x, piece.y)
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// Cells above the top row are dropped. Returns how many cells were written.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        self.fill_cells(piece.cells(), piece.color)
    }

    fn fill_cells(&mut self, cells: impl Iterator<Item = (i32, i32)>, color: Color) -> usize {
        let mut written = 0;
        for (x, y) in cells {
            if y >= 0 && self.set(x, y, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y` (panics when out of range)
    pub fn row(&self, y: usize) -> &[Cell] {
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Remove every full row, shift the rest down and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// Single bottom-to-top pass: surviving rows are copied down to a write
    /// cursor, so their relative order is kept.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a board from rows of cells (top to bottom)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height > 0 && height <= u8::MAX as usize, "bad row count {}", height);
        assert!(width > 0 && width <= u8::MAX as usize, "bad row width {}", width);
        assert!(rows.iter().all(|r| r.len() == width), "ragged board rows");

        Self {
            width: width as u8,
            height: height as u8,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Rows as owned vectors (for tests and display)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
