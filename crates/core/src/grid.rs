//! Grid module - fixed-size cell storage for one board
//!
//! Cells are stored in a flat row-major vector sized once at construction.
//! Coordinates are `(row, col)` with row 0 at the top. Signed coordinates are
//! accepted everywhere so callers can probe positions left of, right of or
//! above the grid without casting.

use crate::types::{Cell, ColorTag};

/// One player's locked cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at `(row, col)`, returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(Option::is_some)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(Option::is_none)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Surviving rows keep their relative order and settle to the bottom; the
    /// freed space at the top is filled with empty rows.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut write = self.height;
        let mut cleared = 0;

        for read in (0..self.height).rev() {
            if self.is_row_full(read) {
                cleared += 1;
                continue;
            }
            write -= 1;
            if write != read {
                let src = read * width;
                self.cells.copy_within(src..src + width, write * width);
            }
        }

        self.cells[..write * width].fill(None);
        cleared
    }

    /// Scroll everything up by one row and append a garbage row at the bottom.
    ///
    /// The top row is discarded. The new bottom row is `ColorTag::GARBAGE`
    /// everywhere except `hole`.
    pub fn push_garbage_row(&mut self, hole: usize) {
        let width = self.width;
        if self.height == 0 || width == 0 {
            return;
        }
        self.cells.copy_within(width.., 0);
        let bottom = (self.height - 1) * width;
        for (col, cell) in self.cells[bottom..].iter_mut().enumerate() {
            *cell = if col == hole {
                None
            } else {
                Some(ColorTag::GARBAGE)
            };
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
