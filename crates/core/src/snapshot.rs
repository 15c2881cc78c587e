use arrayvec::ArrayVec;

use crate::shapes::MAX_SHAPE_CELLS;
use crate::types::{Cell, ColorTag};

/// Occupied `(row, col)` positions of a piece, rows may be negative
pub type PieceCells = ArrayVec<(i32, i32), MAX_SHAPE_CELLS>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub cells: PieceCells,
    pub color: ColorTag,
}

/// Read-only view of a board, everything a renderer needs and no timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub width: usize,
    pub height: usize,
    /// Horizontal placement of this board, in cells
    pub x_offset: u16,
    /// Row-major locked cells
    pub cells: Vec<Cell>,
    pub active: ActiveSnapshot,
    pub game_over: bool,
    pub lines_cleared: u32,
    pub garbage_received: u32,
}

impl RenderState {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Whether the falling piece covers `(row, col)`
    pub fn is_active_at(&self, row: i32, col: i32) -> bool {
        self.active.cells.contains(&(row, col))
    }
}
