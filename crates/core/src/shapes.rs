//! Shapes module - piece matrices and the shape catalog
//!
//! A shape is a small boolean matrix (at most 4x4) stored top-left aligned in a
//! fixed array so it stays `Copy`. Rotation builds a new matrix and never
//! touches the catalog entry it came from.
//!
//! Rotation is a plain matrix rotation around the top-left anchor:
//!
//! - clockwise: reverse the rows, then transpose
//! - counter-clockwise: transpose, then reverse the rows
//!
//! There is no kick table. A rotation that collides is rejected by the board.

use crate::error::{ConfigError, Result};
use crate::types::ColorTag;

/// Largest supported shape side
pub const MAX_SHAPE_DIM: usize = 4;

/// Maximum occupied cells of a shape
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

type Matrix = [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// An immutable occupancy matrix.
///
/// Cells outside `rows x cols` are always `false`, so derived equality
/// compares only the visible matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    matrix: Matrix,
    rows: u8,
    cols: u8,
}

impl Shape {
    const fn from_bits(rows: usize, cols: usize, bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        let mut matrix = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < rows {
            let mut c = 0;
            while c < cols {
                matrix[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            matrix,
            rows: rows as u8,
            cols: cols as u8,
        }
    }

    /// Build a shape from text rows, `#` is occupied and `.` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use duel_tetris_core::Shape;
    ///
    /// let t = Shape::from_pattern(&["###", ".#."]).unwrap();
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.is_filled(1, 1));
    /// assert!(!t.is_filled(1, 0));
    /// ```
    pub fn from_pattern(pattern: &[&str]) -> Result<Self> {
        let rows = pattern.len();
        if rows == 0 || rows > MAX_SHAPE_DIM {
            return Err(ConfigError::InvalidShape(format!(
                "expected 1..={} rows, got {}",
                MAX_SHAPE_DIM, rows
            )));
        }
        let cols = pattern[0].chars().count();
        if cols == 0 || cols > MAX_SHAPE_DIM {
            return Err(ConfigError::InvalidShape(format!(
                "expected 1..={} columns, got {}",
                MAX_SHAPE_DIM, cols
            )));
        }

        let mut matrix = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, line) in pattern.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(ConfigError::InvalidShape(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    line.chars().count(),
                    cols
                )));
            }
            for (c, ch) in line.chars().enumerate() {
                matrix[r][c] = match ch {
                    '#' => true,
                    '.' => false,
                    other => {
                        return Err(ConfigError::InvalidShape(format!(
                            "unexpected character {:?}",
                            other
                        )))
                    }
                };
            }
        }

        let shape = Self {
            matrix,
            rows: rows as u8,
            cols: cols as u8,
        };
        if shape.cell_count() == 0 {
            return Err(ConfigError::InvalidShape("shape has no occupied cell".into()));
        }
        Ok(shape)
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether `(row, col)` is occupied. Out-of-matrix positions are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.matrix[row][col]
    }

    /// Occupied `(row, col)` offsets in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let shape = *self;
        (0..shape.rows())
            .flat_map(move |r| (0..shape.cols()).map(move |c| (r, c)))
            .filter(move |&(r, c)| shape.matrix[r][c])
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Clockwise quarter turn: reverse rows, then transpose.
    pub fn rotated_cw(&self) -> Shape {
        let (rows, cols) = (self.rows(), self.cols());
        let mut matrix = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in matrix.iter_mut().enumerate().take(cols) {
            for (c, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.matrix[rows - 1 - c][r];
            }
        }
        Shape {
            matrix,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Counter-clockwise quarter turn: transpose, then reverse rows.
    pub fn rotated_ccw(&self) -> Shape {
        let (rows, cols) = (self.rows(), self.cols());
        let mut matrix = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in matrix.iter_mut().enumerate().take(cols) {
            for (c, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.matrix[c][cols - 1 - r];
            }
        }
        Shape {
            matrix,
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub fn rotated(&self, clockwise: bool) -> Shape {
        if clockwise {
            self.rotated_cw()
        } else {
            self.rotated_ccw()
        }
    }
}

/// T-shape
pub const SHAPE_T: Shape = Shape::from_bits(2, 3, [[1, 1, 1, 0], [0, 1, 0, 0], [0; 4], [0; 4]]);
/// I-shape (horizontal bar)
pub const SHAPE_I: Shape = Shape::from_bits(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
/// O-shape
pub const SHAPE_O: Shape = Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
/// Z-shape
pub const SHAPE_Z: Shape = Shape::from_bits(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
/// S-shape
pub const SHAPE_S: Shape = Shape::from_bits(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);
/// L-shape, foot on the left
pub const SHAPE_L_LEFT: Shape =
    Shape::from_bits(2, 3, [[1, 1, 1, 0], [1, 0, 0, 0], [0; 4], [0; 4]]);
/// L-shape, foot on the right
pub const SHAPE_L_RIGHT: Shape =
    Shape::from_bits(2, 3, [[1, 1, 1, 0], [0, 0, 1, 0], [0; 4], [0; 4]]);

/// The five shapes of the single-player game
pub const CLASSIC_SHAPES: [Shape; 5] = [SHAPE_T, SHAPE_I, SHAPE_O, SHAPE_Z, SHAPE_S];

/// The two mirrored L-shapes added by the versus game
pub const MIRRORED_L_SHAPES: [Shape; 2] = [SHAPE_L_LEFT, SHAPE_L_RIGHT];

/// Set of shapes and colors a board draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
    colors: Vec<ColorTag>,
}

impl ShapeCatalog {
    pub fn new(shapes: Vec<Shape>, colors: Vec<ColorTag>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { shapes, colors })
    }

    /// T, I, O, Z, S with the five-color palette
    pub fn classic() -> Self {
        Self {
            shapes: CLASSIC_SHAPES.to_vec(),
            colors: ColorTag::PALETTE.to_vec(),
        }
    }

    /// Classic shapes plus both mirrored L-shapes
    pub fn extended() -> Self {
        let mut shapes = CLASSIC_SHAPES.to_vec();
        shapes.extend_from_slice(&MIRRORED_L_SHAPES);
        Self {
            shapes,
            colors: ColorTag::PALETTE.to_vec(),
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn colors(&self) -> &[ColorTag] {
        &self.colors
    }

    /// Widest spawn orientation in the catalog
    pub fn max_cols(&self) -> usize {
        self.shapes.iter().map(Shape::cols).max().unwrap_or(0)
    }

    /// Tallest spawn orientation in the catalog
    pub fn max_rows(&self) -> usize {
        self.shapes.iter().map(Shape::rows).max().unwrap_or(0)
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::extended()
    }
}
