//! Board module - one player's falling-piece simulation
//!
//! A board owns its grid, the falling piece, a seeded picker and three
//! timestamps: the gravity clock plus one debounce gate each for horizontal
//! moves and rotations. Time is always passed in by the caller as
//! milliseconds on a monotonic clock.
//!
//! State machine:
//!
//! - `Active -> Active` on moves, rotations and gravity steps
//! - `Active -> Locked -> Active` when the piece lands, merges and a new piece spawns
//! - `Active -> GameOver` when a freshly spawned piece already collides
//!
//! `GameOver` is terminal. Every mutating call becomes a no-op that reports
//! failure, so a renderer can keep drawing the frozen final frame.

use tracing::{debug, info, trace};

use crate::config::BoardConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::rng::ShapePicker;
use crate::shapes::{Shape, ShapeCatalog};
use crate::snapshot::{ActiveSnapshot, RenderState};
use crate::types::{ColorTag, PlayerInput};

/// The falling piece: a shape in its current rotation, anchored at its
/// matrix's top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: ColorTag,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    pub fn at(shape: Shape, color: ColorTag, row: i32, col: i32) -> Self {
        Self {
            shape,
            color,
            row,
            col,
        }
    }

    /// Piece on row 0, horizontally centered on a grid of `grid_width` columns
    pub fn spawn(shape: Shape, color: ColorTag, grid_width: usize) -> Self {
        let col = (grid_width / 2) as i32 - (shape.cols() / 2) as i32;
        Self::at(shape, color, 0, col)
    }

    /// Absolute `(row, col)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let piece = *self;
        piece
            .shape
            .cells()
            .map(move |(r, c)| (piece.row + r as i32, piece.col + c as i32))
    }

    pub fn shifted(&self, d_row: i32, d_col: i32) -> Piece {
        Piece {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }
}

/// Result of spawning a piece
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Placed(Piece),
    /// The new piece overlaps locked cells; the board is now over
    Blocked(Piece),
}

impl Spawn {
    pub fn piece(&self) -> Piece {
        match self {
            Spawn::Placed(p) | Spawn::Blocked(p) => *p,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Spawn::Blocked(_))
    }
}

/// Result of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClearResult {
    /// Rows removed by this step (0 when the piece only fell or nothing happened)
    Cleared(u32),
    GameOver,
}

impl LineClearResult {
    pub fn lines(&self) -> u32 {
        match self {
            LineClearResult::Cleared(n) => *n,
            LineClearResult::GameOver => 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, LineClearResult::GameOver)
    }
}

/// One player's board
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    catalog: ShapeCatalog,
    picker: ShapePicker,
    grid: Grid,
    active: Piece,
    /// Horizontal placement used by renderers, in cells
    x_offset: u16,
    last_fall_ms: u64,
    last_move_ms: u64,
    last_rotate_ms: u64,
    game_over: bool,
    lines_cleared: u32,
    pieces_locked: u32,
    garbage_received: u32,
}

impl Board {
    /// Board with the extended catalog and a random seed
    pub fn new(config: BoardConfig, x_offset: u16, now_ms: u64) -> Result<Self> {
        Self::seeded(
            config,
            ShapeCatalog::extended(),
            x_offset,
            rand::random(),
            now_ms,
        )
    }

    /// Fully deterministic board.
    ///
    /// Fails when the grid cannot hold every catalog shape.
    pub fn seeded(
        config: BoardConfig,
        catalog: ShapeCatalog,
        x_offset: u16,
        seed: u64,
        now_ms: u64,
    ) -> Result<Self> {
        config.validate(&catalog)?;

        let mut picker = ShapePicker::new(seed);
        let (shape, color) = picker.pick(&catalog);
        let active = Piece::spawn(shape, color, config.width);

        Ok(Self {
            config,
            catalog,
            picker,
            grid: Grid::new(config.width, config.height),
            active,
            x_offset,
            last_fall_ms: now_ms,
            last_move_ms: now_ms,
            last_rotate_ms: now_ms,
            game_over: false,
            lines_cleared: 0,
            pieces_locked: 0,
            garbage_received: 0,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn x_offset(&self) -> u16 {
        self.x_offset
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn garbage_received(&self) -> u32 {
        self.garbage_received
    }

    pub fn seed(&self) -> u64 {
        self.picker.seed()
    }

    fn piece_collides(&self, piece: &Piece) -> bool {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        piece.cells().any(|(row, col)| {
            col < 0
                || col >= width
                || row >= height
                || (row >= 0 && self.grid.is_occupied(row, col))
        })
    }

    /// Whether the active piece would collide after shifting by the offset.
    ///
    /// Cells above row 0 never collide.
    pub fn collides(&self, d_row: i32, d_col: i32) -> bool {
        self.piece_collides(&self.active.shifted(d_row, d_col))
    }

    /// Replace the active piece with a fresh random one.
    pub fn spawn_next(&mut self) -> Spawn {
        if self.game_over {
            return Spawn::Blocked(self.active);
        }

        let (shape, color) = self.picker.pick(&self.catalog);
        let piece = Piece::spawn(shape, color, self.grid.width());
        self.active = piece;

        if self.piece_collides(&piece) {
            self.game_over = true;
            info!(
                lines = self.lines_cleared,
                pieces = self.pieces_locked,
                "spawn blocked, board is over"
            );
            return Spawn::Blocked(piece);
        }
        Spawn::Placed(piece)
    }

    /// Install a scripted active piece. Rejected if it collides.
    pub fn place(&mut self, piece: Piece) -> bool {
        if self.game_over || self.piece_collides(&piece) {
            return false;
        }
        self.active = piece;
        true
    }

    /// Shift the active piece sideways by `d_col` columns
    pub fn try_move(&mut self, d_col: i32) -> bool {
        self.try_shift(0, d_col)
    }

    /// Move the active piece down one row, ungated
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    fn try_shift(&mut self, d_row: i32, d_col: i32) -> bool {
        if self.game_over {
            return false;
        }
        if self.collides(d_row, d_col) {
            trace!(d_row, d_col, "shift rejected");
            return false;
        }
        self.active = self.active.shifted(d_row, d_col);
        true
    }

    /// Rotate in place around the anchor; reverted if the result collides.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        let trial = Piece {
            shape: self.active.shape.rotated(clockwise),
            ..self.active
        };
        if self.piece_collides(&trial) {
            trace!(clockwise, "rotation rejected");
            return false;
        }
        self.active = trial;
        true
    }

    /// Forward one frame of held controls through the debounce gates.
    ///
    /// Order: horizontal moves, soft drop, rotation. The move gate restarts on
    /// every successful move; the rotate gate restarts whenever a rotate key
    /// is honoured, even if the rotation itself is blocked.
    pub fn apply_input(&mut self, input: &PlayerInput, now_ms: u64) {
        if self.game_over {
            return;
        }

        if now_ms.saturating_sub(self.last_move_ms) > self.config.move_delay_ms {
            if input.left && self.try_move(-1) {
                self.last_move_ms = now_ms;
            }
            if input.right && self.try_move(1) {
                self.last_move_ms = now_ms;
            }
        }

        if input.down {
            self.soft_drop();
        }

        if (input.rotate_cw || input.rotate_ccw)
            && now_ms.saturating_sub(self.last_rotate_ms) > self.config.rotate_delay_ms
        {
            self.try_rotate(input.rotate_cw);
            self.last_rotate_ms = now_ms;
        }
    }

    /// Gravity step.
    ///
    /// Once more than `fall_interval_ms` has passed since the last fall the
    /// piece descends one row, or, if it is resting, locks; full rows are
    /// cleared and the next piece spawns.
    pub fn tick(&mut self, now_ms: u64) -> LineClearResult {
        if self.game_over {
            return LineClearResult::GameOver;
        }
        if now_ms.saturating_sub(self.last_fall_ms) <= self.config.fall_interval_ms {
            return LineClearResult::Cleared(0);
        }
        self.last_fall_ms = now_ms;

        if !self.collides(1, 0) {
            self.active = self.active.shifted(1, 0);
            return LineClearResult::Cleared(0);
        }

        let cleared = self.lock_active();
        match self.spawn_next() {
            Spawn::Placed(_) => LineClearResult::Cleared(cleared),
            Spawn::Blocked(_) => LineClearResult::GameOver,
        }
    }

    /// Merge the active piece into the grid and clear full rows.
    ///
    /// Cells still above row 0 are dropped.
    fn lock_active(&mut self) -> u32 {
        let piece = self.active;
        for (row, col) in piece.cells() {
            self.grid.set(row, col, Some(piece.color));
        }
        self.pieces_locked += 1;

        let cleared = self.grid.clear_full_rows() as u32;
        self.lines_cleared += cleared;
        debug!(
            row = piece.row,
            col = piece.col,
            cleared,
            total = self.lines_cleared,
            "piece locked"
        );
        cleared
    }

    /// Push `count` garbage rows in from the bottom.
    ///
    /// Each row is garbage except one random hole; the same number of rows
    /// scroll off the top, whatever they held. If the rising stack would
    /// swallow the falling piece, the piece is lifted with it.
    pub fn receive_garbage(&mut self, count: u32) -> bool {
        if self.game_over || count == 0 {
            return false;
        }

        for _ in 0..count {
            let hole = self.picker.hole(self.grid.width());
            self.grid.push_garbage_row(hole);
        }
        self.garbage_received += count;

        if self.collides(0, 0) {
            if let Some(lift) = (1..=count as i32).find(|&lift| !self.collides(-lift, 0)) {
                self.active = self.active.shifted(-lift, 0);
            }
        }

        debug!(count, total = self.garbage_received, "garbage received");
        true
    }

    pub fn render_state(&self) -> RenderState {
        let mut state = RenderState {
            width: 0,
            height: 0,
            x_offset: 0,
            cells: Vec::with_capacity(self.grid.cells().len()),
            active: ActiveSnapshot {
                cells: Default::default(),
                color: self.active.color,
            },
            game_over: false,
            lines_cleared: 0,
            garbage_received: 0,
        };
        self.render_state_into(&mut state);
        state
    }

    /// Refresh an existing snapshot, reusing its cell buffer.
    pub fn render_state_into(&self, out: &mut RenderState) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.x_offset = self.x_offset;
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active.cells.clear();
        out.active.cells.extend(self.active.cells());
        out.active.color = self.active.color;
        out.game_over = self.game_over;
        out.lines_cleared = self.lines_cleared;
        out.garbage_received = self.garbage_received;
    }
}
