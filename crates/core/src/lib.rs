//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule of the versus engine: shapes, grids,
//! single-board physics and the match controller that trades garbage
//! between two boards. It has no dependency on terminals or keyboards:
//!
//! - **Deterministic**: time is passed in as `now_ms` and every board owns a
//!   seeded picker, so the same seeds and inputs replay the same match
//! - **Testable**: small grids and short intervals come from [`BoardConfig`]
//! - **Portable**: renderers only read [`RenderState`] snapshots
//!
//! # Module Structure
//!
//! - [`shapes`]: shape matrices, rotation and the shape catalog
//! - [`grid`]: fixed-size cell storage, line clearing and garbage rows
//! - [`board`]: one player's falling piece, gravity and debounce gates
//! - [`versus`]: two boards, garbage exchange and the match outcome
//! - [`rng`]: seeded shape/color/hole picker
//! - [`snapshot`]: read-only render state
//! - [`config`] / [`error`]: board configuration and its validation errors
//!
//! # Game Rules
//!
//! - Pieces spawn centered on row 0 and fall one row per fall interval
//! - A piece that cannot fall locks; full rows are cleared
//! - Rotation keeps the anchor, there are no wall kicks
//! - Each row a player clears pushes one garbage row (with a single hole)
//!   onto the opponent's grid
//! - A player whose new piece cannot spawn loses
//!
//! # Example
//!
//! ```
//! use duel_tetris_core::{BoardConfig, Match, ShapeCatalog};
//! use duel_tetris_core::types::{Outcome, PlayerInput};
//!
//! let mut game = Match::seeded(BoardConfig::default(), ShapeCatalog::extended(), [1, 2], 0)
//!     .unwrap();
//!
//! let idle = PlayerInput::IDLE;
//! let report = game.tick(301, &idle, &idle);
//! assert_eq!(report.outcome, Outcome::InProgress);
//! assert_eq!(report.garbage_sent, [0, 0]);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod shapes;
pub mod snapshot;
pub mod versus;

pub use duel_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClearResult, Piece, Spawn};
pub use config::{BoardConfig, MAX_BOARD_CELLS};
pub use error::ConfigError;
pub use grid::Grid;
pub use rng::ShapePicker;
pub use shapes::{Shape, ShapeCatalog};
pub use snapshot::{ActiveSnapshot, PieceCells, RenderState};
pub use versus::{Match, TickReport, VERSUS_GAP_CELLS};
