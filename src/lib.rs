//! Duel Tetris (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `duel_tetris::{core,input,term,types}` and owns the
//! command-line options of the binary.

pub mod cli;

pub use duel_tetris_core as core;
pub use duel_tetris_input as input;
pub use duel_tetris_term as term;
pub use duel_tetris_types as types;
