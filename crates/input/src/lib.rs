//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key codes onto the two players' controls and keeps the
//! held-key state the engine samples once per frame, including for terminals
//! that never report key releases.

pub mod keys;
pub mod map;

pub use duel_tetris_types as types;

pub use keys::{KeyboardState, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{binding, should_quit};
