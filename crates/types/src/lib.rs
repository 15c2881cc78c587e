//! Core types module - shared data structures and constants
//!
//! Plain data shared by the engine, the input sampler and the terminal view.
//! Nothing here depends on a terminal, a clock or a random source.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Defaults
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 300 | Gravity step |
//! | `MOVE_DELAY_MS` | 150 | Minimum gap between horizontal moves |
//! | `ROTATE_DELAY_MS` | 200 | Minimum gap between rotations |
//! | `VERSUS_FPS` | 10 | Frame rate of the two-player mode |
//! | `SOLO_FPS` | 60 | Frame rate of the single-player mode |
//!
//! Soft drop is never rate-limited: it applies once per frame.
//!
//! # Examples
//!
//! ```
//! use duel_tetris_types::{ColorTag, Control, Outcome, Player, PlayerInput};
//!
//! let mut input = PlayerInput::default();
//! input.set(Control::Left, true);
//! assert!(input.left);
//! assert!(input.any());
//!
//! assert_eq!(ColorTag::GARBAGE, ColorTag::Gray);
//! assert_eq!(Outcome::Player1Wins.winner(), Some(Player::One));
//! assert_eq!(Outcome::InProgress.winner(), None);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_HEIGHT: usize = 20;

/// Gravity interval: one row every 300ms
pub const FALL_INTERVAL_MS: u64 = 300;

/// Debounce gate for left/right moves
pub const MOVE_DELAY_MS: u64 = 150;

/// Debounce gate for rotations
pub const ROTATE_DELAY_MS: u64 = 200;

/// Frame rate of the versus loop
pub const VERSUS_FPS: u32 = 10;

/// Frame rate of the solo loop
pub const SOLO_FPS: u32 = 60;

/// Color tag of a locked block.
///
/// The first five are the piece palette. `Gray` only ever appears as the
/// garbage marker pushed in by an opponent's line clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Gray,
}

impl ColorTag {
    /// Marker used for garbage rows
    pub const GARBAGE: ColorTag = ColorTag::Gray;

    /// Piece palette (everything but the garbage marker)
    pub const PALETTE: [ColorTag; 5] = [
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Yellow,
        ColorTag::Orange,
    ];

    pub fn is_garbage(&self) -> bool {
        *self == ColorTag::GARBAGE
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Orange => "orange",
            ColorTag::Gray => "gray",
        }
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(ColorTag)`: Locked block or garbage
pub type Cell = Option<ColorTag>;

/// One of the two seats of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Index into per-player arrays
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Short label used in headers and logs ("P1" / "P2")
    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }
}

/// A single command signal a player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Shift one column left (debounced)
    Left,
    /// Shift one column right (debounced)
    Right,
    /// Soft drop one row per frame
    Down,
    /// Rotate clockwise (debounced)
    RotateCw,
    /// Rotate counter-clockwise (debounced)
    RotateCcw,
}

/// Snapshot of one player's held controls for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
}

impl PlayerInput {
    /// No control held
    pub const IDLE: PlayerInput = PlayerInput {
        left: false,
        right: false,
        down: false,
        rotate_cw: false,
        rotate_ccw: false,
    };

    pub fn set(&mut self, control: Control, held: bool) {
        match control {
            Control::Left => self.left = held,
            Control::Right => self.right = held,
            Control::Down => self.down = held,
            Control::RotateCw => self.rotate_cw = held,
            Control::RotateCcw => self.rotate_ccw = held,
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Down => self.down,
            Control::RotateCw => self.rotate_cw,
            Control::RotateCcw => self.rotate_ccw,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.down || self.rotate_cw || self.rotate_ccw
    }

    /// Combine two inputs, a control is held if either side holds it.
    ///
    /// Solo mode uses this so both key sets drive the single board.
    pub fn merge(self, other: PlayerInput) -> PlayerInput {
        PlayerInput {
            left: self.left || other.left,
            right: self.right || other.right,
            down: self.down || other.down,
            rotate_cw: self.rotate_cw || other.rotate_cw,
            rotate_ccw: self.rotate_ccw || other.rotate_ccw,
        }
    }
}

/// Match outcome, derived from the two boards' game-over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Player1Wins,
    Player2Wins,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::InProgress => None,
            Outcome::Player1Wins => Some(Player::One),
            Outcome::Player2Wins => Some(Player::Two),
        }
    }

    pub fn loser(&self) -> Option<Player> {
        self.winner().map(|p| p.opponent())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in-progress",
            Outcome::Player1Wins => "player-1-wins",
            Outcome::Player2Wins => "player-2-wins",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_match_versus_rules() {
        assert_eq!(FALL_INTERVAL_MS, 300);
        assert_eq!(MOVE_DELAY_MS, 150);
        assert_eq!(ROTATE_DELAY_MS, 200);
        assert!(MOVE_DELAY_MS < FALL_INTERVAL_MS);
        assert_eq!(VERSUS_FPS, 10);
    }

    #[test]
    fn player_input_merge_is_per_control_or() {
        let a = PlayerInput {
            left: true,
            ..PlayerInput::IDLE
        };
        let b = PlayerInput {
            rotate_cw: true,
            ..PlayerInput::IDLE
        };
        let merged = a.merge(b);
        assert!(merged.left && merged.rotate_cw);
        assert!(!merged.right && !merged.down && !merged.rotate_ccw);
    }

    #[test]
    fn outcome_terminal_states() {
        assert!(!Outcome::InProgress.is_over());
        assert!(Outcome::Player1Wins.is_over());
        assert_eq!(Outcome::Player2Wins.loser(), Some(Player::One));
    }
}
