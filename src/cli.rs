//! Command-line options of the `duel-tetris` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::core::{BoardConfig, ShapeCatalog};
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, FALL_INTERVAL_MS, MOVE_DELAY_MS, ROTATE_DELAY_MS, SOLO_FPS,
    VERSUS_FPS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two players on one keyboard, cleared rows become the opponent's garbage
    Versus,
    /// One board, both key sets drive it
    Solo,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "duel-tetris")]
#[command(about = "Two-player terminal Tetris with garbage-line attacks")]
pub struct Args {
    /// Game mode
    #[arg(long, value_enum, default_value = "versus")]
    pub mode: Mode,

    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = FALL_INTERVAL_MS)]
    pub fall_ms: u64,

    /// Minimum gap between horizontal moves in milliseconds
    #[arg(long, default_value_t = MOVE_DELAY_MS)]
    pub move_ms: u64,

    /// Minimum gap between rotations in milliseconds
    #[arg(long, default_value_t = ROTATE_DELAY_MS)]
    pub rotate_ms: u64,

    /// Frames per second (defaults to 10 in versus, 60 in solo)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: Option<u32>,

    /// Seed for deterministic games (player 2 uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (stdout belongs to the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Args {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            width: self.width,
            height: self.height,
            fall_interval_ms: self.fall_ms,
            move_delay_ms: self.move_ms,
            rotate_delay_ms: self.rotate_ms,
        }
    }

    /// Versus adds the mirrored L-shapes to the classic set
    pub fn catalog(&self) -> ShapeCatalog {
        match self.mode {
            Mode::Versus => ShapeCatalog::extended(),
            Mode::Solo => ShapeCatalog::classic(),
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps.unwrap_or(match self.mode {
            Mode::Versus => VERSUS_FPS,
            Mode::Solo => SOLO_FPS,
        })
    }

    /// Per-player seeds, random unless `--seed` is given
    pub fn seeds(&self) -> [u64; 2] {
        match self.seed {
            Some(seed) => [seed, seed.wrapping_add(1)],
            None => [rand::random(), rand::random()],
        }
    }
}
