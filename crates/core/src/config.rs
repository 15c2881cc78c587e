//! Board configuration.

use crate::error::{ConfigError, Result};
use crate::shapes::ShapeCatalog;
use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, FALL_INTERVAL_MS, MOVE_DELAY_MS, ROTATE_DELAY_MS,
};

/// Largest accepted width or height.
///
/// Terminal coordinates are `u16`; two boards of this size plus the gap still
/// fit when every cell is two columns wide.
pub const MAX_BOARD_CELLS: usize = 1024;

/// Per-board dimensions and timing.
///
/// Both boards of a match share one config. Tests use tiny grids and short
/// intervals to keep scenarios readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub fall_interval_ms: u64,
    pub move_delay_ms: u64,
    pub rotate_delay_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fall_interval_ms: FALL_INTERVAL_MS,
            move_delay_ms: MOVE_DELAY_MS,
            rotate_delay_ms: ROTATE_DELAY_MS,
        }
    }
}

impl BoardConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check that every catalog shape can spawn on an empty grid and that the
    /// board fits on a terminal.
    pub fn validate(&self, catalog: &ShapeCatalog) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_BOARD_CELLS {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    max: MAX_BOARD_CELLS,
                });
            }
        }
        let min_width = catalog.max_cols();
        if self.width < min_width.max(1) {
            return Err(ConfigError::WidthTooSmall {
                width: self.width,
                min: min_width.max(1),
            });
        }
        let min_height = catalog.max_rows();
        if self.height < min_height.max(1) {
            return Err(ConfigError::HeightTooSmall {
                height: self.height,
                min: min_height.max(1),
            });
        }
        for (name, interval) in [
            ("fall interval", self.fall_interval_ms),
            ("move delay", self.move_delay_ms),
            ("rotate delay", self.rotate_delay_ms),
        ] {
            if interval == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }
        Ok(())
    }
}
