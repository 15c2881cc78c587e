use thiserror::Error;

/// Construction-time misconfiguration.
///
/// These are programmer errors and surface when a board, match or catalog is
/// built. Runtime game over is never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board width {width} is smaller than the widest shape ({min} columns)")]
    WidthTooSmall { width: usize, min: usize },
    #[error("board height {height} is smaller than the tallest shape ({min} rows)")]
    HeightTooSmall { height: usize, min: usize },
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("board {name} {value} exceeds the maximum of {max} cells")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
}

pub type Result<T> = core::result::Result<T, ConfigError>;
