//! Error types for level construction and configuration.
//!
//! Play itself never fails: out-of-bounds positions and empty seeds are
//! reported through `Option` / empty groups. Only building a level can be
//! rejected.

/// Errors that can occur when building a grid or a level.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("palette must contain at least one element kind")]
    EmptyPalette,

    #[error("palette size {0} exceeds the supported maximum of 255")]
    PaletteTooLarge(usize),

    #[error("cell size must be positive and finite (got {width}x{height})")]
    InvalidCellSize { width: f32, height: f32 },

    #[error("origin must be finite (got ({x}, {y}))")]
    InvalidOrigin { x: f32, y: f32 },

    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("cell {index} holds kind {kind}, outside a palette of {palette_size}")]
    KindOutOfPalette {
        index: usize,
        kind: u8,
        palette_size: usize,
    },

    #[error("failed to parse level config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for LevelError {
    fn from(err: toml::de::Error) -> Self {
        LevelError::Config(err.to_string())
    }
}
