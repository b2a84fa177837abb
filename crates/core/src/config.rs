//! Level configuration.
//!
//! Everything needed to regenerate a level bit-for-bit: dimensions, palette
//! size and seed, plus where the grid sits in host space.

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::types::{
    CellSize, Point, DEFAULT_HEIGHT, DEFAULT_PALETTE_SIZE, DEFAULT_WIDTH, MAX_PALETTE_SIZE,
};

/// Parameters for building a [`Level`](crate::Level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Number of distinct element kinds
    pub palette_size: usize,
    pub seed: u32,
    /// Top-left corner of cell 0 in host space
    pub origin: Point,
    pub cell_size: CellSize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: 1,
            origin: Point::ORIGIN,
            cell_size: CellSize::UNIT,
        }
    }
}

impl LevelConfig {
    pub fn new(width: usize, height: usize, palette_size: usize, seed: u32) -> Self {
        Self {
            width,
            height,
            palette_size,
            seed,
            ..Self::default()
        }
    }

    pub fn with_placement(mut self, origin: Point, cell_size: CellSize) -> Self {
        self.origin = origin;
        self.cell_size = cell_size;
        self
    }

    /// Parse a TOML fragment and validate it. Missing keys keep their defaults.
    ///
    /// ```
    /// use same_game_core::LevelConfig;
    ///
    /// let config = LevelConfig::from_toml_str("width = 5\nheight = 3\nseed = 42").unwrap();
    /// assert_eq!((config.width, config.height, config.seed), (5, 3, 42));
    /// assert_eq!(config.palette_size, 4);
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, LevelError> {
        let config: LevelConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a fully initialised grid.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(LevelError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette_size == 0 {
            return Err(LevelError::EmptyPalette);
        }
        if self.palette_size > MAX_PALETTE_SIZE {
            return Err(LevelError::PaletteTooLarge(self.palette_size));
        }
        if !self.cell_size.is_valid() {
            return Err(LevelError::InvalidCellSize {
                width: self.cell_size.width,
                height: self.cell_size.height,
            });
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(LevelError::InvalidOrigin {
                x: self.origin.x,
                y: self.origin.y,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
