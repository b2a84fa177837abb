//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! They are plain data with no game logic attached, so the match engine, a
//! rendering host and any test harness can all speak the same vocabulary.
//!
//! # Grid Layout
//!
//! Cells are addressed by a flat row-major [`CellIndex`]:
//!
//! - `index = row * width + col`
//! - Row 0 is the top row, column 0 the left-most column
//! - Valid indices are `0..width * height`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 10 | Columns of a default level |
//! | `DEFAULT_HEIGHT` | 10 | Rows of a default level |
//! | `DEFAULT_PALETTE_SIZE` | 4 | Distinct element kinds |
//! | `MIN_MATCH_SIZE` | 2 | Smallest removable group |
//!
//! # Examples
//!
//! ```
//! use same_game_types::{Element, ElementKind, LevelState, Point};
//!
//! let element = Element::new(ElementKind(2));
//! assert_eq!(element.kind(), ElementKind(2));
//!
//! let cell: Option<Element> = Some(element);
//! assert!(cell.is_some());
//!
//! assert!(LevelState::NoElementsLeft.is_terminal());
//! assert!(!LevelState::FurtherMovesPossible.is_terminal());
//!
//! let p = Point::new(1.5, 2.0);
//! assert_eq!(p.x, 1.5);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 10;

/// Default number of distinct element kinds
pub const DEFAULT_PALETTE_SIZE: usize = 4;

/// Largest palette a level may be configured with (kinds are stored as `u8`)
pub const MAX_PALETTE_SIZE: usize = u8::MAX as usize;

/// Smallest group that counts as a move
pub const MIN_MATCH_SIZE: usize = 2;

/// Flat row-major index of a grid cell
pub type CellIndex = usize;

/// Category of an element, drawn from a palette of `0..palette_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKind(pub u8);

impl ElementKind {
    /// Raw palette slot of this kind
    pub fn id(self) -> u8 {
        self.0
    }
}

impl From<u8> for ElementKind {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// A tile sitting in a grid cell
///
/// The grid owns exactly one element per occupied cell. Removing an element
/// leaves the cell empty for the rest of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    kind: ElementKind,
}

impl Element {
    pub const fn new(kind: ElementKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Whether two elements can be matched together
    pub fn same_kind(&self, other: &Element) -> bool {
        self.kind == other.kind
    }
}

impl From<ElementKind> for Element {
    fn from(kind: ElementKind) -> Self {
        Self::new(kind)
    }
}

/// Cell state: `None` means empty
pub type Cell = Option<Element>;

/// Derived state of a level, recomputed from the grid on demand
///
/// The host decides how to end the level (win / lose) based on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelState {
    /// Every element has been removed
    NoElementsLeft,
    /// Elements remain but none has a same-kind neighbour
    NoMoreMovesPossible,
    /// At least one group of two or more can still be removed
    FurtherMovesPossible,
}

impl LevelState {
    /// True for both end-of-level states
    pub fn is_terminal(self) -> bool {
        !matches!(self, LevelState::FurtherMovesPossible)
    }
}

/// Position in host (world) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Extent of a single cell in host coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub const UNIT: CellSize = CellSize {
        width: 1.0,
        height: 1.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both extents strictly positive and finite
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::UNIT
    }
}
