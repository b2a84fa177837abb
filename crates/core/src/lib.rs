//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the SameGame rules: group discovery, scoring, move
//! execution and end-of-level detection. It has **zero dependencies** on
//! rendering, input or I/O, making it:
//!
//! - **Deterministic**: Same seed and dimensions produce the identical board
//! - **Testable**: Every rule is a plain function over a grid
//! - **Portable**: A host only needs to translate pointer positions into [`Point`]s
//!
//! # Module Structure
//!
//! - [`grid`]: the [`CellGrid`] indexing service and the stock [`ElementGrid`]
//! - [`matching`]: flood-fill group discovery and terminal-state scan
//! - [`scoring`]: points per removed group
//! - [`level`]: a play session (hover, select, state, restart)
//! - [`rng`]: seeded element generation
//! - [`config`]: level parameters, TOML loading and validation
//! - [`snapshot`]: plain view of a level for rendering hosts
//!
//! # Game Rules
//!
//! - **Groups**: maximal sets of same-kind elements joined up/down/left/right
//! - **Moves**: only groups of two or more can be removed
//! - **Scoring**: a group of `n` is worth `(n - 2)^2`
//! - **No gravity**: removed cells stay empty until the level restarts
//! - **End**: the level ends when the grid is empty or no element has a
//!   same-kind neighbour
//!
//! # Example
//!
//! ```
//! use same_game_core::{Level, LevelConfig, SelectOutcome};
//! use same_game_core::types::{Element, ElementKind, LevelState, Point};
//!
//! let a = Some(Element::new(ElementKind(0)));
//! let b = Some(Element::new(ElementKind(1)));
//! let mut level = Level::from_layout(LevelConfig::new(4, 1, 2, 1), vec![a, a, b, a]).unwrap();
//!
//! // Hovering highlights without changing anything
//! assert_eq!(level.hover(Point::new(0.5, 0.5)).indices(), &[0, 1]);
//!
//! // Selecting removes the pair
//! let outcome = level.select(Point::new(0.5, 0.5));
//! assert_eq!(outcome, SelectOutcome::Matched { removed: 2, points: 0 });
//! assert_eq!(level.level_state(), LevelState::NoMoreMovesPossible);
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod level;
mod logging;
pub mod matching;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use same_game_types as types;

// Re-export commonly used types for convenience
pub use config::LevelConfig;
pub use error::LevelError;
pub use grid::{CellGrid, ElementGrid};
pub use level::{Level, SelectOutcome};
pub use matching::{adjacent_same_type, find_match_group, has_any_move, level_state, MatchGroup};
pub use rng::SimpleRng;
pub use scoring::calculate_points;
pub use snapshot::LevelSnapshot;
pub use types::Point;
