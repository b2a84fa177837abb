//! SameGame (workspace facade crate).
//!
//! Exposes the workspace as `same_game::{core, types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use same_game_core as core;
pub use same_game_types as types;
