use serde::{Deserialize, Serialize};

use crate::types::LevelState;

/// Plain view of a level for a rendering host.
///
/// `cells` is row-major; `None` marks an empty cell, `Some(k)` the kind id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Option<u8>>,
    pub episode_id: u32,
    pub seed: u32,
    pub score: u32,
    pub moves: u32,
    pub remaining: usize,
    pub state: LevelState,
}

impl LevelSnapshot {
    /// Kind at `(row, col)`, `None` when empty or out of range
    pub fn kind_at(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied().flatten()
    }

    pub fn playable(&self) -> bool {
        !self.state.is_terminal()
    }
}

impl Default for LevelSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            episode_id: 0,
            seed: 0,
            score: 0,
            moves: 0,
            remaining: 0,
            state: LevelState::NoElementsLeft,
        }
    }
}
