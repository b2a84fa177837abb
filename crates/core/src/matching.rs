//! Match engine - connected-component discovery over a [`CellGrid`]
//!
//! A group is the maximal set of occupied cells reachable from a seed through
//! up/down/left/right steps that all land on the seed's kind. Discovery is a
//! work-queue flood fill with a visited table indexed by cell index, so every
//! cell is enqueued at most once and the cost is linear in the group size
//! plus one allocation proportional to the grid.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::grid::CellGrid;
use crate::types::{CellIndex, LevelState, MIN_MATCH_SIZE};

/// Sorted, duplicate-free set of cell indices forming one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchGroup {
    indices: Vec<CellIndex>,
}

impl MatchGroup {
    /// The empty group (absent seed, out-of-range seed)
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_unsorted(mut indices: Vec<CellIndex>) -> Self {
        indices.sort_unstable();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether this group may be removed as a move
    pub fn is_removable(&self) -> bool {
        self.indices.len() >= MIN_MATCH_SIZE
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Member indices in ascending order
    pub fn indices(&self) -> &[CellIndex] {
        &self.indices
    }
}

impl<'a> IntoIterator for &'a MatchGroup {
    type Item = &'a CellIndex;
    type IntoIter = std::slice::Iter<'a, CellIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

/// The cell itself followed by every 1-hop neighbour of the same kind.
///
/// Returns `None` when the cell is empty or out of range, so callers can't
/// mistake an empty cell for a seed.
pub fn adjacent_same_type<G>(grid: &G, index: CellIndex) -> Option<ArrayVec<CellIndex, 5>>
where
    G: CellGrid + ?Sized,
{
    let seed = grid.element(index)?;
    let mut out = ArrayVec::new();
    out.push(index);
    for neighbor in grid.neighbors(index) {
        if grid.element(neighbor).is_some_and(|e| e.same_kind(&seed)) {
            out.push(neighbor);
        }
    }
    Some(out)
}

/// Full group containing `seed`, sorted ascending.
///
/// Empty when the seed cell is empty or out of range. Otherwise the seed is
/// always a member, so an isolated element yields a group of one.
pub fn find_match_group<G>(grid: &G, seed: CellIndex) -> MatchGroup
where
    G: CellGrid + ?Sized,
{
    let Some(seed_element) = grid.element(seed) else {
        return MatchGroup::empty();
    };

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    let mut members = Vec::new();

    visited[seed] = true;
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        members.push(current);
        for neighbor in grid.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            // Compare against the seed, not the cell we came from.
            if grid
                .element(neighbor)
                .is_some_and(|e| e.same_kind(&seed_element))
            {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    MatchGroup::from_unsorted(members)
}

/// True if any occupied cell has an occupied neighbour of the same kind.
///
/// Only right and down neighbours are checked; every adjacent pair is seen
/// from its upper or left member.
pub fn has_any_move<G>(grid: &G) -> bool
where
    G: CellGrid + ?Sized,
{
    let width = grid.width();
    let count = grid.cell_count();
    (0..count).any(|index| {
        let Some(element) = grid.element(index) else {
            return false;
        };
        let right = (index % width + 1 < width).then_some(index + 1);
        let down = (index + width < count).then_some(index + width);
        right
            .into_iter()
            .chain(down)
            .any(|n| grid.element(n).is_some_and(|e| e.same_kind(&element)))
    })
}

/// Terminal-state check, recomputed from the grid's current contents.
pub fn level_state<G>(grid: &G) -> LevelState
where
    G: CellGrid + ?Sized,
{
    let any_left = (0..grid.cell_count()).any(|index| grid.element(index).is_some());
    if !any_left {
        LevelState::NoElementsLeft
    } else if has_any_move(grid) {
        LevelState::FurtherMovesPossible
    } else {
        LevelState::NoMoreMovesPossible
    }
}
