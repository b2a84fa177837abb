//! Level module - one play session over one grid
//!
//! Ties the grid, the match engine, scoring and generation together. A level
//! owns its grid exclusively; the grid only ever loses elements during play.
//! Score and grid change together inside a single `&mut self` call, so a host
//! can never observe one without the other.

use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::grid::{CellGrid, ElementGrid};
use crate::logging::{debug, trace};
use crate::matching::{self, MatchGroup};
use crate::rng::SimpleRng;
use crate::scoring::calculate_points;
use crate::snapshot::LevelSnapshot;
use crate::types::{Cell, CellIndex, LevelState, Point};

/// Result of a select call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOutcome {
    /// Position off the grid, empty cell, or a lone element. Nothing changed.
    NoMatch,
    /// A group was removed and scored
    Matched { removed: usize, points: u32 },
}

impl SelectOutcome {
    /// Number of removed elements, `None` for no match
    pub fn match_size(&self) -> Option<usize> {
        match *self {
            SelectOutcome::Matched { removed, .. } => Some(removed),
            SelectOutcome::NoMatch => None,
        }
    }

    /// Points awarded by this move
    pub fn points(&self) -> u32 {
        match *self {
            SelectOutcome::Matched { points, .. } => points,
            SelectOutcome::NoMatch => 0,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. })
    }
}

/// Where the starting board came from, so `restart` can rebuild it.
#[derive(Debug, Clone, PartialEq)]
enum Layout {
    Seeded,
    /// Untouched copy of the hand-built starting grid
    Fixed(ElementGrid),
}

/// A running level
#[derive(Debug, Clone)]
pub struct Level {
    config: LevelConfig,
    grid: ElementGrid,
    layout: Layout,
    score: u32,
    /// Successful moves this episode
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
}

impl Level {
    /// Create a level with one seeded random element per cell.
    ///
    /// Elements are drawn in index order, so `(seed, width, height,
    /// palette_size)` fully determines the board.
    pub fn new(config: LevelConfig) -> Result<Self, LevelError> {
        config.validate()?;
        let grid = generate(&config)?;
        debug!(
            width = config.width,
            height = config.height,
            palette_size = config.palette_size,
            seed = config.seed,
            "level created"
        );
        Ok(Self {
            config,
            grid,
            layout: Layout::Seeded,
            score: 0,
            moves: 0,
            episode_id: 0,
        })
    }

    /// Create a level from an explicit row-major layout.
    ///
    /// Every present kind must lie inside the configured palette. The config's
    /// seed is kept for bookkeeping but not used.
    pub fn from_layout(config: LevelConfig, cells: Vec<Cell>) -> Result<Self, LevelError> {
        config.validate()?;
        if let Some((index, kind)) = cells.iter().enumerate().find_map(|(i, cell)| {
            cell.map(|e| e.kind().id())
                .filter(|&k| usize::from(k) >= config.palette_size)
                .map(|k| (i, k))
        }) {
            return Err(LevelError::KindOutOfPalette {
                index,
                kind,
                palette_size: config.palette_size,
            });
        }
        let grid = ElementGrid::from_cells(config.width, config.height, cells)?
            .with_placement(config.origin, config.cell_size)?;
        debug!(
            width = config.width,
            height = config.height,
            "level created from layout"
        );
        Ok(Self {
            config,
            layout: Layout::Fixed(grid.clone()),
            grid,
            score: 0,
            moves: 0,
            episode_id: 0,
        })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn grid(&self) -> &ElementGrid {
        &self.grid
    }

    /// Current player score
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Elements still on the grid
    pub fn remaining_elements(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Group under `position` without changing anything.
    ///
    /// Used for highlight-on-hover. Off-grid positions and empty cells give
    /// an empty group.
    pub fn hover(&self, position: Point) -> MatchGroup {
        match self.grid.index_at(position) {
            Some(index) => self.hover_index(index),
            None => MatchGroup::empty(),
        }
    }

    /// Group containing `index` without changing anything
    pub fn hover_index(&self, index: CellIndex) -> MatchGroup {
        matching::find_match_group(&self.grid, index)
    }

    /// Try to remove the group under `position`.
    pub fn select(&mut self, position: Point) -> SelectOutcome {
        match self.grid.index_at(position) {
            Some(index) => self.select_index(index),
            None => {
                trace!(x = position.x, y = position.y, "select outside grid");
                SelectOutcome::NoMatch
            }
        }
    }

    /// Try to remove the group containing `index`.
    ///
    /// Groups of fewer than two elements are left alone and score nothing.
    pub fn select_index(&mut self, index: CellIndex) -> SelectOutcome {
        let group = matching::find_match_group(&self.grid, index);
        if !group.is_removable() {
            trace!(index, size = group.len(), "select rejected");
            return SelectOutcome::NoMatch;
        }

        let removed = group.len();
        let points = calculate_points(removed);
        self.grid.remove_elements(group.indices());
        self.score = self.score.saturating_add(points);
        self.moves = self.moves.saturating_add(1);

        debug!(
            index,
            removed,
            points,
            score = self.score,
            "group removed"
        );
        SelectOutcome::Matched { removed, points }
    }

    /// Derived terminal state, recomputed from the current grid.
    pub fn level_state(&self) -> LevelState {
        matching::level_state(&self.grid)
    }

    /// Rebuild the starting board and reset score and move count.
    ///
    /// Seeded levels regenerate from their config, so the board is identical
    /// to the first episode.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        match &self.layout {
            Layout::Seeded => self.grid = generate(&self.config)?,
            Layout::Fixed(initial) => self.grid.clone_from(initial),
        }
        self.score = 0;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode_id = self.episode_id, "level restarted");
        Ok(())
    }

    /// Fill `out` without reallocating its cell buffer when sizes match.
    pub fn snapshot_into(&self, out: &mut LevelSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells
            .extend(self.grid.cells().iter().map(|cell| cell.map(|e| e.kind().id())));
        out.episode_id = self.episode_id;
        out.seed = self.config.seed;
        out.score = self.score;
        out.moves = self.moves;
        out.remaining = self.remaining_elements();
        out.state = self.level_state();
    }

    pub fn snapshot(&self) -> LevelSnapshot {
        let mut s = LevelSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn generate(config: &LevelConfig) -> Result<ElementGrid, LevelError> {
    let mut grid = ElementGrid::new(config.width, config.height, config.origin, config.cell_size)?;
    let palette = u8::try_from(config.palette_size)
        .map_err(|_| LevelError::PaletteTooLarge(config.palette_size))?;
    let mut rng = SimpleRng::new(config.seed);
    for index in 0..grid.cell_count() {
        grid.set_element(index, Some(rng.next_element(palette)));
    }
    Ok(grid)
}
