//! Grid module - the playfield the match engine works on
//!
//! The grid is a `width x height` array where each cell is either empty or
//! holds one element. Uses a flat row-major `Vec` for cache locality:
//! `index = row * width + col`, row 0 at the top.
//!
//! The match engine only talks to the [`CellGrid`] trait, so a host with its
//! own cell storage can plug in directly. [`ElementGrid`] is the stock
//! implementation used by [`Level`](crate::Level).

use arrayvec::ArrayVec;

use crate::error::LevelError;
use crate::types::{Cell, CellIndex, CellSize, Element, Point};

/// Indexing service consumed by the match engine.
pub trait CellGrid {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Total number of cells
    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Cell under a host-space position, `None` outside the grid
    fn index_at(&self, position: Point) -> Option<CellIndex>;

    /// Up, down, left and right neighbours that exist.
    ///
    /// Edge cells get fewer than four; an invalid index gets none.
    fn neighbors(&self, index: CellIndex) -> ArrayVec<CellIndex, 4> {
        let mut out = ArrayVec::new();
        let width = self.width();
        if index >= self.cell_count() {
            return out;
        }
        let row = index / width;
        let col = index % width;

        if row > 0 {
            out.push(index - width);
        }
        if row + 1 < self.height() {
            out.push(index + width);
        }
        if col > 0 {
            out.push(index - 1);
        }
        if col + 1 < width {
            out.push(index + 1);
        }
        out
    }

    /// Element at `index`, `None` when empty or out of range
    fn element(&self, index: CellIndex) -> Option<Element>;

    /// Overwrite a cell. Returns false if out of range.
    fn set_element(&mut self, index: CellIndex, cell: Cell) -> bool;

    /// Empty every listed cell.
    ///
    /// Already-empty and out-of-range indices are skipped.
    fn remove_elements(&mut self, indices: &[CellIndex]) {
        for &index in indices {
            self.set_element(index, None);
        }
    }

    /// Centre of a cell in host space
    fn cell_center(&self, index: CellIndex) -> Option<Point>;
}

/// Stock grid: flat cell storage plus the host-space placement of cell 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementGrid {
    width: usize,
    height: usize,
    origin: Point,
    cell_size: CellSize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl ElementGrid {
    /// Create an empty grid.
    ///
    /// `origin` is the top-left corner of cell 0.
    pub fn new(
        width: usize,
        height: usize,
        origin: Point,
        cell_size: CellSize,
    ) -> Result<Self, LevelError> {
        validate_geometry(width, height, origin, cell_size)?;
        Ok(Self {
            width,
            height,
            origin,
            cell_size,
            cells: vec![None; width * height],
        })
    }

    /// Build a grid from row-major cells at the default placement
    /// (origin at 0,0 and unit cells).
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, LevelError> {
        validate_geometry(width, height, Point::ORIGIN, CellSize::UNIT)?;
        if cells.len() != width * height {
            return Err(LevelError::CellCountMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            origin: Point::ORIGIN,
            cell_size: CellSize::UNIT,
            cells,
        })
    }

    /// Move the grid to a different placement without touching its cells.
    pub fn with_placement(mut self, origin: Point, cell_size: CellSize) -> Result<Self, LevelError> {
        validate_geometry(self.width, self.height, origin, cell_size)?;
        self.origin = origin;
        self.cell_size = cell_size;
        Ok(self)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Flat index of `(row, col)`, `None` outside the grid
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<CellIndex> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// `(row, col)` of a flat index
    #[inline]
    pub fn row_col(&self, index: CellIndex) -> Option<(usize, usize)> {
        if index >= self.cells.len() {
            return None;
        }
        Some((index / self.width, index % self.width))
    }

    /// Cell state at `index`; `None` out of range, `Some(None)` when empty
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Number of cells still holding an element
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when no cell holds an element
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl CellGrid for ElementGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index_at(&self, position: Point) -> Option<CellIndex> {
        let dx = (position.x - self.origin.x) / self.cell_size.width;
        let dy = (position.y - self.origin.y) / self.cell_size.height;
        // NaN fails both comparisons as well.
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        let col = dx.floor();
        let row = dy.floor();
        if col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        self.index(row as usize, col as usize)
    }

    fn element(&self, index: CellIndex) -> Option<Element> {
        self.cells.get(index).copied().flatten()
    }

    fn set_element(&mut self, index: CellIndex, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    fn cell_center(&self, index: CellIndex) -> Option<Point> {
        let (row, col) = self.row_col(index)?;
        Some(Point::new(
            self.origin.x + (col as f32 + 0.5) * self.cell_size.width,
            self.origin.y + (row as f32 + 0.5) * self.cell_size.height,
        ))
    }
}

fn validate_geometry(
    width: usize,
    height: usize,
    origin: Point,
    cell_size: CellSize,
) -> Result<(), LevelError> {
    if width == 0 || height == 0 || width.checked_mul(height).is_none() {
        return Err(LevelError::InvalidDimensions { width, height });
    }
    if !cell_size.is_valid() {
        return Err(LevelError::InvalidCellSize {
            width: cell_size.width,
            height: cell_size.height,
        });
    }
    if !origin.x.is_finite() || !origin.y.is_finite() {
        return Err(LevelError::InvalidOrigin {
            x: origin.x,
            y: origin.y,
        });
    }
    Ok(())
}
