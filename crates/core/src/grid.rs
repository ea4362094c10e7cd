//! Grid module - landed material and collision detection
//!
//! The grid is the 8x12 work area: the bottom 8 rows are visible on the
//! LED matrix, the rows above are spawn headroom. Each cell is either
//! empty or occupied with a color. Uses a flat array for cache locality
//! and zero-allocation.
//!
//! Coordinates: (x, y) with x in 0..7 (left to right) and y in 0..11
//! (top to bottom). Occupancy is explicit - there is no pixel blending
//! or intensity thresholding anywhere in the simulation.

use arrayvec::ArrayVec;

use crate::shapes::Pattern;
use crate::types::{Cell, Rgb, WIDTH, WORK_HEIGHT};

/// Total number of cells in the work grid.
const GRID_SIZE: usize = (WIDTH as usize) * (WORK_HEIGHT as usize);

/// A single lock can complete at most as many rows as a pattern is tall
/// (3 after rotation); 4 leaves headroom.
pub const MAX_CLEARS_PER_LOCK: usize = 4;

/// The work grid - 8 columns x 12 rows using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid. Dimensions are fixed for the session.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= WIDTH as i8 || y < 0 || y >= WORK_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        WIDTH
    }

    pub fn height(&self) -> u8 {
        WORK_HEIGHT
    }

    /// Get cell at position (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a pattern translated to top-left (x, y) fits.
    ///
    /// False iff any occupied pattern cell lands outside the work grid or
    /// on an occupied cell. Pure and per-cell exact - the single authority
    /// for validity used by every playfield mutator.
    pub fn can_place(&self, pattern: &Pattern, x: i8, y: i8) -> bool {
        pattern.cells().iter().all(|&(dx, dy)| {
            match Self::index(x + dx, y + dy) {
                Some(idx) => self.cells[idx].is_none(),
                None => false,
            }
        })
    }

    /// Merge a pattern's occupied cells into the grid with the given color.
    ///
    /// Unconditional: callers validate with [`Grid::can_place`] first (the
    /// playfield only locks after a gravity move has already failed).
    pub fn merge(&mut self, pattern: &Pattern, x: i8, y: i8, color: Rgb) {
        for (dx, dy) in pattern.cells() {
            self.set(x + dx, y + dy, Some(color));
        }
    }

    /// Check if a row is completely filled across the full width.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= WORK_HEIGHT as usize {
            return false;
        }
        let start = y * WIDTH as usize;
        let end = start + WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: shift every row above it down by one and introduce
    /// an empty row at the top.
    fn remove_row(&mut self, y: usize) {
        let width = WIDTH as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }
        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows, scanning top to bottom over the full work height.
    ///
    /// After removing a row the same index is re-checked, since the shift
    /// moves new content into it. Returns the cleared row indices in scan
    /// order; the caller only needs the count.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, MAX_CLEARS_PER_LOCK> {
        let mut cleared = ArrayVec::new();
        let mut y = 0;
        while y < WORK_HEIGHT as usize {
            if self.is_row_full(y) {
                self.remove_row(y);
                let _ = cleared.try_push(y);
            } else {
                y += 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
