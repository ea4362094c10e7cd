//! Render snapshot - what the external renderer consumes each frame
//!
//! A dense row-major buffer of the visible rows (the bottom 8 of the
//! 12-row work grid) with the active piece overlaid. The renderer owns
//! all intensity/pixel interpretation; the core only hands over explicit
//! occupancy and colors.

use crate::types::{Cell, VISIBLE_HEIGHT, WIDTH};

const SNAPSHOT_SIZE: usize = (WIDTH as usize) * (VISIBLE_HEIGHT as usize);

/// Visible cells, row-major, `WIDTH x VISIBLE_HEIGHT`.
///
/// Reusable: callers keep one buffer and refill it every frame via
/// `GameSession::snapshot_into`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    cells: [Cell; SNAPSHOT_SIZE],
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            cells: [None; SNAPSHOT_SIZE],
        }
    }
}

impl RenderSnapshot {
    #[inline(always)]
    fn idx(x: u8, y: u8) -> Option<usize> {
        if x >= WIDTH || y >= VISIBLE_HEIGHT {
            return None;
        }
        Some((y as usize) * (WIDTH as usize) + (x as usize))
    }

    pub fn get(&self, x: u8, y: u8) -> Cell {
        Self::idx(x, y).and_then(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, x: u8, y: u8, cell: Cell) {
        if let Some(i) = Self::idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
