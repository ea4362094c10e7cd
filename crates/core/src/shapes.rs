//! Shape catalog - piece patterns and colors
//!
//! The catalog holds the 7 canonical shapes, sized for an 8-wide field
//! (no pattern exceeds 3 cells in either axis). Rotation is computed
//! geometrically in 90-degree steps rather than stored as pre-rotated
//! variants; a rotated placement is validated like any other placement.

use arrayvec::ArrayVec;

use crate::types::Rgb;

/// Maximum pattern extent in either axis.
pub const MAX_PATTERN_DIM: usize = 3;

/// Maximum number of occupied cells in a pattern.
pub const MAX_PATTERN_CELLS: usize = MAX_PATTERN_DIM * MAX_PATTERN_DIM;

/// A small immutable boolean mask describing a piece's occupied cells.
///
/// `bits[y][x]` is row-major with y growing downward; only the
/// `width x height` corner is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    width: u8,
    height: u8,
    bits: [[bool; MAX_PATTERN_DIM]; MAX_PATTERN_DIM],
}

impl Pattern {
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) within the pattern rectangle is occupied.
    /// Out-of-rectangle coordinates read as unoccupied.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.bits[y][x]
    }

    /// Offsets of all occupied cells, relative to the pattern's top-left corner.
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_PATTERN_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.bits[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate by a multiple of 90 degrees (positive = counter-clockwise).
    ///
    /// 0 is the identity; width and height swap on quarter turns.
    pub fn rotated(&self, degrees: i32) -> Pattern {
        let turns = degrees.rem_euclid(360) / 90;
        let mut p = *self;
        for _ in 0..turns {
            p = p.quarter_turn_ccw();
        }
        p
    }

    /// One 90-degree counter-clockwise turn: (x, y) -> (y, width-1-x).
    fn quarter_turn_ccw(&self) -> Pattern {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut bits = [[false; MAX_PATTERN_DIM]; MAX_PATTERN_DIM];
        for y in 0..h {
            for x in 0..w {
                if self.bits[y][x] {
                    bits[w - 1 - x][y] = true;
                }
            }
        }
        Pattern {
            width: self.height,
            height: self.width,
            bits,
        }
    }
}

/// A catalog entry: an unrotated pattern plus its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub pattern: Pattern,
    pub color: Rgb,
}

const fn pattern(width: u8, height: u8, rows: [[u8; MAX_PATTERN_DIM]; MAX_PATTERN_DIM]) -> Pattern {
    let mut bits = [[false; MAX_PATTERN_DIM]; MAX_PATTERN_DIM];
    let mut y = 0;
    while y < MAX_PATTERN_DIM {
        let mut x = 0;
        while x < MAX_PATTERN_DIM {
            bits[y][x] = rows[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    Pattern { width, height, bits }
}

/// The 7 canonical shapes. Given the small display, some shapes are
/// smaller than the standard tetromino set.
const CATALOG: [Shape; 7] = [
    Shape {
        pattern: pattern(2, 2, [[1, 1, 0], [1, 1, 0], [0, 0, 0]]),
        color: Rgb::new(255, 0, 255), // magenta
    },
    Shape {
        pattern: pattern(3, 2, [[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0, 0, 255), // blue
    },
    Shape {
        pattern: pattern(3, 2, [[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        color: Rgb::new(139, 69, 0), // dark orange
    },
    Shape {
        pattern: pattern(3, 2, [[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(255, 0, 0), // red
    },
    Shape {
        pattern: pattern(3, 2, [[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(0, 255, 255), // cyan
    },
    Shape {
        pattern: pattern(3, 2, [[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
        color: Rgb::new(250, 128, 114), // salmon
    },
    Shape {
        pattern: pattern(3, 1, [[1, 1, 1], [0, 0, 0], [0, 0, 0]]),
        color: Rgb::new(255, 255, 0), // yellow
    },
];

/// The fixed shape catalog, in a stable order.
pub fn catalog() -> &'static [Shape; 7] {
    &CATALOG
}
