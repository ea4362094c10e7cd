//! Playfield module - the active piece and its mutators
//!
//! Owns the landed-material grid plus zero-or-one active piece. Every
//! mutator is an atomic check-then-commit built on [`Grid::can_place`]:
//! an invalid move/rotate/spawn leaves state untouched and reports
//! `false`. A failed spawn is the terminal game-over condition; a failed
//! move or rotate is just a blocked no-op.

use crate::grid::{Grid, MAX_CLEARS_PER_LOCK};
use crate::rng::SimpleRng;
use crate::shapes::{catalog, Pattern};
use crate::types::{Rgb, SPAWN_X, VISIBLE_HEIGHT, WORK_HEIGHT};

use arrayvec::ArrayVec;

/// The live falling piece: a shape instance with its current (possibly
/// rotated) pattern and top-left grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub pattern: Pattern,
    pub color: Rgb,
    /// Accumulated rotation in degrees (0/90/180/270).
    pub rotation: u16,
    pub x: i8,
    pub y: i8,
}

/// Landed material plus the active piece.
#[derive(Debug, Clone)]
pub struct Playfield {
    grid: Grid,
    active: Option<Piece>,
    rng: SimpleRng,
}

impl Playfield {
    /// Create an empty playfield with no active piece.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Spawn a new piece: a uniformly random catalog shape, horizontally
    /// at the fixed offset and vertically with its bottom edge just above
    /// the visible area.
    ///
    /// Returns false and leaves state unchanged when the spawn cell is
    /// blocked - the caller must treat that as game over.
    pub fn spawn(&mut self) -> bool {
        let shape = &catalog()[self.rng.next_range(7) as usize];
        let x = SPAWN_X;
        let y = (WORK_HEIGHT - VISIBLE_HEIGHT) as i8 - shape.pattern.height() as i8;

        if !self.grid.can_place(&shape.pattern, x, y) {
            return false;
        }
        self.active = Some(Piece {
            pattern: shape.pattern,
            color: shape.color,
            rotation: 0,
            x,
            y,
        });
        true
    }

    /// Try to move the active piece by (dx, dy).
    ///
    /// Used for left/right (dx = +-1) and gravity (dy = 1). Commits and
    /// returns true iff the candidate position fits.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if !self.grid.can_place(&piece.pattern, nx, ny) {
            return false;
        }
        self.active = Some(Piece {
            x: nx,
            y: ny,
            ..piece
        });
        true
    }

    /// Try to rotate the active piece in place by +-90 degrees
    /// (positive = counter-clockwise).
    ///
    /// The rotated pattern is validated at the same (x, y); there is no
    /// wall-kick offset search - a rotation that does not fit in place
    /// simply fails. Pattern dimensions may change on success.
    pub fn rotate(&mut self, delta_degrees: i32) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let rotated = piece.pattern.rotated(delta_degrees);
        if !self.grid.can_place(&rotated, piece.x, piece.y) {
            return false;
        }
        self.active = Some(Piece {
            pattern: rotated,
            rotation: (i32::from(piece.rotation) + delta_degrees).rem_euclid(360) as u16,
            ..piece
        });
        true
    }

    /// Merge the active piece into the grid at its current position and
    /// clear the active slot.
    ///
    /// Unconditional by contract: only called once a gravity move has
    /// already failed, confirming contact.
    pub fn lock(&mut self) {
        if let Some(piece) = self.active.take() {
            self.grid.merge(&piece.pattern, piece.x, piece.y, piece.color);
        }
    }

    /// Clear completed rows in the landed grid.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, MAX_CLEARS_PER_LOCK> {
        self.grid.clear_full_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WIDTH;

    /// Replace the active piece with a known shape for deterministic tests.
    fn force_piece(field: &mut Playfield, shape_index: usize) -> Piece {
        let shape = catalog()[shape_index];
        let y = (WORK_HEIGHT - VISIBLE_HEIGHT) as i8 - shape.pattern.height() as i8;
        let piece = Piece {
            pattern: shape.pattern,
            color: shape.color,
            rotation: 0,
            x: SPAWN_X,
            y,
        };
        field.active = Some(piece);
        piece
    }

    #[test]
    fn test_spawn_places_piece_above_visible_area() {
        let mut field = Playfield::new(1);
        assert!(field.spawn());

        let piece = field.active().copied().unwrap();
        assert_eq!(piece.x, SPAWN_X);
        // Bottom edge sits exactly on the visible boundary.
        assert_eq!(
            piece.y + piece.pattern.height() as i8,
            (WORK_HEIGHT - VISIBLE_HEIGHT) as i8
        );
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_spawn_fails_when_blocked_and_leaves_state_unchanged() {
        let mut field = Playfield::new(1);
        // Fill the whole headroom band: no shape can spawn.
        for y in 0..(WORK_HEIGHT - VISIBLE_HEIGHT) as i8 {
            for x in 0..WIDTH as i8 {
                field.grid_mut().set(x, y, Some(Rgb::new(255, 0, 0)));
            }
        }
        assert!(!field.spawn());
        assert!(field.active().is_none());
    }

    #[test]
    fn test_move_commits_or_leaves_unchanged() {
        let mut field = Playfield::new(1);
        let piece = force_piece(&mut field, 0);

        assert!(field.move_piece(1, 0));
        assert_eq!(field.active().unwrap().x, piece.x + 1);

        // A blocked move is a no-op.
        field.grid_mut().set(piece.x + 1, piece.y + 2, Some(piece.color));
        assert!(!field.move_piece(0, 1));
        assert_eq!(field.active().unwrap().y, piece.y);
    }

    #[test]
    fn test_move_left_stops_exactly_at_wall() {
        let mut field = Playfield::new(1);
        force_piece(&mut field, 0); // 2x2 square at x=3

        assert!(field.move_piece(-1, 0));
        assert!(field.move_piece(-1, 0));
        assert!(field.move_piece(-1, 0));
        assert_eq!(field.active().unwrap().x, 0);
        assert!(!field.move_piece(-1, 0));
        assert_eq!(field.active().unwrap().x, 0);
    }

    #[test]
    fn test_gravity_succeeds_until_bottom_boundary() {
        let mut field = Playfield::new(1);
        let piece = force_piece(&mut field, 0);

        let mut steps = 0;
        while field.move_piece(0, 1) {
            steps += 1;
        }
        let rest = field.active().unwrap();
        assert_eq!(
            rest.y + rest.pattern.height() as i8,
            WORK_HEIGHT as i8,
            "piece should rest exactly on the floor"
        );
        assert_eq!(
            steps,
            WORK_HEIGHT as i8 - (piece.y + piece.pattern.height() as i8)
        );
    }

    #[test]
    fn test_rotate_changes_pattern_and_tracks_degrees() {
        let mut field = Playfield::new(1);
        let piece = force_piece(&mut field, 6); // 3x1 bar

        assert!(field.rotate(90));
        let rotated = field.active().unwrap();
        assert_eq!(rotated.rotation, 90);
        assert_eq!(rotated.pattern.width(), 1);
        assert_eq!(rotated.pattern.height(), 3);
        assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));

        assert!(field.rotate(-90));
        assert_eq!(field.active().unwrap().rotation, 0);
        assert_eq!(field.active().unwrap().pattern, piece.pattern);
    }

    #[test]
    fn test_rotate_without_room_fails_in_place() {
        let mut field = Playfield::new(1);
        // Bar resting on the floor: rotating it upright would poke below.
        let shape = catalog()[6];
        field.active = Some(Piece {
            pattern: shape.pattern,
            color: shape.color,
            rotation: 0,
            x: 0,
            y: WORK_HEIGHT as i8 - 1,
        });

        assert!(!field.rotate(90));
        let piece = field.active().unwrap();
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.pattern, shape.pattern);
    }

    #[test]
    fn test_lock_merges_color_and_clears_active_slot() {
        let mut field = Playfield::new(1);
        let piece = force_piece(&mut field, 0);
        while field.move_piece(0, 1) {}
        let rest = *field.active().unwrap();

        field.lock();
        assert!(field.active().is_none());
        for (dx, dy) in rest.pattern.cells() {
            assert_eq!(
                field.grid().get(rest.x + dx, rest.y + dy),
                Some(Some(piece.color))
            );
        }
    }

    #[test]
    fn test_mutators_without_active_piece_are_noops() {
        let mut field = Playfield::new(1);
        assert!(!field.move_piece(0, 1));
        assert!(!field.rotate(90));
        field.lock(); // must not panic
        assert!(field.grid().cells().iter().all(|c| c.is_none()));
    }
}
