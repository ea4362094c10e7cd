//! Game session - one playthrough from first spawn to game over
//!
//! Orchestrates the playfield and the drop scheduler for a single
//! fixed-tick session. Each frame consumes an ordered command batch from
//! the input collaborator, advances the scheduler, and on a failed
//! gravity move runs lock -> clear lines -> spawn. A failed spawn is the
//! one terminal condition: the session flips to
//! [`GamePhase::GameOver`] carrying the final frame count, as a value
//! the loop observes rather than an abort.

use std::time::Duration;

use crate::playfield::Playfield;
use crate::scheduler::DropScheduler;
use crate::snapshot::RenderSnapshot;
use crate::types::{InputCommand, SCORE_FRAMES_PER_POINT, VISIBLE_HEIGHT, WIDTH, WORK_HEIGHT};

/// Session lifecycle: `Playing` until a spawn fails, then `GameOver`
/// forever (one-way).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver { elapsed_frames: u32 },
}

pub struct GameSession {
    playfield: Playfield,
    scheduler: DropScheduler,
    phase: GamePhase,
}

impl GameSession {
    /// Start a session: empty grid, first piece spawned.
    pub fn new(seed: u32) -> Self {
        let mut playfield = Playfield::new(seed);
        // The first spawn cannot fail on an empty grid.
        let spawned = playfield.spawn();
        debug_assert!(spawned);
        Self {
            playfield,
            scheduler: DropScheduler::new(),
            phase: GamePhase::Playing,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn elapsed_frames(&self) -> u32 {
        match self.phase {
            GamePhase::GameOver { elapsed_frames } => elapsed_frames,
            GamePhase::Playing => self.scheduler.elapsed_frames(),
        }
    }

    /// Score as the external layer displays it.
    pub fn score(&self) -> u32 {
        self.elapsed_frames() / SCORE_FRAMES_PER_POINT
    }

    pub fn fast_drop(&self) -> bool {
        self.scheduler.fast_drop()
    }

    /// Wall-clock pacing for the loop's next frame wait.
    pub fn frame_duration(&self) -> Duration {
        self.scheduler.frame_duration()
    }

    /// Run one simulation frame: apply the command batch, then advance
    /// gravity. No-op after game over.
    pub fn frame(&mut self, commands: &[InputCommand]) {
        if self.is_game_over() {
            return;
        }

        self.apply_commands(commands);

        if self.scheduler.tick() {
            if !self.playfield.move_piece(0, 1) {
                // Contact: the piece can no longer fall.
                self.playfield.lock();
                self.playfield.clear_full_lines();
                self.scheduler.set_fast_drop(false);
                if !self.playfield.spawn() {
                    self.phase = GamePhase::GameOver {
                        elapsed_frames: self.scheduler.elapsed_frames(),
                    };
                    return;
                }
            }
            self.scheduler.rearm();
        }
    }

    /// At most one movement/rotate command takes effect per frame: the
    /// first one the playfield accepts. Rejected commands let later ones
    /// in the batch try. Fast-drop toggles are always processed, and
    /// steering is suspended while fast-drop is held (reference rules).
    fn apply_commands(&mut self, commands: &[InputCommand]) {
        let mut moved = false;
        for &command in commands {
            match command {
                InputCommand::DropStart => self.scheduler.set_fast_drop(true),
                InputCommand::DropEnd => self.scheduler.set_fast_drop(false),
                // Quit is the loop's concern, not the simulation's.
                InputCommand::Quit => {}
                _ if moved || self.scheduler.fast_drop() => {}
                InputCommand::MoveLeft => moved = self.playfield.move_piece(-1, 0),
                InputCommand::MoveRight => moved = self.playfield.move_piece(1, 0),
                InputCommand::RotateCcw => moved = self.playfield.rotate(90),
                InputCommand::RotateCw => moved = self.playfield.rotate(-90),
            }
        }
    }

    /// Fill `out` with the visible rows overlaid with the active piece.
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        let top = (WORK_HEIGHT - VISIBLE_HEIGHT) as i8;
        let grid = self.playfield.grid();
        for y in 0..VISIBLE_HEIGHT {
            for x in 0..WIDTH {
                out.set(x, y, grid.get(x as i8, y as i8 + top).flatten());
            }
        }
        if let Some(piece) = self.playfield.active() {
            for (dx, dy) in piece.pattern.cells() {
                let (gx, gy) = (piece.x + dx, piece.y + dy - top);
                if gx >= 0 && gy >= 0 {
                    out.set(gx as u8, gy as u8, Some(piece.color));
                }
            }
        }
    }
}
