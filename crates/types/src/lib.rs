//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless tests).
//!
//! # Grid Dimensions
//!
//! The playfield is sized for an 8x8 LED matrix:
//!
//! - **Width**: 8 columns (indexed 0-7)
//! - **Visible height**: 8 rows (the physical display)
//! - **Work height**: 12 rows - the extra rows above the visible area give
//!   new pieces headroom to spawn off-screen and fall into view
//!
//! # Timing
//!
//! The game runs on a fixed tick: 10 frames/second normally, multiplied by
//! 10 while fast-drop is held. Fast-drop changes the wall-clock pacing of
//! frames, never the scheduler's internal frame counter, so simulation
//! timing stays reproducible.

/// Playfield dimensions.
pub const WIDTH: u8 = 8;
pub const VISIBLE_HEIGHT: u8 = 8;
pub const WORK_HEIGHT: u8 = 12;

/// Horizontal spawn offset for new pieces (roughly centered on the 8-wide field).
pub const SPAWN_X: i8 = 3;

/// Gravity timing, counted in frames.
pub const BASE_DROP_INTERVAL_FRAMES: u32 = 10;
pub const MIN_DROP_INTERVAL_FRAMES: u32 = 1;

/// Frame pacing.
pub const FRAME_RATE: u32 = 10;
pub const FAST_DROP_MULTIPLIER: u32 = 10;

/// Final score is derived from total elapsed frames.
pub const SCORE_FRAMES_PER_POINT: u32 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cell on the grid (None = empty, Some = landed material with its color)
pub type Cell = Option<Rgb>;

/// Abstract input commands, delivered as an ordered batch per frame.
///
/// The game loop applies at most one movement/rotate command per frame;
/// `DropStart`/`DropEnd` toggle fast-drop and are always processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    DropStart,
    DropEnd,
    Quit,
}
