//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputCommand`] and tracks
//! the held fast-drop control in terminal environments (including
//! terminals without key-release events).

pub mod handler;
pub mod map;

pub use matrix_tetris_types as types;

use arrayvec::ArrayVec;
use types::InputCommand;

/// Commands collected during one frame, in arrival order.
pub type CommandBatch = ArrayVec<InputCommand, 16>;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
