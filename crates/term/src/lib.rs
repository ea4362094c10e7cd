//! Terminal "LED matrix" rendering module.
//!
//! This is a small, game-oriented rendering layer that emulates the 8x8
//! RGB matrix in a terminal. It intentionally avoids TUI widget/layout
//! frameworks and instead renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from an explicit snapshot, never from global display state
//! - Allow precise control over LED aspect ratio (e.g. 2 chars per LED)

pub mod fb;
pub mod matrix_view;
pub mod renderer;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use matrix_view::{MatrixView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
