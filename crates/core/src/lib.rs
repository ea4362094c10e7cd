//! Core game logic module - pure, deterministic, and testable
//!
//! All the playfield rules and simulation state for the 8x8 LED-matrix
//! falling-block game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests drive whole sessions frame by frame
//! - **Portable**: Can run in any environment (terminal, hardware matrix, headless)
//!
//! # Module Structure
//!
//! - [`shapes`]: The seven shape patterns with their colors and geometric rotation
//! - [`grid`]: 8x12 work grid with collision detection and line clearing
//! - [`playfield`]: Landed material plus the active piece and its mutators
//! - [`scheduler`]: Gravity timing with the log-base-5 difficulty curve
//! - [`session`]: One playthrough - command handling, gravity, game over
//! - [`snapshot`]: The 8x8 visible-cell buffer renderers consume
//! - [`rng`]: Seedable uniform shape selection
//!
//! # Game Rules
//!
//! The rules are deliberately small, tuned for an 8x8 display:
//!
//! - **Uniform randomizer**: Each spawn picks independently from the catalog
//! - **No wall kicks**: A rotation that does not fit in place fails
//! - **One steering command per frame**: The first the playfield accepts
//! - **Fast drop**: 10x wall-clock pacing while held; steering is suspended
//! - **Score**: Survival time, one point per ten frames
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::{GamePhase, GameSession, RenderSnapshot};
//! use matrix_tetris_types::InputCommand;
//!
//! let mut session = GameSession::new(12345);
//! session.frame(&[InputCommand::MoveLeft]);
//! session.frame(&[]);
//!
//! let mut snapshot = RenderSnapshot::default();
//! session.snapshot_into(&mut snapshot);
//! assert_eq!(session.phase(), GamePhase::Playing);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed frame step: the session counts frames, and
//! [`GameSession::frame_duration`] tells the caller how long to pace each
//! one (100ms normally, 10ms while fast-drop is held). Gravity fires
//! every `10 - floor(log5(elapsed_frames))` frames, never faster than
//! once per frame.

pub mod grid;
pub mod playfield;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use matrix_tetris_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, MAX_CLEARS_PER_LOCK};
pub use playfield::{Piece, Playfield};
pub use rng::SimpleRng;
pub use scheduler::{drop_interval_frames, DropScheduler};
pub use session::{GamePhase, GameSession};
pub use shapes::{catalog, Pattern, Shape};
pub use snapshot::RenderSnapshot;
