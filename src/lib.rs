//! Matrix Tetris (workspace facade crate).
//!
//! This package keeps a single `matrix_tetris::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use matrix_tetris_core as core;
pub use matrix_tetris_input as input;
pub use matrix_tetris_term as term;
pub use matrix_tetris_types as types;
