//! Matrix Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one path so the binary, benches and
//! integration tests can use `matrix_tetris::{core,engine,input,term,types}`.

pub use matrix_tetris_core as core;
pub use matrix_tetris_engine as engine;
pub use matrix_tetris_input as input;
pub use matrix_tetris_term as term;
pub use matrix_tetris_types as types;
