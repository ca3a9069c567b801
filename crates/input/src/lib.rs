//! Terminal input module.
//!
//! Maps `crossterm` key events onto the game's [`crate::types::InputEvent`]s.
//! Sampling and edge latching live in the engine; this crate only translates.

pub mod map;

pub use matrix_tetris_types as types;

pub use map::{handle_key_event, is_press, should_quit};
