//! Terminal host for the LED matrix board.
//!
//! Emulates the board's display and indicator in a terminal: the ports record
//! what the board shows, [`MatrixView`] paints it into a [`FrameBuffer`] and
//! [`TerminalRenderer`] flushes changed cells with crossterm.

pub mod display;
pub mod fb;
pub mod matrix_view;
pub mod renderer;

pub use matrix_tetris_core as core;
pub use matrix_tetris_engine as engine;
pub use matrix_tetris_types as types;

pub use display::{Marquee, Screen, TermDisplay, TermIndicator, DEFAULT_SCROLL_PERIOD};
pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use matrix_view::{MatrixView, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
