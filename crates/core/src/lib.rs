//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is free of I/O: the session returns [`Effect`]s and the
//! caller forwards them to whatever display, audio and indicator it owns.
//! All state lives in fixed-size arrays so the hot paths never allocate.
//!
//! # Module Structure
//!
//! - [`grid`]: 5x7 on/off field with collision checks and line clearing
//! - [`piece`]: shape catalog, translation and quarter-turn rotation
//! - [`rng`]: next-shape selection (seeded LCG or drop tick counter)
//! - [`timing`]: difficulty curve and automatic drop timer
//! - [`flash`]: indicator blink after a line clear
//! - [`session`]: lifecycle state machine tying the above together
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::{GameSession, GameState};
//! use matrix_tetris_types::InputEvent;
//!
//! let mut session = GameSession::with_seed(12345);
//! session.lifecycle_tick();
//! assert_eq!(session.state(), GameState::Ready);
//!
//! session.handle_input(InputEvent::Start);
//! session.handle_input(InputEvent::MoveRight);
//! for _ in 0..100 {
//!     session.drop_tick();
//! }
//! assert!(session.is_playing());
//! ```

pub mod flash;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod timing;

pub use matrix_tetris_types as types;

pub use flash::{FlashPhase, FlashTimer};
pub use grid::{ClearedRows, Grid};
pub use piece::{shape_offsets, Piece, CATALOG};
pub use rng::{ShapeSource, SimpleRng};
pub use session::{result_message, Effect, Effects, GameSession, GameState, Message};
pub use timing::{DropPolicy, DropTimer};
