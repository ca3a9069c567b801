//! Host runtime for the game core.
//!
//! [`Runtime`] drives a [`Machine`] from a fixed-rate [`Scheduler`]. The machine
//! owns the [`GameSession`](crate::core::GameSession) and forwards its effects
//! to the [`Display`], [`Audio`] and [`Indicator`] ports supplied by the host.

pub mod latch;
pub mod machine;
pub mod ports;
pub mod runtime;
pub mod scheduler;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use latch::{InputLatch, Sampled};
pub use machine::Machine;
pub use ports::{Audio, Display, Indicator, LogAudio};
pub use runtime::Runtime;
pub use scheduler::{ScheduleError, Scheduler, TaskFn, MAX_TASKS};
