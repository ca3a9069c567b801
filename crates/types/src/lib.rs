//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (core logic, scheduler, terminal host).
//!
//! # Grid Dimensions
//!
//! The reference board is a 5 x 7 LED matrix:
//!
//! - **Width**: 5 columns (indexed 0-4)
//! - **Height**: 7 rows (indexed 0-6, 0 = top)
//! - **Spawn anchor**: (1, 0) for every shape
//!
//! # Task Rates
//!
//! Every periodic callback runs at a fixed rate derived from one base tick:
//!
//! | Constant | Value | Task |
//! |----------|-------|------|
//! | `BASE_TICK_RATE` | 300 Hz | scheduler base tick |
//! | `DISPLAY_TASK_RATE` | 300 Hz | grid redraw |
//! | `INPUT_TASK_RATE` | 50 Hz | input sampling |
//! | `LIFECYCLE_TASK_RATE` | 100 Hz | init/ready sequencing |
//! | `DROP_TASK_RATE` | 100 Hz | automatic drop |
//! | `FLASH_TASK_RATE` | 100 Hz | line-clear indicator |
//!
//! # Drop Interval
//!
//! Measured in drop-task ticks. Starts at `BASE_DROP_INTERVAL` and shrinks by
//! `DIFFICULTY_STEP` every `LINES_PER_LEVEL` cleared rows, never going below
//! `MIN_DROP_INTERVAL`.
//!
//! # Examples
//!
//! ```
//! use matrix_tetris_types::{ShapeKind, Spin, InputEvent, GRID_WIDTH, GRID_HEIGHT};
//!
//! // Shape selection is a pure function of the counter
//! assert_eq!(ShapeKind::select(0), ShapeKind::O);
//! assert_eq!(ShapeKind::select(8), ShapeKind::I);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//!
//! assert_eq!(Spin::Clockwise.inverse(), Spin::CounterClockwise);
//! assert_eq!(InputEvent::from_str("moveLeft"), Some(InputEvent::MoveLeft));
//!
//! assert_eq!(GRID_WIDTH, 5);
//! assert_eq!(GRID_HEIGHT, 7);
//! ```

pub mod config;

pub use config::{Config, ConfigError, DropConfig, FlashConfig, ShapeSelection, TaskRates};

/// Grid width in cells (5 columns)
pub const GRID_WIDTH: u8 = 5;

/// Grid height in cells (7 rows)
pub const GRID_HEIGHT: u8 = 7;

/// Grid width as an index bound
pub const COLS: usize = GRID_WIDTH as usize;

/// Grid height as an index bound
pub const ROWS: usize = GRID_HEIGHT as usize;

/// Anchor coordinate every new piece starts at
pub const SPAWN_ANCHOR: (i8, i8) = (1, 0);

/// Scheduler base tick rate (Hz). Every task rate must divide it.
pub const BASE_TICK_RATE: u32 = 300;

/// Grid redraw rate (Hz)
pub const DISPLAY_TASK_RATE: u32 = 300;

/// Input sampling rate (Hz)
pub const INPUT_TASK_RATE: u32 = 50;

/// Init/ready sequencing rate (Hz)
pub const LIFECYCLE_TASK_RATE: u32 = 100;

/// Automatic drop rate (Hz); the drop interval counts these ticks
pub const DROP_TASK_RATE: u32 = 100;

/// Line-clear indicator rate (Hz)
pub const FLASH_TASK_RATE: u32 = 100;

/// Drop interval at zero cleared rows (drop ticks)
pub const BASE_DROP_INTERVAL: u32 = 100;

/// Interval reduction per level (drop ticks)
pub const DIFFICULTY_STEP: u32 = 10;

/// Cleared rows per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Smallest drop interval the difficulty curve can reach (drop ticks)
pub const MIN_DROP_INTERVAL: u32 = 10;

/// Indicator toggles every this many flash ticks while flashing
pub const FLASH_TOGGLE_TICKS: u32 = 5;

/// Flash feedback length (flash ticks)
pub const FLASH_DURATION_TICKS: u32 = 20;

/// Capacity of the result message buffer (bytes)
pub const MESSAGE_CAPACITY: usize = 50;

/// Text scrolled while waiting for the first game
pub const ATTRACT_MESSAGE: &str = "Push button to start :)";

/// Prefix of the game over message; the cleared-row count follows it
pub const GAME_OVER_LABEL: &str = "Game Over - Lines:";

/// On/off snapshot of the whole grid, row-major, `bitmap[y][x]`
pub type Bitmap = [[bool; COLS]; ROWS];

/// Relative cell offset of a piece cell from its anchor
pub type Offset = (i8, i8);

/// The seven shapes, in catalog order
///
/// The catalog order matters: [`ShapeKind::select`] indexes it with a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    I,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// Number of shapes in the catalog
    pub const COUNT: usize = 7;

    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Pick a shape from the catalog: `ALL[counter mod 7]`
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::select(2), ShapeKind::T);
    /// assert_eq!(ShapeKind::select(2), ShapeKind::select(9));
    /// ```
    pub fn select(counter: u32) -> Self {
        Self::ALL[(counter % Self::COUNT as u32) as usize]
    }

    /// Position of this shape in the catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

/// One-cell translation of a piece anchor
///
/// `Up` only exists to undo a rejected `Down`; no input produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Anchor delta `(dx, dy)`; y grows downward
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Quarter-turn rotation sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// The spin that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// Edge-triggered input events, sampled once per input tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Start a game from `Ready` or `Over`
    Start,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Move piece one cell down
    MoveDown,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
}

impl InputEvent {
    /// Number of distinct events
    pub const COUNT: usize = 6;

    /// Every event, in the order an input tick processes them
    pub const ALL: [InputEvent; Self::COUNT] = [
        InputEvent::Start,
        InputEvent::RotateCw,
        InputEvent::RotateCcw,
        InputEvent::MoveDown,
        InputEvent::MoveLeft,
        InputEvent::MoveRight,
    ];

    /// Dense index for latch storage
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse event from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Some(InputEvent::Start),
            "rotatecw" => Some(InputEvent::RotateCw),
            "rotateccw" => Some(InputEvent::RotateCcw),
            "movedown" => Some(InputEvent::MoveDown),
            "moveleft" => Some(InputEvent::MoveLeft),
            "moveright" => Some(InputEvent::MoveRight),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Start => "start",
            InputEvent::RotateCw => "rotateCw",
            InputEvent::RotateCcw => "rotateCcw",
            InputEvent::MoveDown => "moveDown",
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
        }
    }
}

/// Tunes the audio collaborator is asked to play
///
/// The two melodies are owned by the audio driver; the rotation tones are short
/// note sequences in the driver's melody notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tune {
    /// Attract-mode theme
    Intro,
    /// Played once when the game ends
    GameOver,
    /// Short tone for an accepted clockwise rotation
    RotateCw,
    /// Short tone for an accepted counter-clockwise rotation
    RotateCcw,
}

impl Tune {
    /// Note sequence for the short tones; melodies return `None`
    pub fn notes(&self) -> Option<&'static str> {
        match self {
            Tune::Intro | Tune::GameOver => None,
            Tune::RotateCw => Some("D,"),
            Tune::RotateCcw => Some("E,"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tune::Intro => "intro",
            Tune::GameOver => "game_over",
            Tune::RotateCw => "rotate_cw",
            Tune::RotateCcw => "rotate_ccw",
        }
    }
}
