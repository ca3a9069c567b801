//! Game session module - the top-level state machine
//!
//! A [`GameSession`] owns the grid and sequences the game lifecycle:
//!
//! ```text
//! Init --lifecycle tick--> Ready --start--> Playing --spawn blocked--> Over
//!                                              ^                        |
//!                                              +---------start----------+
//! ```
//!
//! Methods never touch collaborators directly. They return the requests the
//! caller must forward (clear the display, play a tune, ...) as a small fixed
//! list of [`Effect`]s, which keeps the session pure and testable.

use core::fmt::Write as _;

use arrayvec::{ArrayString, ArrayVec};
use log::{debug, info};

use crate::grid::Grid;
use crate::rng::ShapeSource;
use crate::timing::{DropPolicy, DropTimer};
use crate::types::{
    Config, Direction, InputEvent, Spin, Tune, ATTRACT_MESSAGE, GAME_OVER_LABEL,
    MESSAGE_CAPACITY,
};

/// Fixed-capacity text for the display collaborator
pub type Message = ArrayString<MESSAGE_CAPACITY>;

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Powered up, attract sequence not yet shown
    Init,
    /// Attract text scrolling, waiting for start
    Ready,
    Playing,
    /// Result message scrolling, waiting for start
    Over,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Init => "init",
            GameState::Ready => "ready",
            GameState::Playing => "playing",
            GameState::Over => "over",
        }
    }
}

/// A one-shot request for a collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ClearDisplay,
    ShowText(Message),
    PlayTune(Tune),
    StopTune,
}

/// Requests produced by one session call, in issue order
pub type Effects = ArrayVec<Effect, 4>;

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    grid: Grid,
    message: Message,
    shapes: ShapeSource,
    drop_policy: DropPolicy,
    drop_timer: DropTimer,
}

impl GameSession {
    pub fn new(config: &Config) -> Self {
        Self {
            state: GameState::Init,
            grid: Grid::new(),
            message: Message::new(),
            shapes: ShapeSource::new(config.selection, config.seed),
            drop_policy: DropPolicy::new(config.drop),
            drop_timer: DropTimer::new(),
        }
    }

    /// Default configuration with a specific seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(&Config {
            seed,
            ..Config::default()
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for fixtures and tools. Game rules do not go through
    /// this; use the session methods.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Result text composed on the last game over (empty before that)
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn cleared_rows(&self) -> u32 {
        self.grid.cleared_rows()
    }

    pub fn level(&self) -> u32 {
        self.drop_policy.level(self.grid.cleared_rows())
    }

    /// Current drop interval in drop ticks
    pub fn drop_interval(&self) -> u32 {
        self.drop_policy.interval(self.grid.cleared_rows())
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    pub fn shapes(&self) -> &ShapeSource {
        &self.shapes
    }

    /// Lifecycle callback. The first call moves `Init` to `Ready` and starts the
    /// attract sequence; later calls do nothing.
    pub fn lifecycle_tick(&mut self) -> Effects {
        let mut fx = Effects::new();
        if self.state == GameState::Init {
            fx.push(Effect::ShowText(text(ATTRACT_MESSAGE)));
            fx.push(Effect::PlayTune(Tune::Intro));
            self.enter(GameState::Ready);
        }
        fx
    }

    /// Apply one sampled input event.
    ///
    /// `Start` only acts in `Ready` and `Over`; every other event only acts in
    /// `Playing`. A rejected move or rotation produces no effect.
    pub fn handle_input(&mut self, event: InputEvent) -> Effects {
        let mut fx = Effects::new();
        match (self.state, event) {
            (GameState::Ready | GameState::Over, InputEvent::Start) => self.start(&mut fx),
            (GameState::Playing, InputEvent::RotateCw) => {
                if self.grid.try_rotate(Spin::Clockwise) {
                    fx.push(Effect::PlayTune(Tune::RotateCw));
                }
            }
            (GameState::Playing, InputEvent::RotateCcw) => {
                if self.grid.try_rotate(Spin::CounterClockwise) {
                    fx.push(Effect::PlayTune(Tune::RotateCcw));
                }
            }
            (GameState::Playing, InputEvent::MoveDown) => {
                self.grid.try_move(Direction::Down);
            }
            (GameState::Playing, InputEvent::MoveLeft) => {
                self.grid.try_move(Direction::Left);
            }
            (GameState::Playing, InputEvent::MoveRight) => {
                self.grid.try_move(Direction::Right);
            }
            _ => {}
        }
        fx
    }

    /// Drop callback. Advances the drop timer (and the tick shape counter) by
    /// one tick and runs a drop step when one is due.
    pub fn drop_tick(&mut self) -> Effects {
        self.shapes.advance_tick();
        let interval = self.drop_interval();
        if self.drop_timer.tick(self.is_playing(), interval) {
            self.drop_step()
        } else {
            Effects::new()
        }
    }

    /// One automatic drop: move down, or lock, clear lines and spawn the next
    /// piece. A blocked spawn ends the game.
    pub fn drop_step(&mut self) -> Effects {
        let mut fx = Effects::new();
        if !self.is_playing() || self.grid.try_move(Direction::Down) {
            return fx;
        }

        let piece = *self.grid.active();
        debug!("locked {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);
        self.grid.check_and_clear_full_lines();

        if !self.spawn_next() {
            self.game_over(&mut fx);
        }
        fx
    }

    fn start(&mut self, fx: &mut Effects) {
        fx.push(Effect::ClearDisplay);
        fx.push(Effect::StopTune);
        self.grid.reset();
        self.message.clear();
        self.drop_timer.restart();
        self.enter(GameState::Playing);

        // An empty grid always has room at the spawn anchor.
        if !self.spawn_next() {
            self.game_over(fx);
        }
    }

    fn spawn_next(&mut self) -> bool {
        let kind = self.shapes.next_shape();
        let placed = self.grid.try_spawn(kind);
        if placed {
            debug!("spawned {}", kind.as_str());
        } else {
            debug!("spawn of {} blocked", kind.as_str());
        }
        placed
    }

    fn game_over(&mut self, fx: &mut Effects) {
        self.message = result_message(self.grid.cleared_rows());
        fx.push(Effect::PlayTune(Tune::GameOver));
        fx.push(Effect::ClearDisplay);
        fx.push(Effect::ShowText(self.message));
        info!("game over, {} lines", self.grid.cleared_rows());
        self.enter(GameState::Over);
    }

    fn enter(&mut self, next: GameState) {
        info!("{} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// `"Game Over - Lines:"` followed by the decimal row count
pub fn result_message(cleared_rows: u32) -> Message {
    let mut msg = Message::new();
    // Label plus the widest u32 fits the capacity.
    let _ = write!(msg, "{}{}", GAME_OVER_LABEL, cleared_rows);
    msg
}

fn text(s: &str) -> Message {
    let mut msg = Message::new();
    for ch in s.chars() {
        if msg.try_push(ch).is_err() {
            break;
        }
    }
    msg
}
