//! Runtime configuration.
//!
//! `Config::default()` reproduces the reference board. Hosts may override any
//! field and must call [`Config::validate`] before handing it to the runtime.

use thiserror::Error;

use crate::{
    BASE_DROP_INTERVAL, BASE_TICK_RATE, DIFFICULTY_STEP, DISPLAY_TASK_RATE, DROP_TASK_RATE,
    FLASH_DURATION_TICKS, FLASH_TASK_RATE, FLASH_TOGGLE_TICKS, INPUT_TASK_RATE,
    LIFECYCLE_TASK_RATE, LINES_PER_LEVEL, MIN_DROP_INTERVAL,
};

/// How the next shape is chosen at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeSelection {
    /// Seeded PRNG owned by the session, advanced once per spawn
    #[default]
    Seeded,
    /// Free-running drop tick counter since boot, modulo the catalog size
    Ticks,
}

impl ShapeSelection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "seeded" => Some(ShapeSelection::Seeded),
            "ticks" => Some(ShapeSelection::Ticks),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeSelection::Seeded => "seeded",
            ShapeSelection::Ticks => "ticks",
        }
    }
}

/// Difficulty curve, in drop-task ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropConfig {
    pub base_interval: u32,
    pub step: u32,
    pub lines_per_level: u32,
    pub floor: u32,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            base_interval: BASE_DROP_INTERVAL,
            step: DIFFICULTY_STEP,
            lines_per_level: LINES_PER_LEVEL,
            floor: MIN_DROP_INTERVAL,
        }
    }
}

/// Line-clear indicator timing, in flash-task ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashConfig {
    pub toggle_ticks: u32,
    pub duration_ticks: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            toggle_ticks: FLASH_TOGGLE_TICKS,
            duration_ticks: FLASH_DURATION_TICKS,
        }
    }
}

/// Scheduler rates in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRates {
    pub base: u32,
    pub lifecycle: u32,
    pub drop: u32,
    pub input: u32,
    pub display: u32,
    pub flash: u32,
}

impl TaskRates {
    /// `(task name, rate)` pairs, base excluded
    pub fn tasks(&self) -> [(&'static str, u32); 5] {
        [
            ("lifecycle", self.lifecycle),
            ("drop", self.drop),
            ("input", self.input),
            ("display", self.display),
            ("flash", self.flash),
        ]
    }
}

impl Default for TaskRates {
    fn default() -> Self {
        Self {
            base: BASE_TICK_RATE,
            lifecycle: LIFECYCLE_TASK_RATE,
            drop: DROP_TASK_RATE,
            input: INPUT_TASK_RATE,
            display: DISPLAY_TASK_RATE,
            flash: FLASH_TASK_RATE,
        }
    }
}

/// Every tunable of a game session and its host runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub selection: ShapeSelection,
    pub drop: DropConfig,
    pub flash: FlashConfig,
    pub rates: TaskRates,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            selection: ShapeSelection::default(),
            drop: DropConfig::default(),
            flash: FlashConfig::default(),
            rates: TaskRates::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("drop interval floor must be at least 1 tick")]
    ZeroFloor,
    #[error("drop interval floor {floor} exceeds base interval {base}")]
    FloorAboveBase { floor: u32, base: u32 },
    #[error("lines per level must be at least 1")]
    ZeroLinesPerLevel,
    #[error("flash toggle period must be at least 1 tick")]
    ZeroToggle,
    #[error("{task} task rate must be non-zero")]
    ZeroRate { task: &'static str },
    #[error("{task} task rate {rate} Hz exceeds base tick rate {base} Hz")]
    RateAboveBase {
        task: &'static str,
        rate: u32,
        base: u32,
    },
    #[error("{task} task rate {rate} Hz does not divide base tick rate {base} Hz")]
    UnevenRate {
        task: &'static str,
        rate: u32,
        base: u32,
    },
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let drop = &self.drop;
        if drop.floor == 0 {
            return Err(ConfigError::ZeroFloor);
        }
        if drop.floor > drop.base_interval {
            return Err(ConfigError::FloorAboveBase {
                floor: drop.floor,
                base: drop.base_interval,
            });
        }
        if drop.lines_per_level == 0 {
            return Err(ConfigError::ZeroLinesPerLevel);
        }
        if self.flash.toggle_ticks == 0 {
            return Err(ConfigError::ZeroToggle);
        }

        let base = self.rates.base;
        if base == 0 {
            return Err(ConfigError::ZeroRate { task: "base" });
        }
        for (task, rate) in self.rates.tasks() {
            check_rate(task, rate, base)?;
        }
        Ok(())
    }
}

/// Check that a task running at `rate` Hz maps onto a whole number of base ticks.
pub fn check_rate(task: &'static str, rate: u32, base: u32) -> Result<(), ConfigError> {
    if rate == 0 {
        return Err(ConfigError::ZeroRate { task });
    }
    if rate > base {
        return Err(ConfigError::RateAboveBase { task, rate, base });
    }
    if base % rate != 0 {
        return Err(ConfigError::UnevenRate { task, rate, base });
    }
    Ok(())
}
