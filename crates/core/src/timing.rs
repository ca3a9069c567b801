//! Timing module - difficulty scaling and the automatic drop timer
//!
//! The drop interval is measured in drop-task ticks and shrinks as rows are
//! cleared. The timer counts drop ticks and reports when a drop is due.

use crate::types::DropConfig;

/// Maps cleared rows to a drop interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPolicy {
    base_interval: u32,
    step: u32,
    lines_per_level: u32,
    floor: u32,
}

impl DropPolicy {
    /// Build a policy. A zero `lines_per_level` or `floor` is bumped to 1 so
    /// the interval stays well defined; `Config::validate` rejects both.
    pub fn new(config: DropConfig) -> Self {
        Self {
            base_interval: config.base_interval,
            step: config.step,
            lines_per_level: config.lines_per_level.max(1),
            floor: config.floor.max(1),
        }
    }

    /// Difficulty level reached after `cleared_rows` rows
    pub fn level(&self, cleared_rows: u32) -> u32 {
        cleared_rows / self.lines_per_level
    }

    /// Drop interval in ticks: `base - level * step`, never below the floor
    pub fn interval(&self, cleared_rows: u32) -> u32 {
        let speedup = self.level(cleared_rows).saturating_mul(self.step);
        self.base_interval.saturating_sub(speedup).max(self.floor)
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }
}

impl Default for DropPolicy {
    fn default() -> Self {
        Self::new(DropConfig::default())
    }
}

/// Free-running drop tick counter
///
/// A drop is due on a tick whose counter value is a multiple of the current
/// interval; the counter then restarts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropTimer {
    ticks: u32,
}

impl DropTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one drop tick. Returns true when a drop is due.
    ///
    /// The counter runs whether or not a game is in progress; drops are only
    /// reported while `playing`.
    pub fn tick(&mut self, playing: bool, interval: u32) -> bool {
        let due = playing && self.ticks % interval.max(1) == 0;
        if due {
            self.ticks = 0;
        }
        self.ticks = self.ticks.wrapping_add(1);
        due
    }

    /// Restart the count so the first drop comes one full interval from now
    pub fn restart(&mut self) {
        self.ticks = 1;
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_curve() {
        let policy = DropPolicy::default();
        assert_eq!(policy.interval(0), 100);
        assert_eq!(policy.interval(9), 100);
        assert_eq!(policy.interval(10), 90);
        assert_eq!(policy.interval(25), 80);
        assert_eq!(policy.interval(90), 10);
        // The uncapped curve would reach zero at level 10.
        assert_eq!(policy.interval(100), 10);
        assert_eq!(policy.interval(u32::MAX), 10);
    }

    #[test]
    fn test_custom_floor_holds() {
        let policy = DropPolicy::new(DropConfig {
            base_interval: 30,
            step: 7,
            lines_per_level: 1,
            floor: 5,
        });
        assert_eq!(policy.interval(0), 30);
        assert_eq!(policy.interval(3), 9);
        assert_eq!(policy.interval(4), 5);
        assert_eq!(policy.interval(50), 5);
    }

    #[test]
    fn test_degenerate_config_is_clamped() {
        let policy = DropPolicy::new(DropConfig {
            base_interval: 0,
            step: 0,
            lines_per_level: 0,
            floor: 0,
        });
        assert_eq!(policy.interval(3), 1);
        assert_eq!(policy.level(3), 3);
    }

    #[test]
    fn test_timer_fires_every_interval() {
        let mut timer = DropTimer::new();
        timer.restart();

        let fired: Vec<u32> = (1..=30).filter(|_| timer.tick(true, 10)).collect();
        assert_eq!(fired, vec![10, 20, 30]);
    }

    #[test]
    fn test_timer_silent_when_not_playing() {
        let mut timer = DropTimer::new();
        for _ in 0..50 {
            assert!(!timer.tick(false, 5));
        }
        assert_eq!(timer.ticks(), 50);
        // Counter kept running: 50 is a multiple of 5.
        assert!(timer.tick(true, 5));
    }

    #[test]
    fn test_fresh_timer_fires_immediately() {
        let mut timer = DropTimer::new();
        assert!(timer.tick(true, 100));
        assert!(!timer.tick(true, 100));
    }
}
