//! Flash module - line-clear feedback on the indicator light
//!
//! Watches the cleared-row counter. Each increase blinks the indicator for a
//! fixed number of ticks, independent of the drop timing.

use log::trace;

use crate::types::FlashConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Idle,
    Flashing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashTimer {
    toggle_ticks: u32,
    duration_ticks: u32,
    phase: FlashPhase,
    /// Ticks since the current flash started
    elapsed: u32,
    /// Cleared-row count at the last observation
    seen_rows: u32,
    lit: bool,
}

impl FlashTimer {
    pub fn new(config: FlashConfig) -> Self {
        Self {
            toggle_ticks: config.toggle_ticks.max(1),
            duration_ticks: config.duration_ticks,
            phase: FlashPhase::Idle,
            elapsed: 0,
            seen_rows: 0,
            lit: false,
        }
    }

    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Advance one flash tick.
    ///
    /// Returns `Some(on)` when the indicator must change, `None` otherwise.
    /// Outside `playing` no flash starts and a running flash is cut short with
    /// the indicator off.
    pub fn tick(&mut self, playing: bool, cleared_rows: u32) -> Option<bool> {
        let out = if playing {
            self.step(cleared_rows)
        } else {
            self.seen_rows = self.seen_rows.min(cleared_rows);
            self.stop()
        };
        self.elapsed = self.elapsed.wrapping_add(1);
        out
    }

    fn step(&mut self, cleared_rows: u32) -> Option<bool> {
        if cleared_rows < self.seen_rows {
            // New game: re-baseline without flashing.
            self.seen_rows = cleared_rows;
        }
        if cleared_rows > self.seen_rows {
            trace!("flash start at {} rows", cleared_rows);
            self.seen_rows = cleared_rows;
            self.phase = FlashPhase::Flashing;
            self.elapsed = 0;
            self.lit = false;
        }

        if self.phase != FlashPhase::Flashing {
            return None;
        }
        if self.elapsed > self.duration_ticks {
            return self.stop();
        }
        if self.elapsed % self.toggle_ticks == 0 {
            self.lit = !self.lit;
            return Some(self.lit);
        }
        None
    }

    fn stop(&mut self) -> Option<bool> {
        if self.phase == FlashPhase::Idle {
            return None;
        }
        self.phase = FlashPhase::Idle;
        self.lit = false;
        Some(false)
    }
}

impl Default for FlashTimer {
    fn default() -> Self {
        Self::new(FlashConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(timer: &mut FlashTimer, ticks: u32, playing: bool, rows: u32) -> Vec<(u32, bool)> {
        (0..ticks)
            .filter_map(|t| timer.tick(playing, rows).map(|on| (t, on)))
            .collect()
    }

    #[test]
    fn test_idle_without_clears() {
        let mut timer = FlashTimer::default();
        assert!(run(&mut timer, 100, true, 0).is_empty());
        assert_eq!(timer.phase(), FlashPhase::Idle);
    }

    #[test]
    fn test_blink_pattern_then_off() {
        let mut timer = FlashTimer::default();
        let out = run(&mut timer, 40, true, 1);
        assert_eq!(
            out,
            vec![(0, true), (5, false), (10, true), (15, false), (20, true), (21, false)]
        );
        assert_eq!(timer.phase(), FlashPhase::Idle);
        assert!(!timer.is_lit());
    }

    #[test]
    fn test_new_clear_restarts_flash() {
        let mut timer = FlashTimer::default();
        run(&mut timer, 12, true, 1);
        assert_eq!(timer.phase(), FlashPhase::Flashing);

        // Second clear mid-flash restarts the elapsed count.
        assert_eq!(timer.tick(true, 2), Some(true));
        let out = run(&mut timer, 30, true, 2);
        assert_eq!(out.last(), Some(&(20, false)));
    }

    #[test]
    fn test_leaving_play_forces_off() {
        let mut timer = FlashTimer::default();
        run(&mut timer, 3, true, 4);
        assert!(timer.is_lit());

        assert_eq!(timer.tick(false, 4), Some(false));
        assert_eq!(timer.tick(false, 4), None);
        assert_eq!(timer.phase(), FlashPhase::Idle);
    }

    #[test]
    fn test_counter_reset_does_not_flash() {
        let mut timer = FlashTimer::default();
        run(&mut timer, 30, true, 5);

        // Restarted game: counter falls back to zero.
        assert!(run(&mut timer, 30, true, 0).is_empty());
        // First clear of the new game flashes again.
        assert_eq!(timer.tick(true, 1), Some(true));
    }
}
