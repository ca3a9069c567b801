//! RNG module - next-shape selection
//!
//! Two sources are supported:
//! - a seeded LCG owned by the session, advanced once per spawn (default);
//! - the free-running drop tick counter, which couples the shape sequence to
//!   elapsed time since boot.
//!
//! Both are deterministic for a fixed seed / tick history.

use crate::types::{ShapeKind, ShapeSelection};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value from the high half of the state.
    ///
    /// The low bits of a power-of-two LCG cycle with short periods.
    pub fn next_u16(&mut self) -> u16 {
        (self.next_u32() >> 16) as u16
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where the next shape comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeSource {
    Seeded(SimpleRng),
    Ticks { ticks: u32 },
}

impl ShapeSource {
    pub fn new(selection: ShapeSelection, seed: u32) -> Self {
        match selection {
            ShapeSelection::Seeded => ShapeSource::Seeded(SimpleRng::new(seed)),
            ShapeSelection::Ticks => ShapeSource::Ticks { ticks: 0 },
        }
    }

    pub fn seeded(seed: u32) -> Self {
        Self::new(ShapeSelection::Seeded, seed)
    }

    pub fn selection(&self) -> ShapeSelection {
        match self {
            ShapeSource::Seeded(_) => ShapeSelection::Seeded,
            ShapeSource::Ticks { .. } => ShapeSelection::Ticks,
        }
    }

    /// Advance the tick counter by one drop tick. No-op for the seeded source.
    pub fn advance_tick(&mut self) {
        if let ShapeSource::Ticks { ticks } = self {
            *ticks = ticks.wrapping_add(1);
        }
    }

    /// Choose the shape for the next spawn
    pub fn next_shape(&mut self) -> ShapeKind {
        match self {
            ShapeSource::Seeded(rng) => ShapeKind::select(u32::from(rng.next_u16())),
            ShapeSource::Ticks { ticks } => ShapeKind::select(*ticks),
        }
    }
}

impl Default for ShapeSource {
    fn default() -> Self {
        Self::seeded(1)
    }
}
