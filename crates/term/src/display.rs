//! Terminal implementations of the display and indicator ports.
//!
//! The ports only record what the board would show. [`crate::MatrixView`]
//! paints that state into a framebuffer each frame.

use crate::engine::{Display, Indicator};
use crate::types::{Bitmap, COLS};

/// Display frames between marquee steps
pub const DEFAULT_SCROLL_PERIOD: u32 = 6;

/// Text scrolled across the matrix, entering from the right edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marquee {
    chars: Vec<char>,
    offset: usize,
}

impl Marquee {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            offset: 0,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// One column left; wraps after the text has fully left the window.
    pub fn step(&mut self, width: usize) {
        self.offset = (self.offset + 1) % (self.chars.len() + width).max(1);
    }

    /// Character at window column `col` of a `width`-column window
    pub fn char_at(&self, col: usize, width: usize) -> char {
        // The text starts `width` columns to the right of the window.
        (col + self.offset)
            .checked_sub(width)
            .and_then(|i| self.chars.get(i).copied())
            .unwrap_or(' ')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Blank,
    Grid(Bitmap),
    Text(Marquee),
}

#[derive(Debug, Clone)]
pub struct TermDisplay {
    screen: Screen,
    scroll_period: u32,
    frames: u32,
    window: usize,
}

impl TermDisplay {
    /// `window` is the marquee width in characters.
    pub fn new(scroll_period: u32, window: usize) -> Self {
        Self {
            screen: Screen::Blank,
            scroll_period: scroll_period.max(1),
            frames: 0,
            window,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Advance the marquee clock by one rendered frame.
    pub fn advance_frame(&mut self) {
        self.frames = self.frames.wrapping_add(1);
        if self.frames % self.scroll_period != 0 {
            return;
        }
        let window = self.window;
        if let Screen::Text(marquee) = &mut self.screen {
            marquee.step(window);
        }
    }
}

impl Default for TermDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_PERIOD, COLS * 2)
    }
}

impl Display for TermDisplay {
    fn clear(&mut self) {
        self.screen = Screen::Blank;
    }

    fn draw(&mut self, bitmap: &Bitmap) {
        self.screen = Screen::Grid(*bitmap);
    }

    fn show_scrolling_text(&mut self, text: &str) {
        self.frames = 0;
        self.screen = Screen::Text(Marquee::new(text));
    }
}

/// Lamp beside the matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermIndicator {
    on: bool,
}

impl TermIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Indicator for TermIndicator {
    fn set(&mut self, on: bool) {
        self.on = on;
    }
}
