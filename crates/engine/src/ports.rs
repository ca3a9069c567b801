//! Collaborator ports.
//!
//! The machine talks to the outside world only through these traits. Every
//! request is one-shot; implementations must not call back into the machine.

use log::info;

use crate::types::{Bitmap, Tune};

pub trait Display {
    fn clear(&mut self);
    /// Show the grid bitmap, replacing any scrolling text
    fn draw(&mut self, bitmap: &Bitmap);
    /// Start scrolling `text`; it keeps scrolling until the next clear or draw
    fn show_scrolling_text(&mut self, text: &str);
}

pub trait Audio {
    fn play(&mut self, tune: Tune);
    fn stop(&mut self);
}

pub trait Indicator {
    fn set(&mut self, on: bool);
}

/// Audio port for hosts without a speaker: tune requests go to the log.
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    playing: Option<Tune>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last tune requested and not yet stopped
    pub fn playing(&self) -> Option<Tune> {
        self.playing
    }
}

impl Audio for LogAudio {
    fn play(&mut self, tune: Tune) {
        match tune.notes() {
            Some(notes) => info!("audio: {} ({})", tune.as_str(), notes),
            None => info!("audio: {}", tune.as_str()),
        }
        self.playing = Some(tune);
    }

    fn stop(&mut self) {
        if let Some(tune) = self.playing.take() {
            info!("audio: stop {}", tune.as_str());
        }
    }
}
