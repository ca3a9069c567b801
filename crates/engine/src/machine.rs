//! Task context: the game session plus everything the periodic tasks touch.
//!
//! Each `*_task` method is one scheduler callback. They run one at a time, so
//! the session, flash timer and latch are plain fields.

use log::debug;

use crate::core::{Effect, FlashTimer, GameSession};
use crate::latch::InputLatch;
use crate::ports::{Audio, Display, Indicator};
use crate::types::{Config, InputEvent};

pub struct Machine<D, A, I> {
    session: GameSession,
    flash: FlashTimer,
    latch: InputLatch,
    display: D,
    audio: A,
    indicator: I,
}

impl<D: Display, A: Audio, I: Indicator> Machine<D, A, I> {
    pub fn new(config: &Config, display: D, audio: A, indicator: I) -> Self {
        Self {
            session: GameSession::new(config),
            flash: FlashTimer::new(config.flash),
            latch: InputLatch::new(),
            display,
            audio,
            indicator,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn flash(&self) -> &FlashTimer {
        &self.flash
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Latch an input event for the next input sample
    pub fn press(&mut self, event: InputEvent) {
        self.latch.press(event);
    }

    pub fn lifecycle_task(&mut self) {
        let fx = self.session.lifecycle_tick();
        self.dispatch(&fx);
    }

    pub fn drop_task(&mut self) {
        let fx = self.session.drop_tick();
        self.dispatch(&fx);
    }

    pub fn input_task(&mut self) {
        for event in self.latch.drain() {
            debug!("input {}", event.as_str());
            let fx = self.session.handle_input(event);
            self.dispatch(&fx);
        }
    }

    /// Redraw the grid while a game is running. Outside play the display keeps
    /// scrolling whatever text it was last given.
    pub fn display_task(&mut self) {
        if self.session.is_playing() {
            self.display.draw(&self.session.grid().bitmap());
        }
    }

    pub fn flash_task(&mut self) {
        let playing = self.session.is_playing();
        if let Some(on) = self.flash.tick(playing, self.session.cleared_rows()) {
            self.indicator.set(on);
        }
    }

    fn dispatch(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::ClearDisplay => self.display.clear(),
                Effect::ShowText(text) => self.display.show_scrolling_text(text.as_str()),
                Effect::PlayTune(tune) => self.audio.play(*tune),
                Effect::StopTune => self.audio.stop(),
            }
        }
    }
}
