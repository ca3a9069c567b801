//! Scheduler and machine wired together.

use log::info;

use crate::machine::Machine;
use crate::ports::{Audio, Display, Indicator};
use crate::scheduler::{ScheduleError, Scheduler};
use crate::types::{Config, InputEvent};

pub struct Runtime<D, A, I> {
    scheduler: Scheduler<Machine<D, A, I>>,
    machine: Machine<D, A, I>,
}

impl<D: Display, A: Audio, I: Indicator> Runtime<D, A, I> {
    /// Validate `config` and register the five game tasks.
    pub fn new(config: &Config, display: D, audio: A, indicator: I) -> Result<Self, ScheduleError> {
        config.validate()?;

        let rates = &config.rates;
        let mut scheduler: Scheduler<Machine<D, A, I>> = Scheduler::new(rates.base);
        scheduler.add("lifecycle", rates.lifecycle, Machine::lifecycle_task)?;
        scheduler.add("drop", rates.drop, Machine::drop_task)?;
        scheduler.add("input", rates.input, Machine::input_task)?;
        scheduler.add("display", rates.display, Machine::display_task)?;
        scheduler.add("flash", rates.flash, Machine::flash_task)?;
        info!(
            "runtime: base {} Hz, {} tasks, {} selection",
            rates.base,
            scheduler.len(),
            config.selection.as_str()
        );

        Ok(Self {
            scheduler,
            machine: Machine::new(config, display, audio, indicator),
        })
    }

    /// Advance one base tick
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.machine);
    }

    pub fn press(&mut self, event: InputEvent) {
        self.machine.press(event);
    }

    pub fn machine(&self) -> &Machine<D, A, I> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut Machine<D, A, I> {
        &mut self.machine
    }

    pub fn scheduler(&self) -> &Scheduler<Machine<D, A, I>> {
        &self.scheduler
    }

    pub fn base_rate(&self) -> u32 {
        self.scheduler.base_rate()
    }
}
