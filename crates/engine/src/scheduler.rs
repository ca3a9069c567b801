//! Cooperative fixed-rate task scheduler.
//!
//! One base tick drives every task. A task running at `rate` Hz fires every
//! `base_rate / rate` base ticks; due tasks run in registration order and never
//! overlap, so callbacks need no synchronization.

use arrayvec::ArrayVec;
use log::trace;
use thiserror::Error;

use crate::types::config::check_rate;
use crate::types::ConfigError;

/// Task table capacity
pub const MAX_TASKS: usize = 8;

/// Task callback, invoked with the scheduler's context
pub type TaskFn<C> = fn(&mut C);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Rate(#[from] ConfigError),
    #[error("task table full ({capacity} tasks), cannot add {task}")]
    Full { task: &'static str, capacity: usize },
}

struct Task<C> {
    name: &'static str,
    period: u32,
    countdown: u32,
    run: TaskFn<C>,
}

pub struct Scheduler<C> {
    base_rate: u32,
    tasks: ArrayVec<Task<C>, MAX_TASKS>,
    ticks: u64,
}

impl<C> Scheduler<C> {
    pub fn new(base_rate: u32) -> Self {
        Self {
            base_rate,
            tasks: ArrayVec::new(),
            ticks: 0,
        }
    }

    /// Register `run` at `rate` Hz. The first call happens one full period
    /// after registration.
    pub fn add(&mut self, name: &'static str, rate: u32, run: TaskFn<C>) -> Result<(), ScheduleError> {
        check_rate(name, rate, self.base_rate)?;
        let period = self.base_rate / rate;
        self.tasks
            .try_push(Task {
                name,
                period,
                countdown: period,
                run,
            })
            .map_err(|_| ScheduleError::Full {
                task: name,
                capacity: MAX_TASKS,
            })
    }

    /// Advance one base tick and run every task that falls due.
    pub fn tick(&mut self, ctx: &mut C) {
        self.ticks = self.ticks.wrapping_add(1);
        for task in self.tasks.iter_mut() {
            task.countdown -= 1;
            if task.countdown == 0 {
                task.countdown = task.period;
                trace!("tick {}: {}", self.ticks, task.name);
                (task.run)(ctx);
            }
        }
    }

    pub fn base_rate(&self) -> u32 {
        self.base_rate
    }

    /// Base ticks since construction
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Period in base ticks of the task called `name`
    pub fn period_of(&self, name: &str) -> Option<u32> {
        self.tasks.iter().find(|t| t.name == name).map(|t| t.period)
    }
}
