//! Edge latch between the host's event source and the input task.
//!
//! Key presses arrive whenever the host polls; the input task samples them at
//! its own rate. Each event is latched once and consumed by the next sample,
//! so repeated presses between two samples collapse into one.

use arrayvec::ArrayVec;

use crate::types::InputEvent;

/// Events drained by one input sample, in processing order
pub type Sampled = ArrayVec<InputEvent, { InputEvent::COUNT }>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pending: [bool; InputEvent::COUNT],
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, event: InputEvent) {
        self.pending[event.index()] = true;
    }

    pub fn is_pending(&self, event: InputEvent) -> bool {
        self.pending[event.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.pending.iter().any(|&p| p)
    }

    /// Take every latched event in [`InputEvent::ALL`] order and clear the latch.
    pub fn drain(&mut self) -> Sampled {
        let mut out = Sampled::new();
        for event in InputEvent::ALL {
            if std::mem::take(&mut self.pending[event.index()]) {
                out.push(event);
            }
        }
        out
    }
}
