use log::debug;

use crate::time::Jiffies;

/// Owned virtual "now" of a single session simulator.
///
/// Only moves forward. Ticks are fired against this clock, never against the
/// host's wall clock, so a run is reproducible from its seed and toggle times.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Jiffies,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self { now: Jiffies::ZERO }
    }

    pub fn now(&self) -> Jiffies {
        self.now
    }

    pub(crate) fn fast_forward(&mut self, future: Jiffies) {
        debug_assert!(self.now <= future, "Future < Present");
        if future > self.now {
            self.now = future;
            debug!("Virtual time now: {future}");
        }
    }
}
