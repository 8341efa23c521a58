//! Repeating, cancellable timers for the session simulator.
//!
//! A [`Ticker`] keeps every armed timer in a deadline-ordered heap. Starting a
//! timer returns a [`TickerHandle`]; stopping that handle takes effect
//! immediately, so a deadline that was already queued is discarded instead of
//! being fired. Timers fire for the first time one full period after they were
//! started, never at the start instant itself.

use std::{
    cell::Cell,
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
    rc::Rc,
};

use log::debug;

use crate::time::Jiffies;

/// Identifier of an armed timer.
///
/// Identifiers are unique within a single [`Ticker`] and are never reused, so
/// a late deadline belonging to a stopped timer can always be told apart from
/// the timer that replaced it.
pub type TimerId = usize;

/// Cancellation handle for a repeating timer started by [`Ticker::start`].
///
/// Stopping is synchronous and idempotent: once [`TickerHandle::stop`]
/// returns, the ticker will not report this timer again.
#[derive(Debug)]
pub struct TickerHandle {
    id: TimerId,
    stopped: Rc<Cell<bool>>,
}

impl TickerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn stop(&self) {
        if !self.stopped.replace(true) {
            debug!("Stopping timer {}", self.id);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

struct Registration {
    period: Jiffies,
    stopped: Rc<Cell<bool>>,
}

#[derive(Default)]
pub struct Ticker {
    working_timers: BinaryHeap<Reverse<(Jiffies, TimerId)>>,
    registrations: BTreeMap<TimerId, Registration>,
    next_id: TimerId,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a timer that fires every `period`, first at `now + period`.
    pub fn start(&mut self, now: Jiffies, period: Jiffies) -> TickerHandle {
        assert!(period > Jiffies::ZERO, "Tick period should be positive");

        self.next_id += 1;
        let id = self.next_id;
        let stopped = Rc::new(Cell::new(false));

        self.registrations.insert(
            id,
            Registration {
                period,
                stopped: stopped.clone(),
            },
        );
        self.working_timers.push(Reverse((now + period, id)));
        debug!("Started timer {id} with period {period}, first deadline at {}", now + period);

        TickerHandle { id, stopped }
    }

    /// Number of timers that are still armed.
    pub fn active(&self) -> usize {
        self.registrations
            .values()
            .filter(|registration| !registration.stopped.get())
            .count()
    }

    /// Closest deadline of a timer that has not been stopped.
    pub fn peek_closest(&mut self) -> Option<Jiffies> {
        self.discard_stopped();
        self.working_timers.peek().map(|entry| entry.0.0)
    }

    /// Pops the earliest live deadline if it is due at `now`, re-arming it one
    /// period later.
    pub fn pop_due(&mut self, now: Jiffies) -> Option<(Jiffies, TimerId)> {
        self.discard_stopped();

        let Reverse((deadline, _)) = self.working_timers.peek()?;
        if *deadline > now {
            return None;
        }

        let Reverse((deadline, id)) = self.working_timers.pop()?;
        let period = self.registrations.get(&id)?.period;
        self.working_timers.push(Reverse((deadline + period, id)));

        debug!("Firing timer {id} scheduled for {deadline}");
        Some((deadline, id))
    }

    fn discard_stopped(&mut self) {
        while let Some(Reverse((_, id))) = self.working_timers.peek().copied() {
            let live = self
                .registrations
                .get(&id)
                .is_some_and(|registration| !registration.stopped.get());
            if live {
                break;
            }

            self.working_timers.pop();
            if self.registrations.remove(&id).is_some() {
                debug!("Discarded stopped timer {id}");
            }
        }
    }
}
