//! The session simulator: one owned object holding the toggle state, the
//! elapsed-time clock, the metric generator and the ticker that drives them.
//!
//! Adapters hold the simulator and call into it: input adapters forward
//! activations to [`SessionSimulator::toggle`], drivers move virtual time with
//! [`SessionSimulator::advance_to`], and every published value goes to the
//! [`Presentation`] passed along with the call.

use rand::{RngCore, rngs::StdRng};

use crate::{
    debug_session,
    input::Activation,
    metrics::{MetricGenerator, MetricSample},
    parse::leading_count,
    presentation::{Presentation, Region, ToggleVisual},
    random::Seed,
    session::{Clock, SessionState, ToggleController},
    time::{Jiffies, Ticker, TimerId, VirtualClock},
};

pub const DEFAULT_TICK_PERIOD: Jiffies = Jiffies::from_secs(1);

pub struct SessionSimulator<R: RngCore = StdRng> {
    toggle: ToggleController,
    clock: Clock,
    generator: MetricGenerator<R>,
    sample: Option<MetricSample>,
    ticker: Ticker,
    time: VirtualClock,
    tick_period: Jiffies,
    ticks: usize,
}

impl SessionSimulator {
    pub fn new(seed: Seed) -> Self {
        Self::with_parts(Clock::default(), MetricGenerator::new(seed), DEFAULT_TICK_PERIOD)
    }
}

impl<R: RngCore> SessionSimulator<R> {
    pub fn with_parts(clock: Clock, generator: MetricGenerator<R>, tick_period: Jiffies) -> Self {
        Self {
            toggle: ToggleController::new(),
            clock,
            generator,
            sample: None,
            ticker: Ticker::new(),
            time: VirtualClock::new(),
            tick_period,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.toggle.state()
    }

    pub fn now(&self) -> Jiffies {
        self.time.now()
    }

    pub fn elapsed(&self) -> Clock {
        self.clock
    }

    /// Last generated sample, or the seed of the current session if it has
    /// not ticked yet. `None` before the first connect.
    pub fn sample(&self) -> Option<MetricSample> {
        self.sample
    }

    pub fn tick_period(&self) -> Jiffies {
        self.tick_period
    }

    /// Total number of ticks fired across all sessions.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Next instant at which a tick is due, if a session is running.
    pub fn peek_closest(&mut self) -> Option<Jiffies> {
        self.ticker.peek_closest()
    }

    pub fn toggle<P: Presentation + ?Sized>(&mut self, view: &mut P) -> SessionState {
        let now = self.time.now();
        let state = self.toggle.toggle(&mut self.ticker, now, self.tick_period);

        if state.is_connected() {
            let download = leading_count(view.text(Region::Download));
            let upload = leading_count(view.text(Region::Upload));
            self.sample = Some(MetricSample::seeded(download, upload));
            debug_session!(self, "Seeded session from display: {download} down, {upload} up");
        }

        view.set_toggle_visual(ToggleVisual::from(state));
        state
    }

    pub fn activate<P: Presentation + ?Sized>(
        &mut self,
        activation: Activation,
        view: &mut P,
    ) -> SessionState {
        debug_session!(self, "Activation: {activation:?}");
        self.toggle(view)
    }

    /// Moves virtual time forward to `target`, firing every tick due on the
    /// way in deadline order. Returns the number of ticks fired.
    pub fn advance_to<P: Presentation + ?Sized>(&mut self, target: Jiffies, view: &mut P) -> usize {
        let mut fired = 0;

        while let Some(deadline) = self.ticker.peek_closest() {
            if deadline > target {
                break;
            }
            self.time.fast_forward(deadline);
            if let Some((_, id)) = self.ticker.pop_due(deadline) {
                if self.on_timer(id, view) {
                    fired += 1;
                }
            }
        }

        if target > self.time.now() {
            self.time.fast_forward(target);
        }
        fired
    }

    pub fn advance_by<P: Presentation + ?Sized>(&mut self, delta: Jiffies, view: &mut P) -> usize {
        let target = self.time.now() + delta;
        self.advance_to(target, view)
    }

    fn on_timer<P: Presentation + ?Sized>(&mut self, id: TimerId, view: &mut P) -> bool {
        if self.toggle.session_timer() != Some(id) {
            debug_session!(self, "Ignoring timer {id} of a finished session");
            return false;
        }
        let Some(previous) = self.sample else {
            return false;
        };

        self.clock.tick();
        let next = self.generator.advance(previous);
        self.sample = Some(next);
        self.ticks += 1;

        view.set_text(Region::Elapsed, self.clock.format());
        view.set_text(Region::Download, next.download.to_string());
        view.set_text(Region::Upload, next.upload.to_string());
        view.set_text(Region::Ping, next.ping_text());

        debug_session!(self, "Tick {}: {} | {next}", self.ticks, self.clock.format());
        true
    }
}
