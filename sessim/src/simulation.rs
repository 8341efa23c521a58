use std::collections::VecDeque;

use log::info;

use crate::{
    metrics::MetricSample,
    presentation::MemoryView,
    progress::Bar,
    session::{Clock, SessionSimulator, SessionState},
    time::Jiffies,
};

/// Headless replay of a dashboard: a session simulator, an in-memory view and
/// a script of toggle instants, run over a fixed virtual time budget.
pub struct Simulation {
    session: SessionSimulator,
    view: MemoryView,
    toggles: VecDeque<Jiffies>,
    time_budget: Jiffies,
    progress_bar: Bar,
}

impl Simulation {
    pub(crate) fn new(
        session: SessionSimulator,
        view: MemoryView,
        toggles: Vec<Jiffies>,
        time_budget: Jiffies,
    ) -> Self {
        Self {
            session,
            view,
            toggles: toggles.into(),
            time_budget,
            progress_bar: Bar::new(time_budget),
        }
    }

    pub fn run(&mut self) {
        while self.step() {}

        self.session.advance_to(self.time_budget, &mut self.view);
        self.progress_bar.finish();

        info!(
            "Session simulation finished at {}: {}, elapsed {}, {} ticks",
            self.session.now(),
            self.session.state(),
            self.session.elapsed().format(),
            self.session.ticks()
        );
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn elapsed(&self) -> Clock {
        self.session.elapsed()
    }

    pub fn sample(&self) -> Option<MetricSample> {
        self.session.sample()
    }

    pub fn ticks(&self) -> usize {
        self.session.ticks()
    }

    pub fn view(&self) -> &MemoryView {
        &self.view
    }
}

impl Simulation {
    // Ticks due at a scripted toggle instant fire before the toggle.
    fn step(&mut self) -> bool {
        let next_tick = self.session.peek_closest();
        let next_toggle = self.toggles.front().copied();

        let future = match (next_tick, next_toggle) {
            (None, None) => return false,
            (Some(tick), None) => tick,
            (None, Some(toggle)) => toggle,
            (Some(tick), Some(toggle)) => tick.min(toggle),
        };
        if future > self.time_budget {
            return false;
        }

        self.session.advance_to(future, &mut self.view);
        if next_toggle == Some(future) {
            self.toggles.pop_front();
            self.session.toggle(&mut self.view);
        }

        self.progress_bar.make_progress(future);
        true
    }
}
