use log::info;

use crate::{
    session::SessionState,
    time::{Jiffies, Ticker, TickerHandle, TimerId},
};

/// Owns the connected/disconnected state and the ticker of the running
/// session. The ticker is armed if and only if the state is `Connected`.
#[derive(Debug, Default)]
pub struct ToggleController {
    state: SessionState,
    session: Option<TickerHandle>,
}

impl ToggleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Id of the ticker driving the current session, if connected.
    pub fn session_timer(&self) -> Option<TimerId> {
        self.session.as_ref().map(TickerHandle::id)
    }

    /// Flips the state exactly once and starts or stops the session ticker to
    /// match.
    pub fn toggle(&mut self, ticker: &mut Ticker, now: Jiffies, period: Jiffies) -> SessionState {
        self.state = self.state.flipped();

        match self.state {
            SessionState::Connected => {
                let handle = ticker.start(now, period);
                info!("Connected at {now}, session timer {}", handle.id());
                self.session = Some(handle);
            }
            SessionState::Disconnected => {
                if let Some(handle) = self.session.take() {
                    handle.stop();
                }
                info!("Disconnected at {now}");
            }
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Jiffies = Jiffies(1000);

    #[test]
    fn ticker_is_armed_only_while_connected() {
        let mut ticker = Ticker::new();
        let mut toggle = ToggleController::new();
        assert_eq!(toggle.state(), SessionState::Disconnected);
        assert_eq!(ticker.active(), 0);

        assert_eq!(toggle.toggle(&mut ticker, Jiffies(0), PERIOD), SessionState::Connected);
        assert_eq!(ticker.active(), 1);
        assert!(toggle.session_timer().is_some());

        assert_eq!(toggle.toggle(&mut ticker, Jiffies(10), PERIOD), SessionState::Disconnected);
        assert_eq!(ticker.active(), 0);
        assert!(toggle.session_timer().is_none());
    }

    #[test]
    fn each_toggle_flips_once() {
        let mut ticker = Ticker::new();
        let mut toggle = ToggleController::new();
        for n in 1..=9 {
            let state = toggle.toggle(&mut ticker, Jiffies(n), PERIOD);
            assert_eq!(state.is_connected(), n % 2 == 1);
            assert_eq!(ticker.active(), usize::from(state.is_connected()));
        }
    }
}
