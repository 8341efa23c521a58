//! Real-time driver: maps wall-clock milliseconds onto session jiffies.
//!
//! The session simulator and its view live on the driver's thread only. Input
//! arrives as [`Command`]s over a channel; between commands the driver sleeps
//! until the next tick deadline.

use std::{
    io::Write,
    sync::mpsc::{Receiver, RecvTimeoutError},
    time::{Duration, Instant},
};

use log::{debug, info};
use sessim::{Activation, Jiffies, SessionSimulator};

use crate::terminal::TerminalView;

// Upper bound on a single wait while disconnected.
const IDLE_WAIT: Duration = Duration::from_secs(3600);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Activate(Activation),
    Quit,
}

impl Command {
    /// Interprets one line typed on the terminal.
    ///
    /// An empty line is Enter, a single space is Space, `c` is a click on the
    /// toggle and `q` quits. Anything else is ignored.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            "" => Some(Command::Activate(Activation::Enter)),
            "q" | "quit" => Some(Command::Quit),
            "c" | "click" => Some(Command::Activate(Activation::Click)),
            key => Activation::from_key(key).map(Command::Activate),
        }
    }
}

pub struct RealTimeDriver<W: Write> {
    session: SessionSimulator,
    view: TerminalView,
    started: Instant,
    out: W,
}

impl<W: Write> RealTimeDriver<W> {
    pub fn new(session: SessionSimulator, view: TerminalView, out: W) -> Self {
        Self {
            session,
            view,
            started: Instant::now(),
            out,
        }
    }

    pub fn session(&self) -> &SessionSimulator {
        &self.session
    }

    pub fn run(&mut self, commands: Receiver<Command>) -> std::io::Result<()> {
        self.render()?;

        loop {
            self.catch_up()?;

            let timeout = match self.session.peek_closest() {
                Some(deadline) => duration_until(deadline, self.virtual_now()),
                None => IDLE_WAIT,
            };

            match commands.recv_timeout(timeout) {
                Ok(Command::Activate(activation)) => {
                    self.catch_up()?;
                    let state = self.session.activate(activation, &mut self.view);
                    info!("{activation:?} -> {state}");
                    self.render()?;
                }
                Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }

        info!(
            "Leaving dashboard at {}, elapsed {}",
            self.session.now(),
            self.session.elapsed().format()
        );
        Ok(())
    }

    fn virtual_now(&self) -> Jiffies {
        Jiffies(self.started.elapsed().as_millis() as usize)
    }

    fn catch_up(&mut self) -> std::io::Result<()> {
        let now = self.virtual_now();
        let fired = self.session.advance_to(now, &mut self.view);
        if fired > 1 {
            debug!("Caught up {fired} ticks at {now}");
        }
        self.render()
    }

    fn render(&mut self) -> std::io::Result<()> {
        if self.view.take_dirty() {
            writeln!(self.out, "{}", self.view.render())?;
            self.out.flush()?;
        }
        Ok(())
    }
}

fn duration_until(deadline: Jiffies, now: Jiffies) -> Duration {
    Duration::from_millis(deadline.saturating_sub(now).0 as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_map_to_commands() {
        assert_eq!(Command::from_line("\n"), Some(Command::Activate(Activation::Enter)));
        assert_eq!(Command::from_line(""), Some(Command::Activate(Activation::Enter)));
        assert_eq!(Command::from_line(" \n"), Some(Command::Activate(Activation::Space)));
        assert_eq!(Command::from_line("c"), Some(Command::Activate(Activation::Click)));
        assert_eq!(Command::from_line("q\r\n"), Some(Command::Quit));
        assert_eq!(Command::from_line("hello"), None);
    }

    #[test]
    fn waits_until_deadline() {
        assert_eq!(duration_until(Jiffies(1500), Jiffies(1200)), Duration::from_millis(300));
        assert_eq!(duration_until(Jiffies(1000), Jiffies(1200)), Duration::ZERO);
    }

    #[test]
    fn quits_and_toggles_through_channel() {
        let (session, view) = sessim::SimulationBuilder::default().seed(1).build_session();
        let mut out = Vec::new();
        let (tx, rx) = std::sync::mpsc::channel();
        tx.send(Command::Activate(Activation::Enter)).expect("receiver alive");
        tx.send(Command::Activate(Activation::Click)).expect("receiver alive");
        tx.send(Command::Quit).expect("receiver alive");

        let mut driver = RealTimeDriver::new(session, TerminalView::new(view), &mut out);
        driver.run(rx).expect("writing to a Vec never fails");
        assert!(!driver.session().state().is_connected());

        let printed = String::from_utf8(out).expect("utf-8 output");
        assert!(printed.lines().count() >= 3);
        assert!(printed.contains("Enter: Disconnect"));
    }
}
