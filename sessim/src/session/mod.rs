mod clock;
mod simulator;
mod state;
mod toggle;

pub use clock::{Clock, INITIAL_ELAPSED_SECONDS, format_hms};
pub use simulator::{DEFAULT_TICK_PERIOD, SessionSimulator};
pub use state::SessionState;
pub use toggle::ToggleController;
