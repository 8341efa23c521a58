/// Elapsed seconds shown on the dashboard before any session in this run:
/// 00:58:26.
pub const INITIAL_ELAPSED_SECONDS: u64 = 3506;

/// Elapsed-time counter of the dashboard. Only ever moves forward, one second
/// per tick, and keeps its value across sessions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Clock {
    seconds: u64,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(INITIAL_ELAPSED_SECONDS)
    }
}

impl Clock {
    pub fn new(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn format(&self) -> String {
        format_hms(self.seconds)
    }
}

/// Zero-padded `HH:MM:SS`. Hours are not wrapped and may use more than two
/// digits.
pub fn format_hms(s: u64) -> String {
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let seconds = s % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
