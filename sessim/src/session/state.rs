use std::fmt::Display;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connected,
}

impl SessionState {
    pub fn is_connected(self) -> bool {
        self == SessionState::Connected
    }

    pub fn flipped(self) -> Self {
        match self {
            SessionState::Disconnected => SessionState::Connected,
            SessionState::Connected => SessionState::Disconnected,
        }
    }
}

impl Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Disconnected => f.pad("disconnected"),
            SessionState::Connected => f.pad("connected"),
        }
    }
}
