//! Boundary between the simulator and whatever draws the dashboard.
//!
//! The simulator only writes to a [`Presentation`]. The single read is
//! [`Presentation::text`] for the download and upload regions, used to seed a
//! session from what is currently on screen.

use std::collections::HashMap;

use crate::session::SessionState;

/// Text regions of the dashboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Elapsed,
    Download,
    Upload,
    Ping,
}

/// Visual state of the toggle control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToggleVisual {
    pub pressed: bool,
    pub connected_class: bool,
    pub tooltip: &'static str,
    pub icon_color: &'static str,
}

impl From<SessionState> for ToggleVisual {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Connected => ToggleVisual {
                pressed: true,
                connected_class: true,
                tooltip: "Disconnect",
                icon_color: "#fff",
            },
            SessionState::Disconnected => ToggleVisual {
                pressed: false,
                connected_class: false,
                tooltip: "Connect",
                icon_color: "#fff",
            },
        }
    }
}

pub trait Presentation {
    fn set_text(&mut self, region: Region, text: String);

    fn text(&self, region: Region) -> Option<&str>;

    fn set_toggle_visual(&mut self, visual: ToggleVisual);
}

/// In-memory view: keeps the last published value of every region.
#[derive(Debug, Clone)]
pub struct MemoryView {
    texts: HashMap<Region, String>,
    toggle: ToggleVisual,
    updates: usize,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            texts: HashMap::new(),
            toggle: ToggleVisual::from(SessionState::Disconnected),
            updates: 0,
        }
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, region: Region, text: &str) -> Self {
        self.texts.insert(region, text.to_string());
        self
    }

    pub fn toggle_visual(&self) -> ToggleVisual {
        self.toggle
    }

    /// Number of `set_text` calls received so far.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Presentation for MemoryView {
    fn set_text(&mut self, region: Region, text: String) {
        self.updates += 1;
        self.texts.insert(region, text);
    }

    fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    fn set_toggle_visual(&mut self, visual: ToggleVisual) {
        self.toggle = visual;
    }
}
