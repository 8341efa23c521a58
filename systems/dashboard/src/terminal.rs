use sessim::{MemoryView, Presentation, Region, SessionState, ToggleVisual};

/// Presentation adapter for a line-oriented terminal.
///
/// Keeps the published values in a [`MemoryView`] and renders them as a single
/// status line whenever something changed since the last render.
pub struct TerminalView {
    inner: MemoryView,
    dirty: bool,
}

impl TerminalView {
    pub fn new(inner: MemoryView) -> Self {
        Self { inner, dirty: true }
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self) -> String {
        let toggle = self.inner.toggle_visual();
        let badge = if toggle.connected_class {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        };
        let field = |region| self.inner.text(region).unwrap_or("--");

        format!(
            "[{badge:^12}] {}  down {} Mbps  up {} Mbps  ping {}  (Enter: {})",
            field(Region::Elapsed),
            field(Region::Download),
            field(Region::Upload),
            field(Region::Ping),
            toggle.tooltip
        )
    }
}

impl Presentation for TerminalView {
    fn set_text(&mut self, region: Region, text: String) {
        self.dirty = true;
        self.inner.set_text(region, text);
    }

    fn text(&self, region: Region) -> Option<&str> {
        self.inner.text(region)
    }

    fn set_toggle_visual(&mut self, visual: ToggleVisual) {
        self.dirty = true;
        self.inner.set_toggle_visual(visual);
    }
}
