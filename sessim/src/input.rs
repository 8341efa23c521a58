/// A single user activation of the toggle control.
///
/// Activations are not debounced: each one is forwarded to exactly one
/// toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Click,
    Enter,
    Space,
}

impl Activation {
    /// Maps a key name, as reported by the focused control, to an activation.
    /// Keys other than Enter and Space do nothing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Activation::Enter),
            " " | "Space" => Some(Activation::Space),
            _ => None,
        }
    }
}
