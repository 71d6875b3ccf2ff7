//! Browser phase definitions

/// Where the browser is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a directory listing
    #[default]
    Loading,
    /// Listing shown, keys act on it
    Ready,
    /// Terminal state: the loop stops after this
    Quitting,
}

impl Phase {
    /// Whether a listing reload is in flight
    pub fn is_loading(self) -> bool {
        self == Phase::Loading
    }
}
