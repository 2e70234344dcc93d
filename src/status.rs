//! Link-status edge detection for the connection indicator.
//!
//! The LED and the "connected"/"advertising" log lines must fire once
//! per transition, not once per loop pass, so the indicator remembers
//! the last reported value.  The first observation always reports.

/// Edge detector over the link-active boolean.
pub struct LinkIndicator {
    known: Option<bool>,
}

impl LinkIndicator {
    pub const fn new() -> Self {
        Self { known: None }
    }

    /// Feed the current link state.  Returns `Some(state)` only when it
    /// differs from the last reported one.
    pub fn update(&mut self, connected: bool) -> Option<bool> {
        if self.known == Some(connected) {
            return None;
        }
        self.known = Some(connected);
        Some(connected)
    }

    /// Last reported state (`false` before the first update).
    pub fn is_connected(&self) -> bool {
        self.known == Some(true)
    }
}

impl Default for LinkIndicator {
    fn default() -> Self {
        Self::new()
    }
}
