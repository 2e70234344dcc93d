//! Button scan classifier - raw GPIO levels become discrete events.
//!
//! One [`ChannelScanner`] per button turns a polled level into the four
//! [`EventKind`]s the gesture machine consumes:
//!
//! ```text
//! Idle --press--> Down --hold_ms--> Hold
//!   ^               |                 |
//!   |            release           release
//! idle_ms           v                 v
//!   +----------- Released <-----------+
//! ```
//!
//! Raw levels are debounced first: a change must persist `debounce_ms`
//! before it is accepted.  A re-press during the `Released` phase yields
//! a fresh `Down` without passing through `Idle` - the gesture machine
//! relies on that for anchored repeats.
//!
//! All timing lives here; the gesture machine itself is timeless.

use crate::config;
use crate::gesture::EventKind;

/// Classifier thresholds, injected so host tests can shrink them.
#[derive(Clone, Copy, Debug)]
pub struct ScanTimings {
    pub debounce_ms: u64,
    pub hold_ms: u64,
    pub idle_ms: u64,
}

impl ScanTimings {
    /// Firmware defaults from [`crate::config`].
    pub const DEFAULT: ScanTimings = ScanTimings {
        debounce_ms: config::BUTTON_DEBOUNCE_MS,
        hold_ms: config::BUTTON_HOLD_MS,
        idle_ms: config::BUTTON_IDLE_MS,
    };
}

/// Lifecycle phase of a single button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Down,
    Hold,
    Released,
}

/// Per-channel debouncing classifier.
pub struct ChannelScanner {
    timings: ScanTimings,
    phase: Phase,
    phase_since: u64,
    /// Debounced pressed level.
    level: bool,
    /// Last raw sample and when it changed.
    raw: bool,
    raw_since: u64,
}

impl ChannelScanner {
    pub const fn new(timings: ScanTimings) -> Self {
        Self {
            timings,
            phase: Phase::Idle,
            phase_since: 0,
            level: false,
            raw: false,
            raw_since: 0,
        }
    }

    /// Current phase, for diagnostics.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed one raw sample. Returns the event if the channel changed
    /// state this poll; at most one event per call.
    pub fn poll(&mut self, pressed: bool, now_ms: u64) -> Option<EventKind> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since = now_ms;
        }

        // Accept the raw level once it has been stable long enough.
        if self.raw != self.level
            && now_ms.saturating_sub(self.raw_since) >= self.timings.debounce_ms
        {
            self.level = self.raw;
            if self.level {
                self.phase = Phase::Down;
                self.phase_since = now_ms;
                return Some(EventKind::Down);
            }
            if matches!(self.phase, Phase::Down | Phase::Hold) {
                self.phase = Phase::Released;
                self.phase_since = now_ms;
                return Some(EventKind::Released);
            }
        }

        match self.phase {
            Phase::Down
                if self.level
                    && now_ms.saturating_sub(self.phase_since) >= self.timings.hold_ms =>
            {
                self.phase = Phase::Hold;
                self.phase_since = now_ms;
                Some(EventKind::Hold)
            }
            Phase::Released
                if !self.level
                    && now_ms.saturating_sub(self.phase_since) >= self.timings.idle_ms =>
            {
                self.phase = Phase::Idle;
                self.phase_since = now_ms;
                Some(EventKind::Idle)
            }
            _ => None,
        }
    }
}
