//! Gesture state machine - states, static transition table, stepping.
//!
//! The grammar recognised here:
//!
//! - solo tap / solo hold per button,
//! - simultaneous both-down (short and long),
//! - asymmetric "anchor" gestures: one button held while the other is
//!   tapped or held, repeatably, until the anchor itself is released.
//!
//! The table is a plain static array scanned linearly per trigger.  At
//! under sixty entries and human input rates there is nothing to index.

use crate::error::Error;
use crate::gesture::{GestureKey, Trigger};

use self::StateId as S;
use crate::gesture::Trigger as T;

/// Identifier for every state of the gesture machine.
///
/// Naming scheme follows the gesture in progress, e.g.
/// `LeftHoldRightDown` = left anchored, right freshly pressed.
/// `*Released` states are the recognition points that emit a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateId {
    Idle,
    // left without right
    LeftDown,
    LeftHold,
    LeftDownReleased,
    LeftHoldReleased,
    // right without left
    RightDown,
    RightHold,
    RightDownReleased,
    RightHoldReleased,
    // left + right simultaneously
    BothDown,
    BothHold,
    BothDownReleased,
    BothHoldReleased,
    // left hold + right press/hold
    LeftHoldRightDown,
    LeftHoldRightHold,
    LeftHoldRightDownReleased,
    LeftHoldRightHoldReleased,
    LeftHoldRightIdle,
    // right hold + left press/hold
    RightHoldLeftDown,
    RightHoldLeftHold,
    RightHoldLeftDownReleased,
    RightHoldLeftHoldReleased,
    RightHoldLeftIdle,
}

/// Effect attached to a state's entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Entry {
    /// Diagnostic only - log the new state name.
    Note,
    /// Diagnostic plus exactly one key emission.
    Emit(GestureKey),
}

impl StateId {
    /// All states, for exhaustive table checks.
    pub const ALL: [StateId; 23] = [
        StateId::Idle,
        StateId::LeftDown,
        StateId::LeftHold,
        StateId::LeftDownReleased,
        StateId::LeftHoldReleased,
        StateId::RightDown,
        StateId::RightHold,
        StateId::RightDownReleased,
        StateId::RightHoldReleased,
        StateId::BothDown,
        StateId::BothHold,
        StateId::BothDownReleased,
        StateId::BothHoldReleased,
        StateId::LeftHoldRightDown,
        StateId::LeftHoldRightHold,
        StateId::LeftHoldRightDownReleased,
        StateId::LeftHoldRightHoldReleased,
        StateId::LeftHoldRightIdle,
        StateId::RightHoldLeftDown,
        StateId::RightHoldLeftHold,
        StateId::RightHoldLeftDownReleased,
        StateId::RightHoldLeftHoldReleased,
        StateId::RightHoldLeftIdle,
    ];

    /// Human-readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            StateId::Idle => "idle",
            StateId::LeftDown => "left-down",
            StateId::LeftHold => "left-hold",
            StateId::LeftDownReleased => "left-down-released",
            StateId::LeftHoldReleased => "left-hold-released",
            StateId::RightDown => "right-down",
            StateId::RightHold => "right-hold",
            StateId::RightDownReleased => "right-down-released",
            StateId::RightHoldReleased => "right-hold-released",
            StateId::BothDown => "both-down",
            StateId::BothHold => "both-hold",
            StateId::BothDownReleased => "both-down-released",
            StateId::BothHoldReleased => "both-hold-released",
            StateId::LeftHoldRightDown => "left-hold-right-down",
            StateId::LeftHoldRightHold => "left-hold-right-hold",
            StateId::LeftHoldRightDownReleased => "left-hold-right-down-released",
            StateId::LeftHoldRightHoldReleased => "left-hold-right-hold-released",
            StateId::LeftHoldRightIdle => "left-hold-right-idle",
            StateId::RightHoldLeftDown => "right-hold-left-down",
            StateId::RightHoldLeftHold => "right-hold-left-hold",
            StateId::RightHoldLeftDownReleased => "right-hold-left-down-released",
            StateId::RightHoldLeftHoldReleased => "right-hold-left-hold-released",
            StateId::RightHoldLeftIdle => "right-hold-left-idle",
        }
    }

    /// Entry effect performed when this state is entered.
    ///
    /// Only the `*Released` recognition states emit; everything else is
    /// intermediate bookkeeping with a diagnostic note.
    pub const fn entry(self) -> Entry {
        match self {
            StateId::LeftDownReleased => Entry::Emit(GestureKey::LeftPress),
            StateId::LeftHoldReleased => Entry::Emit(GestureKey::LeftHold),
            StateId::RightDownReleased => Entry::Emit(GestureKey::RightPress),
            StateId::RightHoldReleased => Entry::Emit(GestureKey::RightHold),
            StateId::BothDownReleased => Entry::Emit(GestureKey::BothPress),
            StateId::BothHoldReleased => Entry::Emit(GestureKey::BothHold),
            StateId::LeftHoldRightDownReleased => Entry::Emit(GestureKey::LeftAnchorRightPress),
            StateId::LeftHoldRightHoldReleased => Entry::Emit(GestureKey::LeftAnchorRightHold),
            StateId::RightHoldLeftDownReleased => Entry::Emit(GestureKey::RightAnchorLeftPress),
            StateId::RightHoldLeftHoldReleased => Entry::Emit(GestureKey::RightAnchorLeftHold),
            _ => Entry::Note,
        }
    }
}

/// One directed edge of the gesture graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub on: Trigger,
}

const fn t(from: StateId, to: StateId, on: Trigger) -> Transition {
    Transition { from, to, on }
}

/// The page-turner gesture grammar.
///
/// Kept deterministic: at most one edge per (state, trigger) pair - the
/// table tests scan for violations exhaustively.
pub static PAGE_TURNER_TABLE: [Transition; 58] = [
    // left without right
    t(S::Idle, S::LeftDown, T::LeftDown),
    t(S::LeftDown, S::LeftHold, T::LeftHold),
    t(S::LeftDown, S::LeftDownReleased, T::LeftReleased),
    t(S::LeftHold, S::LeftHoldReleased, T::LeftReleased),
    t(S::LeftDownReleased, S::Idle, T::LeftIdle),
    t(S::LeftHoldReleased, S::Idle, T::LeftIdle),
    // right without left
    t(S::Idle, S::RightDown, T::RightDown),
    t(S::RightDown, S::RightHold, T::RightHold),
    t(S::RightDown, S::RightDownReleased, T::RightReleased),
    t(S::RightHold, S::RightHoldReleased, T::RightReleased),
    t(S::RightDownReleased, S::Idle, T::RightIdle),
    t(S::RightHoldReleased, S::Idle, T::RightIdle),
    // left + right simultaneously
    t(S::RightDown, S::BothDown, T::LeftDown),
    t(S::LeftDown, S::BothDown, T::RightDown),
    t(S::BothDown, S::BothHold, T::LeftHold),
    t(S::BothDown, S::BothHold, T::RightHold),
    t(S::BothDown, S::BothDownReleased, T::LeftReleased),
    t(S::BothDown, S::BothDownReleased, T::RightReleased),
    t(S::BothHold, S::BothHoldReleased, T::LeftReleased),
    t(S::BothHold, S::BothHoldReleased, T::RightReleased),
    // back to idle as soon as either side finishes idling
    t(S::BothDownReleased, S::Idle, T::LeftIdle),
    t(S::BothDownReleased, S::Idle, T::RightIdle),
    t(S::BothHoldReleased, S::Idle, T::LeftIdle),
    t(S::BothHoldReleased, S::Idle, T::RightIdle),
    // left hold + right press/hold
    t(S::LeftHold, S::LeftHoldRightDown, T::RightDown),
    t(S::LeftHoldRightDown, S::LeftHoldRightHold, T::RightHold),
    t(S::LeftHoldRightDown, S::LeftHoldRightDownReleased, T::RightReleased),
    t(S::LeftHoldRightHold, S::LeftHoldRightHoldReleased, T::RightReleased),
    t(S::LeftHoldRightDownReleased, S::LeftHoldRightIdle, T::RightIdle),
    t(S::LeftHoldRightHoldReleased, S::LeftHoldRightIdle, T::RightIdle),
    // the anchor persists: right can re-engage without re-holding left
    t(S::LeftHoldRightIdle, S::LeftHoldRightDown, T::RightDown),
    // releasing the anchor cancels the whole branch immediately; the
    // trailing idle event then falls on Idle and is ignored
    t(S::LeftHoldRightDown, S::Idle, T::LeftReleased),
    t(S::LeftHoldRightHold, S::Idle, T::LeftReleased),
    t(S::LeftHoldRightIdle, S::Idle, T::LeftReleased),
    t(S::LeftHoldRightDownReleased, S::Idle, T::LeftReleased),
    t(S::LeftHoldRightHoldReleased, S::Idle, T::LeftReleased),
    t(S::LeftHoldRightDown, S::Idle, T::LeftIdle),
    t(S::LeftHoldRightHold, S::Idle, T::LeftIdle),
    t(S::LeftHoldRightIdle, S::Idle, T::LeftIdle),
    t(S::LeftHoldRightDownReleased, S::Idle, T::LeftIdle),
    t(S::LeftHoldRightHoldReleased, S::Idle, T::LeftIdle),
    // right hold + left press/hold
    t(S::RightHold, S::RightHoldLeftDown, T::LeftDown),
    t(S::RightHoldLeftDown, S::RightHoldLeftHold, T::LeftHold),
    t(S::RightHoldLeftDown, S::RightHoldLeftDownReleased, T::LeftReleased),
    t(S::RightHoldLeftHold, S::RightHoldLeftHoldReleased, T::LeftReleased),
    t(S::RightHoldLeftDownReleased, S::RightHoldLeftIdle, T::LeftIdle),
    t(S::RightHoldLeftHoldReleased, S::RightHoldLeftIdle, T::LeftIdle),
    t(S::RightHoldLeftIdle, S::RightHoldLeftDown, T::LeftDown),
    t(S::RightHoldLeftDown, S::Idle, T::RightReleased),
    t(S::RightHoldLeftHold, S::Idle, T::RightReleased),
    t(S::RightHoldLeftIdle, S::Idle, T::RightReleased),
    t(S::RightHoldLeftDownReleased, S::Idle, T::RightReleased),
    t(S::RightHoldLeftHoldReleased, S::Idle, T::RightReleased),
    t(S::RightHoldLeftDown, S::Idle, T::RightIdle),
    t(S::RightHoldLeftHold, S::Idle, T::RightIdle),
    t(S::RightHoldLeftIdle, S::Idle, T::RightIdle),
    t(S::RightHoldLeftDownReleased, S::Idle, T::RightIdle),
    t(S::RightHoldLeftHoldReleased, S::Idle, T::RightIdle),
];

/// The gesture machine: one mutable field (current state) over a static
/// table.  Created once at startup, stepped from the single main loop.
pub struct Machine {
    table: &'static [Transition],
    current: StateId,
}

impl Machine {
    /// Install the table and initial state.
    ///
    /// Fails if the table is empty or the initial state never appears in
    /// it - both are wiring mistakes that must abort startup before any
    /// input is accepted.
    pub fn new(table: &'static [Transition], initial: StateId) -> Result<Self, Error> {
        if table.is_empty() {
            return Err(Error::EmptyTransitionTable);
        }
        let known = table
            .iter()
            .any(|tr| tr.from == initial || tr.to == initial);
        if !known {
            return Err(Error::InitialStateNotInTable);
        }
        Ok(Self {
            table,
            current: initial,
        })
    }

    /// Machine over [`PAGE_TURNER_TABLE`] starting at [`StateId::Idle`].
    pub fn page_turner() -> Result<Self, Error> {
        Self::new(&PAGE_TURNER_TABLE, StateId::Idle)
    }

    /// Current state, for diagnostics.
    pub fn current(&self) -> StateId {
        self.current
    }

    /// Apply a trigger.
    ///
    /// On a match the machine moves and returns the new state's entry
    /// effect for the caller to dispatch.  A trigger with no edge from
    /// the current state is legal and ignored: no state change, `None`.
    pub fn trigger(&mut self, trigger: Trigger) -> Option<Entry> {
        let hit = self
            .table
            .iter()
            .find(|tr| tr.from == self.current && tr.on == trigger)?;
        self.current = hit.to;
        Some(hit.to.entry())
    }

    /// Per-loop tick. Returns `true` while idle so the caller can emit
    /// the periodic idle diagnostic; any other state is a no-op.
    pub fn tick(&self) -> bool {
        self.current == StateId::Idle
    }

    /// Test hook - jump straight to a state.
    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: StateId) {
        self.current = state;
    }
}
