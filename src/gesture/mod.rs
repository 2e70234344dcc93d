//! Gesture recognition subsystem.
//!
//! This is the heart of the firmware: per-button event streams are
//! mapped to trigger symbols and fed through a deterministic state
//! machine whose terminal states emit exactly one semantic key each.
//!
//! ## Components
//!
//! - **Types**: `Channel`, `EventKind`, `Trigger`, `GestureKey`
//! - **Machine**: state set, static transition table, trigger/tick loop
//! - **Keymap**: static gesture-to-HID-usage table
//!
//! Everything here is pure and `no_std`; side effects (logging, key
//! transmission) are performed by the firmware glue from the `Entry`
//! values the machine returns.

pub mod keymap;
pub mod machine;

/// One of the two physical button channels. Fixed cardinality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Left,
    Right,
}

/// Classified button event, emitted by the scan layer on state change.
///
/// Hold/idle thresholds are owned by the scanner ([`crate::input`]);
/// by the time an `EventKind` exists, all timing has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Transition to pressed.
    Down,
    /// Held past the hold threshold.
    Hold,
    /// Transition to released.
    Released,
    /// Released past the idle threshold.
    Idle,
}

/// Trigger symbols consumed by the state machine: the cross product of
/// the two channels and the four event kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    LeftDown,
    LeftHold,
    LeftReleased,
    LeftIdle,
    RightDown,
    RightHold,
    RightReleased,
    RightIdle,
}

impl Trigger {
    /// All trigger symbols, in scan order.
    pub const ALL: [Trigger; 8] = [
        Trigger::LeftDown,
        Trigger::LeftHold,
        Trigger::LeftReleased,
        Trigger::LeftIdle,
        Trigger::RightDown,
        Trigger::RightHold,
        Trigger::RightReleased,
        Trigger::RightIdle,
    ];

    /// Map a per-channel event to its trigger symbol.
    ///
    /// Total function - every (channel, kind) pair has a trigger.
    pub const fn from_event(channel: Channel, kind: EventKind) -> Trigger {
        match (channel, kind) {
            (Channel::Left, EventKind::Down) => Trigger::LeftDown,
            (Channel::Left, EventKind::Hold) => Trigger::LeftHold,
            (Channel::Left, EventKind::Released) => Trigger::LeftReleased,
            (Channel::Left, EventKind::Idle) => Trigger::LeftIdle,
            (Channel::Right, EventKind::Down) => Trigger::RightDown,
            (Channel::Right, EventKind::Hold) => Trigger::RightHold,
            (Channel::Right, EventKind::Released) => Trigger::RightReleased,
            (Channel::Right, EventKind::Idle) => Trigger::RightIdle,
        }
    }
}

/// The ten semantic outputs a completed gesture can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureKey {
    /// Left tapped alone.
    LeftPress,
    /// Left held alone.
    LeftHold,
    /// Right tapped alone.
    RightPress,
    /// Right held alone.
    RightHold,
    /// Both down, released before the hold threshold.
    BothPress,
    /// Both down and held.
    BothHold,
    /// Left anchored (held), right tapped.
    LeftAnchorRightPress,
    /// Left anchored (held), right held.
    LeftAnchorRightHold,
    /// Right anchored (held), left tapped.
    RightAnchorLeftPress,
    /// Right anchored (held), left held.
    RightAnchorLeftHold,
}

impl GestureKey {
    /// All gesture outputs.
    pub const ALL: [GestureKey; 10] = [
        GestureKey::LeftPress,
        GestureKey::LeftHold,
        GestureKey::RightPress,
        GestureKey::RightHold,
        GestureKey::BothPress,
        GestureKey::BothHold,
        GestureKey::LeftAnchorRightPress,
        GestureKey::LeftAnchorRightHold,
        GestureKey::RightAnchorLeftPress,
        GestureKey::RightAnchorLeftHold,
    ];
}
