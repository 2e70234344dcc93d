//! Unified error type for pageflip.
//!
//! We avoid `alloc` - all variants are fixed-size. Implements
//! `defmt::Format` for efficient on-target logging when the feature
//! is enabled (host tests build without it).

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Gesture machine configuration (fatal at startup)
    /// The transition table handed to the machine was empty.
    EmptyTransitionTable,

    /// The initial state does not appear anywhere in the table.
    InitialStateNotInTable,

    // BLE
    /// Advertising could not be started or was aborted.
    AdvertiseFailed,

    /// A GATT notification failed (link gone or notifications disabled).
    NotifyFailed,
}
