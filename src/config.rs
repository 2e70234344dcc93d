//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// BLE

/// Device name advertised over BLE and reported in the GAP config.
pub const DEVICE_NAME: &str = "PageFlip";

/// Delay between successive HID input-report notifications (ms).
///
/// Keeps the key stream below the link throughput so press/release
/// pairs are never coalesced or dropped by the host.
pub const KEY_PACING_MS: u64 = 10;

/// Depth of the outbound key queue between the engine and the BLE task.
pub const KEY_QUEUE_DEPTH: usize = 4;

/// Advertising interval (in 0.625 ms units). 160 = 100 ms.
pub const ADV_INTERVAL: u32 = 160;

// Buttons

/// Main loop / button scan interval (ms).
pub const SCAN_INTERVAL_MS: u64 = 10;

/// A raw level change must persist this long before it is accepted (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

/// Continuous press duration after which a button counts as held (ms).
pub const BUTTON_HOLD_MS: u64 = 500;

/// Continuous release duration after which a button returns to idle (ms).
pub const BUTTON_IDLE_MS: u64 = 50;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` pins
// are degraded to `AnyPin` in `main.rs`.  Adjust for your custom PCB.
//
//   Button LEFT    → P0.11
//   Button RIGHT   → P0.12
//   Status LED     → P0.06
