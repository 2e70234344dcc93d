//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **Advertising** - the device advertises as a HID-over-GATT
//!    keyboard (Appearance = Keyboard, HID service UUID 0x1812).
//! 2. **GATT server** - serves the HID service (report map, boot
//!    keyboard input report, protocol mode, control point).
//! 3. **Key pump** - drains the outbound key queue and notifies one
//!    press/release report pair per key, paced to the link.
//!
//! The gesture engine only sees two things from all of this: the
//! [`LINK_ACTIVE`] flag and the [`KEY_QUEUE`] sender.

pub mod keyboard;

use core::sync::atomic::AtomicBool;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use pageflip::config::KEY_QUEUE_DEPTH;

/// True while a host is connected and the HID link is usable.
pub static LINK_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Outbound HID usage IDs from the gesture engine to the BLE task.
pub static KEY_QUEUE: Channel<CriticalSectionRawMutex, u8, KEY_QUEUE_DEPTH> = Channel::new();
