//! Host-testable library interface for pageflip.
//!
//! Everything with real logic lives here and runs on the host without
//! embedded hardware: the gesture state machine, trigger mapping, the
//! button scan classifier, HID report building, advertising payload
//! assembly, and the link-status edge detector.
//!
//! Usage: `cargo test`
//!
//! Note: the embedded binary (`src/main.rs`, feature `embedded`) is
//! `#![no_std]`/`#![no_main]` and consumes these modules from the
//! Embassy main loop.

#![cfg_attr(not(test), no_std)]

pub mod adv;
pub mod config;
pub mod error;
pub mod gesture;
pub mod hid;
pub mod input;
pub mod status;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
