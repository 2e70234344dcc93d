//! Integration tests for pageflip host-testable logic.
//!
//! Drives raw button levels through the whole recognition pipeline the
//! firmware main loop uses: scanner → trigger mapper → gesture machine,
//! collecting the HID usages that would be queued for transmission.

use pageflip::gesture::keymap::{KEY_LEFT_CTRL, KEY_RIGHT_ALT, KEY_UP_ARROW};
use pageflip::gesture::machine::{Entry, Machine, StateId};
use pageflip::gesture::{Channel, Trigger};
use pageflip::hid::KeyboardReport;
use pageflip::input::{ChannelScanner, ScanTimings};

const TIMINGS: ScanTimings = ScanTimings {
    debounce_ms: 2,
    hold_ms: 10,
    idle_ms: 5,
};

struct Harness {
    machine: Machine,
    left: ChannelScanner,
    right: ChannelScanner,
    emitted: Vec<u8>,
}

impl Harness {
    fn new() -> Self {
        Self {
            machine: Machine::page_turner().expect("static table must validate"),
            left: ChannelScanner::new(TIMINGS),
            right: ChannelScanner::new(TIMINGS),
            emitted: Vec::new(),
        }
    }

    /// One main-loop pass: poll left then right, feed the machine.
    fn scan(&mut self, left_pressed: bool, right_pressed: bool, now_ms: u64) {
        if let Some(kind) = self.left.poll(left_pressed, now_ms) {
            self.feed(Trigger::from_event(Channel::Left, kind));
        }
        if let Some(kind) = self.right.poll(right_pressed, now_ms) {
            self.feed(Trigger::from_event(Channel::Right, kind));
        }
    }

    fn feed(&mut self, trigger: Trigger) {
        if let Some(Entry::Emit(key)) = self.machine.trigger(trigger) {
            self.emitted.push(key.usage());
        }
    }
}

#[test]
fn solo_left_tap_sends_one_up_arrow() {
    let mut h = Harness::new();
    // Short press: released well before the hold threshold.
    for now in 0..=30 {
        h.scan(now < 6, false, now);
    }
    assert_eq!(h.emitted, vec![KEY_UP_ARROW]);
    assert_eq!(h.machine.current(), StateId::Idle);
}

#[test]
fn anchored_left_hold_repeats_right_taps() {
    let mut h = Harness::new();
    for now in 0..=80 {
        let left = now <= 60;
        let right = (20..24).contains(&now) || (40..44).contains(&now);
        h.scan(left, right, now);
    }
    // Two right taps under the left anchor, then the anchor released:
    // two identical emissions, finishing back at idle.
    assert_eq!(h.emitted, vec![KEY_RIGHT_ALT, KEY_RIGHT_ALT]);
    assert_eq!(h.machine.current(), StateId::Idle);
}

#[test]
fn lifting_the_anchor_mid_press_cancels_silently() {
    let mut h = Harness::new();
    // Left anchors, right comes down, then left lifts while right is
    // still held: the branch cancels on left's release and the rest of
    // right's press falls on idle without emitting anything.
    for now in 0..=60 {
        let left = now <= 30;
        let right = (20..=40).contains(&now);
        h.scan(left, right, now);
    }
    assert_eq!(h.emitted, vec![]);
    assert_eq!(h.machine.current(), StateId::Idle);
}

#[test]
fn two_finger_tap_sends_one_ctrl() {
    let mut h = Harness::new();
    for now in 0..=40 {
        h.scan(now < 10, (1..11).contains(&now), now);
    }
    assert_eq!(h.emitted, vec![KEY_LEFT_CTRL]);
    assert_eq!(h.machine.current(), StateId::Idle);
}

#[test]
fn emitted_usages_become_valid_press_release_reports() {
    let mut h = Harness::new();
    for now in 0..=30 {
        h.scan(now < 6, false, now);
    }

    // What the BLE key pump would notify for each queued usage.
    for &usage in &h.emitted {
        let press = KeyboardReport::from_usage(usage);
        assert!(!press.is_empty());
        assert_eq!(press.to_bytes()[2], usage); // non-modifier → keycode slot

        let release = KeyboardReport::empty();
        assert_eq!(release.to_bytes(), [0u8; 8]);
    }
}
