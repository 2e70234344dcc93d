//! Static gesture-to-keystroke table.
//!
//! Usage IDs come from the USB HID Keyboard/Keypad page (0x07).  The
//! bindings match what e-reader apps commonly accept: arrows for single
//! page turns, PageUp/PageDown for long jumps, and modifier keys for
//! the combo gestures so hosts can bind them freely.

use crate::gesture::GestureKey;

pub const KEY_UP_ARROW: u8 = 0x52;
pub const KEY_DOWN_ARROW: u8 = 0x51;
pub const KEY_PAGE_UP: u8 = 0x4B;
pub const KEY_PAGE_DOWN: u8 = 0x4E;
pub const KEY_LEFT_CTRL: u8 = 0xE0;
pub const KEY_LEFT_SHIFT: u8 = 0xE1;
pub const KEY_LEFT_ALT: u8 = 0xE2;
pub const KEY_RIGHT_CTRL: u8 = 0xE4;
pub const KEY_RIGHT_SHIFT: u8 = 0xE5;
pub const KEY_RIGHT_ALT: u8 = 0xE6;

impl GestureKey {
    /// HID usage ID sent for this gesture.
    pub const fn usage(self) -> u8 {
        match self {
            GestureKey::LeftPress => KEY_UP_ARROW,
            GestureKey::LeftHold => KEY_PAGE_UP,
            GestureKey::RightPress => KEY_DOWN_ARROW,
            GestureKey::RightHold => KEY_PAGE_DOWN,
            GestureKey::BothPress => KEY_LEFT_CTRL,
            GestureKey::BothHold => KEY_RIGHT_CTRL,
            GestureKey::LeftAnchorRightPress => KEY_RIGHT_ALT,
            GestureKey::LeftAnchorRightHold => KEY_RIGHT_SHIFT,
            GestureKey::RightAnchorLeftPress => KEY_LEFT_ALT,
            GestureKey::RightAnchorLeftHold => KEY_LEFT_SHIFT,
        }
    }
}
