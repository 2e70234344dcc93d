//! BLE advertising payload assembly.
//!
//! Builds the AD structures a HID host looks for when scanning:
//! flags, Appearance = Keyboard, and the HID Service UUID (0x1812) in
//! the advertising data; the device name goes in the scan response.
//!
//! Pure byte-pushing, so it is host-testable; the SoftDevice only ever
//! sees the finished buffers.

use heapless::Vec;

/// Legacy advertising PDU payload limit.
pub const ADV_PAYLOAD_MAX: usize = 31;

/// GAP Appearance: Keyboard (HID subtype).
pub const APPEARANCE_KEYBOARD: u16 = 0x03C1;

/// 16-bit service UUID: Human Interface Device.
pub const HID_SERVICE_UUID: u16 = 0x1812;

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_COMPLETE_16BIT_UUIDS: u8 = 0x03;
const AD_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
const AD_TYPE_APPEARANCE: u8 = 0x19;

/// LE General Discoverable, BR/EDR not supported.
const FLAGS_GENERAL_DISCOVERABLE: u8 = 0x06;

fn push_structure(buf: &mut Vec<u8, ADV_PAYLOAD_MAX>, ad_type: u8, data: &[u8]) {
    // Silently skip a structure that would overflow the PDU; the name
    // is truncated instead, everything else is fixed-size.
    if buf.len() + 2 + data.len() > ADV_PAYLOAD_MAX {
        return;
    }
    let _ = buf.push(data.len() as u8 + 1);
    let _ = buf.push(ad_type);
    let _ = buf.extend_from_slice(data);
}

/// Advertising data: flags + appearance + HID service UUID.
pub fn adv_payload() -> Vec<u8, ADV_PAYLOAD_MAX> {
    let mut buf = Vec::new();
    push_structure(&mut buf, AD_TYPE_FLAGS, &[FLAGS_GENERAL_DISCOVERABLE]);
    push_structure(&mut buf, AD_TYPE_APPEARANCE, &APPEARANCE_KEYBOARD.to_le_bytes());
    push_structure(
        &mut buf,
        AD_TYPE_COMPLETE_16BIT_UUIDS,
        &HID_SERVICE_UUID.to_le_bytes(),
    );
    buf
}

/// Scan-response data: the complete local name, truncated to fit.
pub fn scan_response(name: &str) -> Vec<u8, ADV_PAYLOAD_MAX> {
    let mut buf = Vec::new();
    let max_name = ADV_PAYLOAD_MAX - 2;
    let name = name.as_bytes();
    let take = name.len().min(max_name);
    push_structure(&mut buf, AD_TYPE_COMPLETE_LOCAL_NAME, &name[..take]);
    buf
}
