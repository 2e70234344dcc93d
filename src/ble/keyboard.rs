//! HID-over-GATT keyboard peripheral.
//!
//! Serves the standard HOGP characteristic set.  The input report is
//! the 8-byte boot keyboard layout from [`pageflip::hid`]; each queued
//! key becomes a press notification followed by an empty (release)
//! notification, separated by the pacing delay so the host never sees
//! coalesced reports.

use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_time::Timer;
use nrf_softdevice::ble::{gatt_server, peripheral, Connection};
use nrf_softdevice::Softdevice;

use pageflip::config;
use pageflip::error::Error;
use pageflip::hid::KeyboardReport;

use crate::ble::KEY_QUEUE;

/// HID Information characteristic value:
/// bcdHID 1.11, no country code, normally connectable.
pub const HID_INFO: [u8; 4] = [0x11, 0x01, 0x00, 0x02];

/// Protocol Mode: report protocol (hosts may downgrade to boot).
pub const PROTOCOL_MODE_REPORT: u8 = 1;

#[nrf_softdevice::gatt_service(uuid = "1812")]
pub struct HidService {
    #[characteristic(uuid = "2a4e", read, write_without_response)]
    pub protocol_mode: u8,
    #[characteristic(uuid = "2a4b", read)]
    pub report_map: [u8; 64],
    #[characteristic(uuid = "2a4a", read)]
    pub hid_info: [u8; 4],
    #[characteristic(uuid = "2a4c", write_without_response)]
    pub control_point: u8,
    #[characteristic(uuid = "2a22", read, notify)]
    pub boot_keyboard_input: [u8; 8],
}

#[nrf_softdevice::gatt_server]
pub struct Server {
    pub hid: HidService,
}

/// Advertise until a host connects.
pub async fn advertise(
    sd: &Softdevice,
    adv_data: &[u8],
    scan_data: &[u8],
) -> Result<Connection, Error> {
    let cfg = peripheral::Config {
        interval: config::ADV_INTERVAL,
        ..Default::default()
    };
    let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
        adv_data,
        scan_data,
    };
    peripheral::advertise_connectable(sd, adv, &cfg)
        .await
        .map_err(|_| Error::AdvertiseFailed)
}

/// Serve the connection until it drops: GATT requests on one side,
/// outbound key notifications on the other.
pub async fn serve(server: &Server, conn: &Connection) {
    let gatt = gatt_server::run(conn, server, |e| match e {
        ServerEvent::Hid(e) => match e {
            HidServiceEvent::BootKeyboardInputCccdWrite { notifications } => {
                info!("input report notifications: {}", notifications);
            }
            HidServiceEvent::ProtocolModeWrite(mode) => {
                info!("protocol mode: {}", mode);
            }
            HidServiceEvent::ControlPointWrite(cmd) => {
                info!("hid control point: {}", cmd);
            }
        },
    });

    match select(gatt, key_pump(server, conn)).await {
        Either::First(e) => info!("gatt server exited: {:?}", e),
        Either::Second(_) => {}
    }
}

/// Drain the key queue into paced press/release notification pairs.
///
/// Best effort: a failed key is dropped with a warning; the core never
/// retries.
async fn key_pump(server: &Server, conn: &Connection) -> ! {
    loop {
        let usage = KEY_QUEUE.receive().await;
        if let Err(e) = write_key(server, conn, usage).await {
            warn!("key {=u8:02x} dropped: {}", usage, e);
        }
    }
}

/// Notify one press report, then an empty release report, with the
/// pacing delay between notifications.
async fn write_key(server: &Server, conn: &Connection, usage: u8) -> Result<(), Error> {
    let press = KeyboardReport::from_usage(usage).to_bytes();
    server
        .hid
        .boot_keyboard_input_notify(conn, &press)
        .map_err(|_| Error::NotifyFailed)?;
    Timer::after_millis(config::KEY_PACING_MS).await;

    let release = KeyboardReport::empty().to_bytes();
    server
        .hid
        .boot_keyboard_input_notify(conn, &release)
        .map_err(|_| Error::NotifyFailed)?;
    Timer::after_millis(config::KEY_PACING_MS).await;
    Ok(())
}
