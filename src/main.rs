//! pageflip firmware entry point (nRF52840 + SoftDevice S140).
//!
//! Task layout:
//! - `softdevice_task` - runs the SoftDevice event loop.
//! - `ble_task`        - advertise → serve → repeat; owns the link flag.
//! - `engine_task`     - the main loop: tick the gesture machine, scan
//!   the buttons while the link is active, dispatch entry effects.

#![no_std]
#![no_main]

mod ble;

use core::mem;
use core::sync::atomic::Ordering;

use defmt::{info, trace, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin as _, Pull};
use embassy_nrf::interrupt::Priority;
use embassy_time::{Instant, Timer};
use nrf_softdevice::{raw, Softdevice};
use panic_probe as _;
use static_cell::StaticCell;

use pageflip::config;
use pageflip::gesture::machine::{Entry, Machine};
use pageflip::gesture::{Channel, Trigger};
use pageflip::input::{ChannelScanner, ScanTimings};
use pageflip::status::LinkIndicator;

use ble::keyboard::{Server, HID_INFO, PROTOCOL_MODE_REPORT};
use ble::{KEY_QUEUE, LINK_ACTIVE};

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task]
async fn ble_task(sd: &'static Softdevice, server: &'static Server) -> ! {
    let adv_data = pageflip::adv::adv_payload();
    let scan_data = pageflip::adv::scan_response(config::DEVICE_NAME);

    loop {
        let conn = match ble::keyboard::advertise(sd, &adv_data, &scan_data).await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("advertising failed: {}", e);
                Timer::after_secs(1).await;
                continue;
            }
        };

        LINK_ACTIVE.store(true, Ordering::Relaxed);
        ble::keyboard::serve(server, &conn).await;
        LINK_ACTIVE.store(false, Ordering::Relaxed);
    }
}

/// The single run-to-completion main loop.
///
/// Triggers are only produced while the link is active; a gesture cut
/// off by a link drop is abandoned in place and the user re-initiates
/// it from idle.  Nothing is buffered or replayed.
#[embassy_executor::task]
async fn engine_task(left_pin: AnyPin, right_pin: AnyPin, led_pin: AnyPin) -> ! {
    let left = Input::new(left_pin, Pull::Up);
    let right = Input::new(right_pin, Pull::Up);
    // Lit while advertising, dark once a host is connected.
    let mut led = Output::new(led_pin, Level::High, OutputDrive::Standard);

    let mut machine = unwrap!(Machine::page_turner());
    let mut left_scan = ChannelScanner::new(ScanTimings::DEFAULT);
    let mut right_scan = ChannelScanner::new(ScanTimings::DEFAULT);
    let mut link = LinkIndicator::new();

    loop {
        if machine.tick() {
            trace!("---");
        }

        let connected = LINK_ACTIVE.load(Ordering::Relaxed);
        if let Some(up) = link.update(connected) {
            led.set_level(if up { Level::Low } else { Level::High });
            info!("{=str}", if up { "connected" } else { "connecting" });
        }

        if connected {
            let now = Instant::now().as_millis();
            // Fixed scan order: left channel before right.
            if let Some(kind) = left_scan.poll(left.is_low(), now) {
                step(&mut machine, Trigger::from_event(Channel::Left, kind));
            }
            if let Some(kind) = right_scan.poll(right.is_low(), now) {
                step(&mut machine, Trigger::from_event(Channel::Right, kind));
            }
        }

        Timer::after_millis(config::SCAN_INTERVAL_MS).await;
    }
}

/// Apply one trigger and dispatch the entry effect of the state it
/// lands on.  Unmatched triggers are legal and ignored.
fn step(machine: &mut Machine, trigger: Trigger) {
    if let Some(entry) = machine.trigger(trigger) {
        info!("state -> {=str}", machine.current().name());
        if let Entry::Emit(key) = entry {
            // Fire and forget: the BLE task owns pacing and delivery.
            if KEY_QUEUE.try_send(key.usage()).is_err() {
                warn!("key dropped: tx backlog");
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("pageflip starting");

    // The SoftDevice reserves the highest interrupt priorities.
    let mut hal_config = embassy_nrf::config::Config::default();
    hal_config.gpiote_interrupt_priority = Priority::P2;
    hal_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(hal_config);

    let sd_config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 256 }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    let sd = Softdevice::enable(&sd_config);

    static SERVER: StaticCell<Server> = StaticCell::new();
    let server = SERVER.init(unwrap!(Server::new(sd)));
    unwrap!(server.hid.report_map_set(&pageflip::hid::KEYBOARD_REPORT_DESCRIPTOR));
    unwrap!(server.hid.hid_info_set(&HID_INFO));
    unwrap!(server.hid.protocol_mode_set(&PROTOCOL_MODE_REPORT));

    unwrap!(spawner.spawn(softdevice_task(sd)));
    unwrap!(spawner.spawn(ble_task(sd, server)));
    unwrap!(spawner.spawn(engine_task(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_06.degrade(),
    )));
}
