//! LumaLink - Handheld Remote Firmware
//!
//! Main firmware binary for nRF52840 boards running the S140 SoftDevice.
//! Connects to a BLE lighting controller as a central and mirrors its
//! pattern, color, brightness and speed on a 320x240 touch panel.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::interrupt::{self, InterruptExt, Priority};
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Timer};
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9342CRgb565;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::Builder;
use nrf_softdevice::{raw, Softdevice};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumalink_core::Remote;
use lumalink_display::Screen;
use lumalink_drivers::power::Axp192;
use lumalink_drivers::touch::Ft6336;

use crate::link::ChannelLink;

mod ble;
mod board;
mod channels;
mod config;
mod link;
mod report;
mod tasks;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

// Static cells for buses and DMA buffers (must live forever)
static I2C_BUS: StaticCell<RefCell<Twim<'static>>> = StaticCell::new();
static I2C_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static SPI_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("LumaLink remote starting...");

    // Priorities 0, 1 and 4 belong to the SoftDevice
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);
    interrupt::TWISPI0.set_priority(Priority::P3);
    interrupt::SPIM3.set_priority(Priority::P3);
    info!("Peripherals initialized");

    let sd: &'static Softdevice = Softdevice::enable(&softdevice_config());
    unwrap!(spawner.spawn(tasks::softdevice_task(sd)));
    info!("SoftDevice enabled");

    // Shared I2C bus: AXP192 at 0x34, FT6336 at 0x38
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let twim = Twim::new(
        p.TWISPI0,
        Irqs,
        p.P0_26,
        p.P0_27,
        i2c_config,
        I2C_TX_BUF.init([0u8; 16]),
    );
    let i2c_bus: &'static RefCell<Twim<'static>> = I2C_BUS.init(RefCell::new(twim));

    let mut power = Axp192::new(RefCellDevice::new(i2c_bus));
    if power.init().is_err() {
        error!("AXP192 init failed");
    }
    let touch = Ft6336::new(RefCellDevice::new(i2c_bus));
    info!("I2C peripherals initialized");

    // ILI9342C panel on SPIM3
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M32;
    let spim = Spim::new_txonly(p.SPI3, Irqs, p.P1_15, p.P1_13, spi_config);
    let cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let dc = Output::new(p.P1_11, Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P1_10, Level::High, OutputDrive::Standard);

    let spi_device = unwrap!(ExclusiveDevice::new_no_delay(spim, cs));
    let di = SpiInterface::new(spi_device, dc, SPI_BUF.init([0u8; 512]));
    let panel = match Builder::new(ILI9342CRgb565, di)
        .reset_pin(rst)
        .display_size(board::PANEL_WIDTH, board::PANEL_HEIGHT)
        .color_order(ColorOrder::Bgr)
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("Panel init failed"),
    };
    info!("Panel initialized");

    info!("Configuration: {}", config::REMOTE_CONFIG);
    let remote = Remote::new(config::REMOTE_CONFIG, Screen::new(), ChannelLink, power);

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::tick_task()));
    unwrap!(spawner.spawn(tasks::ui_task(remote, touch, panel)));
    unwrap!(spawner.spawn(tasks::ble_task(sd)));

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// SoftDevice setup for a single central link
fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
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
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t { att_mtu: 247 }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 0,
            central_role_count: 1,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        ..Default::default()
    }
}
