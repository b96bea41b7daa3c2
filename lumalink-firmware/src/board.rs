//! Concrete peripheral types for the remote board
//!
//! Embassy tasks cannot be generic, so every driver stack is named here.

use embassy_nrf::gpio::Output;
use embassy_nrf::spim::Spim;
use embassy_nrf::twim::Twim;
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9342CRgb565;

use lumalink_core::Remote;
use lumalink_display::Screen;
use lumalink_drivers::power::Axp192;
use lumalink_drivers::touch::Ft6336;

use crate::link::ChannelLink;

/// Panel resolution
pub const PANEL_WIDTH: u16 = 320;
pub const PANEL_HEIGHT: u16 = 240;

/// One handle on the I2C bus shared by the PMIC and the touch controller
pub type I2cDevice = RefCellDevice<'static, Twim<'static>>;

pub type Power = Axp192<I2cDevice>;

pub type Touch = Ft6336<I2cDevice>;

pub type PanelSpi = ExclusiveDevice<Spim<'static>, Output<'static>, NoDelay>;

pub type PanelInterface = SpiInterface<'static, PanelSpi, Output<'static>>;

pub type Panel = mipidsi::Display<PanelInterface, ILI9342CRgb565, Output<'static>>;

pub type FirmwareRemote = Remote<Screen, ChannelLink, Power>;
