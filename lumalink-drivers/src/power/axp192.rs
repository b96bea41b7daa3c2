//! AXP192 power-management IC (I2C)
//!
//! The AXP192 powers the remote: it charges the battery, drives the LCD
//! backlight from its DCDC3 converter and can cut the main supply.
//!
//! # ADC Encoding
//!
//! Most readings are 12-bit, split as 8 high bits in the first register
//! and 4 low bits in the second. Charge current is 13-bit (8 + 5) and
//! battery power is a plain 24-bit big-endian product.
//!
//! | Reading         | Register | Width | LSB     |
//! |-----------------|----------|-------|---------|
//! | ACIN voltage    | 0x56     | 12    | 1.7 mV  |
//! | Die temperature | 0x5E     | 12    | 0.1 °C  |
//! | Battery power   | 0x70     | 24    | 0.55 µW |
//! | Battery voltage | 0x78     | 12    | 1.1 mV  |
//! | Charge current  | 0x7A     | 13    | 0.5 mA  |

use embedded_hal::i2c::I2c;
use lumalink_core::traits::{PowerError, PowerManagement};
use lumalink_protocol::TelemetryChannel;

/// AXP192 I2C address
pub const I2C_ADDR: u8 = 0x34;

/// AXP192 register addresses
pub mod reg {
    /// Output enable for DCDC1-3 and LDO2-3
    pub const POWER_OUTPUT: u8 = 0x12;
    /// DCDC3 output voltage
    pub const DCDC3_VOLTAGE: u8 = 0x27;
    /// Shutdown and battery detection control
    pub const SHUTDOWN: u8 = 0x32;
    /// ACIN voltage ADC, high byte
    pub const ACIN_VOLTAGE: u8 = 0x56;
    /// Internal temperature ADC, high byte
    pub const TEMPERATURE: u8 = 0x5E;
    /// Battery power product, high byte
    pub const BATTERY_POWER: u8 = 0x70;
    /// Battery voltage ADC, high byte
    pub const BATTERY_VOLTAGE: u8 = 0x78;
    /// Battery charge current ADC, high byte
    pub const CHARGE_CURRENT: u8 = 0x7A;
    /// ADC enable 1
    pub const ADC_ENABLE_1: u8 = 0x82;
}

/// DCDC3 enable bit in `POWER_OUTPUT`
const DCDC3_ENABLE: u8 = 1 << 1;

/// Shutdown bit in `SHUTDOWN`
const SHUTDOWN_BIT: u8 = 1 << 7;

/// DCDC3 range and step (mV)
pub const DCDC3_MIN_MV: u16 = 700;
pub const DCDC3_MAX_MV: u16 = 3500;
const DCDC3_STEP_MV: u16 = 25;

/// Errors that can occur during AXP192 operations
#[derive(Debug)]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// Requested voltage is outside the rail range
    OutOfRange,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::I2c(e)
    }
}

impl<E> From<Error<E>> for PowerError {
    fn from(e: Error<E>) -> Self {
        match e {
            Error::I2c(_) => PowerError::Bus,
            Error::OutOfRange => PowerError::OutOfRange,
        }
    }
}

/// AXP192 driver
pub struct Axp192<I2C> {
    i2c: I2C,
}

impl<I2C> Axp192<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Enable the ADCs and the backlight rail
    pub fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_byte(reg::ADC_ENABLE_1, 0xFF)?;
        self.update_bits(reg::POWER_OUTPUT, DCDC3_ENABLE, DCDC3_ENABLE)
    }

    /// Set the DCDC3 (backlight) voltage
    pub fn set_dcdc3_mv(&mut self, millivolts: u16) -> Result<(), Error<I2C::Error>> {
        if !(DCDC3_MIN_MV..=DCDC3_MAX_MV).contains(&millivolts) {
            return Err(Error::OutOfRange);
        }
        let steps = ((millivolts - DCDC3_MIN_MV) / DCDC3_STEP_MV) as u8;
        self.update_bits(reg::DCDC3_VOLTAGE, 0x7F, steps)
    }

    /// Cut the main supply
    pub fn power_off(&mut self) -> Result<(), Error<I2C::Error>> {
        self.update_bits(reg::SHUTDOWN, SHUTDOWN_BIT, SHUTDOWN_BIT)
    }

    /// Battery terminal voltage (mV)
    pub fn battery_voltage_mv(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = adc12(self.read_bytes(reg::BATTERY_VOLTAGE)?);
        Ok(f32::from(raw) * 1.1)
    }

    /// ACIN voltage (mV)
    pub fn acin_voltage_mv(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = adc12(self.read_bytes(reg::ACIN_VOLTAGE)?);
        Ok(f32::from(raw) * 1.7)
    }

    /// Die temperature (°C)
    pub fn temperature_c(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = adc12(self.read_bytes(reg::TEMPERATURE)?);
        Ok(f32::from(raw) * 0.1 - 144.7)
    }

    /// Battery charge current (mA)
    pub fn charge_current_ma(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = adc13(self.read_bytes(reg::CHARGE_CURRENT)?);
        Ok(f32::from(raw) * 0.5)
    }

    /// Instantaneous battery power (mW)
    pub fn battery_power_mw(&mut self) -> Result<f32, Error<I2C::Error>> {
        let raw = adc24(self.read_bytes(reg::BATTERY_POWER)?);
        // 24-bit fits an f32 mantissa exactly
        Ok(raw as f32 * 1.1 * 0.5 / 1000.0)
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn read_bytes<const N: usize>(&mut self, reg: u8) -> Result<[u8; N], Error<I2C::Error>> {
        let mut buf = [0u8; N];
        self.i2c.write_read(I2C_ADDR, &[reg], &mut buf)?;
        Ok(buf)
    }

    fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write(I2C_ADDR, &[reg, value])?;
        Ok(())
    }

    fn update_bits(&mut self, reg: u8, mask: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        let [current] = self.read_bytes::<1>(reg)?;
        self.write_byte(reg, (current & !mask) | (value & mask))
    }
}

impl<I2C> PowerManagement for Axp192<I2C>
where
    I2C: I2c,
{
    fn read_telemetry(&mut self, channel: TelemetryChannel) -> Result<f32, PowerError> {
        let value = match channel {
            TelemetryChannel::BatteryPower => self.battery_power_mw()?,
            TelemetryChannel::BatteryVoltage => self.battery_voltage_mv()? / 1000.0,
            TelemetryChannel::Temperature => self.temperature_c()?,
            TelemetryChannel::InputVoltage => self.acin_voltage_mv()? / 1000.0,
            TelemetryChannel::ChargeCurrent => self.charge_current_ma()?,
        };
        Ok(value)
    }

    fn set_backlight_mv(&mut self, millivolts: u16) -> Result<(), PowerError> {
        Ok(self.set_dcdc3_mv(millivolts)?)
    }

    fn shutdown(&mut self) -> Result<(), PowerError> {
        Ok(self.power_off()?)
    }
}

fn adc12([high, low]: [u8; 2]) -> u16 {
    (u16::from(high) << 4) | u16::from(low & 0x0F)
}

fn adc13([high, low]: [u8; 2]) -> u16 {
    (u16::from(high) << 5) | u16::from(low & 0x1F)
}

fn adc24([high, mid, low]: [u8; 3]) -> u32 {
    (u32::from(high) << 16) | (u32::from(mid) << 8) | u32::from(low)
}
