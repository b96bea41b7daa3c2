//! FT6336 capacitive touch controller (I2C)
//!
//! Polled, no interrupt line. Only the first touch point is used.

use embedded_hal::i2c::I2c;
use lumalink_core::traits::{TouchError, TouchInput, TouchPoint, TouchState};

/// FT6336 I2C address
pub const I2C_ADDR: u8 = 0x38;

/// FT6336 register addresses
pub mod reg {
    /// Number of touch points in the low nibble
    pub const TD_STATUS: u8 = 0x02;
    /// Touch 1 X high nibble plus event flag
    pub const P1_XH: u8 = 0x03;
    /// Touch 1 Y high nibble plus touch ID
    pub const P1_YH: u8 = 0x05;
}

/// Most points the controller tracks
const MAX_POINTS: u8 = 2;

/// Errors that can occur during FT6336 operations
#[derive(Debug)]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Self::I2c(e)
    }
}

/// FT6336 driver
pub struct Ft6336<I2C> {
    i2c: I2C,
}

impl<I2C> Ft6336<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Number of fingers on the panel
    ///
    /// The register reads 0x0F before the first touch after reset, so
    /// anything above the supported count is treated as none.
    pub fn touch_count(&mut self) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(I2C_ADDR, &[reg::TD_STATUS], &mut buf)?;
        let count = buf[0] & 0x0F;
        Ok(if count > MAX_POINTS { 0 } else { count })
    }

    /// First touch point, if the panel is touched
    pub fn read_point(&mut self) -> Result<Option<TouchPoint>, Error<I2C::Error>> {
        // TD_STATUS, XH, XL, YH, YL in one burst
        let mut buf = [0u8; 5];
        self.i2c.write_read(I2C_ADDR, &[reg::TD_STATUS], &mut buf)?;

        let count = buf[0] & 0x0F;
        if count == 0 || count > MAX_POINTS {
            return Ok(None);
        }
        Ok(Some(TouchPoint {
            x: coordinate(buf[1], buf[2]),
            y: coordinate(buf[3], buf[4]),
        }))
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> TouchInput for Ft6336<I2C>
where
    I2C: I2c,
{
    fn point(&mut self) -> Result<Option<TouchPoint>, TouchError> {
        self.read_point().map_err(|Error::I2c(_)| TouchError::Bus)
    }

    fn state(&mut self) -> Result<TouchState, TouchError> {
        match self.touch_count() {
            Ok(0) => Ok(TouchState::Released),
            Ok(_) => Ok(TouchState::Pressed),
            Err(Error::I2c(_)) => Err(TouchError::Bus),
        }
    }
}

/// 12-bit coordinate from a high/low register pair
fn coordinate(high: u8, low: u8) -> u16 {
    (u16::from(high & 0x0F) << 8) | u16::from(low)
}
