//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lumalink-core for the remote's I2C peripherals:
//!
//! - Power management (AXP192: telemetry, backlight rail, shutdown)
//! - Touch input (FT6336 capacitive controller)
//!
//! Both drivers are generic over a blocking `embedded_hal::i2c::I2c` bus so
//! they can share one bus through `embedded-hal-bus`.

#![no_std]
#![deny(unsafe_code)]

pub mod power;
pub mod touch;

#[cfg(test)]
mod fake_bus;
