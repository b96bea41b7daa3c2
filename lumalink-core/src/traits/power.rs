//! Power-management peripheral trait

use lumalink_protocol::TelemetryChannel;

/// Errors that can occur talking to the power IC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerError {
    /// Bus transaction failed
    Bus,
    /// Requested level is outside what the rail supports
    OutOfRange,
}

/// Trait for the power-management peripheral
///
/// Covers the three things the remote needs: telemetry, the backlight rail
/// and shutdown. Register-level details stay in the driver.
pub trait PowerManagement {
    /// Read one telemetry channel in its display unit
    ///
    /// Takes `&mut self` because reads go over a shared bus.
    fn read_telemetry(&mut self, channel: TelemetryChannel) -> Result<f32, PowerError>;

    /// Set the backlight rail voltage
    fn set_backlight_mv(&mut self, millivolts: u16) -> Result<(), PowerError>;

    /// Cut power to the device
    ///
    /// On real hardware this does not return when it succeeds.
    fn shutdown(&mut self) -> Result<(), PowerError>;
}
