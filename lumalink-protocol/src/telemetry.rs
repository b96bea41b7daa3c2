//! Telemetry channels read from the power-management peripheral

/// Diagnostic readings shown on the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryChannel {
    /// Instantaneous battery power (mW)
    BatteryPower,
    /// Battery terminal voltage (V)
    BatteryVoltage,
    /// Power IC die temperature (°C)
    Temperature,
    /// External input voltage (V)
    InputVoltage,
    /// Battery charge current (mA)
    ChargeCurrent,
}

impl TelemetryChannel {
    /// All channels, in display order
    pub const ALL: [TelemetryChannel; 5] = [
        TelemetryChannel::Temperature,
        TelemetryChannel::InputVoltage,
        TelemetryChannel::ChargeCurrent,
        TelemetryChannel::BatteryVoltage,
        TelemetryChannel::BatteryPower,
    ];

    /// Position of this channel in [`TelemetryChannel::ALL`]
    pub const fn slot(self) -> usize {
        match self {
            TelemetryChannel::Temperature => 0,
            TelemetryChannel::InputVoltage => 1,
            TelemetryChannel::ChargeCurrent => 2,
            TelemetryChannel::BatteryVoltage => 3,
            TelemetryChannel::BatteryPower => 4,
        }
    }

    /// Row label
    pub const fn label(self) -> &'static str {
        match self {
            TelemetryChannel::Temperature => "Temperature:",
            TelemetryChannel::InputVoltage => "AC Voltage:",
            TelemetryChannel::ChargeCurrent => "Charge Current:",
            TelemetryChannel::BatteryVoltage => "Battery Voltage:",
            TelemetryChannel::BatteryPower => "Battery Power:",
        }
    }

    /// Unit suffix
    pub const fn unit(self) -> &'static str {
        match self {
            TelemetryChannel::Temperature => "C",
            TelemetryChannel::InputVoltage | TelemetryChannel::BatteryVoltage => "V",
            TelemetryChannel::ChargeCurrent => "mA",
            TelemetryChannel::BatteryPower => "mW",
        }
    }

    /// Digits after the decimal point
    pub const fn precision(self) -> usize {
        match self {
            TelemetryChannel::BatteryVoltage | TelemetryChannel::BatteryPower => 2,
            _ => 1,
        }
    }
}
