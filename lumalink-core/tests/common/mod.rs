//! Fake collaborators shared by the integration tests

#![allow(dead_code)]

use lumalink_core::config::RemoteConfig;
use lumalink_core::traits::{LinkError, PeripheralLink, PowerError, PowerManagement};
use lumalink_core::Remote;
use lumalink_display::Screen;
use lumalink_protocol::{LinkRequest, TelemetryChannel};

/// Link that records every request
#[derive(Default)]
pub struct RecordingLink {
    pub sent: Vec<LinkRequest>,
}

impl PeripheralLink for RecordingLink {
    fn submit(&mut self, request: LinkRequest) -> Result<(), LinkError> {
        self.sent.push(request);
        Ok(())
    }
}

/// Power IC with fixed telemetry that counts side effects
#[derive(Default)]
pub struct FakePower {
    pub backlight_mv: Vec<u16>,
    pub shutdowns: usize,
    pub telemetry_reads: usize,
    pub fail_shutdown: bool,
}

impl PowerManagement for FakePower {
    fn read_telemetry(&mut self, channel: TelemetryChannel) -> Result<f32, PowerError> {
        self.telemetry_reads += 1;
        Ok(match channel {
            TelemetryChannel::Temperature => 31.2,
            TelemetryChannel::InputVoltage => 0.0,
            TelemetryChannel::ChargeCurrent => 0.0,
            TelemetryChannel::BatteryVoltage => 4.05,
            TelemetryChannel::BatteryPower => 350.0,
        })
    }

    fn set_backlight_mv(&mut self, millivolts: u16) -> Result<(), PowerError> {
        self.backlight_mv.push(millivolts);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PowerError> {
        self.shutdowns += 1;
        if self.fail_shutdown {
            return Err(PowerError::Bus);
        }
        Ok(())
    }
}

pub type TestRemote = Remote<Screen, RecordingLink, FakePower>;

/// A started remote with default configuration
pub fn remote() -> TestRemote {
    let mut remote = Remote::new(
        RemoteConfig::default(),
        Screen::new(),
        RecordingLink::default(),
        FakePower::default(),
    );
    remote.start();
    remote
}
