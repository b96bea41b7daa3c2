//! Telemetry snapshot shown in the diagnostic rows

use core::fmt::Write;

use heapless::{String, Vec};
use lumalink_protocol::TelemetryChannel;

use crate::traits::{PowerError, PowerManagement};

/// Formatted reading, e.g. `"4.12 V"`
pub type DiagnosticText = String<16>;

/// Shown in place of a reading that failed
pub const MISSING_READING: &str = "--";

/// Channels that failed during a capture
pub type CaptureFailures = Vec<(TelemetryChannel, PowerError), { TelemetryChannel::ALL.len() }>;

/// One reading per telemetry channel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagnosticSnapshot {
    readings: [Option<f32>; TelemetryChannel::ALL.len()],
}

impl DiagnosticSnapshot {
    /// Snapshot with no readings yet
    pub const fn new() -> Self {
        Self {
            readings: [None; TelemetryChannel::ALL.len()],
        }
    }

    /// Read every channel
    ///
    /// A failed channel is left empty and reported; the rest are still read.
    pub fn capture<P: PowerManagement>(power: &mut P) -> (Self, CaptureFailures) {
        let mut snapshot = Self::new();
        let mut failures = CaptureFailures::new();

        for channel in TelemetryChannel::ALL {
            match power.read_telemetry(channel) {
                Ok(value) => snapshot.readings[channel.slot()] = Some(value),
                Err(e) => {
                    // Capacity equals the channel count
                    let _ = failures.push((channel, e));
                }
            }
        }

        (snapshot, failures)
    }

    pub fn reading(&self, channel: TelemetryChannel) -> Option<f32> {
        self.readings[channel.slot()]
    }

    /// Display text for a channel
    pub fn format(&self, channel: TelemetryChannel) -> DiagnosticText {
        let mut text = DiagnosticText::new();
        match self.reading(channel) {
            Some(value) => {
                let written = write!(
                    text,
                    "{:.*} {}",
                    channel.precision(),
                    value,
                    channel.unit()
                );
                if written.is_err() {
                    text.clear();
                    let _ = text.push_str(MISSING_READING);
                }
            }
            None => {
                let _ = text.push_str(MISSING_READING);
            }
        }
        text
    }
}
