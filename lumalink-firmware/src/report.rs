//! Logging of core reports
//!
//! The core never logs; it hands back a [`Report`] from every entry point
//! and this module picks the level for each entry.

use defmt::*;

use lumalink_core::link::Edge;
use lumalink_core::traits::LinkError;
use lumalink_core::{Note, PowerOp, Report};

pub fn log_report(report: &Report) {
    match report.edge {
        Some(Edge::Connected) => info!("Link up, refreshing attributes"),
        Some(Edge::Disconnected) => info!("Link lost, power-off countdown started"),
        None => {}
    }

    if report.actions.power_off {
        info!("Disconnected too long, powering off");
    }
    if report.actions.dim {
        info!("Idle, dimming backlight");
    }
    if report.actions.refresh_diagnostics {
        trace!("Diagnostics refreshed");
    }

    for note in &report.notes {
        log_note(note);
    }
    if report.overflowed {
        warn!("Report overflowed, some notes were lost");
    }
}

fn log_note(note: &Note) {
    match *note {
        Note::PayloadDropped(list, e) => debug!("Dropped malformed {} list: {}", list, e),
        Note::IndexClamped(id, index) => debug!("{} clamped to {}", id, index),
        Note::RequestFailed(request, LinkError::NotConnected) => {
            debug!("Not connected, {} not sent", request)
        }
        Note::RequestFailed(request, e) => warn!("Request {} failed: {}", request, e),
        Note::DisplayFailed(e) => warn!("Display update failed: {}", e),
        Note::PowerFailed(PowerOp::Shutdown, e) => error!("Shutdown failed: {}", e),
        Note::PowerFailed(op, e) => warn!("{} failed: {}", op, e),
        Note::TelemetryFailed(channel, e) => warn!("Reading {} failed: {}", channel, e),
    }
}
