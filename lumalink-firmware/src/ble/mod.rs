//! Bluetooth Low Energy subsystem
//!
//! Drives the S140 SoftDevice in the central role:
//!
//! 1. **Scan** for the configured peer by advertised name.
//! 2. **Connect** and discover the lighting service.
//! 3. **Serve** link requests and forward notifications as
//!    [`PeripheralEvent`](lumalink_protocol::PeripheralEvent)s until the
//!    link drops, then start over.

pub mod central;
pub mod client;

pub use client::{ClientError, LightingClient, ListStreams};
