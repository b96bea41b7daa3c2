//! Peripheral link trait

use lumalink_protocol::LinkRequest;

/// Errors returned when a request cannot be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Outbound queue is full
    QueueFull,
    /// No peripheral is connected
    NotConnected,
}

/// Outbound side of the peripheral link
///
/// `submit` only queues. Reads are answered later through a
/// [`PeripheralEvent`](lumalink_protocol::PeripheralEvent); writes are never
/// answered. Implementations must not block.
pub trait PeripheralLink {
    /// Queue a request for the peripheral
    fn submit(&mut self, request: LinkRequest) -> Result<(), LinkError>;
}
