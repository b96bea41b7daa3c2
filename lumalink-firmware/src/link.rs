//! Peripheral link backed by the request channel

use core::sync::atomic::Ordering;

use lumalink_core::traits::{LinkError, PeripheralLink};
use lumalink_protocol::LinkRequest;

use crate::channels::{LINK_UP, REQUESTS};

/// Queues requests for the BLE task without waiting
pub struct ChannelLink;

impl PeripheralLink for ChannelLink {
    fn submit(&mut self, request: LinkRequest) -> Result<(), LinkError> {
        if !LINK_UP.load(Ordering::Acquire) {
            return Err(LinkError::NotConnected);
        }
        REQUESTS
            .try_send(request)
            .map_err(|_| LinkError::QueueFull)
    }
}
