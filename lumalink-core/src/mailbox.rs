//! Event mailbox between the wireless stack and the core
//!
//! The BLE task posts, the UI loop drains once per pass. This keeps every
//! cache mutation on the UI side.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use lumalink_protocol::PeripheralEvent;

/// Bounded, interrupt-safe queue of peripheral events
pub struct EventMailbox<const N: usize> {
    channel: Channel<CriticalSectionRawMutex, PeripheralEvent, N>,
}

impl<const N: usize> Default for EventMailbox<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventMailbox<N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Post without waiting
    ///
    /// Hands the event back when the mailbox is full.
    pub fn post(&self, event: PeripheralEvent) -> Result<(), PeripheralEvent> {
        self.channel.try_send(event).map_err(|e| match e {
            TrySendError::Full(event) => event,
        })
    }

    /// Post, waiting for room
    pub async fn send(&self, event: PeripheralEvent) {
        self.channel.send(event).await;
    }

    /// Take the oldest event, if any
    pub fn try_take(&self) -> Option<PeripheralEvent> {
        self.channel.try_receive().ok()
    }

    /// Take every queued event, oldest first
    pub fn drain(&self) -> impl Iterator<Item = PeripheralEvent> + '_ {
        core::iter::from_fn(move || self.try_take())
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumalink_protocol::ScalarId;

    #[test]
    fn test_fifo_order() {
        let mailbox: EventMailbox<4> = EventMailbox::new();
        mailbox.post(PeripheralEvent::Connected).unwrap();
        mailbox
            .post(PeripheralEvent::ScalarChanged {
                id: ScalarId::Speed,
                value: 5,
            })
            .unwrap();

        let mut drained = mailbox.drain();
        assert_eq!(drained.next(), Some(PeripheralEvent::Connected));
        assert!(matches!(
            drained.next(),
            Some(PeripheralEvent::ScalarChanged { value: 5, .. })
        ));
        assert_eq!(drained.next(), None);
    }

    #[test]
    fn test_full_mailbox_returns_event() {
        let mailbox: EventMailbox<1> = EventMailbox::new();
        mailbox.post(PeripheralEvent::Connected).unwrap();
        assert_eq!(
            mailbox.post(PeripheralEvent::Disconnected),
            Err(PeripheralEvent::Disconnected)
        );
        assert_eq!(mailbox.len(), 1);
    }
}
