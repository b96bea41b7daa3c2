//! Events delivered from the peripheral link into the core

use crate::attribute::{ListId, ScalarId};
use crate::list::ListPayload;

/// Peripheral link events
///
/// Produced by the wireless stack, consumed once per loop pass by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralEvent {
    /// Link established and services discovered
    Connected,
    /// Link lost
    Disconnected,
    /// A scalar attribute was read or notified
    ScalarChanged { id: ScalarId, value: u8 },
    /// A list payload was read or reassembled from notifications
    ListReceived { id: ListId, payload: ListPayload },
}

impl PeripheralEvent {
    /// Build a list event from raw bytes
    ///
    /// Bytes past the payload capacity are dropped, which leaves the
    /// payload unterminated so the core will discard it.
    pub fn list(id: ListId, bytes: &[u8]) -> Self {
        let mut payload = ListPayload::new();
        let take = bytes.len().min(payload.capacity());
        // Fits: take <= capacity
        let _ = payload.extend_from_slice(&bytes[..take]);
        PeripheralEvent::ListReceived { id, payload }
    }

    /// Returns true for connection state changes
    pub fn is_connection(&self) -> bool {
        matches!(self, PeripheralEvent::Connected | PeripheralEvent::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::MAX_LIST_PAYLOAD;

    #[test]
    fn test_list_event_keeps_bytes() {
        let event = PeripheralEvent::list(ListId::Colors, b"Red\0");
        match event {
            PeripheralEvent::ListReceived { id, payload } => {
                assert_eq!(id, ListId::Colors);
                assert_eq!(payload.as_slice(), b"Red\0");
            }
            _ => panic!("expected list event"),
        }
    }

    #[test]
    fn test_oversized_list_is_cut() {
        let bytes = [b'a'; MAX_LIST_PAYLOAD + 10];
        match PeripheralEvent::list(ListId::Patterns, &bytes) {
            PeripheralEvent::ListReceived { payload, .. } => {
                assert_eq!(payload.len(), MAX_LIST_PAYLOAD);
            }
            _ => panic!("expected list event"),
        }
    }

    #[test]
    fn test_is_connection() {
        assert!(PeripheralEvent::Connected.is_connection());
        assert!(PeripheralEvent::Disconnected.is_connection());
        let scalar = PeripheralEvent::ScalarChanged {
            id: ScalarId::Speed,
            value: 3,
        };
        assert!(!scalar.is_connection());
    }
}
