//! Connection state machine
//!
//! Two states. Only connection events move it; re-entering the current
//! state is a no-op.

use lumalink_protocol::PeripheralEvent;

/// Link states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

/// A real change of connection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Disconnected to Connected
    Connected,
    /// Connected to Disconnected
    Disconnected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: &PeripheralEvent) -> Self {
        use ConnectionState::*;

        match (self, event) {
            (Disconnected, PeripheralEvent::Connected) => Connected,
            (Connected, PeripheralEvent::Disconnected) => Disconnected,

            // Attribute traffic and repeated connection events
            _ => self,
        }
    }

    /// The edge taken moving from `self` to `next`, if any
    pub fn edge_to(self, next: Self) -> Option<Edge> {
        match (self, next) {
            (ConnectionState::Disconnected, ConnectionState::Connected) => Some(Edge::Connected),
            (ConnectionState::Connected, ConnectionState::Disconnected) => {
                Some(Edge::Disconnected)
            }
            _ => None,
        }
    }
}
