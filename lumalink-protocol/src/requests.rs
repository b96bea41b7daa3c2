//! Requests issued by the core to the peripheral link
//!
//! All requests are fire-and-forget. A read is answered later by a
//! [`PeripheralEvent`](crate::PeripheralEvent); a write has no answer.

use crate::attribute::{AttributeId, ListId, ScalarId};

/// Outbound request to the peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkRequest {
    /// Read an attribute's current value
    Read(AttributeId),
    /// Write a scalar attribute
    Write { id: ScalarId, value: u8 },
}

impl LinkRequest {
    /// Read request for a scalar attribute
    pub const fn read_scalar(id: ScalarId) -> Self {
        LinkRequest::Read(AttributeId::Scalar(id))
    }

    /// Read request for a list attribute
    pub const fn read_list(id: ListId) -> Self {
        LinkRequest::Read(AttributeId::List(id))
    }

    /// The attribute this request targets
    pub fn attribute(&self) -> AttributeId {
        match *self {
            LinkRequest::Read(id) => id,
            LinkRequest::Write { id, .. } => AttributeId::Scalar(id),
        }
    }

    /// Returns true for writes
    pub fn is_write(&self) -> bool {
        matches!(self, LinkRequest::Write { .. })
    }
}
