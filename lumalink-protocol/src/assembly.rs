//! Reassembly of list payloads from notification chunks
//!
//! The peripheral streams long lists as a sequence of notifications. The
//! last chunk carries the NUL terminator; earlier chunks are buffered here
//! until it arrives.

use crate::list::{ListPayload, TERMINATOR};

/// Errors that can occur during reassembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssemblyError {
    /// Payload exceeded the buffer before a terminator arrived
    Overflow,
}

/// Accumulates chunks until a terminated payload is complete
#[derive(Debug, Clone, Default)]
pub struct ListAssembler {
    buffer: ListPayload,
}

impl ListAssembler {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: ListPayload::new(),
        }
    }

    /// Drop any partially assembled payload
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes buffered so far
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(payload))` when the terminator completes a payload,
    /// `Ok(None)` when more bytes are needed, or `Err` on overflow.
    pub fn feed(&mut self, byte: u8) -> Result<Option<ListPayload>, AssemblyError> {
        if self.buffer.push(byte).is_err() {
            self.reset();
            return Err(AssemblyError::Overflow);
        }

        if byte == TERMINATOR {
            let payload = core::mem::take(&mut self.buffer);
            return Ok(Some(payload));
        }

        Ok(None)
    }

    /// Feed one notification chunk
    ///
    /// Returns the completed payload, if the chunk finished one. Bytes
    /// after the terminator are discarded.
    pub fn feed_chunk(&mut self, chunk: &[u8]) -> Result<Option<ListPayload>, AssemblyError> {
        for &byte in chunk {
            if let Some(payload) = self.feed(byte)? {
                return Ok(Some(payload));
            }
        }
        Ok(None)
    }
}
