//! Gesture to peripheral
//!
//! Completed gestures update the cache optimistically and yield the write
//! to send. Drags in progress never leave the device.

use lumalink_protocol::{LinkRequest, ListId, ScalarId};

use crate::cache::AttributeCache;

/// Selector arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepDirection {
    Previous,
    Next,
}

impl StepDirection {
    pub const fn delta(self) -> i8 {
        match self {
            StepDirection::Previous => -1,
            StepDirection::Next => 1,
        }
    }
}

/// User gestures the core understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Selector arrow clicked
    SelectorStep { list: ListId, direction: StepDirection },
    /// Slider dragged, finger still down
    SliderMoved { scalar: ScalarId, value: u8 },
    /// Slider released at its settled value
    SliderReleased { scalar: ScalarId, value: u8 },
}

/// `(current + len + delta) % len`, or None for an empty list
pub fn wrap_step(current: usize, len: usize, delta: i8) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let base = current % len + len;
    let step = usize::from(delta.unsigned_abs()) % len;
    let stepped = if delta < 0 { base - step } else { base + step };
    Some(stepped % len)
}

/// Apply a gesture to the cache
///
/// Returns the write request for a completed gesture.
pub fn apply_gesture(cache: &mut AttributeCache, gesture: Gesture) -> Option<LinkRequest> {
    match gesture {
        Gesture::SelectorStep { list, direction } => {
            let index = list.index();
            let current = usize::from(cache.get_scalar(index));
            let next = wrap_step(current, cache.get_list(list).len(), direction.delta())?;
            let value = u8::try_from(next).ok()?;
            cache.set_scalar(index, value);
            Some(LinkRequest::Write { id: index, value })
        }
        Gesture::SliderMoved { .. } => None,
        Gesture::SliderReleased { scalar, value } => {
            cache.set_scalar(scalar, value);
            Some(LinkRequest::Write {
                id: scalar,
                value: cache.get_scalar(scalar),
            })
        }
    }
}
