//! Last-known peripheral attribute values

use lumalink_protocol::{ListId, NameList, ScalarId};

/// Cached scalar and list attributes
///
/// Mutations only store values. Rendering the change is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct AttributeCache {
    scalars: [u8; ScalarId::ALL.len()],
    lists: [NameList; ListId::ALL.len()],
}

impl AttributeCache {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            scalars: [0; ScalarId::ALL.len()],
            lists: [NameList::new(), NameList::new()],
        }
    }

    pub fn get_scalar(&self, id: ScalarId) -> u8 {
        self.scalars[id.slot()]
    }

    pub fn get_list(&self, id: ListId) -> &NameList {
        &self.lists[id.slot()]
    }

    /// Store a scalar, returning whether it changed
    ///
    /// Index attributes are clamped to their list while the list is
    /// non-empty. With no list yet the raw value is kept until one arrives.
    pub fn set_scalar(&mut self, id: ScalarId, value: u8) -> bool {
        let value = match id.indexed_list() {
            Some(list) => clamp_index(value, self.get_list(list).len()),
            None => value,
        };

        let slot = &mut self.scalars[id.slot()];
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }

    /// Replace a list
    ///
    /// Returns the paired index when it had to be clamped into the new list.
    pub fn set_list(&mut self, id: ListId, items: NameList) -> Option<u8> {
        let len = items.len();
        self.lists[id.slot()] = items;

        let index = &mut self.scalars[id.index().slot()];
        let clamped = clamp_index(*index, len);
        if clamped == *index {
            return None;
        }
        *index = clamped;
        Some(clamped)
    }

    /// Position of the selected item, or None while the list is empty
    pub fn selected_index(&self, list: ListId) -> Option<usize> {
        let len = self.get_list(list).len();
        if len == 0 {
            return None;
        }
        Some(usize::from(self.get_scalar(list.index())) % len)
    }

    /// Name of the selected item
    pub fn selected_item(&self, list: ListId) -> Option<&str> {
        let index = self.selected_index(list)?;
        self.get_list(list).get(index).map(|name| name.as_str())
    }
}

/// Clamp an index into `[0, len - 1]`, leaving it alone for an empty list
fn clamp_index(index: u8, len: usize) -> u8 {
    match len.checked_sub(1) {
        Some(last) => usize::from(index).min(last) as u8,
        None => index,
    }
}
