//! Property tests for selector arithmetic, cache clamping and payload rejection.

mod common;

use lumalink_core::cache::AttributeCache;
use lumalink_core::projection::wrap_step;
use lumalink_display::WidgetId;
use lumalink_protocol::{ItemName, ListId, NameList, PeripheralEvent, ScalarId, MAX_LIST_ITEMS};
use proptest::prelude::*;

fn names(len: usize) -> NameList {
    let mut list = NameList::new();
    for i in 0..len {
        let mut name = ItemName::new();
        name.push_str(&format!("item{i}")).unwrap();
        list.push(name).unwrap();
    }
    list
}

proptest! {
    #[test]
    fn wrap_step_stays_in_range(
        len in 1usize..=MAX_LIST_ITEMS,
        current in 0usize..256,
        forward in any::<bool>(),
    ) {
        let delta = if forward { 1 } else { -1 };
        let next = wrap_step(current, len, delta).unwrap();
        prop_assert!(next < len);
        if current < len {
            let expected = (current as isize + len as isize + delta as isize) % len as isize;
            prop_assert_eq!(next as isize, expected);
        }
    }

    #[test]
    fn shrinking_list_clamps_index(
        old_len in 2usize..=MAX_LIST_ITEMS,
        index_seed in any::<usize>(),
        new_len_seed in any::<usize>(),
    ) {
        let index = index_seed % old_len;
        let new_len = 1 + new_len_seed % old_len;

        let mut cache = AttributeCache::new();
        cache.set_list(ListId::Colors, names(old_len));
        cache.set_scalar(ScalarId::ColorIndex, index as u8);
        cache.set_list(ListId::Colors, names(new_len));

        let expected = index.min(new_len - 1);
        prop_assert_eq!(usize::from(cache.get_scalar(ScalarId::ColorIndex)), expected);
        let item = format!("item{expected}");
        prop_assert_eq!(cache.selected_item(ListId::Colors), Some(item.as_str()));
    }

    #[test]
    fn unterminated_payload_leaves_list_unchanged(
        mut bytes in proptest::collection::vec(any::<u8>(), 1..128),
        last in 1u8..=255,
    ) {
        if let Some(end) = bytes.last_mut() {
            *end = last;
        }

        let mut remote = common::remote();
        remote.handle_event(0, PeripheralEvent::list(ListId::Patterns, b"Rainbow\nSolid\0"));
        let before = remote.cache().get_list(ListId::Patterns).clone();

        remote.handle_event(1, PeripheralEvent::list(ListId::Patterns, &bytes));
        prop_assert_eq!(remote.cache().get_list(ListId::Patterns), &before);
        prop_assert_eq!(
            remote.display().text(WidgetId::Selector(ListId::Patterns)),
            Some("Rainbow")
        );
    }
}
