//! Requests issued when a peripheral connects
//!
//! Index attributes are not part of the bulk refresh. Each is read once
//! its list has arrived, so an index is never shown without a backing list.

use lumalink_protocol::{LinkRequest, ListId, ScalarId};

/// Bulk refresh, in issue order
pub const BULK_REFRESH: [LinkRequest; 4] = [
    LinkRequest::read_list(ListId::Patterns),
    LinkRequest::read_list(ListId::Colors),
    LinkRequest::read_scalar(ScalarId::Brightness),
    LinkRequest::read_scalar(ScalarId::Speed),
];

/// Read issued after `list` is received
pub const fn follow_up(list: ListId) -> LinkRequest {
    LinkRequest::read_scalar(list.index())
}
