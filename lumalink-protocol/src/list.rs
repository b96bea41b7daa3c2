//! List payload decoding
//!
//! Payload format:
//! - Item names separated by `\n`
//! - A single NUL terminator at the end
//! - A trailing `\n` before the terminator is optional
//!
//! Payloads that are empty or do not end in the terminator were observed
//! before the transport finished reassembling them and are rejected.

use heapless::{String, Vec};

/// Payload terminator byte
pub const TERMINATOR: u8 = 0;

/// Maximum reassembled payload size in bytes (terminator included)
pub const MAX_LIST_PAYLOAD: usize = 512;

/// Maximum number of names kept per list
pub const MAX_LIST_ITEMS: usize = 32;

/// Maximum name length in bytes
pub const MAX_ITEM_LEN: usize = 24;

/// Raw list payload as delivered by the transport
pub type ListPayload = Vec<u8, MAX_LIST_PAYLOAD>;

/// A single list entry
pub type ItemName = String<MAX_ITEM_LEN>;

/// Decoded list of names
pub type NameList = Vec<ItemName, MAX_LIST_ITEMS>;

/// Reasons a payload is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ListError {
    /// Zero-length buffer
    Empty,
    /// Last byte is not the terminator
    Unterminated,
    /// Content is not valid UTF-8
    InvalidUtf8,
}

/// Decode a NUL-terminated list payload
///
/// Content ends at the first terminator. Names longer than
/// [`MAX_ITEM_LEN`] are cut at a character boundary and names past
/// [`MAX_LIST_ITEMS`] are ignored.
pub fn parse_list(payload: &[u8]) -> Result<NameList, ListError> {
    let last = *payload.last().ok_or(ListError::Empty)?;
    if last != TERMINATOR {
        return Err(ListError::Unterminated);
    }

    let end = payload
        .iter()
        .position(|&b| b == TERMINATOR)
        .unwrap_or(payload.len() - 1);
    let content = core::str::from_utf8(&payload[..end]).map_err(|_| ListError::InvalidUtf8)?;

    let mut items = NameList::new();
    for line in split_lines(content) {
        if items.push(truncated(line)).is_err() {
            break;
        }
    }
    Ok(items)
}

/// Split content on `\n`
///
/// Empty segments between delimiters are kept. The final segment is
/// only yielded when non-empty, so a trailing `\n` adds nothing.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    let mut lines = body.split('\n');
    if content.is_empty() {
        // "".split() yields one empty segment
        lines.next();
    }
    lines
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a char
pub fn prefix_within(text: &str, max_bytes: usize) -> &str {
    let mut end = text.len().min(max_bytes);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn truncated(line: &str) -> ItemName {
    let mut name = ItemName::new();
    // Fits: the prefix is at most MAX_ITEM_LEN bytes
    let _ = name.push_str(prefix_within(line, MAX_ITEM_LEN));
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &NameList) -> Vec<&str, MAX_LIST_ITEMS> {
        list.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_parse_three_patterns() {
        let list = parse_list(b"Rainbow\nSolid\nChase\0").unwrap();
        assert_eq!(names(&list).as_slice(), &["Rainbow", "Solid", "Chase"]);
    }

    #[test]
    fn test_trailing_newline_adds_nothing() {
        let list = parse_list(b"Red\nGreen\n\0").unwrap();
        assert_eq!(names(&list).as_slice(), &["Red", "Green"]);
    }

    #[test]
    fn test_middle_empty_segments_kept() {
        let list = parse_list(b"a\n\nb\0").unwrap();
        assert_eq!(names(&list).as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn test_terminator_only_is_empty_list() {
        let list = parse_list(b"\0").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_lone_newline_is_one_empty_name() {
        let list = parse_list(b"\n\0").unwrap();
        assert_eq!(names(&list).as_slice(), &[""]);
    }

    #[test]
    fn test_rejects_empty_buffer() {
        assert_eq!(parse_list(b""), Err(ListError::Empty));
    }

    #[test]
    fn test_rejects_unterminated() {
        assert_eq!(parse_list(b"Rainbow\nSol"), Err(ListError::Unterminated));
    }

    #[test]
    fn test_content_stops_at_first_terminator() {
        let list = parse_list(b"One\0Two\0").unwrap();
        assert_eq!(names(&list).as_slice(), &["One"]);
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        assert_eq!(parse_list(&[0xFF, 0xFE, 0]), Err(ListError::InvalidUtf8));
    }

    #[test]
    fn test_long_names_truncated_on_char_boundary() {
        // 23 ASCII bytes followed by a two-byte character straddling the limit
        let mut payload: Vec<u8, 64> = Vec::new();
        payload.extend_from_slice(&[b'x'; 23]).unwrap();
        payload.extend_from_slice("é".as_bytes()).unwrap();
        payload.push(0).unwrap();

        let list = parse_list(&payload).unwrap();
        assert_eq!(list[0].len(), 23);
    }

    #[test]
    fn test_prefix_within_backs_off_multibyte() {
        // "é" is two bytes: a 61-byte cut would land inside one
        let line = "é".repeat(40);
        let prefix = prefix_within(&line, 61);
        assert_eq!(prefix.len(), 60);
        assert!(line.starts_with(prefix));
        assert_eq!(prefix_within("short", 61), "short");
        assert_eq!(prefix_within("é", 1), "");
    }

    #[test]
    fn test_items_past_capacity_ignored() {
        let mut payload: Vec<u8, 256> = Vec::new();
        for _ in 0..MAX_LIST_ITEMS + 5 {
            payload.extend_from_slice(b"p\n").unwrap();
        }
        payload.push(0).unwrap();

        let list = parse_list(&payload).unwrap();
        assert_eq!(list.len(), MAX_LIST_ITEMS);
    }

    #[test]
    fn test_split_empty_content() {
        assert_eq!(split_lines("").count(), 0);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;
        use std::string::String as StdString;
        use std::vec::Vec as StdVec;

        proptest! {
            #[test]
            fn unterminated_payloads_rejected(
                mut bytes in proptest::collection::vec(any::<u8>(), 1..64),
                last in 1u8..=255,
            ) {
                *bytes.last_mut().unwrap() = last;
                prop_assert_eq!(parse_list(&bytes), Err(ListError::Unterminated));
            }

            #[test]
            fn split_then_join_restores_content(content in "[a-zA-Z \n]{0,80}") {
                let joined = split_lines(&content).collect::<StdVec<_>>().join("\n");
                let expected = content.strip_suffix('\n').unwrap_or(&content);
                prop_assert_eq!(joined.as_str(), expected);
            }

            #[test]
            fn parsed_names_match_lines(
                lines in proptest::collection::vec("[a-zA-Z0-9 ]{0,20}", 1..MAX_LIST_ITEMS),
            ) {
                let mut payload = StdString::new();
                payload.push_str(&lines.join("\n"));
                payload.push('\0');

                let list = parse_list(payload.as_bytes()).unwrap();
                let parsed: StdVec<&str> = list.iter().map(|s| s.as_str()).collect();
                let mut expected: StdVec<&str> = lines.iter().map(|s| s.as_str()).collect();
                if expected.last() == Some(&"") {
                    expected.pop();
                }
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
