//! Advertising data parsing
//!
//! Just enough of the BLE advertising format to recognize the peripheral by
//! its local name.

/// AD type: shortened local name
const AD_SHORT_NAME: u8 = 0x08;
/// AD type: complete local name
const AD_COMPLETE_NAME: u8 = 0x09;

/// Iterate `(ad_type, payload)` structures, stopping at the first malformed one
pub fn structures(data: &[u8]) -> impl Iterator<Item = (u8, &[u8])> {
    let mut rest = data;
    core::iter::from_fn(move || {
        let (&len, tail) = rest.split_first()?;
        let len = usize::from(len);
        if len == 0 || len > tail.len() {
            return None;
        }
        let (structure, next) = tail.split_at(len);
        rest = next;
        Some((structure[0], &structure[1..]))
    })
}

/// Local name carried by an advertisement or scan response
pub fn local_name(data: &[u8]) -> Option<&[u8]> {
    structures(data)
        .find(|(ad_type, _)| *ad_type == AD_COMPLETE_NAME || *ad_type == AD_SHORT_NAME)
        .map(|(_, name)| name)
}

/// True if the advertisement names the wanted peer
pub fn names_peer(data: &[u8], peer_name: &str) -> bool {
    local_name(data) == Some(peer_name.as_bytes())
}
