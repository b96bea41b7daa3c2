//! Scanning and connection setup

use core::cell::RefCell;
use core::sync::atomic::Ordering;

use defmt::*;
use embassy_futures::select::select;
use nrf_softdevice::ble::{central, Address, Connection};
use nrf_softdevice::Softdevice;

use lumalink_protocol::{advertising, PeripheralEvent};

use crate::ble::{client, ClientError, ListStreams};
use crate::channels::{EVENTS, LINK_UP, REQUESTS};

/// Scan until an advertisement carries `peer_name`
pub async fn find_peer(sd: &Softdevice, peer_name: &str) -> Result<Address, central::ScanError> {
    let config = central::ScanConfig {
        // Names often live in the scan response
        active: true,
        ..Default::default()
    };

    central::scan(sd, &config, |params| {
        #[allow(unsafe_code)]
        let data =
            unsafe { core::slice::from_raw_parts(params.data.p_data, params.data.len as usize) };
        advertising::names_peer(data, peer_name).then(|| Address::from_raw(params.peer_addr))
    })
    .await
}

/// Connect to a peer found by [`find_peer`]
pub async fn connect(
    sd: &Softdevice,
    address: &Address,
) -> Result<Connection, central::ConnectError> {
    let whitelist = [address];
    let config = central::ConnectConfig {
        scan_config: central::ScanConfig {
            whitelist: Some(&whitelist),
            ..Default::default()
        },
        ..Default::default()
    };
    central::connect(sd, &config).await
}

/// Run one connection until it drops
///
/// Posts `Connected` once the service is usable and `Disconnected` when it
/// goes away. Requests queued for the old link are discarded.
pub async fn session(conn: &Connection, streams: &RefCell<ListStreams>) -> Result<(), ClientError> {
    let client = client::discover(conn).await?;

    LINK_UP.store(true, Ordering::Release);
    EVENTS.send(PeripheralEvent::Connected).await;
    info!("Peer connected");

    select(
        client::run_notifications(conn, &client, streams),
        client::serve_requests(&client, streams),
    )
    .await;

    LINK_UP.store(false, Ordering::Release);
    REQUESTS.clear();
    streams.borrow_mut().reset();
    EVENTS.send(PeripheralEvent::Disconnected).await;
    info!("Peer disconnected");

    Ok(())
}
