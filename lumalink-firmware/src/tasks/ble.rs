//! BLE central task
//!
//! Finds the lighting peer, keeps one connection to it and reconnects
//! forever when it drops.

use core::cell::RefCell;

use defmt::*;
use embassy_time::{Duration, Timer};
use nrf_softdevice::Softdevice;

use crate::ble::{central, ListStreams};
use crate::config::PEER_NAME;

/// Pause between connection attempts
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[embassy_executor::task]
pub async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task]
pub async fn ble_task(sd: &'static Softdevice) -> ! {
    info!("BLE task started, looking for \"{}\"", PEER_NAME);

    let streams = RefCell::new(ListStreams::new());

    loop {
        let address = match central::find_peer(sd, PEER_NAME).await {
            Ok(address) => address,
            Err(e) => {
                warn!("Scan failed: {}", e);
                Timer::after(RETRY_DELAY).await;
                continue;
            }
        };
        debug!("Found {} at {}", PEER_NAME, address);

        match central::connect(sd, &address).await {
            Ok(conn) => {
                if let Err(e) = central::session(&conn, &streams).await {
                    warn!("Peer unusable: {}", e);
                    let _ = conn.disconnect();
                }
            }
            Err(e) => warn!("Connect failed: {}", e),
        }

        Timer::after(RETRY_DELAY).await;
    }
}
