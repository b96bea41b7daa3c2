//! GATT client for the lighting service
//!
//! Discovers the peer's lighting service, subscribes to every attribute
//! and turns reads and notifications into [`PeripheralEvent`]s. Long lists
//! arrive as several chunks and are reassembled before they are posted.

use core::cell::RefCell;

use defmt::*;
use heapless::Vec;
use nrf_softdevice::ble::{gatt_client, Connection};

use lumalink_protocol::{
    AssemblyError, AttributeId, LinkRequest, ListAssembler, ListId, PeripheralEvent, ScalarId,
};

use crate::channels::{EVENTS, REQUESTS};

/// Largest chunk a single read or notification carries (ATT MTU 247 - 3)
pub const LIST_CHUNK: usize = 244;

/// Lighting service exposed by the peer
#[nrf_softdevice::gatt_client(uuid = "4c554d41-0000-1000-8000-4c494e4b0000")]
pub struct LightingClient {
    #[characteristic(uuid = "4c554d41-0001-1000-8000-4c494e4b0000", read, write, notify)]
    pub pattern_index: u8,

    #[characteristic(uuid = "4c554d41-0002-1000-8000-4c494e4b0000", read, write, notify)]
    pub color_index: u8,

    #[characteristic(uuid = "4c554d41-0003-1000-8000-4c494e4b0000", read, write, notify)]
    pub brightness: u8,

    #[characteristic(uuid = "4c554d41-0004-1000-8000-4c494e4b0000", read, write, notify)]
    pub speed: u8,

    /// Newline-delimited pattern names, NUL-terminated
    #[characteristic(uuid = "4c554d41-0005-1000-8000-4c494e4b0000", read, notify)]
    pub patterns: Vec<u8, LIST_CHUNK>,

    /// Newline-delimited color names, NUL-terminated
    #[characteristic(uuid = "4c554d41-0006-1000-8000-4c494e4b0000", read, notify)]
    pub colors: Vec<u8, LIST_CHUNK>,
}

/// Service discovery or subscription failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum ClientError {
    ServiceNotFound,
    SubscribeFailed,
}

/// One reassembler per list attribute
pub struct ListStreams {
    assemblers: [ListAssembler; ListId::ALL.len()],
}

impl ListStreams {
    pub const fn new() -> Self {
        Self {
            assemblers: [ListAssembler::new(), ListAssembler::new()],
        }
    }

    /// Feed one chunk, returning the event once the list is complete
    pub fn feed(&mut self, id: ListId, chunk: &[u8]) -> Option<PeripheralEvent> {
        match self.assemblers[id.slot()].feed_chunk(chunk) {
            Ok(Some(payload)) => Some(PeripheralEvent::ListReceived { id, payload }),
            Ok(None) => None,
            Err(AssemblyError::Overflow) => {
                debug!("{} list overflowed before its terminator, dropped", id);
                None
            }
        }
    }

    /// Forget partial lists, e.g. after a disconnect
    pub fn reset(&mut self) {
        for assembler in &mut self.assemblers {
            assembler.reset();
        }
    }
}

/// Discover the lighting service and enable notifications on every attribute
pub async fn discover(conn: &Connection) -> Result<LightingClient, ClientError> {
    info!("Discovering lighting service...");

    let client: LightingClient = gatt_client::discover(conn)
        .await
        .map_err(|_| ClientError::ServiceNotFound)?;

    let subscribed = async {
        client.pattern_index_cccd_write(true).await?;
        client.color_index_cccd_write(true).await?;
        client.brightness_cccd_write(true).await?;
        client.speed_cccd_write(true).await?;
        client.patterns_cccd_write(true).await?;
        client.colors_cccd_write(true).await
    };
    subscribed.await.map_err(|_| ClientError::SubscribeFailed)?;

    info!("Subscribed to lighting notifications");
    Ok(client)
}

/// Forward notifications until the connection drops
pub async fn run_notifications(
    conn: &Connection,
    client: &LightingClient,
    streams: &RefCell<ListStreams>,
) {
    let _ = gatt_client::run(conn, client, |event| {
        let event = match event {
            LightingClientEvent::PatternIndexNotification(value) => {
                Some(scalar(ScalarId::PatternIndex, value))
            }
            LightingClientEvent::ColorIndexNotification(value) => {
                Some(scalar(ScalarId::ColorIndex, value))
            }
            LightingClientEvent::BrightnessNotification(value) => {
                Some(scalar(ScalarId::Brightness, value))
            }
            LightingClientEvent::SpeedNotification(value) => Some(scalar(ScalarId::Speed, value)),
            LightingClientEvent::PatternsNotification(chunk) => {
                streams.borrow_mut().feed(ListId::Patterns, &chunk)
            }
            LightingClientEvent::ColorsNotification(chunk) => {
                streams.borrow_mut().feed(ListId::Colors, &chunk)
            }
        };

        if let Some(event) = event {
            trace!("Notification: {}", event);
            // No await inside the callback
            if let Err(event) = EVENTS.post(event) {
                warn!("Event mailbox full, dropping {}", event);
            }
        }
    })
    .await;
}

/// Perform queued link requests forever
pub async fn serve_requests(client: &LightingClient, streams: &RefCell<ListStreams>) -> ! {
    loop {
        let request = REQUESTS.receive().await;
        trace!("Link request: {}", request);

        match request {
            LinkRequest::Read(AttributeId::Scalar(id)) => match read_scalar(client, id).await {
                Ok(value) => EVENTS.send(scalar(id, value)).await,
                Err(e) => warn!("Read of {} failed: {}", id, e),
            },
            LinkRequest::Read(AttributeId::List(id)) => match read_list(client, id).await {
                Ok(chunk) => {
                    // The rest of a long list follows as notifications
                    let event = streams.borrow_mut().feed(id, &chunk);
                    if let Some(event) = event {
                        EVENTS.send(event).await;
                    }
                }
                Err(e) => warn!("Read of {} list failed: {}", id, e),
            },
            LinkRequest::Write { id, value } => {
                if let Err(e) = write_scalar(client, id, value).await {
                    warn!("Write of {} = {} failed: {}", id, value, e);
                }
            }
        }
    }
}

fn scalar(id: ScalarId, value: u8) -> PeripheralEvent {
    PeripheralEvent::ScalarChanged { id, value }
}

async fn read_scalar(client: &LightingClient, id: ScalarId) -> Result<u8, gatt_client::ReadError> {
    match id {
        ScalarId::PatternIndex => client.pattern_index_read().await,
        ScalarId::ColorIndex => client.color_index_read().await,
        ScalarId::Brightness => client.brightness_read().await,
        ScalarId::Speed => client.speed_read().await,
    }
}

async fn read_list(
    client: &LightingClient,
    id: ListId,
) -> Result<Vec<u8, LIST_CHUNK>, gatt_client::ReadError> {
    match id {
        ListId::Patterns => client.patterns_read().await,
        ListId::Colors => client.colors_read().await,
    }
}

async fn write_scalar(
    client: &LightingClient,
    id: ScalarId,
    value: u8,
) -> Result<(), gatt_client::WriteError> {
    match id {
        ScalarId::PatternIndex => client.pattern_index_write(&value).await,
        ScalarId::ColorIndex => client.color_index_write(&value).await,
        ScalarId::Brightness => client.brightness_write(&value).await,
        ScalarId::Speed => client.speed_write(&value).await,
    }
}
