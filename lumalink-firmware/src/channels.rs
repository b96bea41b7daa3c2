//! Inter-task communication channels
//!
//! The BLE task posts peripheral events into the mailbox and serves link
//! requests from the request channel. The UI task owns the other ends.

use core::sync::atomic::AtomicBool;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use lumalink_core::mailbox::EventMailbox;
use lumalink_protocol::LinkRequest;

/// Mailbox capacity for peripheral events
const EVENT_MAILBOX_SIZE: usize = 8;

/// Channel capacity for link requests
///
/// Must hold a full bulk refresh plus the follow-up reads it triggers.
const REQUEST_CHANNEL_SIZE: usize = 8;

/// Peripheral events from the BLE task
pub static EVENTS: EventMailbox<EVENT_MAILBOX_SIZE> = EventMailbox::new();

/// Reads and writes for the BLE task to perform
pub static REQUESTS: Channel<CriticalSectionRawMutex, LinkRequest, REQUEST_CHANNEL_SIZE> =
    Channel::new();

/// Set while a peer is connected and its service discovered
pub static LINK_UP: AtomicBool = AtomicBool::new(false);
