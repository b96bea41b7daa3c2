//! Peripheral link vocabulary for the LumaLink remote
//!
//! This crate defines what travels between the BLE lighting peripheral and
//! the remote's core logic. The wire encoding (services, characteristics,
//! bonding) belongs to the firmware. Apart from the advertising-name match
//! used to find the peripheral, everything here is transport-agnostic.
//!
//! # Data Flow
//!
//! ```text
//! ┌────────────┐  chunks   ┌───────────────┐  PeripheralEvent  ┌──────┐
//! │ peripheral │ ────────► │ ListAssembler │ ────────────────► │ core │
//! │  (BLE)     │ ◄──────── │   (firmware)  │ ◄──────────────── │      │
//! └────────────┘  read /   └───────────────┘    LinkRequest    └──────┘
//!                 write
//! ```
//!
//! List attributes arrive as newline-delimited, NUL-terminated byte payloads:
//!
//! ```text
//! Rainbow\nSolid\nChase\0
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod advertising;
pub mod assembly;
pub mod attribute;
pub mod events;
pub mod list;
pub mod requests;
pub mod telemetry;

pub use assembly::{AssemblyError, ListAssembler};
pub use attribute::{AttributeId, ListId, ScalarId};
pub use events::PeripheralEvent;
pub use list::{
    parse_list, split_lines, ItemName, ListError, ListPayload, NameList, MAX_ITEM_LEN,
    MAX_LIST_ITEMS, MAX_LIST_PAYLOAD, TERMINATOR,
};
pub use requests::LinkRequest;
pub use telemetry::TelemetryChannel;
