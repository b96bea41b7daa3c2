//! Board-agnostic core logic for the LumaLink remote
//!
//! This crate contains everything that does not depend on the radio, the
//! panel or the power IC:
//!
//! - Attribute cache mirroring the peripheral
//! - Connection state machine and the reconnect read plan
//! - Timeout policy engine (power-off, dim, telemetry refresh)
//! - UI projection between the cache, the display and user gestures
//! - Collaborator traits (peripheral link, power management, touch)
//! - `Remote`, the application state tying it all together
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod link;
pub mod mailbox;
pub mod policy;
pub mod projection;
pub mod remote;
pub mod traits;

pub use remote::{Note, PowerOp, Remote, Report};
