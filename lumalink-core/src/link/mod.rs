//! Connection tracking
//!
//! The state machine plus the read plan that runs on every connect.

pub mod machine;
pub mod refresh;

pub use machine::{ConnectionState, Edge};
pub use refresh::{follow_up, BULK_REFRESH};
