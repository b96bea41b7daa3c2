//! Timeout policies
//!
//! Power-off, dim and telemetry refresh deadlines.

pub mod engine;

pub use engine::{
    evaluate, ActivityState, PolicyActions, PolicyEngine, Timeouts, POLL_INTERVAL_MS,
};
