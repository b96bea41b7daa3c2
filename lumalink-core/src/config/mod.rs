//! Configuration types
//!
//! Board-agnostic tunables, deserializable from TOML behind the `serde` feature.

pub mod types;

pub use types::*;
