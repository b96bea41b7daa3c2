//! Build-time configuration
//!
//! `build.rs` validates remote.toml and emits these constants, so a bad
//! configuration never reaches the device.

use lumalink_core::config::{BacklightConfig, RemoteConfig, SliderRange, Timeouts};

include!(concat!(env!("OUT_DIR"), "/remote_config.rs"));
