//! Display abstraction for the LumaLink remote
//!
//! This crate provides:
//! - `DisplayBackend` trait addressed by widget rather than by pixel
//! - `WidgetId` naming every element the core can update
//! - `Screen`, a retained widget model that implements `DisplayBackend`
//! - Fixed row layout shared by the renderer and the touch router
//! - `render::draw`, which paints a `Screen` with embedded-graphics
//!
//! # Architecture
//!
//! The core never draws. It pushes text, values and visibility into a
//! `DisplayBackend`. On the device that backend is a `Screen`; the firmware
//! hands it to `render::draw` with the panel whenever it is dirty. On the host
//! the same `Screen` doubles as an inspectable test display.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod layout;
pub mod render;
pub mod screen;
pub mod widget;

// Re-export key types
pub use backend::{Align, DisplayBackend, DisplayError};
pub use layout::Region;
pub use screen::{Screen, MAX_TEXT_LEN};
pub use widget::WidgetId;
