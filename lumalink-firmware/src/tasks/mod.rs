//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod ble;
pub mod tick;
pub mod ui;

pub use ble::{ble_task, softdevice_task};
pub use tick::tick_task;
pub use ui::ui_task;
