//! UI projection
//!
//! One-way mapping from cache state to display widgets, from raw touch
//! samples to gestures, and from completed gestures back to write requests.

pub mod gesture;
pub mod render;
pub mod touch;

pub use gesture::{apply_gesture, wrap_step, Gesture, StepDirection};
pub use touch::TouchRouter;
pub use render::{
    configure_sliders, hide_message, render_diagnostics, render_scalar, render_selection,
    show_message, CONNECTING_MESSAGE, DIAGNOSTIC_OFFSET,
};
