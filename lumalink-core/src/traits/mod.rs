//! Hardware abstraction traits
//!
//! These traits define the interface between the remote's logic and the
//! peripheral link, power IC and touch controller.

pub mod link;
pub mod power;
pub mod touch;

pub use link::{LinkError, PeripheralLink};
pub use power::{PowerError, PowerManagement};
pub use touch::{EdgeDetector, TouchError, TouchInput, TouchPoint, TouchState};
