//! Touch controller drivers

pub mod ft6336;

pub use ft6336::Ft6336;
pub use lumalink_core::traits::TouchPoint;
