//! Power-management drivers

pub mod axp192;

pub use axp192::Axp192;
