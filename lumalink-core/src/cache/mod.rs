//! Attribute cache
//!
//! Mirror of the peripheral's attributes, owned by the core.

pub mod attributes;

pub use attributes::AttributeCache;
