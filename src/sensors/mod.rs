//! Sensor drivers.
//!
//! Plain drivers over `embedded-hal` traits; they know nothing about cells,
//! tasks or logging policy.  [`crate::adapters::hardware`] binds them to the
//! port traits the samplers consume.

pub mod am2301;
pub mod bh1750;
