//! EnvSense firmware library.
//!
//! Exposes the sampling core, drivers and adapters for integration testing.
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]` within
//! each module; everything else builds and tests on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
pub mod station;
