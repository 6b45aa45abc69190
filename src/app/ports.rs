//! Port traits: the hexagonal boundary between the sampling core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Samplers / Reporter (domain)
//! ```
//!
//! Driven adapters (sensor drivers, log sinks) implement these traits.  The
//! samplers and the reporter consume them via generics, so the domain core
//! never touches hardware directly and tests substitute recording stubs.

use super::readings::{ClimateReading, LightReading};
use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor ports (driven adapters: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Ambient-light sensor on a shared bus.
///
/// Bus bring-up happens before the port exists; the port only covers the
/// device itself.
pub trait LightSensorPort {
    /// Put the device into continuous measurement mode.  Called once.
    fn configure_continuous(&mut self) -> Result<(), SensorError>;

    /// Newest illuminance value in lux.
    fn read_illuminance(&mut self) -> Result<u16, SensorError>;
}

/// Combined temperature / humidity sensor.
pub trait ClimateSensorPort {
    /// One joint transaction; both fields come from the same measurement.
    fn read_temperature_humidity(&mut self) -> Result<ClimateReading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Sink ports (driven adapters: domain → logging / output)
// ───────────────────────────────────────────────────────────────

/// Where sampler failures go.  Fire-and-forget: must not block or fail.
pub trait DiagnosticSink {
    fn log_failure(&mut self, message: &str);
}

/// Where the reporter's output goes.  Fire-and-forget.
pub trait ReportSink {
    fn report(&mut self, light: LightReading, climate: ClimateReading);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
