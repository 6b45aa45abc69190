//! Unified error types for the EnvSense firmware.
//!
//! A single `Error` enum for everything the startup path can fail on.  All variants are `Copy` so they
//! can be handed through sampler outcomes and diagnostic sinks without
//! allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor could not be brought up.  Fatal at startup.
    Init(SensorError),
    /// A task could not be spawned.
    Spawn(&'static str),
    /// A task ended by panicking.
    TaskPanicked(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Spawn(name) => write!(f, "spawn failed: {name}"),
            Self::TaskPanicked(name) => write!(f, "task panicked: {name}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

/// Failure of a single sensor transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The bus reported an error (NACK, arbitration loss, GPIO fault).
    Bus,
    /// The device did not answer within the protocol's timing window.
    Timeout,
    /// The received frame failed its checksum.
    Checksum,
    /// Reading is outside the physically plausible range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "bus transaction failed"),
            Self::Timeout => write!(f, "device timed out"),
            Self::Checksum => write!(f, "checksum mismatch"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
