//! Application core: the sampling and reporting logic, zero direct I/O.
//!
//! Samplers publish into [`cell::ReadingCell`]s, the reporter reads them
//! out.  All interaction with hardware and output happens through the
//! **port traits** in [`ports`], keeping this layer testable without real
//! peripherals.

pub mod cancel;
pub mod cell;
pub mod ports;
pub mod readings;
pub mod reporter;
pub mod sampler;

#[cfg(test)]
pub(crate) mod test_support;
