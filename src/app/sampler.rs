//! Sampler tasks: poll one sensor, publish the newest value into its cell.
//!
//! ```text
//!  Init ──▶ ┌──────────────────────────────────────────────┐
//!           │ sample bus ─▶ Ok  ─▶ cell.write(reading)     │
//!           │            └▶ Err ─▶ DiagnosticSink (stale)  │
//!           │ sleep(interval)                              │
//!           └──────────────────────┬───────────────────────┘
//!                                  └──▶ repeat until cancelled
//! ```
//!
//! The bus transaction runs outside the cell's lock; only the final copy
//! into the cell is a critical section.  A failed transaction writes
//! nothing, so the cell keeps its previous value bit-for-bit.  There is no
//! backoff: the fixed sleep is the retry delay.

use core::fmt::Write;
use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use log::info;

use super::cancel::CancelToken;
use super::cell::ReadingCell;
use super::ports::{ClimateSensorPort, DiagnosticSink, LightSensorPort};
use super::readings::{ClimateReading, LightReading};
use crate::error::{Error, Result, SensorError};

/// Room for the longest failure line plus the error text.
const DIAG_MSG_CAP: usize = 96;

/// What one sampling attempt did to the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome<R> {
    /// The reading was written.
    Stored(R),
    /// The transaction failed; the cell was left untouched.
    Failed(SensorError),
}

impl<R> SampleOutcome<R> {
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }
}

/// Attempt counters since the sampler was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStats {
    pub attempts: u32,
    pub failures: u32,
}

impl SamplerStats {
    fn record(&mut self, ok: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if !ok {
            self.failures = self.failures.saturating_add(1);
        }
    }
}

fn report_failure(diag: &mut impl DiagnosticSink, what: &str, err: SensorError) {
    let mut msg: heapless::String<DIAG_MSG_CAP> = heapless::String::new();
    // Truncated on overflow; the prefix still identifies the sensor.
    let _ = write!(msg, "Could not read {what} data: {err}");
    diag.log_failure(&msg);
}

// ═══════════════════════════════════════════════════════════════
//  Light sampler
// ═══════════════════════════════════════════════════════════════

/// Sole writer of the light cell.
pub struct LightSampler<S, D> {
    sensor: S,
    cell: Arc<ReadingCell<LightReading>>,
    diag: D,
    interval_ms: u32,
    stats: SamplerStats,
}

impl<S: LightSensorPort, D: DiagnosticSink> LightSampler<S, D> {
    pub fn new(sensor: S, cell: Arc<ReadingCell<LightReading>>, diag: D, interval_ms: u32) -> Self {
        Self {
            sensor,
            cell,
            diag,
            interval_ms,
            stats: SamplerStats::default(),
        }
    }

    /// One-time device setup.  Failure is fatal for the whole station and
    /// is not retried here.
    pub fn init(&mut self) -> Result<()> {
        self.sensor.configure_continuous().map_err(Error::Init)?;
        info!("LightSampler: sensor in continuous mode");
        Ok(())
    }

    /// One bus transaction, then publish or log.
    pub fn sample_once(&mut self) -> SampleOutcome<LightReading> {
        let outcome = match self.sensor.read_illuminance() {
            Ok(lux) => {
                let reading = LightReading { lux };
                self.cell.write(reading);
                SampleOutcome::Stored(reading)
            }
            Err(e) => {
                report_failure(&mut self.diag, "luminosity", e);
                SampleOutcome::Failed(e)
            }
        };
        self.stats.record(outcome.is_stored());
        outcome
    }

    /// Sample forever (until `cancel` fires), sleeping `interval_ms`
    /// between attempts.
    pub fn run(&mut self, delay: &mut impl DelayNs, cancel: &CancelToken) {
        info!("LightSampler: sampling every {} ms", self.interval_ms);
        while !cancel.is_cancelled() {
            let _ = self.sample_once();
            delay.delay_ms(self.interval_ms);
        }
        info!("LightSampler: stopped after {} attempts", self.stats.attempts);
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }
}

// ═══════════════════════════════════════════════════════════════
//  Climate sampler
// ═══════════════════════════════════════════════════════════════

/// Sole writer of the climate cell.  Temperature and humidity always land
/// in one `write`, never field by field.
pub struct ClimateSampler<S, D> {
    sensor: S,
    cell: Arc<ReadingCell<ClimateReading>>,
    diag: D,
    interval_ms: u32,
    stats: SamplerStats,
}

impl<S: ClimateSensorPort, D: DiagnosticSink> ClimateSampler<S, D> {
    pub fn new(
        sensor: S,
        cell: Arc<ReadingCell<ClimateReading>>,
        diag: D,
        interval_ms: u32,
    ) -> Self {
        Self {
            sensor,
            cell,
            diag,
            interval_ms,
            stats: SamplerStats::default(),
        }
    }

    pub fn sample_once(&mut self) -> SampleOutcome<ClimateReading> {
        let outcome = match self.sensor.read_temperature_humidity() {
            Ok(reading) => {
                self.cell.write(reading);
                SampleOutcome::Stored(reading)
            }
            Err(e) => {
                report_failure(&mut self.diag, "temperature/humidity", e);
                SampleOutcome::Failed(e)
            }
        };
        self.stats.record(outcome.is_stored());
        outcome
    }

    pub fn run(&mut self, delay: &mut impl DelayNs, cancel: &CancelToken) {
        info!("ClimateSampler: sampling every {} ms", self.interval_ms);
        while !cancel.is_cancelled() {
            let _ = self.sample_once();
            delay.delay_ms(self.interval_ms);
        }
        info!("ClimateSampler: stopped after {} attempts", self.stats.attempts);
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }
}
