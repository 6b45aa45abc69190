//! Mock sensors, sinks and delays for integration tests.
//!
//! Sensors replay a script of results; sinks record everything they are
//! handed.  All mocks are `Send` so they can be moved into station tasks.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use envsense::app::cancel::CancelToken;
use envsense::app::ports::{ClimateSensorPort, DiagnosticSink, LightSensorPort, ReportSink};
use envsense::app::readings::{ClimateReading, LightReading, Readings};
use envsense::error::SensorError;

// ── Scripted light sensor ─────────────────────────────────────

pub struct ScriptedLight {
    script: VecDeque<Result<u16, SensorError>>,
    configure: Result<(), SensorError>,
}

#[allow(dead_code)]
impl ScriptedLight {
    pub fn new(script: Vec<Result<u16, SensorError>>) -> Self {
        Self {
            script: script.into(),
            configure: Ok(()),
        }
    }

    pub fn failing_configure(err: SensorError) -> Self {
        Self {
            script: VecDeque::new(),
            configure: Err(err),
        }
    }
}

impl LightSensorPort for ScriptedLight {
    fn configure_continuous(&mut self) -> Result<(), SensorError> {
        self.configure
    }

    fn read_illuminance(&mut self) -> Result<u16, SensorError> {
        self.script.pop_front().unwrap_or(Err(SensorError::Timeout))
    }
}

/// Returns 1, 2, 3, … forever; shares its counter so tests can see how far
/// it got.
#[derive(Clone, Default)]
pub struct CountingLight {
    pub next: Arc<AtomicU16>,
}

impl LightSensorPort for CountingLight {
    fn configure_continuous(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn read_illuminance(&mut self) -> Result<u16, SensorError> {
        Ok(self.next.fetch_add(1, Ordering::SeqCst).wrapping_add(1))
    }
}

// ── Scripted climate sensor ───────────────────────────────────

pub struct ScriptedClimate {
    script: VecDeque<Result<ClimateReading, SensorError>>,
    /// Returned once the script runs out.
    fallback: Result<ClimateReading, SensorError>,
}

#[allow(dead_code)]
impl ScriptedClimate {
    pub fn new(script: Vec<Result<ClimateReading, SensorError>>) -> Self {
        Self {
            script: script.into(),
            fallback: Err(SensorError::Timeout),
        }
    }

    pub fn always(reading: ClimateReading) -> Self {
        Self {
            script: VecDeque::new(),
            fallback: Ok(reading),
        }
    }
}

impl ClimateSensorPort for ScriptedClimate {
    fn read_temperature_humidity(&mut self) -> Result<ClimateReading, SensorError> {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}

// ── Recording sinks ───────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingDiagnostics {
    pub lines: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingDiagnostics {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn log_failure(&mut self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingReports {
    pub reports: Arc<Mutex<Vec<Readings>>>,
}

#[allow(dead_code)]
impl RecordingReports {
    pub fn reports(&self) -> Vec<Readings> {
        self.reports.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingReports {
    fn report(&mut self, light: LightReading, climate: ClimateReading) {
        self.reports.lock().unwrap().push(Readings { light, climate });
    }
}

// ── Delays ────────────────────────────────────────────────────

/// No real sleep; records requested durations and cancels the token after
/// `remaining` sleeps.  Bounds a single task loop deterministically.
pub struct CountdownDelay {
    pub remaining: u32,
    pub cancel: CancelToken,
    pub slept_ms: Vec<u32>,
}

#[allow(dead_code)]
impl CountdownDelay {
    pub fn new(remaining: u32, cancel: CancelToken) -> Self {
        Self {
            remaining,
            cancel,
            slept_ms: Vec::new(),
        }
    }
}

impl DelayNs for CountdownDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.slept_ms.push(ms);
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.cancel.cancel();
        }
    }
}

/// Sleeps 1 ms of real time per requested 100 ms (at least 1 ms), so
/// station tests keep the relative cadence of the tasks but finish fast.
#[derive(Clone, Copy, Default)]
pub struct ScaledDelay;

impl DelayNs for ScaledDelay {
    fn delay_ns(&mut self, _ns: u32) {
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    fn delay_ms(&mut self, ms: u32) {
        let scaled = u64::from(ms / 100).max(1);
        std::thread::sleep(std::time::Duration::from_millis(scaled));
    }
}
