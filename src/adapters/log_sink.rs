//! Log-based sink adapters.
//!
//! Implement [`DiagnosticSink`] and [`ReportSink`] by writing to the `log`
//! facade (ESP-IDF logger on target, which goes to UART / USB-CDC).  Both
//! are stateless, so every task gets its own copy.

use log::{info, warn};

use crate::app::ports::{DiagnosticSink, ReportSink};
use crate::app::readings::{ClimateReading, LightReading};

/// Sampler failures at `warn` level, one line per failed attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnosticSink;

impl LogDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogDiagnosticSink {
    fn log_failure(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// One `info` line per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReportSink;

impl LogReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for LogReportSink {
    fn report(&mut self, light: LightReading, climate: ClimateReading) {
        info!(
            "REPORT | lux={} | T={:.1}\u{00b0}C | RH={:.1}%",
            light.lux, climate.temperature_c, climate.humidity_pct,
        );
    }
}
