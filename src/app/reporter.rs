//! Reporter task: the sole consumer of both reading cells.
//!
//! Each iteration reads the light cell and then the climate cell in two
//! separate critical sections.  No lock ever spans both cells, so the two
//! samplers never acquire an ordering dependency on each other.  The
//! resulting pair may mix moments (light from now, climate from up to one
//! climate period ago); that is accepted.

use std::sync::Arc;

use embedded_hal::delay::DelayNs;
use log::info;

use super::cancel::CancelToken;
use super::cell::ReadingCell;
use super::ports::ReportSink;
use super::readings::{ClimateReading, LightReading, Readings};

pub struct Reporter<K> {
    light: Arc<ReadingCell<LightReading>>,
    climate: Arc<ReadingCell<ClimateReading>>,
    sink: K,
    interval_ms: u32,
    reports: u32,
}

impl<K: ReportSink> Reporter<K> {
    pub fn new(
        light: Arc<ReadingCell<LightReading>>,
        climate: Arc<ReadingCell<ClimateReading>>,
        sink: K,
        interval_ms: u32,
    ) -> Self {
        Self {
            light,
            climate,
            sink,
            interval_ms,
            reports: 0,
        }
    }

    /// Copy both readings out, emit them, return the copies.
    pub fn report_once(&mut self) -> Readings {
        let light = self.light.read();
        let climate = self.climate.read();
        self.sink.report(light, climate);
        self.reports = self.reports.wrapping_add(1);
        Readings { light, climate }
    }

    pub fn run(&mut self, delay: &mut impl DelayNs, cancel: &CancelToken) {
        info!("Reporter: reporting every {} ms", self.interval_ms);
        while !cancel.is_cancelled() {
            let _ = self.report_once();
            delay.delay_ms(self.interval_ms);
        }
        info!("Reporter: stopped after {} reports", self.reports);
    }

    /// Number of reports emitted so far.
    pub fn reports(&self) -> u32 {
        self.reports
    }
}
