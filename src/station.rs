//! Station wiring: owns the two reading cells and launches the three tasks.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Station                                                     │
//! │                                                              │
//! │  ┌──────────────┐  write  ┌──────────────────────┐           │
//! │  │ LightSampler │────────▶│ Arc<ReadingCell<Lux>>│──┐        │
//! │  │ pri 1, 100ms │         └──────────────────────┘  │ read   │
//! │  └──────────────┘                                   ▼        │
//! │                                               ┌──────────┐   │
//! │                                               │ Reporter │   │
//! │                                               │ pri 2, 2s│   │
//! │  ┌────────────────┐ write ┌──────────────────┐└──────────┘   │
//! │  │ ClimateSampler │──────▶│Arc<ReadingCell<  │    ▲          │
//! │  │ pri 1, 2s      │       │  ClimateReading>>│────┘ read     │
//! │  └────────────────┘       └──────────────────┘               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The startup context builds the station, calls [`Station::start`] and
//! then has nothing left to do.  Nothing is spawned unless the light sensor
//! comes up.

use std::sync::Arc;
use std::thread::JoinHandle;

use embedded_hal::delay::DelayNs;
use log::{error, info};

use crate::app::cancel::CancelToken;
use crate::app::cell::ReadingCell;
use crate::app::ports::{ClimateSensorPort, DiagnosticSink, LightSensorPort, ReportSink};
use crate::app::readings::{ClimateReading, LightReading};
use crate::app::reporter::Reporter;
use crate::app::sampler::{ClimateSampler, LightSampler};
use crate::config::{CLIMATE_TASK, LIGHT_TASK, REPORT_TASK};
use crate::drivers::task_pin::{TaskSpec, spawn_on_core};
use crate::error::{Error, Result};

/// The shared state of one sensing station.
#[derive(Debug, Default)]
pub struct Station {
    light: Arc<ReadingCell<LightReading>>,
    climate: Arc<ReadingCell<ClimateReading>>,
    cancel: CancelToken,
}

impl Station {
    /// Both cells start at zero, the sentinel for "not sampled yet".
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for the light sampler (writer) or the reporter (reader).
    pub fn light_cell(&self) -> Arc<ReadingCell<LightReading>> {
        Arc::clone(&self.light)
    }

    /// Handle for the climate sampler (writer) or the reporter (reader).
    pub fn climate_cell(&self) -> Arc<ReadingCell<ClimateReading>> {
        Arc::clone(&self.climate)
    }

    /// Initialise the light sensor, then spawn the light sampler, the
    /// climate sampler and the reporter as core-pinned tasks.
    pub fn start<LS, LD, CS, CD, K, Y>(
        self,
        light: LightSampler<LS, LD>,
        climate: ClimateSampler<CS, CD>,
        reporter: Reporter<K>,
        delay: Y,
    ) -> Result<StationHandles>
    where
        LS: LightSensorPort + Send + 'static,
        LD: DiagnosticSink + Send + 'static,
        CS: ClimateSensorPort + Send + 'static,
        CD: DiagnosticSink + Send + 'static,
        K: ReportSink + Send + 'static,
        Y: DelayNs + Clone + Send + 'static,
    {
        self.start_with(
            |spec, body| spawn_on_core(spec, body),
            light,
            climate,
            reporter,
            delay,
        )
    }

    /// [`Station::start`] with a caller-supplied spawner.
    ///
    /// A light sensor init failure returns [`Error::Init`] before `spawn` is
    /// ever called.  Each task gets its own clone of `delay`.  If a spawn
    /// fails the tasks already started are cancelled and the error is
    /// returned.
    pub fn start_with<F, LS, LD, CS, CD, K, Y>(
        self,
        mut spawn: F,
        mut light: LightSampler<LS, LD>,
        mut climate: ClimateSampler<CS, CD>,
        mut reporter: Reporter<K>,
        delay: Y,
    ) -> Result<StationHandles>
    where
        F: FnMut(TaskSpec, TaskBody) -> Result<JoinHandle<()>>,
        LS: LightSensorPort + Send + 'static,
        LD: DiagnosticSink + Send + 'static,
        CS: ClimateSensorPort + Send + 'static,
        CD: DiagnosticSink + Send + 'static,
        K: ReportSink + Send + 'static,
        Y: DelayNs + Clone + Send + 'static,
    {
        light.init()?;

        let cancel = self.cancel;

        let light_handle = {
            let (mut delay, token) = (delay.clone(), cancel.clone());
            let body: TaskBody = Box::new(move || light.run(&mut delay, &token));
            spawn_task(&mut spawn, LIGHT_TASK, &cancel, body)?
        };
        let climate_handle = {
            let (mut delay, token) = (delay.clone(), cancel.clone());
            let body: TaskBody = Box::new(move || climate.run(&mut delay, &token));
            spawn_task(&mut spawn, CLIMATE_TASK, &cancel, body)?
        };
        let reporter_handle = {
            let (mut delay, token) = (delay, cancel.clone());
            let body: TaskBody = Box::new(move || reporter.run(&mut delay, &token));
            spawn_task(&mut spawn, REPORT_TASK, &cancel, body)?
        };

        info!("Station: all tasks running");
        Ok(StationHandles {
            light: light_handle,
            climate: climate_handle,
            reporter: reporter_handle,
            cancel,
        })
    }
}

/// A task body as handed to the spawner.
pub type TaskBody = Box<dyn FnOnce() + Send + 'static>;

fn spawn_task<F>(
    spawn: &mut F,
    spec: TaskSpec,
    cancel: &CancelToken,
    body: TaskBody,
) -> Result<JoinHandle<()>>
where
    F: FnMut(TaskSpec, TaskBody) -> Result<JoinHandle<()>>,
{
    spawn(spec, body).inspect_err(|e| {
        error!("Station: {}, cancelling tasks already started", e);
        cancel.cancel();
    })
}

/// Join handles for the three running tasks.
#[derive(Debug)]
pub struct StationHandles {
    light: JoinHandle<()>,
    climate: JoinHandle<()>,
    reporter: JoinHandle<()>,
    cancel: CancelToken,
}

impl StationHandles {
    /// Ask all three loops to stop after their current iteration.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for all three tasks.  Only returns once every loop has been
    /// cancelled; production firmware never calls this.
    pub fn join(self) -> Result<()> {
        let mut result = Ok(());
        for (spec, handle) in [
            (LIGHT_TASK, self.light),
            (CLIMATE_TASK, self.climate),
            (REPORT_TASK, self.reporter),
        ] {
            if handle.join().is_err() {
                result = Err(Error::TaskPanicked(spec.display_name()));
            }
        }
        result
    }

    /// Let the tasks run on their own; the caller keeps no resources.
    pub fn detach(self) {
        info!("Station: startup context detached");
    }
}
