//! EnvSense Firmware: Main Entry Point
//!
//! Startup context: bring up the buses, initialise the sensors, launch the
//! three tasks, exit.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  Bh1750 / Am2301      LogDiagnosticSink   LogReportSink        │
//! │  (Light/ClimatePort)  (DiagnosticSink)    (ReportSink)         │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  LightSampler ─▶ ReadingCell ◀─ Reporter ─▶ ReadingCell│    │
//! │  │                                   ◀─ ClimateSampler    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Station (task spawn) · TaskDelay (FreeRTOS sleep)             │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use envsense::adapters::delay::TaskDelay;
use envsense::adapters::log_sink::{LogDiagnosticSink, LogReportSink};
use envsense::app::reporter::Reporter;
use envsense::app::sampler::{ClimateSampler, LightSampler};
use envsense::config::SamplingConfig;
use envsense::drivers::hw_init;
use envsense::pins;
use envsense::sensors::am2301::Am2301;
use envsense::sensors::bh1750::Bh1750;
use envsense::station::Station;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  EnvSense v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SamplingConfig::default();
    config.validate().context("sampling config")?;

    // ── 2. Buses ──────────────────────────────────────────────
    // Any failure from here until the tasks are running aborts the whole
    // firmware; no task has been spawned yet.
    let peripherals = Peripherals::take().context("peripherals already taken")?;
    let buses = hw_init::init_peripherals(peripherals).context("peripheral init")?;

    // ── 3. Shared cells + tasks ───────────────────────────────
    let station = Station::new();

    let light = LightSampler::new(
        Bh1750::new(buses.i2c, pins::BH1750_ADDR_LO),
        station.light_cell(),
        LogDiagnosticSink::new(),
        config.light_interval_ms,
    );

    let climate = ClimateSampler::new(
        Am2301::new(buses.am2301_pin, buses.am2301_delay),
        station.climate_cell(),
        LogDiagnosticSink::new(),
        config.climate_interval_ms,
    );

    let reporter = Reporter::new(
        station.light_cell(),
        station.climate_cell(),
        LogReportSink::new(),
        config.report_interval_ms,
    );

    // ── 4. BH1750 setup, launch, get out of the way ───────────
    station
        .start(light, climate, reporter, TaskDelay::new())
        .context("station start")?
        .detach();

    info!("System ready. Startup context exiting.");
    Ok(())
}
