//! Integration tests: samplers → cells → reporter, single-threaded and
//! step by step.

use std::sync::Arc;

use envsense::app::cancel::CancelToken;
use envsense::app::cell::ReadingCell;
use envsense::app::readings::{ClimateReading, LightReading};
use envsense::app::reporter::Reporter;
use envsense::app::sampler::{ClimateSampler, LightSampler, SampleOutcome, SamplerStats};
use envsense::config::SamplingConfig;
use envsense::error::{Error, SensorError};

use super::mock_hw::{
    CountdownDelay, RecordingDiagnostics, RecordingReports, ScriptedClimate, ScriptedLight,
};

fn cells() -> (Arc<ReadingCell<LightReading>>, Arc<ReadingCell<ClimateReading>>) {
    (Arc::new(ReadingCell::default()), Arc::new(ReadingCell::default()))
}

#[test]
fn reporter_sees_stale_value_across_light_failure() {
    let (light_cell, climate_cell) = cells();
    let diag = RecordingDiagnostics::default();
    let sink = RecordingReports::default();

    let mut light = LightSampler::new(
        ScriptedLight::new(vec![Ok(120), Err(SensorError::Bus), Ok(130)]),
        Arc::clone(&light_cell),
        diag.clone(),
        100,
    );
    light.init().unwrap();
    let mut reporter = Reporter::new(light_cell, climate_cell, sink.clone(), 2000);

    for _ in 0..3 {
        let _ = light.sample_once();
        let _ = reporter.report_once();
    }

    let seen: Vec<u16> = sink.reports().iter().map(|r| r.light.lux).collect();
    assert_eq!(seen, vec![120, 120, 130]);
    assert_eq!(
        diag.lines(),
        vec!["Could not read luminosity data: bus transaction failed"]
    );
}

#[test]
fn reporter_sees_zero_before_first_success() {
    let (light_cell, climate_cell) = cells();
    let mut reporter = Reporter::new(light_cell, climate_cell, RecordingReports::default(), 2000);
    let r = reporter.report_once();
    assert_eq!(r.light, LightReading { lux: 0 });
    assert_eq!(r.climate, ClimateReading::new(0.0, 0.0));
}

#[test]
fn climate_pair_is_published_as_one_unit() {
    let (light_cell, climate_cell) = cells();
    climate_cell.write(ClimateReading::new(18.0, 60.0));

    let mut climate = ClimateSampler::new(
        ScriptedClimate::new(vec![Ok(ClimateReading::new(21.5, 45.0))]),
        Arc::clone(&climate_cell),
        RecordingDiagnostics::default(),
        2000,
    );
    let mut reporter = Reporter::new(light_cell, climate_cell, RecordingReports::default(), 2000);

    assert_eq!(
        climate.sample_once(),
        SampleOutcome::Stored(ClimateReading::new(21.5, 45.0))
    );
    let r = reporter.report_once();
    assert!(r.climate.bits_eq(&ClimateReading::new(21.5, 45.0)));
}

#[test]
fn light_init_failure_is_fatal() {
    let (light_cell, _) = cells();
    let mut light = LightSampler::new(
        ScriptedLight::failing_configure(SensorError::Bus),
        light_cell,
        RecordingDiagnostics::default(),
        100,
    );
    assert_eq!(light.init(), Err(Error::Init(SensorError::Bus)));
}

#[test]
fn light_sampler_writes_once_per_period() {
    let (light_cell, _) = cells();
    let cancel = CancelToken::new();
    let mut delay = CountdownDelay::new(5, cancel.clone());
    let cfg = SamplingConfig::default();

    let mut light = LightSampler::new(
        ScriptedLight::new(vec![Ok(1), Ok(2), Ok(3), Ok(4), Ok(5)]),
        Arc::clone(&light_cell),
        RecordingDiagnostics::default(),
        cfg.light_interval_ms,
    );
    light.run(&mut delay, &cancel);

    assert_eq!(light.stats(), SamplerStats { attempts: 5, failures: 0 });
    assert_eq!(delay.slept_ms, vec![cfg.light_interval_ms; 5]);
    assert_eq!(light_cell.read().lux, 5);
}

#[test]
fn repeated_climate_failures_log_once_per_attempt() {
    let (_, climate_cell) = cells();
    let diag = RecordingDiagnostics::default();
    let cancel = CancelToken::new();
    let mut delay = CountdownDelay::new(4, cancel.clone());

    let mut climate = ClimateSampler::new(
        ScriptedClimate::new(vec![Ok(ClimateReading::new(22.0, 40.0))]),
        Arc::clone(&climate_cell),
        diag.clone(),
        2000,
    );
    climate.run(&mut delay, &cancel);

    assert_eq!(climate.stats(), SamplerStats { attempts: 4, failures: 3 });
    assert_eq!(diag.lines().len(), 3);
    assert!(diag.lines().iter().all(|l| l.starts_with("Could not read temperature/humidity data")));
    assert_eq!(climate_cell.read(), ClimateReading::new(22.0, 40.0));
    assert_eq!(delay.slept_ms, vec![2000; 4]);
}

#[test]
fn cancelled_before_start_never_samples() {
    let (light_cell, _) = cells();
    let cancel = CancelToken::new();
    cancel.cancel();
    let mut delay = CountdownDelay::new(1, cancel.clone());

    let mut light = LightSampler::new(
        ScriptedLight::new(vec![Ok(99)]),
        Arc::clone(&light_cell),
        RecordingDiagnostics::default(),
        100,
    );
    light.run(&mut delay, &cancel);

    assert_eq!(light.stats().attempts, 0);
    assert_eq!(light_cell.read().lux, 0);
}
