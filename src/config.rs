//! System configuration parameters
//!
//! Sampling cadences and task layout for the EnvSense firmware.  The values
//! are compile-time defaults; nothing here is loaded or changed at runtime.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::drivers::task_pin::{Core, TaskSpec};

/// The AM2301 self-heats and its transducer needs time to settle; re-reading
/// faster than this degrades accuracy.
pub const MIN_CLIMATE_INTERVAL_MS: u32 = 2000;

/// Per-task sleep intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Light sampler sleep between bus transactions (milliseconds)
    pub light_interval_ms: u32,
    /// Climate sampler sleep between bus transactions (milliseconds)
    pub climate_interval_ms: u32,
    /// Reporter sleep between reports (milliseconds)
    pub report_interval_ms: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            light_interval_ms: 100,                      // 10 Hz
            climate_interval_ms: MIN_CLIMATE_INTERVAL_MS, // 0.5 Hz
            report_interval_ms: 2000,                    // 0.5 Hz
        }
    }
}

impl SamplingConfig {
    /// Reject cadences that break the sampling contract.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.light_interval_ms == 0 || self.report_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("interval must be non-zero"));
        }
        if self.climate_interval_ms < MIN_CLIMATE_INTERVAL_MS {
            return Err(ConfigError::ValidationFailed(
                "climate_interval_ms below sensor minimum re-read interval",
            ));
        }
        if self.light_interval_ms >= self.report_interval_ms {
            return Err(ConfigError::ValidationFailed(
                "light_interval_ms must be shorter than report_interval_ms",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Task layout
// ---------------------------------------------------------------------------

/// Both samplers sit below the reporter so reporting is never starved by
/// sampling throughput.
pub const LIGHT_TASK: TaskSpec = TaskSpec {
    name: "luminosity\0",
    priority: 1,
    stack_kb: 4,
    core: Core::App,
};

pub const CLIMATE_TASK: TaskSpec = TaskSpec {
    name: "climate\0",
    priority: 1,
    stack_kb: 4,
    core: Core::App,
};

pub const REPORT_TASK: TaskSpec = TaskSpec {
    name: "report\0",
    priority: 2,
    stack_kb: 4,
    core: Core::App,
};
