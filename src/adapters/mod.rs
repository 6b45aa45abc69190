//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements         | Connects to              |
//! |------------|--------------------|--------------------------|
//! | `hardware` | LightSensorPort    | BH1750 over I²C          |
//! |            | ClimateSensorPort  | AM2301 over single-wire  |
//! | `log_sink` | DiagnosticSink     | Serial log output        |
//! |            | ReportSink         | Serial log output        |
//! | `delay`    | DelayNs            | FreeRTOS task delay      |

pub mod delay;
pub mod hardware;
pub mod log_sink;
