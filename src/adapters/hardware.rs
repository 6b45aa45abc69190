//! Hardware adapter: binds the sensor drivers to the domain port traits.
//!
//! This is the only place where the samplers' view of a sensor
//! (`LightSensorPort`, `ClimateSensorPort`) meets a concrete driver.  Any
//! bus implementing the `embedded-hal` traits works: `esp-idf-hal` drivers
//! on target, mocks in tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;

use crate::app::ports::{ClimateSensorPort, LightSensorPort};
use crate::app::readings::ClimateReading;
use crate::error::SensorError;
use crate::sensors::am2301::Am2301;
use crate::sensors::bh1750::Bh1750;

// ── LightSensorPort implementation ────────────────────────────

impl<I2C: I2c> LightSensorPort for Bh1750<I2C> {
    fn configure_continuous(&mut self) -> Result<(), SensorError> {
        self.power_on()?;
        self.set_continuous_high_res()
    }

    fn read_illuminance(&mut self) -> Result<u16, SensorError> {
        self.read_lux()
    }
}

// ── ClimateSensorPort implementation ──────────────────────────

impl<P: InputPin + OutputPin, D: DelayNs> ClimateSensorPort for Am2301<P, D> {
    fn read_temperature_humidity(&mut self) -> Result<ClimateReading, SensorError> {
        self.read()
    }
}
