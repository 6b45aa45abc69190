//! BH1750 ambient-light sensor on I²C.
//!
//! Only the three operations the sampler needs: power on, continuous
//! high-resolution mode (1 lx resolution, ~120 ms conversion), and reading
//! the latest conversion.  The device keeps converting on its own once in
//! continuous mode, so a read never waits for a measurement.

use embedded_hal::i2c::I2c;

use crate::error::SensorError;

const OPCODE_POWER_ON: u8 = 0x01;
const OPCODE_CONTINUOUS_HIGH_RES: u8 = 0x10;

pub struct Bh1750<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Bh1750<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn power_on(&mut self) -> Result<(), SensorError> {
        self.send(OPCODE_POWER_ON)
    }

    pub fn set_continuous_high_res(&mut self) -> Result<(), SensorError> {
        self.send(OPCODE_CONTINUOUS_HIGH_RES)
    }

    /// Latest conversion, in lux.
    pub fn read_lux(&mut self) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c.read(self.address, &mut buf).map_err(bus_error)?;
        Ok(raw_to_lux(u16::from_be_bytes(buf)))
    }

    fn send(&mut self, opcode: u8) -> Result<(), SensorError> {
        self.i2c.write(self.address, &[opcode]).map_err(bus_error)
    }
}

/// Datasheet conversion: lx = count / 1.2 (integer, rounds down).
pub fn raw_to_lux(raw: u16) -> u16 {
    (u32::from(raw) * 10 / 12) as u16
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> SensorError {
    log::debug!("BH1750: i2c error {:?}", e.kind());
    SensorError::Bus
}
