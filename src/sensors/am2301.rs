//! AM2301 (DHT21) temperature / humidity sensor on a single-wire bus.
//!
//! ```text
//!  host  ▔▔▔╲______1ms______╱▔▔ (released, pull-up)
//!  dev                          ╲__80us__╱▔▔80us▔▔╲ bit0 … bit39
//!  bit            ╲__50us__╱▔▔ 26us = 0 / 70us = 1 ▔▔╲
//! ```
//!
//! A frame is 40 bits: humidity (16), temperature (16, bit 15 = sign),
//! checksum (8).  Bits are decoded by comparing each high pulse against the
//! low pulse that precedes it, so the decoder does not depend on the
//! absolute accuracy of the microsecond delay.
//!
//! The frame is bit-banged inside a critical section (interrupts masked on
//! the current core), so neither an ISR nor a higher-priority task can
//! stretch a pulse mid-frame.  A whole frame takes about 5 ms.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::readings::ClimateReading;
use crate::error::SensorError;

/// Host start pulse for the AM2301 (the DHT11 needs 18 ms).
const START_LOW_US: u32 = 1_000;
/// Longest phase in the protocol is 80 us; anything past this is a dead bus.
const PHASE_TIMEOUT_US: u32 = 200;
const FRAME_BITS: usize = 40;

pub struct Am2301<P, D> {
    pin: P,
    delay: D,
}

impl<P: InputPin + OutputPin, D: DelayNs> Am2301<P, D> {
    /// `pin` must be open-drain with a pull-up; driving it high releases
    /// the line.  `delay` must busy-wait, since it runs with interrupts
    /// masked.
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    /// One measurement: temperature and humidity from the same frame.
    pub fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let frame = critical_section::with(|_| self.read_frame())?;
        decode_frame(&frame)
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Bus)?;
        self.delay.delay_us(START_LOW_US);
        self.pin.set_high().map_err(|_| SensorError::Bus)?;

        // Response: device pulls low, then high, then starts the first bit.
        self.wait_while(true)?;
        self.wait_while(false)?;
        self.wait_while(true)?;

        let mut frame = [0u8; 5];
        for bit in 0..FRAME_BITS {
            let low_us = self.wait_while(false)?;
            let high_us = self.wait_while(true)?;
            if high_us > low_us {
                frame[bit / 8] |= 1 << (7 - bit % 8);
            }
        }
        Ok(frame)
    }

    /// Poll while the line is at `high`; returns how long that lasted (us).
    fn wait_while(&mut self, high: bool) -> Result<u32, SensorError> {
        let mut elapsed = 0;
        while self.pin.is_high().map_err(|_| SensorError::Bus)? == high {
            if elapsed >= PHASE_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
            self.delay.delay_us(1);
            elapsed += 1;
        }
        Ok(elapsed)
    }
}

/// Validate and convert a raw 5-byte frame.
pub fn decode_frame(frame: &[u8; 5]) -> Result<ClimateReading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity_raw = u16::from_be_bytes([frame[0], frame[1]]);
    let temperature_raw = u16::from_be_bytes([frame[2], frame[3]]);

    let humidity_pct = f32::from(humidity_raw) / 10.0;
    let magnitude = f32::from(temperature_raw & 0x7FFF) / 10.0;
    let temperature_c = if temperature_raw & 0x8000 != 0 {
        -magnitude
    } else {
        magnitude
    };

    // Datasheet range: -40..80 °C, 0..100 %RH.
    if humidity_pct > 100.0 || !(-40.0..=80.0).contains(&temperature_c) {
        return Err(SensorError::OutOfRange);
    }
    Ok(ClimateReading::new(temperature_c, humidity_pct))
}
