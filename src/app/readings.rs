//! Reading types published by the samplers.
//!
//! Both are plain `Copy` values: the shared cells hand out copies, never
//! references, so a reader can hold a reading for as long as it likes
//! without blocking the writer.

/// Illuminance in lux, sensor native unit.  Zero until the first
/// successful sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightReading {
    pub lux: u16,
}

/// Temperature and relative humidity from one sensor transaction.
///
/// The two fields are always written together; a reader sees either both
/// old values or both new values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateReading {
    /// Degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity, 0–100 %.
    pub humidity_pct: f32,
}

impl ClimateReading {
    pub const fn new(temperature_c: f32, humidity_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
        }
    }

    /// Bitwise equality (treats NaN payloads as values, not as unequal).
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.temperature_c.to_bits() == other.temperature_c.to_bits()
            && self.humidity_pct.to_bits() == other.humidity_pct.to_bits()
    }
}

/// What the reporter copied out in one iteration.  The two halves come
/// from independent critical sections and may be from different moments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readings {
    pub light: LightReading,
    pub climate: ClimateReading,
}
