//! One-shot hardware peripheral initialization.
//!
//! Brings up the I²C master for the BH1750 and the open-drain data line for
//! the AM2301.  Called once from `main()` before any task is spawned; any
//! failure here is fatal for the station.

use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{AnyIOPin, InputOutput, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    I2cInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2cInitFailed(rc) => write!(f, "I2C master init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

/// The single-wire data line, open-drain with pull-up.
pub type Am2301Pin = PinDriver<'static, AnyIOPin, InputOutput>;

/// Bus handles ready to be wrapped by the sensor drivers.
pub struct Buses {
    pub i2c: I2cDriver<'static>,
    pub am2301_pin: Am2301Pin,
    /// Busy-wait microsecond delay for bit-banging the AM2301.
    pub am2301_delay: Ets,
}

pub fn init_peripherals(peripherals: Peripherals) -> Result<Buses, HwInitError> {
    let config = I2cConfig::new().baudrate(Hertz(pins::I2C_BAUDRATE_HZ));

    // SAFETY: each GPIO number is claimed exactly once, here, and the pin
    // assignments in `pins` do not overlap.
    let (sda, scl, data) = unsafe {
        (
            AnyIOPin::new(pins::I2C_SDA_GPIO),
            AnyIOPin::new(pins::I2C_SCL_GPIO),
            AnyIOPin::new(pins::AM2301_DATA_GPIO),
        )
    };

    let i2c = I2cDriver::new(peripherals.i2c0, sda, scl, &config)
        .map_err(|e| HwInitError::I2cInitFailed(e.code()))?;
    info!(
        "hw_init: I2C0 master (SDA={}, SCL={}, {} Hz)",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_BAUDRATE_HZ
    );

    let mut am2301_pin = PinDriver::input_output_od(data)
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    am2301_pin
        .set_pull(Pull::Up)
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    am2301_pin
        .set_high()
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    info!("hw_init: AM2301 data line on GPIO{} (open-drain, pull-up)", pins::AM2301_DATA_GPIO);

    Ok(Buses {
        i2c,
        am2301_pin,
        am2301_delay: Ets,
    })
}
