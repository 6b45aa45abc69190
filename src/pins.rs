//! GPIO / peripheral pin assignments for the EnvSense board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// I²C bus (BH1750 ambient-light sensor)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 21;
pub const I2C_SCL_GPIO: i32 = 22;
/// Standard-mode bus clock.
pub const I2C_BAUDRATE_HZ: u32 = 100_000;

/// BH1750 7-bit address with the ADDR pin tied low.
pub const BH1750_ADDR_LO: u8 = 0x23;

// ---------------------------------------------------------------------------
// Single-wire bus (AM2301 temperature / humidity sensor)
// ---------------------------------------------------------------------------

/// Open-drain data line with the internal pull-up enabled.
pub const AM2301_DATA_GPIO: i32 = 2;
