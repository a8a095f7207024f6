// src/common/types.rs

use core::fmt;

/// Value of the manufacturer ID register (Texas Instruments).
pub const MANUFACTURER_ID: u16 = 0x5449;

/// Value of the device ID register.
pub const DEVICE_ID: u16 = 0x1050;

/// Fixed 7-bit bus address of the HDC1080.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x40;

/// A single temperature + humidity sample.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// Degrees Celsius, in [-40, 125).
    pub temperature: f64,
    /// Percent relative humidity, in [0, 100).
    pub humidity: f64,
}

/// The 41-bit factory serial number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialId(u64);

impl SerialId {
    /// Number of significant bits.
    pub const BITS: u32 = 41;

    /// Assembles the id from the three serial registers (`0xFB`, `0xFC`, `0xFD`).
    ///
    /// The low register only holds bits 8:0 in its top nine bits.
    pub const fn from_registers(high: u16, middle: u16, low: u16) -> Self {
        SerialId(((high as u64) << 25) | ((middle as u64) << 9) | ((low as u64) >> 7))
    }

    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<SerialId> for u64 {
    fn from(value: SerialId) -> Self {
        value.0
    }
}

impl fmt::Display for SerialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:011x}", self.0)
    }
}
