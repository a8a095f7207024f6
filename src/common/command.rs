//! HDC1080 register pointer definitions.
//!
//! See the HDC1080 datasheet (SNAS672A), Section 8.6 "Register Map".

use core::fmt;

/// Register addresses understood by the HDC1080.
///
/// Writing one of these as the pointer byte selects the register for the
/// following read or write. Pointing at [`CommandCode::Temperature`] or
/// [`CommandCode::Humidity`] also triggers a measurement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommandCode {
    /// Temperature measurement output (`0x00`).
    Temperature = 0x00,
    /// Relative humidity measurement output (`0x01`).
    Humidity = 0x01,
    /// Configuration and status (`0x02`).
    Configuration = 0x02,
    /// Serial ID bits 40:25 (`0xFB`).
    SerialId = 0xFB,
    /// Serial ID bits 24:9 (`0xFC`).
    SerialIdMiddle = 0xFC,
    /// Serial ID bits 8:0, left aligned (`0xFD`).
    SerialIdLow = 0xFD,
    /// Manufacturer ID, reads `0x5449` (`0xFE`).
    ManufacturerId = 0xFE,
    /// Device ID, reads `0x1050` (`0xFF`).
    DeviceId = 0xFF,
}

impl CommandCode {
    /// Every register is one 16-bit word.
    pub const REGISTER_WIDTH: usize = 2;

    /// Temperature followed by humidity, as returned in acquire mode.
    pub const COMBINED_READING_WIDTH: usize = 4;

    /// Returns the pointer byte sent on the bus.
    #[inline]
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Expected number of reply bytes for a plain read of this register.
    #[inline]
    pub const fn reply_width(self) -> usize {
        Self::REGISTER_WIDTH
    }

    /// Tries to map a pointer byte back to a command.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(CommandCode::Temperature),
            0x01 => Some(CommandCode::Humidity),
            0x02 => Some(CommandCode::Configuration),
            0xFB => Some(CommandCode::SerialId),
            0xFC => Some(CommandCode::SerialIdMiddle),
            0xFD => Some(CommandCode::SerialIdLow),
            0xFE => Some(CommandCode::ManufacturerId),
            0xFF => Some(CommandCode::DeviceId),
            _ => None,
        }
    }
}

impl From<CommandCode> for u8 {
    fn from(value: CommandCode) -> Self {
        value.address()
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#04x})", self, self.address())
    }
}
