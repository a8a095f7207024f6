// src/common/config.rs

use super::byte_order::{config_from_wire, config_to_wire};

// Bit layout of the configuration register (host order).
const RESET_BIT: u16 = 1 << 15;
const HEAT_BIT: u16 = 1 << 13;
const MODE_BIT: u16 = 1 << 12;
const BTST_BIT: u16 = 1 << 11;
const TRES_BIT: u16 = 1 << 10;
const HRES_SHIFT: u16 = 8;
const HRES_MASK: u16 = 0b11 << HRES_SHIFT;

/// Bits 14 and 7:0 carry no fields and are written back untouched.
pub const RESERVED_MASK: u16 = 0x40FF;

/// Temperature measurement resolution (TRES).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TemperatureResolution {
    #[default]
    Bits14 = 0,
    Bits11 = 1,
}

/// Humidity measurement resolution (HRES).
///
/// `Reserved` is the undocumented `0b11` pattern. It is kept so that decoding
/// stays total; the driver treats it like 14-bit when timing conversions.
/// Do not write it to the device: the datasheet leaves its behaviour
/// undefined, and the driver passes it through unchecked.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HumidityResolution {
    #[default]
    Bits14 = 0b00,
    Bits11 = 0b01,
    Bits8 = 0b10,
    Reserved = 0b11,
}

impl HumidityResolution {
    const fn from_bits(bits: u16) -> Self {
        match bits & 0b11 {
            0b00 => HumidityResolution::Bits14,
            0b01 => HumidityResolution::Bits11,
            0b10 => HumidityResolution::Bits8,
            _ => HumidityResolution::Reserved,
        }
    }
}

/// Acquisition mode (MODE).
///
/// In `Acquire` mode a trigger at the temperature register measures
/// temperature and then humidity. In `Sleep` mode each quantity is triggered
/// on its own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AcquisitionMode {
    Sleep = 0,
    #[default]
    Acquire = 1,
}

/// Supply voltage status (BTST). Read-only on the device.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BatteryStatus {
    /// Supply above 2.8 V.
    #[default]
    Good = 0,
    /// Supply below 2.8 V.
    Low = 1,
}

/// Typed view of the 16-bit configuration register (`0x02`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigurationRegister {
    pub software_reset: bool,
    pub heater_enabled: bool,
    pub acquisition_mode: AcquisitionMode,
    pub battery_status: BatteryStatus,
    pub temperature_resolution: TemperatureResolution,
    pub humidity_resolution: HumidityResolution,
    reserved: u16,
}

impl ConfigurationRegister {
    /// Register value after power-on or software reset.
    pub const POWER_ON_VALUE: u16 = 0x1000;

    /// Splits a host-order register value into its fields.
    pub const fn decode(raw: u16) -> Self {
        ConfigurationRegister {
            software_reset: raw & RESET_BIT != 0,
            heater_enabled: raw & HEAT_BIT != 0,
            acquisition_mode: if raw & MODE_BIT != 0 {
                AcquisitionMode::Acquire
            } else {
                AcquisitionMode::Sleep
            },
            battery_status: if raw & BTST_BIT != 0 {
                BatteryStatus::Low
            } else {
                BatteryStatus::Good
            },
            temperature_resolution: if raw & TRES_BIT != 0 {
                TemperatureResolution::Bits11
            } else {
                TemperatureResolution::Bits14
            },
            humidity_resolution: HumidityResolution::from_bits(raw >> HRES_SHIFT),
            reserved: raw & RESERVED_MASK,
        }
    }

    /// Packs the fields back into a host-order register value.
    /// Reserved bits seen by [`Self::decode`] are carried over verbatim.
    pub const fn encode(&self) -> u16 {
        let mut raw = self.reserved & RESERVED_MASK;
        if self.software_reset {
            raw |= RESET_BIT;
        }
        if self.heater_enabled {
            raw |= HEAT_BIT;
        }
        if let AcquisitionMode::Acquire = self.acquisition_mode {
            raw |= MODE_BIT;
        }
        if let BatteryStatus::Low = self.battery_status {
            raw |= BTST_BIT;
        }
        if let TemperatureResolution::Bits11 = self.temperature_resolution {
            raw |= TRES_BIT;
        }
        raw |= ((self.humidity_resolution as u16) << HRES_SHIFT) & HRES_MASK;
        raw
    }

    /// Bytes to send when writing this configuration to the device.
    #[inline]
    pub const fn to_wire(&self) -> [u8; 2] {
        config_to_wire(self.encode())
    }

    /// Decodes the bytes returned by a configuration register read.
    #[inline]
    pub const fn from_wire(bytes: [u8; 2]) -> Self {
        Self::decode(config_from_wire(bytes))
    }

    /// Reserved bits as last seen on the device.
    #[inline]
    pub const fn reserved_bits(&self) -> u16 {
        self.reserved
    }
}

impl Default for ConfigurationRegister {
    fn default() -> Self {
        Self::decode(Self::POWER_ON_VALUE)
    }
}

impl From<u16> for ConfigurationRegister {
    fn from(raw: u16) -> Self {
        Self::decode(raw)
    }
}

impl From<ConfigurationRegister> for u16 {
    fn from(cfg: ConfigurationRegister) -> Self {
        cfg.encode()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TRES: [TemperatureResolution; 2] =
        [TemperatureResolution::Bits14, TemperatureResolution::Bits11];
    const ALL_HRES: [HumidityResolution; 4] = [
        HumidityResolution::Bits14,
        HumidityResolution::Bits11,
        HumidityResolution::Bits8,
        HumidityResolution::Reserved,
    ];
    const ALL_MODES: [AcquisitionMode; 2] = [AcquisitionMode::Sleep, AcquisitionMode::Acquire];
    const ALL_BTST: [BatteryStatus; 2] = [BatteryStatus::Good, BatteryStatus::Low];

    #[test]
    fn test_power_on_default() {
        let cfg = ConfigurationRegister::default();
        assert!(!cfg.software_reset);
        assert!(!cfg.heater_enabled);
        assert_eq!(cfg.acquisition_mode, AcquisitionMode::Acquire);
        assert_eq!(cfg.battery_status, BatteryStatus::Good);
        assert_eq!(cfg.temperature_resolution, TemperatureResolution::Bits14);
        assert_eq!(cfg.humidity_resolution, HumidityResolution::Bits14);
        assert_eq!(cfg.encode(), 0x1000);
    }

    #[test]
    fn test_decode_individual_fields() {
        assert!(ConfigurationRegister::decode(0x8000).software_reset);
        assert!(ConfigurationRegister::decode(0x2000).heater_enabled);
        assert_eq!(ConfigurationRegister::decode(0x0000).acquisition_mode, AcquisitionMode::Sleep);
        assert_eq!(ConfigurationRegister::decode(0x0800).battery_status, BatteryStatus::Low);
        assert_eq!(
            ConfigurationRegister::decode(0x0400).temperature_resolution,
            TemperatureResolution::Bits11
        );
        assert_eq!(ConfigurationRegister::decode(0x0100).humidity_resolution, HumidityResolution::Bits11);
        assert_eq!(ConfigurationRegister::decode(0x0200).humidity_resolution, HumidityResolution::Bits8);
        assert_eq!(ConfigurationRegister::decode(0x0300).humidity_resolution, HumidityResolution::Reserved);
    }

    #[test]
    fn test_field_combinations_round_trip() {
        for software_reset in [false, true] {
            for heater_enabled in [false, true] {
                for acquisition_mode in ALL_MODES {
                    for battery_status in ALL_BTST {
                        for temperature_resolution in ALL_TRES {
                            for humidity_resolution in ALL_HRES {
                                let cfg = ConfigurationRegister {
                                    software_reset,
                                    heater_enabled,
                                    acquisition_mode,
                                    battery_status,
                                    temperature_resolution,
                                    humidity_resolution,
                                    reserved: 0,
                                };
                                assert_eq!(ConfigurationRegister::decode(cfg.encode()), cfg);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_raw_value_round_trips_with_reserved_bits() {
        for raw in 0..=u16::MAX {
            assert_eq!(ConfigurationRegister::decode(raw).encode(), raw);
        }
    }

    #[test]
    fn test_reserved_bits_survive_field_edits() {
        let mut cfg = ConfigurationRegister::decode(0x5012);
        assert_eq!(cfg.reserved_bits(), 0x4012);
        cfg.heater_enabled = true;
        assert_eq!(cfg.encode(), 0x7012);
    }

    #[test]
    fn test_wire_quirk() {
        let cfg = ConfigurationRegister::default();
        assert_eq!(cfg.to_wire(), [0x00, 0x10]);
        assert_eq!(ConfigurationRegister::from_wire([0x00, 0x10]), cfg);
        assert_eq!(ConfigurationRegister::from_wire(cfg.to_wire()), cfg);
    }
}
