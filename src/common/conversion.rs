// src/common/conversion.rs

//! Settling delays and raw-to-physical conversions.
//!
//! Conversion times are from the HDC1080 datasheet, Section 7.5 "Electrical
//! Characteristics", rounded up to whole milliseconds.

use super::byte_order::be16;
use super::config::{ConfigurationRegister, HumidityResolution, TemperatureResolution};
use super::types::Reading;

/// 14-bit temperature conversion, 6.35 ms typical.
pub const TEMPERATURE_14_BIT_DELAY_MS: u32 = 7;
/// 11-bit temperature conversion, 3.65 ms typical.
pub const TEMPERATURE_11_BIT_DELAY_MS: u32 = 4;

/// 14-bit humidity conversion, 6.5 ms typical.
pub const HUMIDITY_14_BIT_DELAY_MS: u32 = 7;
/// 11-bit humidity conversion, 3.85 ms typical.
pub const HUMIDITY_11_BIT_DELAY_MS: u32 = 4;
/// 8-bit humidity conversion, 2.5 ms typical.
pub const HUMIDITY_8_BIT_DELAY_MS: u32 = 3;

/// Minimum wait before sampling a temperature conversion.
pub const fn temperature_settling_delay(resolution: TemperatureResolution) -> u32 {
    match resolution {
        TemperatureResolution::Bits14 => TEMPERATURE_14_BIT_DELAY_MS,
        TemperatureResolution::Bits11 => TEMPERATURE_11_BIT_DELAY_MS,
    }
}

/// Minimum wait before sampling a humidity conversion.
///
/// The reserved resolution pattern gets the longest (14-bit) delay.
pub const fn humidity_settling_delay(resolution: HumidityResolution) -> u32 {
    match resolution {
        HumidityResolution::Bits14 => HUMIDITY_14_BIT_DELAY_MS,
        HumidityResolution::Bits11 => HUMIDITY_11_BIT_DELAY_MS,
        HumidityResolution::Bits8 => HUMIDITY_8_BIT_DELAY_MS,
        HumidityResolution::Reserved => HUMIDITY_14_BIT_DELAY_MS,
    }
}

/// Wait before sampling a combined temperature + humidity reading.
///
/// Always the sum of both conversions, whatever the acquisition mode.
pub const fn total_reading_delay(configuration: &ConfigurationRegister) -> u32 {
    temperature_settling_delay(configuration.temperature_resolution)
        + humidity_settling_delay(configuration.humidity_resolution)
}

/// Temperature register value to degrees Celsius.
#[inline]
pub fn decode_temperature(raw: u16) -> f64 {
    f64::from(raw) * 165.0 / 65536.0 - 40.0
}

/// Humidity register value to percent relative humidity.
#[inline]
pub fn decode_humidity(raw: u16) -> f64 {
    f64::from(raw) * 100.0 / 65536.0
}

/// Decodes the four bytes of a combined read: temperature word then humidity
/// word, both big-endian.
pub fn decode_reading(bytes: [u8; 4]) -> Reading {
    Reading {
        temperature: decode_temperature(be16([bytes[0], bytes[1]])),
        humidity: decode_humidity(be16([bytes[2], bytes[3]])),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_temperature_delays() {
        assert_eq!(temperature_settling_delay(TemperatureResolution::Bits14), 7);
        assert_eq!(temperature_settling_delay(TemperatureResolution::Bits11), 4);
    }

    #[test]
    fn test_humidity_delays() {
        assert_eq!(humidity_settling_delay(HumidityResolution::Bits14), 7);
        assert_eq!(humidity_settling_delay(HumidityResolution::Bits11), 4);
        assert_eq!(humidity_settling_delay(HumidityResolution::Bits8), 3);
        assert_eq!(humidity_settling_delay(HumidityResolution::Reserved), 7);
    }

    #[test]
    fn test_total_reading_delay() {
        let mut cfg = ConfigurationRegister::default();
        assert_eq!(total_reading_delay(&cfg), 14);

        cfg.temperature_resolution = TemperatureResolution::Bits11;
        cfg.humidity_resolution = HumidityResolution::Bits8;
        assert_eq!(total_reading_delay(&cfg), 7);

        cfg.humidity_resolution = HumidityResolution::Bits11;
        assert_eq!(total_reading_delay(&cfg), 8);
    }

    #[test]
    fn test_decode_temperature_points() {
        assert!((decode_temperature(0x0000) - -40.0).abs() < EPS);
        assert!((decode_temperature(0x8000) - 42.5).abs() < EPS);
        assert!((decode_temperature(0xFFFF) - 124.997_482_299_804_69).abs() < EPS);
        assert!(decode_temperature(0xFFFF) < 125.0);
    }

    #[test]
    fn test_decode_humidity_points() {
        assert!((decode_humidity(0x0000) - 0.0).abs() < EPS);
        assert!((decode_humidity(0x8000) - 50.0).abs() < EPS);
        assert!((decode_humidity(0xFFFF) - 99.998_474_121_093_75).abs() < EPS);
        assert!(decode_humidity(0xFFFF) < 100.0);
    }

    #[test]
    fn test_decode_reading_bytes() {
        let reading = decode_reading([0x19, 0x9E, 0x4E, 0x2B]);
        assert!((reading.temperature - (6558.0 * 165.0 / 65536.0 - 40.0)).abs() < EPS);
        assert!((reading.humidity - (20011.0 * 100.0 / 65536.0)).abs() < EPS);
        assert!((reading.temperature - -23.488_922_119_140_625).abs() < EPS);
        assert!((reading.humidity - 30.534_362_792_968_75).abs() < EPS);
    }
}
