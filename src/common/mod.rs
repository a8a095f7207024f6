// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod byte_order;
pub mod command;
pub mod config;
pub mod conversion;
pub mod error;
pub mod hal_traits;
pub mod types;

#[cfg(feature = "impl-native")]
pub mod i2c;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::CommandCode;

// From config.rs
pub use config::{
    AcquisitionMode, BatteryStatus, ConfigurationRegister, HumidityResolution,
    TemperatureResolution,
};

// From conversion.rs
pub use conversion::{
    decode_humidity, decode_reading, decode_temperature, humidity_settling_delay,
    temperature_settling_delay, total_reading_delay,
};

// From error.rs
pub use error::Hdc1080Error;

// From hal_traits.rs
pub use hal_traits::{Hdc1080Transport, NoopTransport}; // Core sync traits

// From types.rs
pub use types::{Reading, SerialId, DEFAULT_I2C_ADDRESS, DEVICE_ID, MANUFACTURER_ID};

// --- Feature-gated re-exports ---

#[cfg(feature = "async")]
pub use hal_traits::Hdc1080TransportAsync;

#[cfg(feature = "impl-native")]
pub use i2c::{I2cTransport, I2cTransportError};
#[cfg(all(feature = "async", feature = "impl-native"))]
pub use i2c::I2cTransportAsync;
