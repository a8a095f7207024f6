// src/driver/sync_driver/mod.rs

use super::SOFT_RESET_DELAY_MS;
use crate::common::{
    byte_order::be16,
    command::CommandCode,
    config::{AcquisitionMode, BatteryStatus, ConfigurationRegister, HumidityResolution, TemperatureResolution},
    conversion::{
        decode_humidity, decode_reading, decode_temperature, humidity_settling_delay,
        temperature_settling_delay, total_reading_delay,
    },
    error::Hdc1080Error,
    hal_traits::Hdc1080Transport,
    types::{Reading, SerialId, DEVICE_ID, MANUFACTURER_ID},
};

/// Blocking HDC1080 driver.
///
/// Holds the transport and the last configuration register value exchanged
/// with the device. Not internally synchronised; wrap it in a mutex to share
/// it between threads.
#[derive(Debug)]
pub struct Hdc1080<T>
where
    T: Hdc1080Transport,
{
    transport: T,
    configuration: ConfigurationRegister,
}

impl<T> Hdc1080<T>
where
    T: Hdc1080Transport,
{
    /// Binds a transport. No bus traffic happens until [`Self::initialize`].
    pub fn new(transport: T) -> Self {
        Hdc1080 {
            transport,
            configuration: ConfigurationRegister::default(),
        }
    }

    /// Runs the transport's init hook, then loads the configuration register.
    pub fn initialize(&mut self) -> Result<(), Hdc1080Error<T::Error>> {
        self.transport.init()?;
        let cfg = self.get_configuration()?;
        debug!("hdc1080 initialized, configuration {}", cfg.encode());
        Ok(())
    }

    /// Last configuration written to or read from the device.
    #[inline]
    pub fn configuration(&self) -> &ConfigurationRegister {
        &self.configuration
    }

    /// Writes `configuration` to the device.
    ///
    /// The cached copy only changes once the write went through.
    pub fn set_configuration(
        &mut self,
        configuration: ConfigurationRegister,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        trace!("writing configuration {}", configuration.encode());
        self.transport
            .write(CommandCode::Configuration, &configuration.to_wire())
            .map_err(|e| {
                warn!("configuration write failed");
                Hdc1080Error::Transport(e)
            })?;
        self.configuration = configuration;
        Ok(())
    }

    /// Reads the configuration register and caches it.
    pub fn get_configuration(&mut self) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        self.load_configuration(0)
    }

    /// Triggers a combined measurement and returns both values.
    ///
    /// Waits for the temperature and the humidity conversion back to back,
    /// even in acquire mode.
    pub fn get_reading(&mut self) -> Result<Reading, Hdc1080Error<T::Error>> {
        let delay_ms = total_reading_delay(&self.configuration);
        let mut buf = [0u8; CommandCode::COMBINED_READING_WIDTH];
        self.read_register(CommandCode::Temperature, delay_ms, &mut buf)?;
        let reading = decode_reading(buf);
        trace!("reading: {} C, {} %RH", reading.temperature, reading.humidity);
        Ok(reading)
    }

    /// Triggers a temperature-only conversion. Meant for sleep mode.
    pub fn read_temperature(&mut self) -> Result<f64, Hdc1080Error<T::Error>> {
        let delay_ms = temperature_settling_delay(self.configuration.temperature_resolution);
        let raw = self.read_word(CommandCode::Temperature, delay_ms)?;
        Ok(decode_temperature(raw))
    }

    /// Triggers a humidity-only conversion. Meant for sleep mode.
    pub fn read_humidity(&mut self) -> Result<f64, Hdc1080Error<T::Error>> {
        let delay_ms = humidity_settling_delay(self.configuration.humidity_resolution);
        let raw = self.read_word(CommandCode::Humidity, delay_ms)?;
        Ok(decode_humidity(raw))
    }

    pub fn get_manufacturer_id(&mut self) -> Result<u16, Hdc1080Error<T::Error>> {
        self.read_word(CommandCode::ManufacturerId, 0)
    }

    pub fn get_device_id(&mut self) -> Result<u16, Hdc1080Error<T::Error>> {
        self.read_word(CommandCode::DeviceId, 0)
    }

    /// Reads the three serial id registers.
    pub fn get_serial_id(&mut self) -> Result<SerialId, Hdc1080Error<T::Error>> {
        let high = self.read_word(CommandCode::SerialId, 0)?;
        let middle = self.read_word(CommandCode::SerialIdMiddle, 0)?;
        let low = self.read_word(CommandCode::SerialIdLow, 0)?;
        Ok(SerialId::from_registers(high, middle, low))
    }

    /// Checks both identity registers against the HDC1080 values.
    pub fn verify_identity(&mut self) -> Result<(), Hdc1080Error<T::Error>> {
        let manufacturer_id = self.get_manufacturer_id()?;
        let device_id = self.get_device_id()?;
        if manufacturer_id != MANUFACTURER_ID || device_id != DEVICE_ID {
            warn!("unexpected identity {} / {}", manufacturer_id, device_id);
            return Err(Hdc1080Error::UnexpectedIdentity { manufacturer_id, device_id });
        }
        Ok(())
    }

    pub fn set_heater(&mut self, enabled: bool) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.heater_enabled = enabled;
        self.set_configuration(cfg)
    }

    pub fn set_acquisition_mode(&mut self, mode: AcquisitionMode) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.acquisition_mode = mode;
        self.set_configuration(cfg)
    }

    pub fn set_temperature_resolution(
        &mut self,
        resolution: TemperatureResolution,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.temperature_resolution = resolution;
        self.set_configuration(cfg)
    }

    /// [`HumidityResolution::Reserved`] is decode-only and is not checked here;
    /// don't pass it.
    pub fn set_humidity_resolution(
        &mut self,
        resolution: HumidityResolution,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.humidity_resolution = resolution;
        self.set_configuration(cfg)
    }

    /// Resets the device and reloads the configuration it comes back with.
    pub fn software_reset(&mut self) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.software_reset = true;
        self.set_configuration(cfg)?;
        // RSTL self-clears and the device comes back with power-on values.
        self.configuration = ConfigurationRegister::default();
        self.load_configuration(SOFT_RESET_DELAY_MS)
    }

    /// Refreshes the configuration and returns the supply status bit.
    pub fn battery_status(&mut self) -> Result<BatteryStatus, Hdc1080Error<T::Error>> {
        Ok(self.get_configuration()?.battery_status)
    }

    /// Mutable access to the transport, for bus work the driver does not cover.
    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Gives the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    // --- Register access helpers (private) ---

    fn load_configuration(
        &mut self,
        delay_ms: u32,
    ) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        let mut buf = [0u8; CommandCode::REGISTER_WIDTH];
        self.read_register(CommandCode::Configuration, delay_ms, &mut buf)?;
        self.configuration = ConfigurationRegister::from_wire(buf);
        Ok(self.configuration)
    }

    fn read_word(&mut self, command: CommandCode, delay_ms: u32) -> Result<u16, Hdc1080Error<T::Error>> {
        let mut buf = [0u8; CommandCode::REGISTER_WIDTH];
        self.read_register(command, delay_ms, &mut buf)?;
        Ok(be16(buf))
    }

    fn read_register(
        &mut self,
        command: CommandCode,
        delay_ms: u32,
        buf: &mut [u8],
    ) -> Result<(), Hdc1080Error<T::Error>> {
        trace!("read {:?}, delay {} ms", command, delay_ms);
        self.transport.read(command, delay_ms, buf).map_err(|e| {
            warn!("read of {:?} failed", command);
            Hdc1080Error::Transport(e)
        })
    }
}
