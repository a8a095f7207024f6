// src/driver/async_driver.rs

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
    hal_traits::Hdc1080TransportAsync,
    types::{Reading, SerialId, DEVICE_ID, MANUFACTURER_ID},
};

/// Async counterpart of [`crate::Hdc1080`]. Same operations, same caching rules.
#[derive(Debug)]
pub struct Hdc1080Async<T>
where
    T: Hdc1080TransportAsync,
{
    transport: T,
    configuration: ConfigurationRegister,
}

impl<T> Hdc1080Async<T>
where
    T: Hdc1080TransportAsync,
{
    pub fn new(transport: T) -> Self {
        Hdc1080Async {
            transport,
            configuration: ConfigurationRegister::default(),
        }
    }

    pub async fn initialize(&mut self) -> Result<(), Hdc1080Error<T::Error>> {
        self.transport.init().await?;
        let cfg = self.get_configuration().await?;
        debug!("hdc1080 initialized, configuration {}", cfg.encode());
        Ok(())
    }

    #[inline]
    pub fn configuration(&self) -> &ConfigurationRegister {
        &self.configuration
    }

    pub async fn set_configuration(
        &mut self,
        configuration: ConfigurationRegister,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        trace!("writing configuration {}", configuration.encode());
        self.transport
            .write(CommandCode::Configuration, &configuration.to_wire())
            .await
            .map_err(|e| {
                warn!("configuration write failed");
                Hdc1080Error::Transport(e)
            })?;
        self.configuration = configuration;
        Ok(())
    }

    pub async fn get_configuration(&mut self) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        self.load_configuration(0).await
    }

    pub async fn get_reading(&mut self) -> Result<Reading, Hdc1080Error<T::Error>> {
        let delay_ms = total_reading_delay(&self.configuration);
        let mut buf = [0u8; CommandCode::COMBINED_READING_WIDTH];
        self.read_register(CommandCode::Temperature, delay_ms, &mut buf).await?;
        Ok(decode_reading(buf))
    }

    pub async fn read_temperature(&mut self) -> Result<f64, Hdc1080Error<T::Error>> {
        let delay_ms = temperature_settling_delay(self.configuration.temperature_resolution);
        let raw = self.read_word(CommandCode::Temperature, delay_ms).await?;
        Ok(decode_temperature(raw))
    }

    pub async fn read_humidity(&mut self) -> Result<f64, Hdc1080Error<T::Error>> {
        let delay_ms = humidity_settling_delay(self.configuration.humidity_resolution);
        let raw = self.read_word(CommandCode::Humidity, delay_ms).await?;
        Ok(decode_humidity(raw))
    }

    pub async fn get_manufacturer_id(&mut self) -> Result<u16, Hdc1080Error<T::Error>> {
        self.read_word(CommandCode::ManufacturerId, 0).await
    }

    pub async fn get_device_id(&mut self) -> Result<u16, Hdc1080Error<T::Error>> {
        self.read_word(CommandCode::DeviceId, 0).await
    }

    pub async fn get_serial_id(&mut self) -> Result<SerialId, Hdc1080Error<T::Error>> {
        let high = self.read_word(CommandCode::SerialId, 0).await?;
        let middle = self.read_word(CommandCode::SerialIdMiddle, 0).await?;
        let low = self.read_word(CommandCode::SerialIdLow, 0).await?;
        Ok(SerialId::from_registers(high, middle, low))
    }

    pub async fn verify_identity(&mut self) -> Result<(), Hdc1080Error<T::Error>> {
        let manufacturer_id = self.get_manufacturer_id().await?;
        let device_id = self.get_device_id().await?;
        if manufacturer_id != MANUFACTURER_ID || device_id != DEVICE_ID {
            warn!("unexpected identity {} / {}", manufacturer_id, device_id);
            return Err(Hdc1080Error::UnexpectedIdentity { manufacturer_id, device_id });
        }
        Ok(())
    }

    pub async fn set_heater(&mut self, enabled: bool) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.heater_enabled = enabled;
        self.set_configuration(cfg).await
    }

    pub async fn set_acquisition_mode(&mut self, mode: AcquisitionMode) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.acquisition_mode = mode;
        self.set_configuration(cfg).await
    }

    pub async fn set_temperature_resolution(
        &mut self,
        resolution: TemperatureResolution,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.temperature_resolution = resolution;
        self.set_configuration(cfg).await
    }

    /// [`HumidityResolution::Reserved`] is decode-only and is not checked here;
    /// don't pass it.
    pub async fn set_humidity_resolution(
        &mut self,
        resolution: HumidityResolution,
    ) -> Result<(), Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.humidity_resolution = resolution;
        self.set_configuration(cfg).await
    }

    pub async fn software_reset(&mut self) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        let mut cfg = self.configuration;
        cfg.software_reset = true;
        self.set_configuration(cfg).await?;
        // RSTL self-clears and the device comes back with power-on values.
        self.configuration = ConfigurationRegister::default();
        self.load_configuration(SOFT_RESET_DELAY_MS).await
    }

    pub async fn battery_status(&mut self) -> Result<BatteryStatus, Hdc1080Error<T::Error>> {
        Ok(self.get_configuration().await?.battery_status)
    }

    #[inline]
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn release(self) -> T {
        self.transport
    }

    async fn load_configuration(
        &mut self,
        delay_ms: u32,
    ) -> Result<ConfigurationRegister, Hdc1080Error<T::Error>> {
        let mut buf = [0u8; CommandCode::REGISTER_WIDTH];
        self.read_register(CommandCode::Configuration, delay_ms, &mut buf).await?;
        self.configuration = ConfigurationRegister::from_wire(buf);
        Ok(self.configuration)
    }

    async fn read_word(&mut self, command: CommandCode, delay_ms: u32) -> Result<u16, Hdc1080Error<T::Error>> {
        let mut buf = [0u8; CommandCode::REGISTER_WIDTH];
        self.read_register(command, delay_ms, &mut buf).await?;
        Ok(be16(buf))
    }

    async fn read_register(
        &mut self,
        command: CommandCode,
        delay_ms: u32,
        buf: &mut [u8],
    ) -> Result<(), Hdc1080Error<T::Error>> {
        trace!("read {:?}, delay {} ms", command, delay_ms);
        self.transport.read(command, delay_ms, buf).await.map_err(|e| {
            warn!("read of {:?} failed", command);
            Hdc1080Error::Transport(e)
        })
    }
}
