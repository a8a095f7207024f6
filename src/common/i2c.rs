// src/common/i2c.rs

//! `embedded-hal` backed transports (requires 'impl-native' feature).
//!
//! A register write is one bus write of `[pointer, data..]`. A register read
//! is a pointer write, a delay, and a separate bus read: the HDC1080 NACKs
//! reads while a conversion is running, so a repeated-start `write_read`
//! cannot be used.

use super::command::CommandCode;
use super::hal_traits::Hdc1080Transport;
use super::types::DEFAULT_I2C_ADDRESS;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Largest register payload the device accepts in one write.
const MAX_WRITE_PAYLOAD: usize = CommandCode::REGISTER_WIDTH;

/// Errors from the I2C transports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I2cTransportError<E>
where
    E: Debug,
{
    /// Error reported by the I2C peripheral.
    #[error("I2C error: {0:?}")]
    I2c(E),

    /// Write payload larger than any HDC1080 register.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },
}

/// Builds the `[pointer, data..]` frame for a register write.
fn write_frame<E: Debug>(
    command: CommandCode,
    buf: &[u8],
) -> Result<([u8; MAX_WRITE_PAYLOAD + 1], usize), I2cTransportError<E>> {
    if buf.len() > MAX_WRITE_PAYLOAD {
        return Err(I2cTransportError::BufferOverflow {
            needed: buf.len(),
            got: MAX_WRITE_PAYLOAD,
        });
    }
    let mut frame = [0u8; MAX_WRITE_PAYLOAD + 1];
    frame[0] = command.address();
    frame[1..=buf.len()].copy_from_slice(buf);
    Ok((frame, buf.len() + 1))
}

/// Blocking HDC1080 transport over an `embedded_hal::i2c::I2c` bus.
#[derive(Debug)]
pub struct I2cTransport<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a transport talking to the device at [`DEFAULT_I2C_ADDRESS`].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_I2C_ADDRESS)
    }

    /// Creates a transport for a device behind an address translator.
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        I2cTransport { i2c, delay, address }
    }

    #[inline]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gives back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

impl<I2C, D> Hdc1080Transport for I2cTransport<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    type Error = I2cTransportError<I2C::Error>;

    fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error> {
        let (frame, len) = write_frame::<I2C::Error>(command, buf)?;
        self.i2c
            .write(self.address, &frame[..len])
            .map_err(I2cTransportError::I2c)
    }

    fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[command.address()])
            .map_err(I2cTransportError::I2c)?;
        if delay_ms > 0 {
            self.delay.delay_ms(delay_ms);
        }
        self.i2c.read(self.address, buf).map_err(I2cTransportError::I2c)
    }
}

/// Async HDC1080 transport over an `embedded_hal_async::i2c::I2c` bus.
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct I2cTransportAsync<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

#[cfg(feature = "async")]
impl<I2C, D> I2cTransportAsync<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Creates a transport talking to the device at [`DEFAULT_I2C_ADDRESS`].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, DEFAULT_I2C_ADDRESS)
    }

    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Self {
        I2cTransportAsync { i2c, delay, address }
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}

#[cfg(feature = "async")]
impl<I2C, D> super::hal_traits::Hdc1080TransportAsync for I2cTransportAsync<I2C, D>
where
    I2C: embedded_hal_async::i2c::I2c,
    D: embedded_hal_async::delay::DelayNs,
{
    type Error = I2cTransportError<I2C::Error>;

    async fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error> {
        let (frame, len) = write_frame::<I2C::Error>(command, buf)?;
        self.i2c
            .write(self.address, &frame[..len])
            .await
            .map_err(I2cTransportError::I2c)
    }

    async fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(self.address, &[command.address()])
            .await
            .map_err(I2cTransportError::I2c)?;
        if delay_ms > 0 {
            self.delay.delay_ms(delay_ms).await;
        }
        self.i2c.read(self.address, buf).await.map_err(I2cTransportError::I2c)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
    use std::vec;

    const ADDR: u8 = DEFAULT_I2C_ADDRESS;

    #[test]
    fn test_register_write_frame() {
        let expectations = [Transaction::write(ADDR, vec![0x02, 0x00, 0x10])];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new());

        assert!(transport.write(CommandCode::Configuration, &[0x00, 0x10]).is_ok());

        let (mut i2c, _) = transport.release();
        i2c.done();
    }

    #[test]
    fn test_oversized_write_is_rejected_before_the_bus() {
        let mut transport = I2cTransport::new(I2cMock::new(&[]), NoopDelay::new());

        let result = transport.write(CommandCode::Configuration, &[0, 1, 2]);
        assert!(matches!(
            result,
            Err(I2cTransportError::BufferOverflow { needed: 3, got: 2 })
        ));

        let (mut i2c, _) = transport.release();
        i2c.done();
    }

    #[test]
    fn test_delayed_read_is_pointer_write_then_read() {
        let expectations = [
            Transaction::write(ADDR, vec![0x00]),
            Transaction::read(ADDR, vec![0x19, 0x9E, 0x4E, 0x2B]),
        ];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut buf = [0u8; 4];

        assert!(transport.read(CommandCode::Temperature, 14, &mut buf).is_ok());
        assert_eq!(buf, [0x19, 0x9E, 0x4E, 0x2B]);

        let (mut i2c, _) = transport.release();
        i2c.done();
    }

    #[test]
    fn test_read_error_is_reported() {
        let expectations = [
            Transaction::write(ADDR, vec![0xFF]),
            Transaction::read(ADDR, vec![0x00, 0x00]).with_error(ErrorKind::Other),
        ];
        let mut transport = I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new());
        let mut buf = [0u8; 2];

        let result = transport.read(CommandCode::DeviceId, 0, &mut buf);
        assert_eq!(result, Err(I2cTransportError::I2c(ErrorKind::Other)));

        let (mut i2c, _) = transport.release();
        i2c.done();
    }

    #[test]
    fn test_custom_address() {
        let expectations = [
            Transaction::write(0x41, vec![0xFE]),
            Transaction::read(0x41, vec![0x54, 0x49]),
        ];
        let mut transport =
            I2cTransport::with_address(I2cMock::new(&expectations), NoopDelay::new(), 0x41);
        assert_eq!(transport.address(), 0x41);
        let mut buf = [0u8; 2];

        assert!(transport.read(CommandCode::ManufacturerId, 0, &mut buf).is_ok());
        assert_eq!(buf, [0x54, 0x49]);

        let (mut i2c, _) = transport.release();
        i2c.done();
    }
}
