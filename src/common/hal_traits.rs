// src/common/hal_traits.rs

use super::command::CommandCode;
use core::convert::Infallible;
use core::fmt::Debug;

/// Bus access required by the HDC1080 driver.
///
/// Implementations own whatever the bus needs (peripheral handle, device
/// address, delay source). The driver never looks inside; it only asks for
/// register writes and delayed register reads.
///
/// See [`crate::common::i2c::I2cTransport`] (feature `impl-native`) for an
/// implementation on top of `embedded-hal` v1.
pub trait Hdc1080Transport {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// One-time bus setup, run by [`crate::Hdc1080::initialize`].
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Writes `buf` to the register selected by `command`.
    fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error>;

    /// Selects the register at `command`, blocks for at least `delay_ms`
    /// milliseconds, then fills `buf` with `buf.len()` bytes from the device.
    ///
    /// Selecting the temperature or humidity register starts a conversion,
    /// which is what the delay is for. Register reads pass a delay of zero.
    fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Hdc1080Transport + ?Sized> Hdc1080Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error> {
        T::write(self, command, buf)
    }

    fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, command, delay_ms, buf)
    }
}

/// Transport that accepts every call and moves no data.
///
/// Reads leave the caller's buffer as it was, so a driver on top of it
/// decodes all-zero registers. Handy for exercising the conversion logic
/// without hardware.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct NoopTransport;

impl Hdc1080Transport for NoopTransport {
    type Error = Infallible;

    fn write(&mut self, _command: CommandCode, _buf: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read(&mut self, _command: CommandCode, _delay_ms: u32, _buf: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Abstraction for asynchronous HDC1080 bus access (requires 'async' feature).
///
/// Same contract as [`Hdc1080Transport`], except that the delay must be
/// awaited rather than spun.
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Hdc1080TransportAsync {
    /// Associated error type for bus errors.
    type Error: Debug;

    /// One-time bus setup.
    async fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Asynchronously writes `buf` to the register selected by `command`.
    async fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error>;

    /// Asynchronously selects `command`, waits `delay_ms`, and reads `buf.len()` bytes.
    async fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error>;
}

#[cfg(feature = "async")]
impl<T: Hdc1080TransportAsync + ?Sized> Hdc1080TransportAsync for &mut T {
    type Error = T::Error;

    async fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self).await
    }

    async fn write(&mut self, command: CommandCode, buf: &[u8]) -> Result<(), Self::Error> {
        T::write(self, command, buf).await
    }

    async fn read(&mut self, command: CommandCode, delay_ms: u32, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, command, delay_ms, buf).await
    }
}

#[cfg(feature = "async")]
impl Hdc1080TransportAsync for NoopTransport {
    type Error = Infallible;

    async fn write(&mut self, _command: CommandCode, _buf: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn read(&mut self, _command: CommandCode, _delay_ms: u32, _buf: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_transport_leaves_buffer_untouched() {
        let mut transport = NoopTransport;
        let mut buf = [0xAAu8; 4];
        assert!(Hdc1080Transport::init(&mut transport).is_ok());
        assert!(Hdc1080Transport::write(&mut transport, CommandCode::Configuration, &[0x00, 0x10]).is_ok());
        assert!(Hdc1080Transport::read(&mut transport, CommandCode::Temperature, 14, &mut buf).is_ok());
        assert_eq!(buf, [0xAA; 4]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut inner = NoopTransport;
        let mut by_ref = &mut inner;
        let mut buf = [0u8; 2];
        assert!(Hdc1080Transport::read(&mut by_ref, CommandCode::DeviceId, 0, &mut buf).is_ok());
    }
}
