// src/common/error.rs

/// Errors returned by driver operations.
///
/// The driver does not look inside transport failures; whatever the transport
/// reports is handed back unchanged in [`Hdc1080Error::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Hdc1080Error<E = ()>
where
    E: core::fmt::Debug, // Still need Debug for the generic transport error
{
    /// Underlying bus error from the transport implementation.
    #[error("Transport error: {0:?}")]
    Transport(E),

    /// Identity registers did not hold the HDC1080 values.
    #[error("Unexpected identity: manufacturer {manufacturer_id:#06x}, device {device_id:#06x}")]
    UnexpectedIdentity { manufacturer_id: u16, device_id: u16 },
}

// Allow mapping from the underlying transport error with `?`
impl<E: core::fmt::Debug> From<E> for Hdc1080Error<E> {
    fn from(e: E) -> Self {
        Hdc1080Error::Transport(e)
    }
}

impl<E: core::fmt::Debug> Hdc1080Error<E> {
    /// Returns the transport error, if that is what this is.
    pub fn transport(&self) -> Option<&E> {
        match self {
            Hdc1080Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct MockBusError;

    #[test]
    fn test_transport_accessor() {
        let err: Hdc1080Error<MockBusError> = Hdc1080Error::Transport(MockBusError);
        assert_eq!(err.transport(), Some(&MockBusError));

        let err: Hdc1080Error<MockBusError> =
            Hdc1080Error::UnexpectedIdentity { manufacturer_id: 0, device_id: 0 };
        assert_eq!(err.transport(), None);
    }

    #[test]
    fn test_from_transport_error() {
        fn fails() -> Result<(), MockBusError> {
            Err(MockBusError)
        }
        fn propagate() -> Result<(), Hdc1080Error<MockBusError>> {
            fails()?;
            Ok(())
        }

        assert_eq!(Hdc1080Error::from(MockBusError), Hdc1080Error::Transport(MockBusError));
        assert_eq!(propagate(), Err(Hdc1080Error::Transport(MockBusError)));
    }

    #[test]
    fn test_display() {
        use std::string::ToString;

        let err: Hdc1080Error<MockBusError> =
            Hdc1080Error::UnexpectedIdentity { manufacturer_id: 0x1234, device_id: 0x1050 };
        assert_eq!(
            err.to_string(),
            "Unexpected identity: manufacturer 0x1234, device 0x1050"
        );
        let err: Hdc1080Error<MockBusError> = Hdc1080Error::Transport(MockBusError);
        assert_eq!(err.to_string(), "Transport error: MockBusError");
    }
}
