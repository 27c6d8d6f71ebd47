//! Error types for AXP192 operations

/// Error types for AXP192 operations
///
/// Out-of-range voltage requests are not errors: the chip's firmware
/// convention treats them as a request to switch the rail off, and the
/// setters reproduce that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// Device not found or wrong chip ID
    DeviceNotFound,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2c(error)
    }
}
