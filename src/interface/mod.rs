//! Bus interface abstraction for the BMP388 register transport.

#[cfg(feature = "spi")]
pub mod spi;

use crate::error::Result;
use crate::record::{CalibrationRecord, DataRecord};
use crate::registers::DeviceId;

/// Register-level access to the sensor, independent of the bus kind.
///
/// Every method is one blocking bus transaction. Register addresses are 7-bit;
/// the direction bit is owned by the implementation.
pub trait Bmp388Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Brings up the bus link before the first register access.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    /// Reads `buf.len()` consecutive registers into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes a single register.
    fn write_register(&mut self, value: u8, register: u8) -> Result<(), Self::Error>;

    /// Fetches the measurement block in one transaction.
    fn fetch_data(&mut self, register: u8) -> Result<DataRecord, Self::Error>;

    /// Fetches the calibration block in one transaction.
    fn fetch_calibration(&mut self, register: u8) -> Result<CalibrationRecord, Self::Error>;

    /// Reports whether the sensor sits on the external bus.
    fn is_external(&self) -> bool;

    /// Identifier of the attachment point.
    fn device_id(&self) -> DeviceId;
}
