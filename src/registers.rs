//! Register map and wire encodings for the BMP388 SPI transport.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::BusType;

/// Register address of `CHIP_ID`.
pub const REG_CHIP_ID: u8 = 0x00;
/// Register address of `ERR_REG`.
pub const REG_ERR: u8 = 0x02;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x03;
/// First register of the pressure/temperature data block (`DATA_0`).
pub const REG_DATA: u8 = 0x04;
/// First register of the 24-bit sensor time (`SENSORTIME_0`).
pub const REG_SENSOR_TIME: u8 = 0x0C;
/// Register address of `EVENT`.
pub const REG_EVENT: u8 = 0x10;
/// Register address of `INT_STATUS`.
pub const REG_INT_STATUS: u8 = 0x11;
/// First register of the FIFO fill level (`FIFO_LENGTH_0`).
pub const REG_FIFO_LENGTH: u8 = 0x12;
/// Register address of `FIFO_DATA`.
pub const REG_FIFO_DATA: u8 = 0x14;
/// First register of the FIFO watermark (`FIFO_WTM_0`).
pub const REG_FIFO_WTM: u8 = 0x15;
/// Register address of `FIFO_CONFIG_1`.
pub const REG_FIFO_CONFIG_1: u8 = 0x17;
/// Register address of `FIFO_CONFIG_2`.
pub const REG_FIFO_CONFIG_2: u8 = 0x18;
/// Register address of `INT_CTRL`.
pub const REG_INT_CTRL: u8 = 0x19;
/// Register address of `IF_CONF`.
pub const REG_IF_CONF: u8 = 0x1A;
/// Register address of `PWR_CTRL`.
pub const REG_PWR_CTRL: u8 = 0x1B;
/// Register address of `OSR`.
pub const REG_OSR: u8 = 0x1C;
/// Register address of `ODR`.
pub const REG_ODR: u8 = 0x1D;
/// Register address of `CONFIG`.
pub const REG_CONFIG: u8 = 0x1F;
/// First register of the factory trimming coefficients (`NVM_PAR_T1`).
pub const REG_CALIB_DATA: u8 = 0x31;
/// Register address of `CMD`.
pub const REG_CMD: u8 = 0x7E;

/// Value reported by `CHIP_ID` on a BMP388.
pub const EXPECTED_CHIP_ID: u8 = 0x50;

/// Direction bit set in the command byte of read transactions.
pub const DIR_READ: u8 = 0x80;
/// Mask selecting the 7-bit register address of a command byte.
pub const ADDRESS_MASK: u8 = 0x7F;

/// Address byte leading every SPI transaction (`[read][address:7]`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    // Register address (bits 6:0).
    pub address: B7,
    // Read direction flag (bit 7).
    pub read: bool,
}

impl Command {
    /// Builds a read command for `register`. The top bit of `register` is ignored.
    pub fn read_from(register: u8) -> Self {
        Self::new()
            .with_address(register & ADDRESS_MASK)
            .with_read(true)
    }

    /// Builds a write command for `register`. The top bit of `register` is ignored.
    pub fn write_to(register: u8) -> Self {
        Self::new()
            .with_address(register & ADDRESS_MASK)
            .with_read(false)
    }
}

impl From<u8> for Command {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Command> for u8 {
    fn from(value: Command) -> Self {
        value.into_bytes()[0]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Command {{ address: {=u8:#04x}, read: {} }}",
            self.address(),
            self.read()
        );
    }
}

/// Packed identifier describing where a sensor is attached.
///
/// Layout (little-endian `u32`): bus type in bits 2:0, bus number in bits 7:3,
/// device address or chip-select index in bits 15:8, device type in bits 23:16.
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId {
    // Bus kind (bits 2:0).
    pub bus_type: BusType,
    // Bus number (bits 7:3).
    pub bus: B5,
    // Device address or chip-select index (bits 15:8).
    pub address: B8,
    // Device type assigned by the sensor driver (bits 23:16).
    pub devtype: B8,
    #[skip]
    __: B8,
}

impl From<DeviceId> for u32 {
    fn from(value: DeviceId) -> Self {
        u32::from_le_bytes(value.into_bytes())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DeviceId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DeviceId({=u32:#010x})", u32::from(*self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_command_sets_direction_bit() {
        for register in 0..=ADDRESS_MASK {
            let command = Command::read_from(register);
            assert_eq!(u8::from(command), register | DIR_READ);
            assert_eq!(command.address(), register);
            assert!(command.read());
        }
    }

    #[test]
    fn write_command_clears_direction_bit() {
        for register in 0..=u8::MAX {
            let command = Command::write_to(register);
            assert_eq!(u8::from(command), register & ADDRESS_MASK);
            assert!(!command.read());
        }
    }

    #[test]
    fn command_address_never_carries_direction_bit() {
        let command = Command::from(0x9B);
        assert!(command.read());
        assert_eq!(command.address(), 0x1B);
    }

    #[test]
    fn device_id_layout() {
        let id = DeviceId::new()
            .with_bus_type(BusType::Spi)
            .with_bus(1)
            .with_address(3)
            .with_devtype(0x42);

        assert_eq!(u32::from(id), 0x0042_030A);
    }
}
