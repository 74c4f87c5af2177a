//! Strongly typed parameter enumerations for the BMP388 transport.
//!
//! These enums map directly to the fields packed into
//! [`DeviceId`](crate::registers::DeviceId) and carried by
//! [`Config`](crate::config::Config). Prefer these types over raw integers and
//! booleans to keep attachment descriptions explicit.
//!
//! # Examples
//!
//! ```rust
//! use bmp388_spi::params::{BusLocation, BusType};
//!
//! let location = BusLocation::External;
//! assert!(location.is_external());
//! let _ = BusType::Spi;
//! ```

use modular_bitfield::prelude::Specifier;

/// Physical attachment point of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusLocation {
    /// Sensor mounted on the primary (on-board) bus.
    #[default]
    Internal,
    /// Sensor attached through the secondary (external) bus.
    External,
}

impl BusLocation {
    /// Returns `true` for the external attachment point.
    pub const fn is_external(self) -> bool {
        matches!(self, Self::External)
    }
}

impl From<bool> for BusLocation {
    fn from(is_external: bool) -> Self {
        if is_external {
            Self::External
        } else {
            Self::Internal
        }
    }
}

/// Bus kinds encoded in the `bus_type` field of a device identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum BusType {
    /// Unknown or unassigned bus.
    Unknown = 0b000,
    /// I²C bus.
    I2c = 0b001,
    /// SPI bus.
    Spi = 0b010,
    /// UAVCAN bus.
    Uavcan = 0b011,
    /// Simulated bus.
    Simulation = 0b100,
}
