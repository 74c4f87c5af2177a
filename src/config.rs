//! Attachment configuration for the BMP388 transport.

use embedded_hal::spi::{Mode, MODE_3};

use crate::params::{BusLocation, BusType};
use crate::registers::DeviceId;

/// SPI clock the platform should configure for the sensor's `SpiDevice`.
pub const SPI_FREQUENCY_HZ: u32 = 10_000_000;
/// SPI electrical mode (CPOL = 1, CPHA = 1).
pub const SPI_MODE: Mode = MODE_3;

// Width of the bus number field in `DeviceId`.
const MAX_BUS_ID: u8 = 0x1F;

/// Describes which bus instance and chip-select the sensor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Bus number the sensor is wired to.
    pub bus: u8,
    /// Chip-select index on that bus.
    pub device: u8,
    /// Primary or external attachment point.
    pub location: BusLocation,
    /// Device type tag assigned by the sensor driver.
    pub device_type: u8,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Shorthand for the `(bus, device, is_external)` triple.
    pub const fn attachment(bus: u8, device: u8, is_external: bool) -> Self {
        Self {
            bus,
            device,
            location: if is_external {
                BusLocation::External
            } else {
                BusLocation::Internal
            },
            device_type: 0,
        }
    }

    /// Checks whether this configuration fits the device identifier layout.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.bus > MAX_BUS_ID {
            return Err(ConfigError::BusOutOfRange);
        }

        Ok(())
    }

    /// Packs the attachment into a [`DeviceId`] for the given bus kind.
    pub fn device_id(&self, bus_type: BusType) -> DeviceId {
        DeviceId::new()
            .with_bus_type(bus_type)
            .with_bus(self.bus & MAX_BUS_ID)
            .with_address(self.device)
            .with_devtype(self.device_type)
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Sets the bus number.
    pub fn bus(mut self, bus: u8) -> Self {
        self.config.bus = bus;
        self
    }

    /// Sets the chip-select index.
    pub fn device(mut self, device: u8) -> Self {
        self.config.device = device;
        self
    }

    /// Sets the attachment point.
    pub fn location(mut self, location: BusLocation) -> Self {
        self.config.location = location;
        self
    }

    /// Marks the sensor as attached through the external bus.
    pub fn external(mut self, is_external: bool) -> Self {
        self.config.location = BusLocation::from(is_external);
        self
    }

    /// Sets the device type tag.
    pub fn device_type(mut self, device_type: u8) -> Self {
        self.config.device_type = device_type;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::attachment(0, 0, false)
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bus number does not fit the 5-bit bus field.
    BusOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_attachment_shorthand() {
        let built = Config::new().bus(1).device(0).external(true).build();
        assert_eq!(built, Config::attachment(1, 0, true));
        assert!(built.location.is_external());
    }

    #[test]
    fn rejects_bus_outside_device_id_field() {
        assert_eq!(Config::attachment(31, 0, false).validate(), Ok(()));
        assert_eq!(
            Config::attachment(32, 0, false).validate(),
            Err(ConfigError::BusOutOfRange)
        );
    }

    #[test]
    fn device_id_carries_attachment() {
        let config = Config::new().bus(2).device(5).device_type(0x3C).build();
        let id = config.device_id(BusType::Spi);

        assert_eq!(id.bus_type(), BusType::Spi);
        assert_eq!(id.bus(), 2);
        assert_eq!(id.address(), 5);
        assert_eq!(id.devtype(), 0x3C);
    }
}
