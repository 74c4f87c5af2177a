//! SPI register transport built on top of `embedded-hal` `SpiDevice`.
//!
//! Wire format, one chip-select assertion per call:
//!
//! | Operation          | MOSI                              | MISO                   |
//! |--------------------|-----------------------------------|------------------------|
//! | single read        | `[addr \| 0x80, 0x00]`            | `[-, value]`           |
//! | buffer read        | `[addr \| 0x80]` then `len` clocks | `len` bytes            |
//! | single write       | `[addr & 0x7F, value]`            | discarded              |
//! | record read        | `[addr \| 0x80, 0x00 × N]`        | `[-, record bytes]`    |

use embedded_hal::spi::{Operation, SpiDevice};

use super::Bmp388Interface;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::log::{debug, trace, warning};
use crate::params::BusType;
use crate::record::{CalibrationFrame, CalibrationRecord, DataFrame, DataRecord};
use crate::registers::{Command, DeviceId, REG_CHIP_ID};

/// SPI-based register transport for the BMP388.
///
/// Owns the SPI device and the transfer buffers used for block reads. The
/// buffers live as long as the transport and are reused by every fetch.
pub struct SpiInterface<SPI> {
    spi: SPI,
    config: Config,
    calibration: CalibrationFrame,
    data: DataFrame,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new transport from the provided SPI device and attachment.
    pub const fn new(spi: SPI, config: Config) -> Self {
        Self {
            spi,
            config,
            calibration: CalibrationFrame::new(),
            data: DataFrame::new(),
        }
    }

    /// Returns the attachment this transport was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the transport and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

fn transport_error<E>(register: u8, err: E) -> Error<E> {
    warning!("bmp388: transfer failed at register {=u8:#04x}", register);
    Error::Transport(err)
}

impl<SPI> Bmp388Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.config.validate().map_err(|_| Error::InvalidConfig)?;

        // The sensor powers up in I2C mode and latches SPI on the first CSB edge.
        let mut cmd: [u8; 2] = [Command::read_from(REG_CHIP_ID).into(), 0];
        self.spi.transfer_in_place(&mut cmd).map_err(|err| {
            warning!("bmp388: spi link bring-up failed");
            Error::Init(err)
        })?;

        debug!(
            "bmp388: spi link up on bus {=u8} device {=u8}",
            self.config.bus,
            self.config.device
        );
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut cmd: [u8; 2] = [Command::read_from(register).into(), 0];
        self.spi
            .transfer_in_place(&mut cmd)
            .map_err(|err| transport_error(register, err))?;

        trace!("bmp388: read {=u8:#04x} -> {=u8:#04x}", register, cmd[1]);
        Ok(cmd[1])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command: [u8; 1] = [Command::read_from(register).into()];
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi
            .transaction(&mut operations)
            .map_err(|err| transport_error(register, err))
    }

    fn write_register(&mut self, value: u8, register: u8) -> Result<(), Self::Error> {
        let cmd: [u8; 2] = [Command::write_to(register).into(), value];
        self.spi
            .write(&cmd)
            .map_err(|err| transport_error(register, err))?;

        trace!("bmp388: write {=u8:#04x} <- {=u8:#04x}", register, value);
        Ok(())
    }

    fn fetch_data(&mut self, register: u8) -> Result<DataRecord, Self::Error> {
        let frame = self.data.prepare(Command::read_from(register).into());
        self.spi
            .transfer_in_place(frame)
            .map_err(|err| transport_error(register, err))?;

        Ok(self.data.data())
    }

    fn fetch_calibration(&mut self, register: u8) -> Result<CalibrationRecord, Self::Error> {
        let frame = self.calibration.prepare(Command::read_from(register).into());
        self.spi
            .transfer_in_place(frame)
            .map_err(|err| transport_error(register, err))?;

        Ok(self.calibration.calibration())
    }

    fn is_external(&self) -> bool {
        self.config.location.is_external()
    }

    fn device_id(&self) -> DeviceId {
        self.config.device_id(BusType::Spi)
    }
}
