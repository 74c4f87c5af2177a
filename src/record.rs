//! Fixed-size payload records fetched in a single bus transaction.
//!
//! The transport does not interpret these blocks. They are handed to the sensor
//! driver byte-for-byte as the chip delivered them.

/// Size of the calibration block starting at [`REG_CALIB_DATA`](crate::registers::REG_CALIB_DATA).
pub const CALIBRATION_RECORD_LEN: usize = 21;
/// Size of the measurement block starting at [`REG_DATA`](crate::registers::REG_DATA).
pub const DATA_RECORD_LEN: usize = 6;

/// Raw factory calibration coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationRecord {
    raw: [u8; CALIBRATION_RECORD_LEN],
}

/// Raw pressure and temperature sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataRecord {
    raw: [u8; DATA_RECORD_LEN],
}

macro_rules! impl_record {
    ($record:ident, $len:expr) => {
        impl $record {
            /// Number of payload bytes on the wire.
            pub const LEN: usize = $len;

            /// Wraps raw payload bytes.
            pub const fn from_bytes(raw: [u8; $len]) -> Self {
                Self { raw }
            }

            /// Borrows the payload bytes.
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.raw
            }

            /// Returns the payload bytes.
            pub const fn into_bytes(self) -> [u8; $len] {
                self.raw
            }
        }

        impl Default for $record {
            fn default() -> Self {
                Self { raw: [0; $len] }
            }
        }

        impl From<[u8; $len]> for $record {
            fn from(raw: [u8; $len]) -> Self {
                Self::from_bytes(raw)
            }
        }

        impl From<$record> for [u8; $len] {
            fn from(record: $record) -> Self {
                record.raw
            }
        }

        impl AsRef<[u8]> for $record {
            fn as_ref(&self) -> &[u8] {
                &self.raw
            }
        }
    };
}

impl_record!(CalibrationRecord, CALIBRATION_RECORD_LEN);
impl_record!(DataRecord, DATA_RECORD_LEN);

/// Address-prefixed transfer buffer holding `FRAME - 1` payload bytes.
///
/// Byte 0 carries the command on the way out and
/// is clobbered by the chip on the way back, bytes `1..` carry the payload.
#[cfg(feature = "spi")]
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<const FRAME: usize> {
    bytes: [u8; FRAME],
}

/// Transfer buffer sized for a [`CalibrationRecord`].
#[cfg(feature = "spi")]
pub(crate) type CalibrationFrame = Frame<{ CALIBRATION_RECORD_LEN + 1 }>;
/// Transfer buffer sized for a [`DataRecord`].
#[cfg(feature = "spi")]
pub(crate) type DataFrame = Frame<{ DATA_RECORD_LEN + 1 }>;

#[cfg(feature = "spi")]
impl<const FRAME: usize> Frame<FRAME> {
    pub(crate) const fn new() -> Self {
        Self { bytes: [0; FRAME] }
    }

    /// Loads the command byte and zeroes the payload placeholder.
    pub(crate) fn prepare(&mut self, command: u8) -> &mut [u8; FRAME] {
        self.bytes = [0; FRAME];
        self.bytes[0] = command;
        &mut self.bytes
    }
}

#[cfg(feature = "spi")]
impl CalibrationFrame {
    pub(crate) fn calibration(&self) -> CalibrationRecord {
        let [_, raw @ ..] = self.bytes;
        CalibrationRecord::from_bytes(raw)
    }
}

#[cfg(feature = "spi")]
impl DataFrame {
    pub(crate) fn data(&self) -> DataRecord {
        let [_, raw @ ..] = self.bytes;
        DataRecord::from_bytes(raw)
    }
}
