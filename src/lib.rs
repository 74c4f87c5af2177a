#![no_std]

mod error;

pub mod config;
pub mod interface;
mod log;
pub mod params;
pub mod record;
pub mod registers;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::interface::Bmp388Interface;
#[cfg(feature = "spi")]
pub use crate::interface::spi::SpiInterface;
pub use crate::record::{CalibrationRecord, DataRecord};
