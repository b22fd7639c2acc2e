#![cfg_attr(not(test), no_std)]

pub mod range;
pub use range::*;

pub mod address;
pub use address::*;

pub mod bus;
pub use bus::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod registers;

pub mod adxl345;
pub use adxl345::*;

mod utils;

#[cfg(test)]
mod tests;

/// The fixed device ID of an ADXL345 chip.
/// 
pub const DEVICE_ID: u8 = 0xE5;
