#![cfg_attr(not(test), no_std)]

pub mod calibration;
pub use calibration::*;

pub mod conversion;
pub use conversion::*;

pub mod block_average;
pub use block_average::*;

pub mod low_pass;
pub use low_pass::*;

pub mod velocity;
pub use velocity::*;

pub mod state;
pub use state::*;

#[cfg(test)]
mod tests;
