#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod axes;
pub use axes::*;

#[cfg(test)]
mod tests;

/// Standard gravity in m/s^2 as used by the acceleration conversion.
/// 
pub const EARTH_GRAVITY: f64 = 9.800665;

/// Multiplier for turning a millisecond interval into seconds.
/// 
pub const MILLIS_TO_SECONDS: f64 = 0.001;
