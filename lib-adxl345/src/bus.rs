use core::fmt::Debug;
use embedded_hal::i2c::I2c;
use crate::{registers::DEVID, DEVICE_ID};

/// Register level access to a device on a serial bus. The driver only talks to the hardware
/// through this trait so the pipeline can be driven by a real transport or by a test double.
/// 
/// Implementations are expected to bound every transfer with their own timeout.
/// 
pub trait BusPort
{
    type Error: Debug;

    /// Reads `buffer.len()` consecutive registers starting at `register`.
    /// 
    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Writes a single register.
    /// 
    fn write(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Checks that an ADXL345 answers on `address` by comparing its identity register against the
    /// known device ID. Any bus failure counts as absent.
    /// 
    fn probe_identity(&mut self, address: u8) -> bool {
        let mut id = [0u8];
        match self.read(address, DEVID, &mut id) {
            Ok(()) => id[0] == DEVICE_ID,
            Err(_) => false,
        }
    }
}

/// `BusPort` on top of any blocking embedded-hal i2c peripheral.
/// 
pub struct I2cBus<I>
{
    i2c: I,
}

impl<I: I2c> I2cBus<I>
{
    pub fn new(i2c: I) -> Self {
        I2cBus { i2c }
    }

    /// Returns the underlying i2c peripheral, consuming the bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusPort for I2cBus<I>
{
    type Error = I::Error;

    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(address, &[ register ], buffer)
    }

    fn write(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[ register, value ])
    }
}
