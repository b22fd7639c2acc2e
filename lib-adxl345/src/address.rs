/// 7-bit i2c address of the ADXL345, selected by the ALT ADDRESS pin.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(pub u8);

impl Address {
    /// ALT ADDRESS pin tied low.
    pub const PRIMARY: Address = Address(0x53);

    /// ALT ADDRESS pin tied high.
    pub const ALTERNATE: Address = Address(0x1D);
}

impl Default for Address {
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
