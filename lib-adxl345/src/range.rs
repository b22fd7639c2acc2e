#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl Range {

    /// Converts the given range into the bits one would need to write into the `DATA_FORMAT`
    /// register to configure the sensor to use that range.
    /// 
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }

    /// Gets the range currently configured in the `DATA_FORMAT` register based on its contents.
    /// 
    pub fn from_register(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::G2,
            1 => Self::G4,
            2 => Self::G8,
            _ => Self::G16,
        }
    }

    /// Gets the range for a full scale given in g, i.e. 2, 4, 8 or 16.
    /// 
    pub fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }

    /// Gets the sensitivity scale factor for the given range.
    /// (Note scale factor is in LSB/g, with the fixed 10-bit resolution).
    /// 
    pub fn as_scale_factor(&self) -> u16 {
        match self {
            Self::G2 => 256,
            Self::G4 => 128,
            Self::G8 => 64,
            Self::G16 => 32,
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::G2
    }
}
