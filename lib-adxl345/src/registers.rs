
pub const DEVID: u8 = 0x00;             // Fixed device ID, reads DEVICE_ID

pub const THRESH_TAP: u8 = 0x1D;
pub const OFSX: u8 = 0x1E;              // Hardware offset registers, unused: offsets are kept in software
pub const OFSY: u8 = 0x1F;
pub const OFSZ: u8 = 0x20;

pub const BW_RATE: u8 = 0x2C;           //[4] LOW_POWER, [3:0] Rate
pub const POWER_CTL: u8 = 0x2D;         //[5] Link, [4] AUTO_SLEEP, [3] Measure, [2] Sleep, [1:0] Wakeup
pub const INT_ENABLE: u8 = 0x2E;
pub const INT_SOURCE: u8 = 0x30;
pub const DATA_FORMAT: u8 = 0x31;       //[7] SELF_TEST, [6] SPI, [5] INT_INVERT, [3] FULL_RES, [2] Justify, [1:0] Range

pub const DATAX0: u8 = 0x32;            // Little endian, X0 X1 Y0 Y1 Z0 Z1
pub const DATAX1: u8 = 0x33;
pub const DATAY0: u8 = 0x34;
pub const DATAY1: u8 = 0x35;
pub const DATAZ0: u8 = 0x36;
pub const DATAZ1: u8 = 0x37;

pub const FIFO_CTL: u8 = 0x38;

/// `POWER_CTL` value with every bit cleared, this puts the device in standby.
pub const POWER_CTL_STANDBY: u8 = 0x00;

/// `POWER_CTL` value with only the `Measure` bit set.
pub const POWER_CTL_MEASURE: u8 = 0x08;
