use std::{collections::VecDeque, fmt, io::Read};
use adxl345::{registers::*, BusPort, DEVICE_ID};

#[derive(Debug)]
pub enum ReplayError
{
    /// The recording has a gap here, i.e. the original read failed.
    Dropout,
    /// Every recorded sample was consumed.
    Exhausted,
    UnknownRegister(u8),
}

impl std::error::Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Dropout => write!(f, "Recorded read failure"),
            Self::Exhausted => write!(f, "End of recording"),
            Self::UnknownRegister(reg) => write!(f, "Register {:#04x} is not part of the recording", reg),
        }
    }
}

/// Bus that plays back raw data register readings from a CSV recording with one `x,y,z` row per
/// sample. Rows with an empty field are replayed as failed reads.
/// 
pub struct ReplayBus
{
    samples: VecDeque<Option<[i16; 3]>>,
    data_format: u8,
}

impl ReplayBus
{
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut samples = VecDeque::new();
        let mut reader = csv::Reader::from_reader(reader);
        for result in reader.deserialize::<Vec<Option<i16>>>() {
            let record = result?;
            let sample = match record.as_slice() {
                [Some(x), Some(y), Some(z)] => Some([*x, *y, *z]),
                _ => None,
            };
            samples.push_back(sample);
        }
        Ok(ReplayBus { samples, data_format: 0 })
    }

    /// Amount of recorded rows not played back yet.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl BusPort for ReplayBus
{
    type Error = ReplayError;

    fn read(&mut self, _address: u8, register: u8, buffer: &mut [u8]) -> Result<(), ReplayError> {
        match register {
            DEVID => {
                buffer.fill(0);
                if let Some(first) = buffer.first_mut() {
                    *first = DEVICE_ID;
                }
                Ok(())
            },
            DATA_FORMAT => {
                buffer.fill(self.data_format);
                Ok(())
            },
            DATAX0 => {
                let sample = self.samples.pop_front().ok_or(ReplayError::Exhausted)?;
                let [x, y, z] = sample.ok_or(ReplayError::Dropout)?;
                let (x, y, z) = (x.to_le_bytes(), y.to_le_bytes(), z.to_le_bytes());
                let bytes = [x[0], x[1], y[0], y[1], z[0], z[1]];
                let n = buffer.len().min(bytes.len());
                buffer[..n].copy_from_slice(&bytes[..n]);
                Ok(())
            },
            _ => Err(ReplayError::UnknownRegister(register)),
        }
    }

    fn write(&mut self, _address: u8, register: u8, value: u8) -> Result<(), ReplayError> {
        if register == DATA_FORMAT {
            self.data_format = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    static RECORDING: &str = "x,y,z\n1,2,3\n,,\n-4,5,-6\n";

    #[test]
    pub fn test_replays_rows_in_order() {
        let mut bus = ReplayBus::from_reader(RECORDING.as_bytes()).unwrap();
        assert_eq!(bus.remaining(), 3);

        let mut data = [0u8; 6];
        bus.read(0x53, DATAX0, &mut data).unwrap();
        assert_eq!(data, [1, 0, 2, 0, 3, 0]);

        assert!(matches!(bus.read(0x53, DATAX0, &mut data), Err(ReplayError::Dropout)));

        bus.read(0x53, DATAX0, &mut data).unwrap();
        assert_eq!(i16::from_le_bytes([data[0], data[1]]), -4);
        assert_eq!(i16::from_le_bytes([data[4], data[5]]), -6);

        assert!(matches!(bus.read(0x53, DATAX0, &mut data), Err(ReplayError::Exhausted)));
    }

    #[test]
    pub fn test_identity_and_range_registers() {
        let mut bus = ReplayBus::from_reader(RECORDING.as_bytes()).unwrap();
        assert!(bus.probe_identity(0x53));

        bus.write(0x53, DATA_FORMAT, 0x02).unwrap();
        let mut format = [0u8];
        bus.read(0x53, DATA_FORMAT, &mut format).unwrap();
        assert_eq!(format, [0x02]);
        assert_eq!(bus.remaining(), 3);
    }
}
