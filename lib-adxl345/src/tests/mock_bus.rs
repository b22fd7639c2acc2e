use std::collections::VecDeque;
use embedded_hal::delay::DelayNs;
use crate::{registers::*, BusPort, DEVICE_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Scripted bus: every read pops the next queued response, an empty queue fails the read. Writes
/// are recorded and always acknowledged unless the register is listed in `failing_writes`.
/// 
#[derive(Debug, Default)]
pub struct MockBus
{
    responses: VecDeque<Option<Vec<u8>>>,
    pub reads: Vec<(u8, u8, usize)>,
    pub writes: Vec<(u8, u8, u8)>,
    pub failing_writes: Vec<u8>,
}

impl MockBus
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.responses.push_back(Some(bytes.to_vec()));
    }

    /// Queues one data register burst holding the given readings.
    pub fn push_sample(&mut self, x: i16, y: i16, z: i16) {
        let (x, y, z) = (x.to_le_bytes(), y.to_le_bytes(), z.to_le_bytes());
        self.push_bytes(&[x[0], x[1], y[0], y[1], z[0], z[1]]);
    }

    pub fn push_failure(&mut self) {
        self.responses.push_back(None);
    }

    pub fn pending(&self) -> usize {
        self.responses.len()
    }
}

impl BusPort for MockBus
{
    type Error = MockError;

    fn read(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), MockError> {
        self.reads.push((address, register, buffer.len()));
        match self.responses.pop_front() {
            Some(Some(bytes)) => {
                let n = core::cmp::min(bytes.len(), buffer.len());
                buffer[..n].copy_from_slice(&bytes[..n]);
                Ok(())
            },
            _ => Err(MockError),
        }
    }

    fn write(&mut self, address: u8, register: u8, value: u8) -> Result<(), MockError> {
        if self.failing_writes.contains(&register) {
            return Err(MockError);
        }
        self.writes.push((address, register, value));
        Ok(())
    }
}

/// Delay that only keeps track of how long it was asked to wait.
/// 
#[derive(Debug, Default)]
pub struct MockDelay
{
    pub total_ns: u64,
}

impl DelayNs for MockDelay
{
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

#[test]
fn test_probe_identity() {
    let mut bus = MockBus::new();
    bus.push_bytes(&[DEVICE_ID]);
    bus.push_bytes(&[0x34]);

    assert!(bus.probe_identity(0x53));
    assert!(!bus.probe_identity(0x53));
    // Nothing queued, the read fails.
    assert!(!bus.probe_identity(0x53));
    assert_eq!(bus.reads[0], (0x53, DEVID, 1));
}
