use math::*;

/// Raw reading of the Z axis while the device lies flat and at rest. The Z offset is measured
/// relative to this value instead of zero since gravity is always acting on that axis.
/// 
pub const Z_REST_READING: f64 = 255.0;

/// Default amount of raw samples averaged into the zero offsets.
/// 
pub const CALIBRATION_SIZE: usize = 1024;

/// Sums raw readings per axis so the zero-g offsets can be computed from their mean.
/// 
#[derive(Debug, Clone, Default)]
pub struct OffsetAccumulator
{
    sum: Axes<i64>,
    count: usize,
}

impl OffsetAccumulator
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, raw: &Axes<i16>) {
        for (axis, value) in raw.iter() {
            self.sum[axis] += value as i64;
        }
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Computes the per axis offsets from the accumulated samples, returns `None` when nothing was
    /// accumulated yet.
    /// 
    /// X and Y are simply the mean reading, Z is `Z_REST_READING - mean` since the chip is mounted
    /// with Z pointing against gravity.
    /// 
    pub fn offsets(&self) -> Option<Axes<f64>> {
        if self.count == 0 {
            return None;
        }

        let n = self.count as f64;
        Some(Axes::new(
            self.sum[Axis::X] as f64 / n,
            self.sum[Axis::Y] as f64 / n,
            Z_REST_READING - self.sum[Axis::Z] as f64 / n,
        ))
    }
}
