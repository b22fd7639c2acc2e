use math::*;

/// Averages a fixed window of converted samples into a single value per axis. This trades output
/// rate for noise suppression; it is the first filter stage, the recursive low pass runs on its
/// output.
/// 
#[derive(Debug, Clone)]
pub struct BlockAverage
{
    window: usize,
    sum: Axes<f64>,
    count: usize,
}

impl BlockAverage
{
    /// Creates an empty block of `window` samples, a window of zero samples has no average so
    /// `None` is returned for it.
    /// 
    pub fn new(window: usize) -> Option<Self> {
        if window == 0 {
            return None;
        }
        Some(BlockAverage {
            window,
            sum: Axes::zero(),
            count: 0,
        })
    }

    /// Adds a sample to the block and returns whether the block is complete.
    /// 
    pub fn push(&mut self, sample: &Axes<f64>) -> bool {
        if !self.is_full() {
            self.sum += *sample;
            self.count += 1;
        }
        self.is_full()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count >= self.window
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the samples pushed so far.
    /// 
    pub fn average(&self) -> Option<Axes<f64>> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64)
    }
}
