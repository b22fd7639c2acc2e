use processing::{StallPolicy, CALIBRATION_SIZE, STALL_LIMIT};

/// How many failed bus reads the sampling stages tolerate before giving up.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryLimit
{
    /// Keep retrying forever, only use this with an external watchdog.
    Unbounded,

    /// Give up once more than this many reads failed during a single run.
    Failures(u32),
}

impl RetryLimit {
    #[inline]
    pub fn is_exceeded(&self, failures: u32) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Failures(max) => failures > *max,
        }
    }
}

impl Default for RetryLimit {
    fn default() -> Self {
        RetryLimit::Failures(256)
    }
}

/// Tuning of the measurement pipeline.
/// 
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig
{
    /// Amount of raw samples averaged into the zero offsets.
    pub calibration_samples: usize,

    /// In milliseconds; pause after every successful calibration sample.
    pub calibration_delay_ms: u32,

    /// Amount of converted samples averaged into one block filter output.
    pub block_window: usize,

    /// Retention rate of the recursive low pass filter, in [0, 1).
    pub retention_rate: f64,

    pub stall_policy: StallPolicy,

    /// Amount of near zero samples tolerated before velocity is reset.
    pub stall_limit: u16,

    pub retry_limit: RetryLimit,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            calibration_samples: CALIBRATION_SIZE,
            calibration_delay_ms: 5,
            block_window: 16,
            retention_rate: 0.5,
            stall_policy: StallPolicy::PerAxis,
            stall_limit: STALL_LIMIT,
            retry_limit: RetryLimit::default(),
        }
    }
}
