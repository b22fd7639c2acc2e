use core::{error::Error as CoreError, fmt::{self, Debug}};

/// A register transfer that failed or timed out, wraps the transport's own error.
/// 
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusError<E>
{
    Read { register: u8, source: E },
    Write { register: u8, source: E },
}

impl<E: Debug> CoreError for BusError<E> {}

impl<E: Debug> fmt::Display for BusError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Read { register, source } => write!(f, "Reading register {:#04x} failed: {:?}", register, source),
            Self::Write { register, source } => write!(f, "Writing register {:#04x} failed: {:?}", register, source),
        }
    }
}

/// Failure to bring the device into measurement mode.
/// 
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError<E>
{
    Reset(BusError<E>),
    PowerMode(BusError<E>),
    DataFormat(BusError<E>),
    InvalidRange(u8),
}

impl<E: Debug> CoreError for InitError<E> {}

impl<E: Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Reset(err) => write!(f, "Device reset failed: {}", err),
            Self::PowerMode(err) => write!(f, "Enabling measurement mode failed: {}", err),
            Self::DataFormat(err) => write!(f, "Selecting the range failed: {}", err),
            Self::InvalidRange(g) => write!(f, "{}g is not a supported range", g),
        }
    }
}

/// Failures of the sampling stages that keep reading until they have enough good samples.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError
{
    /// A sample count or filter window of zero was requested.
    ZeroSamples,
    CalibrationTimeout { collected: usize, required: usize },
    FilterTimeout { collected: usize, required: usize },
}

impl CoreError for PipelineError {}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ZeroSamples => write!(f, "Sample count must be at least one"),
            Self::CalibrationTimeout { collected, required } => 
                write!(f, "Calibration gave up after {} of {} samples", collected, required),
            Self::FilterTimeout { collected, required } => 
                write!(f, "Block filter gave up after {} of {} samples", collected, required),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E>
{
    Bus(BusError<E>),
    Init(InitError<E>),
    Pipeline(PipelineError),
}

impl<E: Debug> CoreError for Error<E> {}

impl<E: Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "Bus error: {}", err),
            Self::Init(err) => write!(f, "Initialization error: {}", err),
            Self::Pipeline(err) => write!(f, "Pipeline error: {}", err),
        }
    }
}

impl<E> From<BusError<E>> for Error<E>
{
    fn from(err: BusError<E>) -> Self {
        Error::Bus(err)
    }
}

impl<E> From<InitError<E>> for Error<E>
{
    fn from(err: InitError<E>) -> Self {
        Error::Init(err)
    }
}

impl<E> From<PipelineError> for Error<E>
{
    fn from(err: PipelineError) -> Self {
        Error::Pipeline(err)
    }
}
