use embedded_hal::delay::DelayNs;
use math::{Axes, Axis};
use processing::{BlockAverage, OffsetAccumulator, SensorState};

use crate::{registers::*, Address, BusError, BusPort, InitError, PipelineConfig, PipelineError, Range};
use crate::utils::*;

pub struct Adxl345<B: BusPort>
{
    /// Bus that we actually use to communicate with the ADXL345 chip.
    bus: B,

    /// i2c address that chip is located at.
    address: u8,

    range: Range,

    config: PipelineConfig,

    /// Everything the measurement pipeline computes, including filter memory.
    state: SensorState,
}

impl<B: BusPort> Adxl345<B>
{
    /// Create a new ADXL345 instance on the given bus. The device itself is not touched until
    /// `initialize` is called.
    /// 
    pub fn new(bus: B, address: Address, config: PipelineConfig) -> Self {
        Adxl345 {
            bus,
            address: address.into(),
            range: Range::default(),
            state: SensorState::new(config.stall_policy, config.stall_limit),
            config,
        }
    }

    /// Returns the underlying bus, consuming the driver.
    pub fn release(self) -> B {
        self.bus
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn read_register(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), BusError<B::Error>> {
        self.bus
            .read(self.address, register, buffer)
            .map_err(|source| BusError::Read { register, source })
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusError<B::Error>> {
        self.bus
            .write(self.address, register, value)
            .map_err(|source| BusError::Write { register, source })
    }

    /// Checks if an ADXL345 answers at the configured address.
    /// 
    pub fn probe(&mut self) -> bool {
        self.bus.probe_identity(self.address)
    }

    /// Resets the chip, wakes it up into measurement mode and selects the range. This needs to be
    /// called once before sampling.
    /// 
    pub fn initialize(&mut self, range: Range) -> Result<(), InitError<B::Error>> {
        self.write_register(POWER_CTL, POWER_CTL_STANDBY).map_err(InitError::Reset)?;
        self.write_register(POWER_CTL, POWER_CTL_MEASURE).map_err(InitError::PowerMode)?;
        self.write_register(DATA_FORMAT, range.as_register()).map_err(InitError::DataFormat)?;

        self.range = range;
        self.state.set_sensitivity(range.as_scale_factor());
        log::info!("ADXL345 at {:#04x} measuring with {:?} ({} LSB/g)", self.address, range, range.as_scale_factor());
        Ok(())
    }

    /// Same as `initialize` but with the range given in g (2, 4, 8 or 16).
    /// 
    pub fn initialize_g(&mut self, g: u8) -> Result<(), InitError<B::Error>> {
        let range = Range::from_g(g).ok_or(InitError::InvalidRange(g))?;
        self.initialize(range)
    }

    /// Gets the range currently configured on the device and adopts it, so conversion uses the
    /// matching sensitivity.
    /// 
    pub fn read_range(&mut self) -> Result<Range, BusError<B::Error>> {
        let mut buf = [ 0u8 ];
        self.read_register(DATA_FORMAT, &mut buf)?;
        let range = Range::from_register(buf[0]);
        self.range = range;
        self.state.set_sensitivity(range.as_scale_factor());
        Ok(range)
    }

    /// The range selected by the last successful `initialize` or `read_range`.
    /// 
    pub fn range(&self) -> Range {
        self.range
    }

    /// Reads the three axis data registers in a single burst. On failure the previous raw values
    /// are left untouched.
    /// 
    pub fn sample_raw(&mut self) -> Result<(), BusError<B::Error>> {
        let mut data = [ 0u8; 6 ];
        self.read_register(DATAX0, &mut data)?;
        self.state.set_raw(axes_from_le_bytes(&data));
        Ok(())
    }

    /// Computes the zero offsets from the mean of `samples` raw readings taken while the device is
    /// at rest, pausing `calibration_delay_ms` after every reading. Failed reads are retried and do
    /// not count towards `samples`, until the configured retry limit is exceeded.
    /// 
    pub fn calibrate(&mut self, samples: usize, delay: &mut impl DelayNs) -> Result<(), PipelineError> {
        if samples == 0 {
            return Err(PipelineError::ZeroSamples);
        }

        let mut accumulator = OffsetAccumulator::new();
        let mut failures = 0u32;
        while accumulator.count() < samples {
            match self.sample_raw() {
                Ok(()) => {
                    accumulator.add(self.state.raw());
                    delay.delay_ms(self.config.calibration_delay_ms);
                },
                Err(err) => {
                    failures = failures.saturating_add(1);
                    log::trace!("Calibration read failed: {}", err);
                    if self.config.retry_limit.is_exceeded(failures) {
                        log::warn!("Calibration gave up after {} failed reads", failures);
                        return Err(PipelineError::CalibrationTimeout {
                            collected: accumulator.count(),
                            required: samples,
                        });
                    }
                },
            }
        }

        let offsets = accumulator.offsets().ok_or(PipelineError::ZeroSamples)?;
        self.state.set_offsets(offsets);
        log::info!("Calibrated offsets {:?} from {} samples", offsets, samples);
        if failures > 0 {
            log::debug!("Calibration absorbed {} failed reads", failures);
        }
        Ok(())
    }

    /// Converts the latest raw sample into acceleration (m/s^2).
    /// 
    pub fn convert(&mut self) {
        if !self.state.is_calibrated() {
            log::warn!("Converting without calibration, offsets are zero");
        }
        self.state.convert();
    }

    /// Samples and converts until `window` good samples were read and stores their mean as the
    /// block filtered acceleration. Failed reads are retried like during calibration.
    /// 
    pub fn block_filter(&mut self, window: usize) -> Result<(), PipelineError> {
        let mut block = BlockAverage::new(window).ok_or(PipelineError::ZeroSamples)?;

        let mut failures = 0u32;
        while !block.is_full() {
            match self.sample_raw() {
                Ok(()) => {
                    self.convert();
                    block.push(self.state.acceleration());
                },
                Err(err) => {
                    failures = failures.saturating_add(1);
                    log::trace!("Block filter read failed: {}", err);
                    if self.config.retry_limit.is_exceeded(failures) {
                        log::warn!("Block filter gave up after {} failed reads", failures);
                        return Err(PipelineError::FilterTimeout {
                            collected: block.count(),
                            required: window,
                        });
                    }
                },
            }
        }

        let average = block.average().ok_or(PipelineError::ZeroSamples)?;
        self.state.set_block_filtered(average);
        log::trace!("block: {:?}", average);
        Ok(())
    }

    /// Runs the recursive low pass over the block filtered acceleration.
    /// 
    pub fn recursive_filter(&mut self, retention_rate: f64) {
        self.state.recursive_filter(retention_rate);
    }

    /// Integrates the most recent filtered acceleration over `delta_t` milliseconds.
    /// 
    pub fn integrate_velocity(&mut self, delta_t: f64) {
        self.state.integrate_velocity(delta_t);
    }

    /// Runs one full online cycle with the configured window and retention rate: block filter,
    /// recursive filter and velocity integration.
    /// 
    pub fn process(&mut self, delta_t: f64) -> Result<(), PipelineError> {
        self.block_filter(self.config.block_window)?;
        self.recursive_filter(self.config.retention_rate);
        self.integrate_velocity(delta_t);
        Ok(())
    }

    /// Forgets filter and velocity history, calibration and range are kept.
    /// 
    pub fn reset_motion(&mut self) {
        self.state.reset_motion();
    }

    pub fn state(&self) -> &SensorState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SensorState {
        &mut self.state
    }

    pub fn is_calibrated(&self) -> bool {
        self.state.is_calibrated()
    }

    /// In LSB/g.
    pub fn sensitivity(&self) -> u16 {
        self.state.sensitivity()
    }

    pub fn raw(&self, axis: Axis) -> i16 {
        self.state.raw()[axis]
    }

    pub fn offset(&self, axis: Axis) -> f64 {
        self.state.offsets()[axis]
    }

    pub fn acceleration(&self, axis: Axis) -> f64 {
        self.state.acceleration()[axis]
    }

    pub fn block_filtered(&self, axis: Axis) -> f64 {
        self.state.block_filtered()[axis]
    }

    pub fn iir_filtered(&self, axis: Axis) -> f64 {
        self.state.iir_filtered()[axis]
    }

    pub fn recent(&self, axis: Axis) -> f64 {
        self.state.recent()[axis]
    }

    pub fn velocity(&self, axis: Axis) -> f64 {
        self.state.velocity()[axis]
    }

    pub fn velocities(&self) -> Axes<f64> {
        *self.state.velocity()
    }
}
