use math::*;
use cfg_if::cfg_if;
use crate::*;

/// LSB/g of the sensor's most sensitive (2g) range, used until a range has been selected.
/// 
pub const DEFAULT_SENSITIVITY: u16 = 256;

/// Complete per-device state of the measurement pipeline. Every stage reads its input from and
/// writes its output to this record, including the feedback memory of the filters, so two devices
/// never share history.
/// 
#[derive(Debug, Clone)]
pub struct SensorState
{
    /// In LSB/g; scale factor of the configured measurement range, never zero.
    sensitivity: u16,

    /// Latest raw register values.
    raw: Axes<i16>,

    /// Zero-g offsets in LSB, only meaningful once `calibrated` is set.
    offsets: Axes<f64>,
    calibrated: bool,

    /// In m/s^2; offset and scale corrected latest sample.
    acceleration: Axes<f64>,

    /// In m/s^2; output of the block averaging filter.
    block_filtered: Axes<f64>,

    low_pass: RecursiveLowPass,

    /// In m/s^2; most recent filtered acceleration, this is what velocity is integrated from.
    recent: Axes<f64>,

    integrator: VelocityIntegrator,

    /// Amount of recursive filter steps per axis that landed in the dead zone.
    #[cfg(feature = "debug")]
    pub dead_zone_hits: Axes<u32>,

    /// Amount of stall triggered velocity resets per axis.
    #[cfg(feature = "debug")]
    pub stall_resets: Axes<u32>,
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new(StallPolicy::default(), STALL_LIMIT)
    }
}

impl SensorState
{
    pub fn new(stall_policy: StallPolicy, stall_limit: u16) -> Self {
        SensorState {
            sensitivity: DEFAULT_SENSITIVITY,
            raw: Axes::splat(0),
            offsets: Axes::zero(),
            calibrated: false,
            acceleration: Axes::zero(),
            block_filtered: Axes::zero(),
            low_pass: RecursiveLowPass::new(),
            recent: Axes::zero(),
            integrator: VelocityIntegrator::new(stall_policy, stall_limit),
            #[cfg(feature = "debug")]
            dead_zone_hits: Axes::splat(0),
            #[cfg(feature = "debug")]
            stall_resets: Axes::splat(0),
        }
    }

    #[inline]
    pub fn sensitivity(&self) -> u16 {
        self.sensitivity
    }

    /// Sets the LSB/g scale factor. A zero factor is rejected and the previous one is kept.
    /// 
    pub fn set_sensitivity(&mut self, lsb_per_g: u16) {
        if lsb_per_g == 0 {
            log::warn!("Ignoring zero sensitivity, keeping {} LSB/g", self.sensitivity);
            return;
        }
        self.sensitivity = lsb_per_g;
    }

    #[inline]
    pub fn raw(&self) -> &Axes<i16> {
        &self.raw
    }

    pub fn set_raw(&mut self, raw: Axes<i16>) {
        self.raw = raw;
    }

    #[inline]
    pub fn offsets(&self) -> &Axes<f64> {
        &self.offsets
    }

    /// Stores the zero-g offsets and marks the state as calibrated.
    /// 
    pub fn set_offsets(&mut self, offsets: Axes<f64>) {
        self.offsets = offsets;
        self.calibrated = true;
    }

    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Converts the latest raw sample into acceleration.
    /// 
    pub fn convert(&mut self) {
        self.acceleration = convert(&self.raw, &self.offsets, self.sensitivity);
    }

    #[inline]
    pub fn acceleration(&self) -> &Axes<f64> {
        &self.acceleration
    }

    pub fn set_block_filtered(&mut self, block_filtered: Axes<f64>) {
        self.block_filtered = block_filtered;
    }

    #[inline]
    pub fn block_filtered(&self) -> &Axes<f64> {
        &self.block_filtered
    }

    /// Runs the recursive low pass over the block filtered values and publishes the result as the
    /// most recent acceleration.
    /// 
    pub fn recursive_filter(&mut self, retention_rate: f64) {
        let dead_zone = self.low_pass.apply(&mut self.block_filtered, retention_rate);
        self.recent = *self.low_pass.filtered();

        cfg_if!{ if #[cfg(feature = "debug")] {
            for (axis, hit) in dead_zone.iter() {
                if hit {
                    self.dead_zone_hits[axis] += 1;
                }
            }
        } else {
            let _ = dead_zone;
        }}

        log::trace!("iir: {:?}", self.recent);
    }

    #[inline]
    pub fn iir_filtered(&self) -> &Axes<f64> {
        self.low_pass.filtered()
    }

    /// Feedback memory of the recursive filter.
    pub fn iir_feedback(&self) -> &Axes<f64> {
        self.low_pass.feedback()
    }

    #[inline]
    pub fn recent(&self) -> &Axes<f64> {
        &self.recent
    }

    /// Integrates the most recent acceleration over `delta_t` milliseconds.
    /// 
    pub fn integrate_velocity(&mut self, delta_t: f64) {
        let resets = self.integrator.integrate(&self.recent, delta_t);

        cfg_if!{ if #[cfg(feature = "debug")] {
            for (axis, reset) in resets.iter() {
                if reset {
                    self.stall_resets[axis] += 1;
                }
            }
        } else {
            let _ = resets;
        }}

        log::trace!("velocity: {:?}", self.integrator.velocity());
    }

    #[inline]
    pub fn velocity(&self) -> &Axes<f64> {
        self.integrator.velocity()
    }

    /// Clears filter and integrator memory while keeping calibration and range.
    /// 
    pub fn reset_motion(&mut self) {
        self.acceleration = Axes::zero();
        self.block_filtered = Axes::zero();
        self.low_pass.reset();
        self.recent = Axes::zero();
        self.integrator.reset();
    }
}
