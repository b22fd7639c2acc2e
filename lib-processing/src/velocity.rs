use math::*;

/// Amount of consecutive near zero samples after which the velocity is considered drifted and is
/// reset.
/// 
pub const STALL_LIMIT: u16 = 32;

/// How near zero acceleration samples are counted before the velocity gets reset.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StallPolicy
{
    /// Every axis has its own counter, which is cleared as soon as that axis moves again.
    #[default]
    PerAxis,

    /// A single counter shared by all axes that is only ever cleared by a reset. Any axis at rest
    /// advances it, so resets are spread over whichever axes happen to push it over the limit.
    Shared,
}

/// Integrates filtered acceleration (m/s^2) into velocity (m/s) with the trapezoidal rule.
/// 
#[derive(Debug, Clone)]
pub struct VelocityIntegrator
{
    policy: StallPolicy,
    limit: u16,

    velocity: Axes<f64>,
    previous_velocity: Axes<f64>,
    previous_accel: Axes<f64>,

    stall_counts: Axes<u16>,
    shared_stall_count: u16,
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        Self::new(StallPolicy::default(), STALL_LIMIT)
    }
}

impl VelocityIntegrator
{
    pub fn new(policy: StallPolicy, limit: u16) -> Self {
        VelocityIntegrator {
            policy,
            limit,
            velocity: Axes::zero(),
            previous_velocity: Axes::zero(),
            previous_accel: Axes::zero(),
            stall_counts: Axes::splat(0),
            shared_stall_count: 0,
        }
    }

    /// Compute one integration step for an interval of `delta_t` milliseconds. Returns the axes
    /// that were reset because they stalled.
    /// 
    pub fn integrate(&mut self, accel: &Axes<f64>, delta_t: f64) -> Axes<bool> {
        let dt = delta_t * MILLIS_TO_SECONDS;
        let mut resets = Axes::splat(false);

        for axis in Axis::ALL {
            let current = accel[axis];

            if truncates_to_zero(current) {
                if self.count_stall(axis) {
                    self.velocity[axis] = 0.0;
                    self.previous_velocity[axis] = 0.0;
                    self.previous_accel[axis] = 0.0;
                    resets[axis] = true;
                    log::debug!("velocity on {:?} reset after stall", axis);
                }
            } else if self.policy == StallPolicy::PerAxis {
                self.stall_counts[axis] = 0;
            }

            let previous = self.previous_accel[axis];
            self.velocity[axis] = self.previous_velocity[axis] + (previous + (current - previous) / 2.0) * dt;
            self.previous_velocity[axis] = self.velocity[axis];
            self.previous_accel[axis] = current;
        }
        resets
    }

    /// Advances the stall counter responsible for `axis` and returns true when it went over the
    /// limit, in which case the counter is cleared again.
    /// 
    fn count_stall(&mut self, axis: Axis) -> bool {
        let count = match self.policy {
            StallPolicy::PerAxis => &mut self.stall_counts[axis],
            StallPolicy::Shared => &mut self.shared_stall_count,
        };

        *count = count.saturating_add(1);
        if *count > self.limit {
            *count = 0;
            return true;
        }
        false
    }

    pub fn velocity(&self) -> &Axes<f64> {
        &self.velocity
    }

    pub fn previous_velocity(&self) -> &Axes<f64> {
        &self.previous_velocity
    }

    pub fn previous_accel(&self) -> &Axes<f64> {
        &self.previous_accel
    }

    /// Current value of the stall counter that `axis` advances.
    /// 
    pub fn stall_count(&self, axis: Axis) -> u16 {
        match self.policy {
            StallPolicy::PerAxis => self.stall_counts[axis],
            StallPolicy::Shared => self.shared_stall_count,
        }
    }

    pub fn policy(&self) -> StallPolicy {
        self.policy
    }

    /// Forgets all integration history, the policy and limit are kept.
    /// 
    pub fn reset(&mut self) {
        *self = Self::new(self.policy, self.limit);
    }
}
