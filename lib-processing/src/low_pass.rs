use math::*;

/// Single pole IIR low pass filter: `out = in * (1 - r) + previous * r`.
/// 
/// Inputs whose integer part is zero are treated as rest noise, both the input and the feedback
/// memory of that axis are forced to zero before filtering.
/// 
#[derive(Debug, Clone, Default)]
pub struct RecursiveLowPass
{
    filtered: Axes<f64>,
    previous: Axes<f64>,
}

impl RecursiveLowPass
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one filter step on `input` with retention rate `rate` (in [0, 1), higher means more
    /// smoothing). Dead zone hits zero the input in place. Returns the axes that hit the dead zone.
    /// 
    pub fn apply(&mut self, input: &mut Axes<f64>, rate: f64) -> Axes<bool> {
        debug_assert!((0.0..1.0).contains(&rate), "retention rate {} outside [0, 1)", rate);

        let mut dead_zone = Axes::splat(false);
        for axis in Axis::ALL {
            if truncates_to_zero(input[axis]) {
                input[axis] = 0.0;
                self.previous[axis] = 0.0;
                dead_zone[axis] = true;
            }

            self.filtered[axis] = input[axis] * (1.0 - rate) + self.previous[axis] * rate;
            self.previous[axis] = self.filtered[axis];
        }
        dead_zone
    }

    pub fn filtered(&self) -> &Axes<f64> {
        &self.filtered
    }

    /// Feedback term used by the next step.
    pub fn feedback(&self) -> &Axes<f64> {
        &self.previous
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
