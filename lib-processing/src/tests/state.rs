use math::*;
use crate::*;

#[test]
pub fn zero_sensitivity_is_ignored() {
    let mut state = SensorState::default();
    state.set_sensitivity(64);
    state.set_sensitivity(0);
    assert_eq!(state.sensitivity(), 64);
}

#[test]
pub fn calibration_sample_converts_to_rest() {
    let mut state = SensorState::default();
    let sample = Axes::new(-14, 31, 262);

    let mut acc = OffsetAccumulator::new();
    acc.add(&sample);
    state.set_offsets(acc.offsets().unwrap());
    assert!(state.is_calibrated());

    state.set_raw(sample);
    state.convert();
    assert!(libm::fabs(state.acceleration()[Axis::X]) < 1e-12);
    assert!(libm::fabs(state.acceleration()[Axis::Y]) < 1e-12);
}

#[test]
pub fn recent_mirrors_recursive_filter() {
    let mut state = SensorState::default();
    state.set_block_filtered(Axes::new(4.0, 0.2, -9.0));
    state.recursive_filter(0.25);

    assert_eq!(state.recent(), state.iir_filtered());
    assert!(state.recent().approx_eq(&Axes::new(3.0, 0.0, -6.75), 1e-12));
    assert_eq!(state.block_filtered()[Axis::Y], 0.0);
}

/// Two states fed different data must not influence each other's filter history.
/// 
#[test]
pub fn states_do_not_share_feedback() {
    let mut a = SensorState::default();
    let mut b = SensorState::default();

    for _ in 0..5 {
        a.set_block_filtered(Axes::splat(8.0));
        a.recursive_filter(0.5);
        a.integrate_velocity(10.0);
    }

    b.set_block_filtered(Axes::splat(4.0));
    b.recursive_filter(0.5);
    b.integrate_velocity(10.0);

    assert_eq!(*b.iir_filtered(), Axes::splat(2.0));
    assert!(b.velocity().approx_eq(&Axes::splat(0.01), 1e-12));
    assert!(a.iir_filtered()[Axis::X] > 7.0);
}

#[test]
pub fn reset_motion_keeps_calibration() {
    let mut state = SensorState::default();
    state.set_sensitivity(128);
    state.set_offsets(Axes::new(1.0, 2.0, 3.0));
    state.set_block_filtered(Axes::splat(5.0));
    state.recursive_filter(0.5);
    state.integrate_velocity(10.0);

    state.reset_motion();

    assert!(state.is_calibrated());
    assert_eq!(state.sensitivity(), 128);
    assert_eq!(*state.offsets(), Axes::new(1.0, 2.0, 3.0));
    assert_eq!(*state.iir_feedback(), Axes::zero());
    assert_eq!(*state.velocity(), Axes::zero());
}

#[cfg(feature = "debug")]
#[test]
pub fn debug_counters() {
    let mut state = SensorState::new(StallPolicy::PerAxis, 2);
    for _ in 0..3 {
        state.set_block_filtered(Axes::new(0.5, 3.0, 3.0));
        state.recursive_filter(0.0);
        state.integrate_velocity(10.0);
    }
    assert_eq!(state.dead_zone_hits, Axes::new(3, 0, 0));
    assert_eq!(state.stall_resets, Axes::new(1, 0, 0));
}
