use crate::*;

#[test]
fn test_index_by_axis() {
    let mut axes = Axes::new(1.0, 2.0, 3.0);
    assert_eq!(axes[Axis::X], 1.0);
    assert_eq!(axes[Axis::Y], 2.0);
    assert_eq!(axes[Axis::Z], 3.0);

    axes[Axis::Y] = -4.0;
    assert_eq!(axes, Axes::new(1.0, -4.0, 3.0));
}

#[test]
fn test_iter_is_register_order() {
    let axes = Axes::new(7i16, 8, 9);
    let collected: Vec<(Axis, i16)> = axes.iter().collect();
    assert_eq!(collected, vec![(Axis::X, 7), (Axis::Y, 8), (Axis::Z, 9)]);
}

#[test]
fn test_zip_with_arbitrary_values() {
    let raw = Axes::new(10i16, -20, 30);
    let offset = Axes::new(1.0, 2.0, 3.0);
    let result = raw.zip_with(&offset, |r, o| r as f64 - o);
    assert!(result.approx_eq(&Axes::new(9.0, -22.0, 27.0), 1e-12));
}

#[test]
fn test_arithmetic() {
    let mut sum = Axes::zero();
    sum += Axes::new(1.0, 2.0, 3.0);
    sum += Axes::new(1.0, 2.0, 3.0);
    let mean = sum / 2.0;
    assert!(mean.approx_eq(&Axes::new(1.0, 2.0, 3.0), 1e-12));
    assert!((mean * 2.0 - sum).approx_eq(&Axes::zero(), 1e-12));
}
