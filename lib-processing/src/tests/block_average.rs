use math::*;
use crate::*;

#[test]
pub fn zero_window_is_rejected() {
    assert!(BlockAverage::new(0).is_none());
}

#[test]
pub fn average_of_four() {
    let mut block = BlockAverage::new(4).unwrap();
    for (i, v) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
        let full = block.push(&Axes::new(*v, -*v, 0.0));
        assert_eq!(full, i == 3);
    }

    let average = block.average().unwrap();
    assert_eq!(average[Axis::X], 2.5);
    assert_eq!(average[Axis::Y], -2.5);
    assert_eq!(average[Axis::Z], 0.0);
}

#[test]
pub fn full_block_ignores_extra_samples() {
    let mut block = BlockAverage::new(2).unwrap();
    block.push(&Axes::splat(1.0));
    block.push(&Axes::splat(3.0));
    assert!(block.push(&Axes::splat(100.0)));

    assert_eq!(block.count(), 2);
    assert_eq!(block.average().unwrap(), Axes::splat(2.0));
}

#[test]
pub fn empty_block_has_no_average() {
    let block = BlockAverage::new(8).unwrap();
    assert!(block.average().is_none());
    assert!(!block.is_full());
}
