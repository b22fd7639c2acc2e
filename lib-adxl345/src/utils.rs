use math::Axes;

/// Pairs a 6 byte data register burst into the three axis readings, every axis is stored low byte
/// first.
/// 
#[inline]
pub fn axes_from_le_bytes(data: &[u8; 6]) -> Axes<i16> {
    Axes::new(
        i16::from_le_bytes([data[0], data[1]]),
        i16::from_le_bytes([data[2], data[3]]),
        i16::from_le_bytes([data[4], data[5]]),
    )
}
