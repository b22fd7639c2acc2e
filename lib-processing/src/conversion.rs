use math::*;

/// Converts raw readings into m/s^2: `(raw - offset) / sensitivity * g`.
/// 
/// `sensitivity` is the LSB/g scale factor of the configured range and must not be zero.
/// 
pub fn convert(raw: &Axes<i16>, offsets: &Axes<f64>, sensitivity: u16) -> Axes<f64> {
    let scale = sensitivity as f64;
    raw.zip_with(offsets, |raw, offset| (raw as f64 - offset) / scale * EARTH_GRAVITY)
}
