
/// Truncates the value toward zero and returns the integer part, i.e. what a C style `(int)x` cast
/// would give. Values outside the `i32` range saturate.
/// 
#[inline]
pub fn truncate(value: f64) -> i32 {
    libm::trunc(value) as i32
}

/// Is the integer part of the value zero? This holds for every value in the open interval (-1, 1).
/// 
#[inline]
pub fn truncates_to_zero(value: f64) -> bool {
    truncate(value) == 0
}

/// Approximate equality check with a given tolerance.
/// 
#[inline]
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    libm::fabs(a - b) <= tol
}
