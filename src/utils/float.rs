/// Whether `a` and `b` differ by strictly less than `epsilon`
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    let delta = a - b;
    -epsilon < delta && delta < epsilon
}

/// Whether `value` lies within `epsilon` of the nearest integer
///
/// Non-finite values are never integers.
#[inline]
pub fn is_integer(value: f64, epsilon: f64) -> bool {
    value.is_finite() && approx_eq(value, value.round(), epsilon)
}
