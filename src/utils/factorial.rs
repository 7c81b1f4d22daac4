/// Largest argument whose factorial fits the lookup table
pub const MAX_FACTORIAL_ARG: usize = 20;

/// `FACTORIALS[n] == n!` for `n` in `0..=MAX_FACTORIAL_ARG`
pub static FACTORIALS: [u64; MAX_FACTORIAL_ARG + 1] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5_040,
    40_320,
    362_880,
    3_628_800,
    39_916_800,
    479_001_600,
    6_227_020_800,
    87_178_291_200,
    1_307_674_368_000,
    20_922_789_888_000,
    355_687_428_096_000,
    6_402_373_705_728_000,
    121_645_100_408_832_000,
    2_432_902_008_176_640_000,
];

/// Factorial of the integer nearest to `value`, read from the table
///
/// Returns `None` when `value` is not finite or rounds outside
/// `0..=MAX_FACTORIAL_ARG`. Callers check integrality beforehand.
#[inline]
pub fn factorial_of(value: f64) -> Option<f64> {
    let rounded = value.round();
    if !(0.0..=MAX_FACTORIAL_ARG as f64).contains(&rounded) {
        return None;
    }
    FACTORIALS.get(rounded as usize).map(|&f| f as f64)
}
