use crate::utils::{FACTORIALS, MAX_FACTORIAL_ARG, approx_eq, factorial_of, is_integer};

#[test]
fn test_approx_eq_is_strict() {
    assert!(approx_eq(2011.0, 2011.05, 0.1));
    assert!(approx_eq(2011.05, 2011.0, 0.1));
    assert!(!approx_eq(1.0, 1.5, 0.1));
    assert!(!approx_eq(0.0, 0.5, 0.5));
}

#[test]
fn test_approx_eq_rejects_nan() {
    assert!(!approx_eq(f64::NAN, 1.0, 0.1));
    assert!(!approx_eq(1.0, f64::NAN, 0.1));
}

#[test]
fn test_is_integer() {
    assert!(is_integer(3.0, 0.1));
    assert!(is_integer(3.05, 0.1));
    assert!(is_integer(2.95, 0.1));
    assert!(is_integer(-4.0, 0.1));
    assert!(!is_integer(2.5, 0.1));
    assert!(!is_integer(2_f64.sqrt(), 0.1));
    assert!(!is_integer(f64::INFINITY, 0.1));
    assert!(!is_integer(f64::NAN, 0.1));
}

#[test]
fn test_factorial_table() {
    assert_eq!(FACTORIALS.len(), MAX_FACTORIAL_ARG + 1);
    for n in 1..=MAX_FACTORIAL_ARG {
        let expected = FACTORIALS[n - 1] * n as u64;
        assert_eq!(FACTORIALS[n], expected);
    }
}

#[test]
fn test_factorial_of() {
    assert_eq!(factorial_of(0.0), Some(1.0));
    assert_eq!(factorial_of(3.0), Some(6.0));
    assert_eq!(factorial_of(6.02), Some(720.0));
    assert_eq!(factorial_of(20.0), Some(2_432_902_008_176_640_000.0));
    assert_eq!(factorial_of(21.0), None);
    assert_eq!(factorial_of(-1.0), None);
    assert_eq!(factorial_of(f64::NAN), None);
}
