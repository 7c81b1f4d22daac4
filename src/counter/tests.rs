use crate::counter::{
    CounterError, DigitCounter, MAX_SLOTS, RadixCounter, TriangularCounter,
};

fn count_successful_advances<C: DigitCounter>(counter: &mut C) -> u128 {
    let mut advances = 0;
    while counter.advance() {
        advances += 1;
    }
    advances
}

#[test]
fn fresh_counters_read_zero() {
    let radix = RadixCounter::new(9, 2, 2).expect("valid layout");
    let triangular = TriangularCounter::new(4).expect("valid layout");

    for index in 0..radix.len() {
        assert_eq!(radix.get(index), Ok(0));
    }
    for index in 0..triangular.len() {
        assert_eq!(triangular.get(index), Ok(0));
    }
}

#[test]
fn get_out_of_range_fails() {
    let counter = RadixCounter::new(3, 4, 0).expect("valid layout");
    assert_eq!(
        counter.get(3),
        Err(CounterError::IndexOutOfRange { index: 3, len: 3 })
    );

    let triangular = TriangularCounter::new(2).expect("valid layout");
    assert!(triangular.get(7).is_err());
}

#[test]
fn radix_counter_counts_like_an_odometer() {
    let mut counter = RadixCounter::new(2, 2, 0).expect("valid layout");
    let mut seen = vec![counter.digits().to_vec()];
    while counter.advance() {
        seen.push(counter.digits().to_vec());
    }

    let expected: Vec<Vec<u8>> = vec![
        vec![0, 0],
        vec![1, 0],
        vec![2, 0],
        vec![0, 1],
        vec![1, 1],
        vec![2, 1],
        vec![0, 2],
        vec![1, 2],
        vec![2, 2],
    ];
    assert_eq!(seen, expected);
}

#[test]
fn radix_counter_exhausts_after_all_states() {
    for (len, radix, pinned) in [(4, 4, 0), (5, 2, 2), (5, 2, 1), (3, 1, 0), (2, 0, 0)] {
        let mut counter = RadixCounter::new(len, radix, pinned).expect("valid layout");
        let states = (u128::from(radix) + 1).pow((len - pinned) as u32);
        assert_eq!(counter.state_count(), states);

        for call in 1..=states {
            let advanced = counter.advance();
            assert_eq!(advanced, call != states, "call {call} of {states}");
        }
        assert!(counter.digits().iter().all(|&d| d == 0));
    }
}

#[test]
fn radix_counter_never_touches_pinned_slots() {
    let mut counter = RadixCounter::new(5, 2, 2).expect("valid layout");
    while counter.advance() {
        assert_eq!(counter.get(0), Ok(0));
        assert_eq!(counter.get(1), Ok(0));
        assert!(counter.digits().iter().all(|&d| d <= 2));
    }
}

#[test]
fn fully_pinned_counter_has_one_state() {
    let mut counter = RadixCounter::new(2, 3, 2).expect("valid layout");
    assert_eq!(counter.state_count(), 1);
    assert!(!counter.advance());
}

#[test]
fn triangular_counter_has_factorial_states() {
    for len in 0..=6_usize {
        let mut counter = TriangularCounter::new(len).expect("valid layout");
        let factorial: u128 = (1..=len as u128).product();
        assert_eq!(counter.state_count(), factorial);
        assert_eq!(count_successful_advances(&mut counter), factorial - 1);
        assert!(counter.digits().iter().all(|&d| d == 0));
    }
}

#[test]
fn triangular_digits_stay_below_their_index() {
    let mut counter = TriangularCounter::new(4).expect("valid layout");
    let mut seen = std::collections::HashSet::new();
    loop {
        for (index, &digit) in counter.digits().iter().enumerate() {
            assert!(usize::from(digit) <= index);
        }
        assert!(seen.insert(counter.digits().to_vec()));
        if !counter.advance() {
            break;
        }
    }
    assert_eq!(seen.len(), 24);
}

#[test]
fn capacity_is_enforced() {
    assert_eq!(
        RadixCounter::new(MAX_SLOTS + 1, 1, 0),
        Err(CounterError::CapacityExceeded {
            len: MAX_SLOTS + 1,
            capacity: MAX_SLOTS,
        })
    );
    assert!(TriangularCounter::new(MAX_SLOTS + 1).is_err());
    assert_eq!(
        RadixCounter::new(2, 1, 3),
        Err(CounterError::PinnedBeyondLength { pinned: 3, len: 2 })
    );
}

#[test]
fn set_digits_validates_layout() {
    let mut counter = RadixCounter::new(4, 2, 1).expect("valid layout");
    assert!(counter.set_digits(&[0, 2, 1, 0]).is_ok());
    assert_eq!(counter.digits(), &[0, 2, 1, 0]);

    assert_eq!(
        counter.set_digits(&[0, 3, 0, 0]),
        Err(CounterError::DigitOutOfRange {
            index: 1,
            digit: 3,
            radix: 2,
        })
    );
    assert_eq!(
        counter.set_digits(&[1, 0, 0, 0]),
        Err(CounterError::PinnedDigit { index: 0, digit: 1 })
    );
    assert_eq!(
        counter.set_digits(&[0, 0]),
        Err(CounterError::LengthMismatch {
            expected: 4,
            actual: 2,
        })
    );
    assert_eq!(counter.digits(), &[0, 2, 1, 0]);

    let mut triangular = TriangularCounter::new(3).expect("valid layout");
    assert!(triangular.set_digits(&[0, 1, 2]).is_ok());
    assert!(triangular.set_digits(&[0, 2, 0]).is_err());
}

#[test]
fn reset_returns_to_zero() {
    let mut counter = TriangularCounter::new(3).expect("valid layout");
    counter.advance();
    counter.advance();
    counter.reset();
    assert_eq!(counter.digits(), &[0, 0, 0]);
}
