//! Tests for range mapping and argument validation

use lagrand_core::{RandomEngine, RandomError};
use proptest::prelude::*;

const DRAWS: usize = 10_000;

#[test]
fn test_int_range_containment() {
    let engine = RandomEngine::with_seed(12345);
    for _ in 0..DRAWS {
        let val = engine.next_int_in(-10, 10).unwrap();
        assert!((-10..10).contains(&val), "Value {} out of range [-10, 10)", val);
    }
}

#[test]
fn test_int_range_reaches_both_ends() {
    let engine = RandomEngine::with_seed(12345);
    let values: Vec<i32> = engine.ints_in(DRAWS, 0, 4).unwrap().collect();
    assert!(values.contains(&0));
    assert!(values.contains(&3));
    assert!(!values.contains(&4));
}

#[test]
fn test_byte_range_inclusive() {
    let engine = RandomEngine::with_seed(5);
    let mut buffer = vec![0u8; DRAWS];
    engine.fill_bytes_in(&mut buffer, 10, 12).unwrap();
    assert!(buffer.iter().all(|b| (10..=12).contains(b)));
    assert!(buffer.contains(&10));
    assert!(buffer.contains(&12));
}

#[test]
fn test_float_and_double_containment() {
    let engine = RandomEngine::with_seed(99999);
    for _ in 0..DRAWS {
        let f = engine.next_float_in(-1.5, 2.5).unwrap();
        assert!((-1.5..=2.5).contains(&f), "float {} out of [-1.5, 2.5]", f);
        let d = engine.next_double_in(1e-9, 3e-9).unwrap();
        assert!((1e-9..=3e-9).contains(&d), "double {} out of [1e-9, 3e-9]", d);
        let unit = engine.next_double();
        assert!((0.0..=1.0).contains(&unit));
    }
}

#[test]
fn test_degenerate_range_draws_no_sample() {
    let engine = RandomEngine::with_seed(3);
    let before = engine.snapshot();
    assert_eq!(engine.next_int_in(5, 6).unwrap(), 5);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_bool_is_fair() {
    let engine = RandomEngine::with_seed(99);
    let trues = engine.bools(100_000).unwrap().filter(|&b| b).count();
    let rate = trues as f64 / 100_000.0;
    assert!((rate - 0.5).abs() < 0.01, "true rate {} not near 0.5", rate);
}

#[test]
fn test_odds_one_in_two() {
    let engine = RandomEngine::with_seed(2024);
    let trues = engine.odds(100_000, 1, 2).unwrap().filter(|&b| b).count();
    let rate = trues as f64 / 100_000.0;
    assert!((rate - 0.5).abs() < 0.01, "true rate {} not near 0.5", rate);
}

#[test]
fn test_percent_rate() {
    let engine = RandomEngine::with_seed(8);
    let trues = engine.percents(100_000, 25).unwrap().filter(|&b| b).count();
    let rate = trues as f64 / 100_000.0;
    assert!((rate - 0.25).abs() < 0.01, "true rate {} not near 0.25", rate);
}

#[test]
fn test_probability_boundaries() {
    let engine = RandomEngine::with_seed(1);
    let mut buffer = [false; 1000];

    engine.fill_probability(&mut buffer, 0.0).unwrap();
    assert!(buffer.iter().all(|&b| !b));

    engine.fill_probability(&mut buffer, 1.0).unwrap();
    assert!(buffer.iter().all(|&b| b));
}

#[test]
fn test_empty_range_fails() {
    let engine = RandomEngine::with_seed(1);
    assert_eq!(
        engine.next_int_in(5, 5),
        Err(RandomError::InvalidRange {
            parameter: "min",
            min: 5.0,
            max: 5.0,
            inclusive: false,
        })
    );
}

#[test]
fn test_inverted_inclusive_ranges_fail() {
    let engine = RandomEngine::with_seed(1);
    assert!(matches!(
        engine.next_byte_in(9, 8),
        Err(RandomError::InvalidRange { inclusive: true, .. })
    ));
    assert!(matches!(
        engine.next_double_in(1.0, 0.0),
        Err(RandomError::InvalidRange { inclusive: true, .. })
    ));
    assert!(matches!(
        engine.floats_in(4, 1.0, 0.0),
        Err(RandomError::InvalidRange { inclusive: true, .. })
    ));
}

#[test]
fn test_empty_buffer_fails() {
    let engine = RandomEngine::with_seed(1);
    let mut empty: [u8; 0] = [];
    assert_eq!(
        engine.fill_bytes(&mut empty),
        Err(RandomError::EmptyCollection { parameter: "buffer" })
    );
}

#[test]
fn test_output_checked_before_range() {
    let engine = RandomEngine::with_seed(1);
    let mut ints: [i32; 0] = [];
    let mut flags: [bool; 0] = [];
    assert_eq!(
        engine.fill_ints_in(&mut ints, 5, 5),
        Err(RandomError::EmptyCollection { parameter: "buffer" })
    );
    assert_eq!(
        engine.fill_odds(&mut flags, 1, 0),
        Err(RandomError::EmptyCollection { parameter: "buffer" })
    );
    assert!(matches!(
        engine.ints_in(0, 5, 5),
        Err(RandomError::InvalidCount { count: 0, .. })
    ));
}

#[test]
fn test_zero_count_fails() {
    let engine = RandomEngine::with_seed(1);
    assert!(matches!(
        engine.ints(0),
        Err(RandomError::InvalidCount { parameter: "count", count: 0 })
    ));
    assert!(matches!(
        engine.bools(0),
        Err(RandomError::InvalidCount { .. })
    ));
}

#[test]
fn test_odds_zero_denominator_fails() {
    let engine = RandomEngine::with_seed(1);
    assert_eq!(
        engine.next_odds(1, 0),
        Err(RandomError::DivisionByZero { numerator: 1 })
    );
    assert!(matches!(
        engine.fill_odds(&mut [false; 3], 1, 0),
        Err(RandomError::DivisionByZero { .. })
    ));
}

#[test]
fn test_failed_calls_leave_state_unchanged() {
    let engine = RandomEngine::with_seed("untouched");
    let before = engine.snapshot();

    let _ = engine.next_int_in(5, 5);
    let _ = engine.next_odds(1, 0);
    let _ = engine.fill_doubles(&mut []);
    let _ = engine.doubles_in(0, 0.0, 1.0);

    assert_eq!(engine.snapshot(), before);
}

proptest! {
    #[test]
    fn prop_int_range_containment(
        seed in any::<i32>(),
        min in any::<i32>(),
        width in 1i64..=u32::MAX as i64,
    ) {
        let max = (min as i64 + width).min(i32::MAX as i64) as i32;
        prop_assume!(min < max);
        let engine = RandomEngine::with_seed(seed);
        for _ in 0..100 {
            let val = engine.next_int_in(min, max).unwrap();
            prop_assert!(val >= min && val < max, "{} not in [{}, {})", val, min, max);
        }
    }

    #[test]
    fn prop_byte_range_containment(seed in any::<i32>(), a in any::<u8>(), b in any::<u8>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let engine = RandomEngine::with_seed(seed);
        for val in engine.bytes_in(100, min, max).unwrap() {
            prop_assert!(val >= min && val <= max);
        }
    }

    #[test]
    fn prop_double_range_containment(
        seed in any::<i32>(),
        a in -1e12f64..1e12,
        b in -1e12f64..1e12,
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let engine = RandomEngine::with_seed(seed);
        let mut buffer = [0.0f64; 100];
        engine.fill_doubles_in(&mut buffer, min, max).unwrap();
        for val in buffer {
            prop_assert!(val >= min && val <= max);
        }
    }

    #[test]
    fn prop_float_range_containment(seed in any::<i32>(), a in -1e6f32..1e6, b in -1e6f32..1e6) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let engine = RandomEngine::with_seed(seed);
        for val in engine.floats_in(100, min, max).unwrap() {
            prop_assert!(val >= min && val <= max);
        }
    }
}
