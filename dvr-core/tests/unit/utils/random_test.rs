use super::*;

#[test]
fn can_reproduce_seeded_sequences() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    let first_values: Vec<i64> = (0..10).map(|_| first.uniform_int(-100, 100)).collect();
    let second_values: Vec<i64> = (0..10).map(|_| second.uniform_int(-100, 100)).collect();

    assert_eq!(first_values, second_values);
    assert_eq!(first.get_rng().next_u64(), second.get_rng().next_u64());
}

#[test]
fn can_stay_within_bounds() {
    let random = DefaultRandom::new_with_seed(7);

    (0..1000).for_each(|_| {
        assert!((-5..=5).contains(&random.uniform_int(-5, 5)));

        let value = random.uniform_real(0., 1.);
        assert!((0. ..1.).contains(&value));
    });
}

#[test]
fn can_return_min_for_degenerate_range() {
    let random = DefaultRandom::new_with_seed(7);

    assert_eq!(random.uniform_int(3, 3), 3);
    assert_eq!(random.uniform_real(2., 2.), 2.);
}

#[test]
fn can_test_probability_bounds() {
    let random = DefaultRandom::new_with_seed(7);

    (0..100).for_each(|_| {
        assert!(!random.is_hit(0.));
        assert!(random.is_hit(1.));
    });
}
