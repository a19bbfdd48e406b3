//! Integration tests for math helpers

use proptest::prelude::*;
use sundry::random::seeded;
use sundry::{Value, math};

fn n(x: f64) -> Value {
    Value::from(x)
}

fn trial_division(k: u32) -> bool {
    k >= 2 && (2..k).all(|d| k % d != 0)
}

#[test]
fn arithmetic_basics() {
    assert_eq!(math::add(&n(2.0), &n(3.0)), 5.0);
    assert_eq!(math::subtract(&n(2.0), &n(3.0)), -1.0);
    assert!(math::add(&n(1.0), &Value::from("1")).is_nan());
    assert_eq!(math::clamp(&n(15.0), &n(0.0), &n(10.0)), 10.0);
    assert_eq!(math::clamp(&n(-3.0), &n(0.0), &n(10.0)), 0.0);
    assert_eq!(math::round_to(&n(3.14159), &n(2.0)), 3.14);
    assert_eq!(math::round_to(&n(2.5), &n(0.0)), 3.0);
    assert_eq!(math::round_to(&n(-2.5), &n(0.0)), -2.0);
}

#[test]
fn number_theory_examples() {
    assert_eq!(math::gcd(&n(48.0), &n(18.0)), 6.0);
    assert_eq!(math::gcd(&n(-48.0), &n(18.0)), 6.0);
    assert_eq!(math::lcm(&n(4.0), &n(6.0)), 12.0);
    assert!(math::lcm(&n(0.0), &n(0.0)).is_nan());
    assert!(math::gcd(&n(f64::INFINITY), &n(2.0)).is_nan());
    assert!(math::is_prime(&n(29.0)));
    assert!(!math::is_prime(&n(30.0)));
    assert!(!math::is_prime(&n(7.5)));
    assert!(!math::is_prime(&Value::from("7")));
}

#[test]
fn factorial_and_fibonacci() {
    assert_eq!(math::factorial(&n(5.0)), 120.0);
    assert_eq!(math::factorial(&n(0.0)), 1.0);
    assert!(math::factorial(&n(-1.0)).is_nan());
    assert_eq!(math::factorial(&n(171.0)), f64::INFINITY);

    assert_eq!(math::fibonacci(&n(6.0)), 8.0);
    assert_eq!(math::fibonacci(&n(0.0)), 0.0);
    assert_eq!(math::fibonacci(&n(1.0)), 1.0);
    assert!(math::fibonacci(&n(-2.0)).is_nan());
}

#[test]
fn aggregates() {
    let xs = Value::from(vec![1, 2, 3, 4]);
    assert_eq!(math::sum(&xs), 10.0);
    assert_eq!(math::average(&xs), 2.5);
    assert_eq!(math::sum(&Value::from(Vec::<Value>::new())), 0.0);
    assert!(math::average(&Value::from(Vec::<Value>::new())).is_nan());
    assert!(math::sum(&Value::from(vec![Value::from(1), Value::from("2")])).is_nan());
}

#[test]
fn random_int_is_seeded_and_bounded() {
    let mut a = seeded(42);
    let mut b = seeded(42);
    for _ in 0..200 {
        let x = math::random_int(&n(1.0), &n(6.0), &mut a);
        assert_eq!(x, math::random_int(&n(1.0), &n(6.0), &mut b));
        assert!((1.0..=6.0).contains(&x));
        assert_eq!(x.fract(), 0.0);
    }
}

#[test]
fn is_prime_matches_trial_division() {
    for k in 0..=1000u32 {
        assert_eq!(math::is_prime(&Value::from(k)), trial_division(k), "k = {k}");
    }
}

proptest! {
    #[test]
    fn gcd_symmetric_and_non_negative(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        let (va, vb) = (Value::from(a), Value::from(b));
        let g = math::gcd(&va, &vb);
        prop_assert_eq!(g, math::gcd(&vb, &va));
        prop_assert!(g >= 0.0);
    }

    #[test]
    fn lcm_times_gcd_is_product(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        prop_assume!(a != 0 || b != 0);
        let (va, vb) = (Value::from(a), Value::from(b));
        let product = (f64::from(a) * f64::from(b)).abs();
        prop_assert_eq!(math::lcm(&va, &vb) * math::gcd(&va, &vb), product);
    }
}
