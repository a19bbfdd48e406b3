//! Integration tests for array helpers

use proptest::prelude::*;
use sundry::random::seeded;
use sundry::{LtVec, Value, array};

fn ints(xs: &[i32]) -> Value {
    Value::from(xs.to_vec())
}

fn lt(xs: &[i32]) -> LtVec<Value> {
    xs.iter().map(|x| Value::from(*x)).collect()
}

#[test]
fn unique_example() {
    assert_eq!(array::unique(&ints(&[1, 2, 2, 3])), lt(&[1, 2, 3]));
}

#[test]
fn flatten_examples() {
    let nested = Value::from(vec![Value::from(1), Value::from(vec![Value::from(2), ints(&[3])])]);
    assert_eq!(array::flatten_deep(&nested), lt(&[1, 2, 3]));
    assert_eq!(array::flatten(&nested, f64::INFINITY), lt(&[1, 2, 3]));
    assert_eq!(
        array::flatten(&nested, 1.0),
        LtVec::from(vec![Value::from(1), Value::from(2), ints(&[3])])
    );
}

#[test]
fn chunk_examples() {
    assert_eq!(
        array::chunk(&ints(&[1, 2, 3, 4]), &Value::from(2)),
        LtVec::from(vec![ints(&[1, 2]), ints(&[3, 4])])
    );
    assert_eq!(
        array::chunk(&ints(&[1, 2, 3]), &Value::from(2)),
        LtVec::from(vec![ints(&[1, 2]), ints(&[3])])
    );
}

#[test]
fn chunk_fractional_sizes() {
    assert_eq!(
        array::chunk(&ints(&[1, 2, 3, 4, 5]), &Value::from(2.5)),
        LtVec::from(vec![ints(&[1, 2]), ints(&[3, 4, 5])])
    );
    assert_eq!(
        array::chunk(&ints(&[1, 2]), &Value::from(0.5)),
        LtVec::from(vec![ints(&[]), ints(&[1]), ints(&[]), ints(&[2])])
    );
}

#[test]
fn compact_example() {
    let arr = Value::from(vec![
        Value::from(0),
        Value::from(1),
        Value::Bool(false),
        Value::from(2),
        Value::from(""),
        Value::from(3),
    ]);
    assert_eq!(array::compact(&arr), lt(&[1, 2, 3]));
}

#[test]
fn shuffle_with_fixed_seed_is_stable() {
    let arr = ints(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    let first = array::shuffle(&arr, &mut seeded(2024));
    let second = array::shuffle(&arr, &mut seeded(2024));
    assert_eq!(first, second);
    assert_eq!(first, lt(&[4, 1, 10, 9, 7, 3, 5, 6, 2, 8]));
    assert_ne!(first, array::shuffle(&arr, &mut seeded(2025)));
}

#[test]
fn non_sequences_fall_back() {
    let s = Value::from("not a list");
    assert!(array::unique(&s).is_empty());
    assert!(array::flatten_deep(&s).is_empty());
    assert!(array::chunk(&s, &Value::from(2)).is_empty());
    assert!(array::compact(&s).is_empty());
    assert!(array::shuffle(&s, &mut seeded(1)).is_empty());
    assert!(array::max(&s).is_nan());
    assert!(array::min(&s).is_nan());
}

proptest! {
    #[test]
    fn unique_has_no_duplicates_and_keeps_first_order(xs in prop::collection::vec(0i32..20, 0..40)) {
        let out: Vec<f64> = array::unique(&ints(&xs)).iter().filter_map(Value::as_number).collect();

        let mut expected = Vec::new();
        for x in &xs {
            let x = f64::from(*x);
            if !expected.contains(&x) {
                expected.push(x);
            }
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn chunks_concatenate_back(xs in prop::collection::vec(any::<i32>(), 0..40), size in 1i32..8) {
        let chunks = array::chunk(&ints(&xs), &Value::from(size));
        let size = usize::try_from(size).unwrap_or(1);
        for (i, c) in chunks.iter().enumerate() {
            let len = c.as_vec().map_or(0, LtVec::len);
            if i + 1 < chunks.len() {
                prop_assert_eq!(len, size);
            } else {
                prop_assert!(len >= 1 && len <= size);
            }
        }
        prop_assert_eq!(array::flatten(&Value::from(chunks), 1.0), lt(&xs));
    }

    #[test]
    fn shuffle_preserves_elements(xs in prop::collection::vec(any::<i32>(), 0..40), seed in any::<u64>()) {
        let mut shuffled: Vec<i64> = array::shuffle(&ints(&xs), &mut seeded(seed))
            .iter()
            .filter_map(Value::as_number)
            .map(|x| x as i64)
            .collect();
        let mut original: Vec<i64> = xs.iter().map(|x| i64::from(*x)).collect();
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }
}
