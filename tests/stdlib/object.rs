//! Integration tests for object helpers

use sundry::{Object, Value, object};

fn keys(ks: &[&str]) -> Value {
    Value::from(ks.iter().map(|k| Value::from(*k)).collect::<Vec<_>>())
}

fn maps_within(value: &Value) -> Vec<Object> {
    match value {
        Value::Map(m) => std::iter::once(m.clone())
            .chain(m.values().flat_map(maps_within))
            .collect(),
        Value::Vec(v) => v.iter().flat_map(maps_within).collect(),
        _ => Vec::new(),
    }
}

#[test]
fn deep_clone_round_trip() {
    let original = Value::map([
        ("name", Value::from("x")),
        (
            "inner",
            Value::map([("list", Value::from(vec![Value::map([("deep", 1)])]))]),
        ),
    ]);
    let clone = object::deep_clone(&original);
    assert_eq!(clone, original);

    let before = maps_within(&original);
    let after = maps_within(&clone);
    assert_eq!(before.len(), 3);
    for (a, b) in before.iter().zip(&after) {
        assert_eq!(a, b);
        assert!(!a.ptr_eq(b));
    }

    // Changing the clone leaves the original alone.
    let changed = match &clone {
        Value::Map(m) => Value::Map(m.insert("name".into(), Value::from("y"))),
        other => other.clone(),
    };
    assert_ne!(changed, original);
    assert_eq!(original.as_map().and_then(|m| m.get(&"name".into())), Some(&Value::from("x")));
}

#[test]
fn merge_examples() {
    assert_eq!(
        object::merge_objects(&Value::map([("a", 1)]), &Value::map([("b", 2)])),
        Value::map([("a", 1), ("b", 2)])
    );

    let a = Value::map([
        ("cfg", Value::map([("x", Value::from(1)), ("tags", Value::from(vec!["a", "b"]))])),
    ]);
    let b = Value::map([
        ("cfg", Value::map([("y", Value::from(2)), ("tags", Value::from(vec!["c"]))])),
    ]);
    assert_eq!(
        object::merge_objects(&a, &b),
        Value::map([(
            "cfg",
            Value::map([
                ("x", Value::from(1)),
                ("tags", Value::from(vec!["c"])),
                ("y", Value::from(2)),
            ])
        )])
    );
}

#[test]
fn merge_treats_sequences_as_indexed_objects() {
    assert_eq!(
        object::merge_objects(&Value::map([("a", 1)]), &Value::from(vec![5, 6])),
        Value::map([("a", 1), ("0", 5), ("1", 6)])
    );
    assert_eq!(
        object::merge_objects(&Value::from(vec![1, 2]), &Value::from(vec![9])),
        Value::from(vec![9, 2])
    );
}

#[test]
fn is_empty_examples() {
    assert!(object::is_empty(&Value::map(Vec::<(&str, Value)>::new())));
    assert!(!object::is_empty(&Value::map([("a", 1)])));
    assert!(object::is_empty(&Value::Nil));
}

#[test]
fn pick_and_omit_examples() {
    let obj = Value::map([("a", 1), ("b", 2)]);
    assert_eq!(Value::Map(object::pick(&obj, &keys(&["a"]))), Value::map([("a", 1)]));
    assert_eq!(object::omit(&obj, &keys(&["b"])), Value::map([("a", 1)]));
}

#[test]
fn invert_example() {
    let obj = Value::map([("a", 1), ("b", 2)]);
    assert_eq!(Value::Map(object::invert(&obj)), Value::map([("1", "a"), ("2", "b")]));
}

#[test]
fn non_objects_fall_back() {
    let n = Value::from(5);
    assert!(object::pick(&n, &keys(&["a"])).is_empty());
    assert_eq!(object::omit(&n, &keys(&["a"])), Value::Map(Object::new()));
    assert!(object::invert(&n).is_empty());
    assert_eq!(object::deep_clone(&n), n);
}
