//! Mapping manipulation and deep copies.
//!
//! Sequences count as objects whose keys are their indices (`"0"`, `"1"`,
//! ...) and dates as objects with no keys. Every helper that returns a
//! container returns freshly built containers all the way down, so the
//! result never shares structure with its inputs.
//!
//! Values are immutable and reference counted, so a cyclic graph cannot be
//! constructed and deep copies always terminate.

use std::sync::Arc;

use sundry_foundation::{Error, LtVec, Object, Result, Type, Value};

use crate::fallback::or_sentinel;

/// Object: deep-clone - copy every nested sequence and mapping
///
/// Scalars and dates are returned as-is; they carry no shared structure.
#[must_use]
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Vec(items) => Value::Vec(clone_vec(items)),
        Value::Map(map) => Value::Map(clone_map(map)),
        other => other.clone(),
    }
}

fn clone_vec(items: &LtVec<Value>) -> LtVec<Value> {
    items.iter().map(deep_clone).collect()
}

fn clone_map(map: &Object) -> Object {
    map.iter().map(|(k, v)| (k.clone(), deep_clone(v))).collect()
}

/// Object: merge - deep clone of `a` with `b`'s own keys merged in
///
/// Where both sides hold a mapping under the same key the merge recurses.
/// Any other value from `b`, nested sequences included, replaces `a`'s
/// wholesale.
///
/// At the top level a sequence contributes its indices as keys: a sequence
/// `b` merges into a mapping as `"0"`, `"1"`, ..., and a sequence `a` stays a
/// sequence that `b` overwrites by index. A scalar `b` contributes nothing;
/// a scalar `a` is treated as an empty mapping.
///
/// `merge_objects([1, 2], [9]) = [9, 2]`.
#[must_use]
pub fn merge_objects(a: &Value, b: &Value) -> Value {
    let overlay = own_entries(b);
    match a {
        Value::Vec(items) => Value::Vec(merge_into_vec(clone_vec(items), overlay)),
        Value::Map(map) => Value::Map(merge_entries(clone_map(map), overlay)),
        _ => Value::Map(merge_entries(Object::new(), overlay)),
    }
}

/// Widest run of undefined holes a merge may open past the end of a sequence.
const MAX_INDEX_GAP: usize = 1 << 16;

fn merge_entries(base: Object, overlay: Vec<(Arc<str>, &Value)>) -> Object {
    overlay.into_iter().fold(base, |acc, (key, incoming)| {
        let merged = merge_slot(acc.get(&key), incoming);
        acc.insert(key, merged)
    })
}

/// Index keys overwrite or extend the sequence; other keys have no slot and
/// are dropped.
fn merge_into_vec(base: LtVec<Value>, overlay: Vec<(Arc<str>, &Value)>) -> LtVec<Value> {
    let mut items: Vec<Value> = base.into_iter().collect();
    for (key, incoming) in overlay {
        let Some(i) = index_of(&key) else {
            continue;
        };
        if i >= items.len() {
            if i - items.len() > MAX_INDEX_GAP {
                continue;
            }
            items.resize(i + 1, Value::Undefined);
        }
        let merged = merge_slot(items.get(i), incoming);
        items[i] = merged;
    }
    LtVec::from(items)
}

fn merge_slot(existing: Option<&Value>, incoming: &Value) -> Value {
    match (existing, incoming) {
        (Some(Value::Map(existing)), Value::Map(_)) => {
            Value::Map(merge_entries(existing.clone(), own_entries(incoming)))
        }
        _ => deep_clone(incoming),
    }
}

/// Object: empty? - true unless a mapping or sequence with at least one key
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Map(map) => map.is_empty(),
        Value::Vec(items) => items.is_empty(),
        _ => true,
    }
}

/// Object: pick - mapping of the requested keys that exist in `obj`
///
/// Keys are taken from the sequence `keys` after string coercion. Missing
/// keys are skipped. Values are deep clones.
///
/// `pick({a: 1, b: 2}, ["a"]) = {a: 1}`.
#[must_use]
pub fn pick(obj: &Value, keys: &Value) -> Object {
    let result = expect_object(obj).and_then(|()| {
        let wanted = keys.expect_vec()?;
        Ok(wanted
            .iter()
            .filter_map(|key| {
                let key: Arc<str> = key.to_key().into();
                lookup(obj, &key).map(|v| (key, deep_clone(v)))
            })
            .collect())
    });
    or_sentinel("pick", result, Object::new)
}

/// Object: omit - deep clone of `obj` without the listed keys
///
/// Omitted sequence indices become undefined holes; the sequence keeps its
/// length. A non-sequence `keys` omits nothing.
///
/// `omit({a: 1, b: 2}, ["b"]) = {a: 1}`.
#[must_use]
pub fn omit(obj: &Value, keys: &Value) -> Value {
    let result = expect_object(obj).map(|()| {
        let clone = deep_clone(obj);
        let Some(unwanted) = keys.as_vec() else {
            return clone;
        };
        unwanted.iter().fold(clone, |acc, key| remove_key(acc, &key.to_key()))
    });
    or_sentinel("omit", result, || Value::Map(Object::new()))
}

fn remove_key(value: Value, key: &str) -> Value {
    match value {
        Value::Map(map) => Value::Map(map.remove(&Arc::from(key))),
        Value::Vec(items) => {
            let updated = index_of(key).and_then(|i| items.update(i, Value::Undefined));
            Value::Vec(updated.unwrap_or(items))
        }
        other => other,
    }
}

/// Object: invert - swap keys and values
///
/// Values are converted to keys by string coercion; null and undefined
/// values are skipped. On duplicate values the last key wins, at the
/// position where the value first appeared.
///
/// `invert({a: 1, b: 2}) = {"1": "a", "2": "b"}`.
#[must_use]
pub fn invert(obj: &Value) -> Object {
    let result = expect_object(obj).map(|()| {
        own_entries(obj)
            .into_iter()
            .filter(|(_, v)| !v.is_nullish())
            .fold(Object::new(), |acc, (k, v)| {
                acc.insert(v.to_key().into(), Value::String(k))
            })
    });
    or_sentinel("invert", result, Object::new)
}

// =============================================================================
// Key access
// =============================================================================

fn expect_object(value: &Value) -> Result<()> {
    if value.value_type().is_object_like() {
        Ok(())
    } else {
        Err(Error::type_mismatch(Type::Object, value.value_type()))
    }
}

/// Own key/value pairs in key order.
fn own_entries(value: &Value) -> Vec<(Arc<str>, &Value)> {
    match value {
        Value::Map(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Vec(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (Arc::from(i.to_string()), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn lookup<'a>(value: &'a Value, key: &Arc<str>) -> Option<&'a Value> {
    match value {
        Value::Map(map) => map.get(key),
        Value::Vec(items) => index_of(key).and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Parses a canonical array index: digits only, no leading zeros.
fn index_of(key: &str) -> Option<usize> {
    let canonical = key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()));
    if canonical { key.parse().ok() } else { None }
}
