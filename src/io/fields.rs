//! Ordered first-match lookup over loosely typed JSON objects.
//!
//! Each logical field has a fixed list of accepted names. The names are
//! tried in order and the first one that is present *and* has the expected
//! type wins; a present name holding the wrong type is skipped.

use serde_json::Value;

/// First value under `keys` that `extract` accepts.
pub(crate) fn first_match<'a, T>(
    value: &'a Value,
    keys: &[&str],
    extract: impl Fn(&'a Value) -> Option<T>,
) -> Option<T> {
    let object = value.as_object()?;
    keys.iter().filter_map(|k| object.get(*k)).find_map(extract)
}

/// First integer under `keys`. Floats and strings do not count.
pub(crate) fn first_int(value: &Value, keys: &[&str]) -> Option<i64> {
    first_match(value, keys, Value::as_i64)
}

/// First non-negative integer under `keys`.
pub(crate) fn first_count(value: &Value, keys: &[&str]) -> Option<usize> {
    first_match(value, keys, |v| {
        v.as_u64().and_then(|n| usize::try_from(n).ok())
    })
}

/// First number (integer or float) under `keys`.
pub(crate) fn first_number(value: &Value, keys: &[&str]) -> Option<f64> {
    first_match(value, keys, Value::as_f64)
}

/// First array under `keys`.
pub(crate) fn first_array<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    first_match(value, keys, Value::as_array)
}
