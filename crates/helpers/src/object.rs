//! Immutable positional insertion into an ordered key-value mapping.

use indexmap::IndexMap;
use serde_json::Value;

/// Returns a new mapping with all of `obj`'s entries plus `key: value`,
/// never mutating `obj`.
///
/// `index` is the count of entries that should precede the new pair:
///
/// - `None`, or any index outside `0..obj.len()`, appends the pair at the
///   end.
/// - A valid index places the pair at that position and shifts the rest.
///
/// An empty `key` or a `Value::Null` value adds nothing; the result is a
/// plain clone of `obj`.
///
/// If `key` already exists in `obj`, a positional insert moves it to the
/// requested position with the new value; an append keeps it at its
/// original position and updates the value there.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use serde_json::{json, Value};
/// use vanilla_helpers::insert_at;
///
/// let mut obj: IndexMap<String, Value> = IndexMap::new();
/// obj.insert("a".to_string(), json!(1));
/// obj.insert("c".to_string(), json!(3));
///
/// let out = insert_at(&obj, "b", json!(2), Some(1));
/// let keys: Vec<&str> = out.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["a", "b", "c"]);
/// assert_eq!(obj.len(), 2); // input untouched
/// ```
pub fn insert_at(
    obj: &IndexMap<String, Value>,
    key: &str,
    value: Value,
    index: Option<usize>,
) -> IndexMap<String, Value> {
    let mut out = obj.clone();

    if key.is_empty() || value.is_null() {
        return out;
    }

    match index {
        Some(i) if i < obj.len() => {
            out.shift_insert(i, key.to_string(), value);
        }
        _ => {
            out.insert(key.to_string(), value);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> IndexMap<String, Value> {
        let mut obj = IndexMap::new();
        obj.insert("one".to_string(), json!(1));
        obj.insert("two".to_string(), json!(2));
        obj.insert("three".to_string(), json!(3));
        obj
    }

    fn keys(obj: &IndexMap<String, Value>) -> Vec<&str> {
        obj.keys().map(String::as_str).collect()
    }

    #[test]
    fn appends_without_index() {
        let obj = fixture();
        let out = insert_at(&obj, "four", json!(4), None);
        assert_eq!(keys(&out), ["one", "two", "three", "four"]);
        assert_eq!(out["four"], json!(4));
    }

    #[test]
    fn inserts_at_front() {
        let obj = fixture();
        let out = insert_at(&obj, "zero", json!(0), Some(0));
        assert_eq!(keys(&out), ["zero", "one", "two", "three"]);
    }

    #[test]
    fn inserts_in_middle() {
        let obj = fixture();
        let out = insert_at(&obj, "mid", json!("m"), Some(2));
        assert_eq!(keys(&out), ["one", "two", "mid", "three"]);
    }

    #[test]
    fn out_of_range_index_appends() {
        let obj = fixture();
        let out = insert_at(&obj, "late", json!(9), Some(3));
        assert_eq!(keys(&out), ["one", "two", "three", "late"]);
        let out = insert_at(&obj, "late", json!(9), Some(100));
        assert_eq!(keys(&out), ["one", "two", "three", "late"]);
    }

    #[test]
    fn empty_key_returns_plain_clone() {
        let obj = fixture();
        let out = insert_at(&obj, "", json!(1), Some(1));
        assert_eq!(out, obj);
    }

    #[test]
    fn null_value_returns_plain_clone() {
        let obj = fixture();
        let out = insert_at(&obj, "four", Value::Null, None);
        assert_eq!(out, obj);
    }

    #[test]
    fn existing_key_moves_on_positional_insert() {
        let obj = fixture();
        let out = insert_at(&obj, "three", json!(33), Some(0));
        assert_eq!(keys(&out), ["three", "one", "two"]);
        assert_eq!(out["three"], json!(33));
    }

    #[test]
    fn existing_key_keeps_position_on_append() {
        let obj = fixture();
        let out = insert_at(&obj, "one", json!(11), None);
        assert_eq!(keys(&out), ["one", "two", "three"]);
        assert_eq!(out["one"], json!(11));
    }

    #[test]
    fn input_is_never_mutated() {
        let obj = fixture();
        let _ = insert_at(&obj, "four", json!(4), Some(1));
        assert_eq!(keys(&obj), ["one", "two", "three"]);
        assert_eq!(obj["one"], json!(1));
    }

    #[test]
    fn insert_into_empty_map_appends() {
        let obj = IndexMap::new();
        let out = insert_at(&obj, "only", json!(true), Some(0));
        assert_eq!(keys(&out), ["only"]);
    }
}
