//! Primitive converters over the untyped document
//!
//! The flat representation is carried as `serde_json::Value`: string-keyed
//! objects, arrays, and scalars. These helpers read typed fields out of an
//! object with two contractual behaviors: an absent key (or an explicit
//! `null`) is `Ok(None)`, never an error, while a present key of the wrong
//! shape is a [`ConfigError::TypeMismatch`] carrying the dotted field path.

use crate::error::{ConfigError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Join a parent path and a key into a dotted field path.
fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Name the shape of an untyped value, for error messages.
pub fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

/// Read an optional string field out of an object.
pub fn str_field(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::mismatch(
            join(path, key),
            "string",
            kind(other),
        )),
    }
}

/// Read an optional boolean field out of an object.
pub fn bool_field(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<bool>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ConfigError::mismatch(
            join(path, key),
            "bool",
            kind(other),
        )),
    }
}

/// Read an optional integer field out of an object.
pub fn int_field(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<i64>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            ConfigError::mismatch(join(path, key), "integer", "number")
        }).map(Some),
        Some(other) => Err(ConfigError::mismatch(
            join(path, key),
            "integer",
            kind(other),
        )),
    }
}

/// Read an optional list field out of an object.
pub fn seq_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a Vec<Value>>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(ConfigError::mismatch(
            join(path, key),
            "list",
            kind(other),
        )),
    }
}

/// Read an optional map field out of an object.
pub fn map_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(m)) => Ok(Some(m)),
        Some(other) => Err(ConfigError::mismatch(
            join(path, key),
            "map",
            kind(other),
        )),
    }
}

/// Require that a list element is an object, as every block list element is.
pub fn as_object<'a>(v: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    match v {
        Value::Object(m) => Ok(m),
        other => Err(ConfigError::mismatch(path, "map", kind(other))),
    }
}

/// Convert an untyped list of scalars into a list of strings,
/// order-preserving, duplicates allowed.
pub fn expand_string_array(items: &[Value], path: &str) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => out.push(s.clone()),
            other => {
                return Err(ConfigError::mismatch(
                    format!("{path}[{i}]"),
                    "string",
                    kind(other),
                ))
            }
        }
    }
    Ok(out)
}

/// Convert an untyped string-keyed map into a string-to-string map.
pub fn expand_string_map(obj: &Map<String, Value>, path: &str) -> Result<HashMap<String, String>> {
    let mut out = HashMap::with_capacity(obj.len());
    for (key, val) in obj {
        match val {
            Value::String(s) => {
                out.insert(key.clone(), s.clone());
            }
            other => {
                return Err(ConfigError::mismatch(
                    join(path, key),
                    "string",
                    kind(other),
                ))
            }
        }
    }
    Ok(out)
}

/// Flatten a string list into an untyped array. Always concrete, never absent.
pub fn flatten_string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

/// Flatten a string-to-string map into an untyped object.
pub fn flatten_string_map(map: &HashMap<String, String>) -> Value {
    let mut obj = Map::new();
    for (key, val) in map {
        obj.insert(key.clone(), Value::String(val.clone()));
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_absent_and_null_fields_are_none() {
        let m = obj(json!({ "a": null }));
        assert_eq!(str_field(&m, "a", "x").unwrap(), None);
        assert_eq!(str_field(&m, "missing", "x").unwrap(), None);
        assert_eq!(bool_field(&m, "a", "x").unwrap(), None);
        assert_eq!(int_field(&m, "missing", "x").unwrap(), None);
        assert!(seq_field(&m, "a", "x").unwrap().is_none());
    }

    #[test]
    fn test_typed_fields() {
        let m = obj(json!({ "s": "hi", "b": true, "n": 42, "l": [1], "m": {} }));
        assert_eq!(str_field(&m, "s", "x").unwrap(), Some("hi".to_string()));
        assert_eq!(bool_field(&m, "b", "x").unwrap(), Some(true));
        assert_eq!(int_field(&m, "n", "x").unwrap(), Some(42));
        assert_eq!(seq_field(&m, "l", "x").unwrap().unwrap().len(), 1);
        assert!(map_field(&m, "m", "x").unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_mismatch_carries_path() {
        let m = obj(json!({ "s": 7 }));
        let err = str_field(&m, "s", "global.0").unwrap_err();
        assert!(err.to_string().contains("global.0.s"));
    }

    #[test]
    fn test_expand_string_array_preserves_order_and_duplicates() {
        let items = vec![json!("a"), json!("b"), json!("a")];
        let out = expand_string_array(&items, "x").unwrap();
        assert_eq!(out, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_expand_string_array_rejects_non_strings() {
        let items = vec![json!("a"), json!(false)];
        let err = expand_string_array(&items, "equal").unwrap_err();
        assert!(err.to_string().contains("equal[1]"));
    }

    #[test]
    fn test_string_map_round_trip() {
        let m = obj(json!({ "env": "prod", "team": "sre" }));
        let expanded = expand_string_map(&m, "details").unwrap();
        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded["env"], "prod");

        let flattened = flatten_string_map(&expanded);
        let back = expand_string_map(flattened.as_object().unwrap(), "details").unwrap();
        assert_eq!(back, expanded);
    }

    #[test]
    fn test_empty_inputs_yield_empty_outputs() {
        assert!(expand_string_array(&[], "x").unwrap().is_empty());
        assert!(expand_string_map(&Map::new(), "x").unwrap().is_empty());
        assert_eq!(flatten_string_array(&[]), json!([]));
    }
}
