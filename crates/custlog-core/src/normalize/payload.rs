//! Extraction of field deltas from the change payload of a row
//!
//! Two payload shapes are in circulation:
//!
//! - a delta map, `changes: { field: { old, new } }` (also spelled
//!   `changed_fields` / `changedFields` when it is an object);
//! - the legacy trigger shape, `old_values` / `new_values` snapshots plus a
//!   `changed_fields` list naming the touched fields.
//!
//! Any of these may arrive JSON-encoded as a string.

use serde_json::{Map, Value};

use crate::model::FieldDelta;

const DELTA_MAP_KEYS: &[&str] = &["changes", "changed_fields", "changedFields"];
const CHANGED_LIST_KEYS: &[&str] = &["changed_fields", "changedFields"];
const OLD_VALUES_KEYS: &[&str] = &["old_values", "oldValues"];
const NEW_VALUES_KEYS: &[&str] = &["new_values", "newValues"];

const OLD_SIDE_KEYS: &[&str] = &["old", "old_value", "oldValue"];
const NEW_SIDE_KEYS: &[&str] = &["new", "new_value", "newValue"];

/// First non-null value stored under any of `keys`
pub(crate) fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

/// Decode a JSON-bearing field; undecodable strings count as absent
fn decode(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                serde_json::from_str(s).ok().filter(|v: &Value| !v.is_null())
            }
        }
        other => Some(other.clone()),
    }
}

/// Decoded value of the first key whose content satisfies `accept`
fn decoded(obj: &Map<String, Value>, keys: &[&str], accept: fn(&Value) -> bool) -> Option<Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(decode)
        .find(accept)
}

/// Read one entry of a delta map
///
/// An object spelling either side is a delta; anything else is a bare new
/// value.
fn delta_from(raw: &Value) -> FieldDelta {
    if let Some(obj) = raw.as_object() {
        let spelled = OLD_SIDE_KEYS
            .iter()
            .chain(NEW_SIDE_KEYS)
            .any(|key| obj.contains_key(*key));
        if spelled {
            return FieldDelta::new(
                first_present(obj, OLD_SIDE_KEYS).cloned(),
                first_present(obj, NEW_SIDE_KEYS).cloned(),
            );
        }
    }
    FieldDelta::new(None, Some(raw.clone()))
}

fn field_names(list: &Value) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in list.as_array().into_iter().flatten() {
        if let Some(name) = item.as_str().map(str::trim).filter(|s| !s.is_empty()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Field deltas of a row, in payload order
pub fn extract_deltas(row: &Map<String, Value>) -> Vec<(String, FieldDelta)> {
    if let Some(Value::Object(map)) = decoded(row, DELTA_MAP_KEYS, Value::is_object) {
        return map
            .iter()
            .map(|(field, raw)| (field.clone(), delta_from(raw)))
            .collect();
    }

    let old_values = decoded(row, OLD_VALUES_KEYS, Value::is_object);
    let new_values = decoded(row, NEW_VALUES_KEYS, Value::is_object);
    let old_map = old_values.as_ref().and_then(Value::as_object);
    let new_map = new_values.as_ref().and_then(Value::as_object);

    let listed = decoded(row, CHANGED_LIST_KEYS, Value::is_array)
        .map(|list| field_names(&list))
        .unwrap_or_default();

    let candidates = if listed.is_empty() {
        let mut union: Vec<String> = Vec::new();
        for key in old_map.into_iter().chain(new_map).flat_map(Map::keys) {
            if !union.contains(key) {
                union.push(key.clone());
            }
        }
        union
    } else {
        listed
    };

    candidates
        .into_iter()
        .map(|field| {
            let delta = FieldDelta::new(
                old_map.and_then(|m| m.get(&field)).cloned(),
                new_map.and_then(|m| m.get(&field)).cloned(),
            );
            (field, delta)
        })
        .collect()
}
