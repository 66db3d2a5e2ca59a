use serde_json::Value;

use super::payload::{extract_deltas, first_present};
use crate::errors::NormalizeError;
use crate::model::{value_key, ActionType, ChangeLogEntry, FieldChange};
use crate::policy::RenderPolicy;
use crate::timestamp::parse_instant;

const ID_KEYS: &[&str] = &["id"];
const CUSTOMER_ID_KEYS: &[&str] = &["customer_id", "customerId"];
const ACTION_KEYS: &[&str] = &["action_type", "actionType"];
const CREATED_AT_KEYS: &[&str] = &["created_at", "createdAt"];
const CREATED_BY_KEYS: &[&str] = &["created_by", "createdBy"];
const CREATED_BY_NAME_KEYS: &[&str] = &["created_by_name", "createdByName"];

fn required_key(
    row: &serde_json::Map<String, Value>,
    keys: &[&str],
) -> Result<String, NormalizeError> {
    first_present(row, keys)
        .and_then(value_key)
        .ok_or_else(|| NormalizeError::missing(keys[0]))
}

fn required_str<'a>(
    row: &'a serde_json::Map<String, Value>,
    keys: &[&str],
) -> Result<&'a Value, NormalizeError> {
    first_present(row, keys)
        .filter(|v| v.as_str().map_or(true, |s| !s.trim().is_empty()))
        .ok_or_else(|| NormalizeError::missing(keys[0]))
}

/// Stringified form of a rejected value for error reporting
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn one raw audit row into a canonical entry
///
/// Payload values are passed through verbatim; each delta is only tagged
/// with the kind the field registry (or the value shape) assigns it.
///
/// # Errors
///
/// Fails when the row is not an object or lacks a usable `id`,
/// `customer_id`, `action_type` or `created_at`.
pub fn normalize_row(row: &Value, policy: &RenderPolicy) -> Result<ChangeLogEntry, NormalizeError> {
    let obj = row.as_object().ok_or(NormalizeError::NotAnObject)?;

    let id = required_key(obj, ID_KEYS)?;
    let customer_id = required_key(obj, CUSTOMER_ID_KEYS)?;

    let raw_action = required_str(obj, ACTION_KEYS)?;
    let action = raw_action
        .as_str()
        .and_then(ActionType::parse)
        .ok_or_else(|| NormalizeError::InvalidActionType {
            value: raw_text(raw_action),
        })?;

    let raw_created_at = required_str(obj, CREATED_AT_KEYS)?;
    let created_at = raw_created_at
        .as_str()
        .and_then(|s| parse_instant(s, policy.naive_offset()))
        .ok_or_else(|| NormalizeError::InvalidTimestamp {
            value: raw_text(raw_created_at),
        })?;

    let created_by = first_present(obj, CREATED_BY_KEYS).and_then(value_key);
    let created_by_name = first_present(obj, CREATED_BY_NAME_KEYS)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let changes = extract_deltas(obj)
        .into_iter()
        .map(|(field, delta)| {
            let kind = policy.fields.kind_for(&field, &delta);
            FieldChange::new(field, kind, delta)
        })
        .collect();

    Ok(ChangeLogEntry {
        id,
        customer_id,
        action,
        changes,
        created_at,
        created_by,
        created_by_name,
    })
}
