use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::action::ActionType;
use super::field_kind::FieldKind;

/// A raw, uninterpreted field value as recorded by the audit writer
///
/// `Value::Null` never appears inside a [`FieldDelta`]; null and a missing
/// key are both represented as `None`.
pub type RawValue = Value;

/// Old/new pair for one field within one audit event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new: Option<RawValue>,
}

impl FieldDelta {
    /// Build a delta, folding JSON `null` into "absent"
    pub fn new(old: Option<RawValue>, new: Option<RawValue>) -> Self {
        Self {
            old: old.filter(|v| !v.is_null()),
            new: new.filter(|v| !v.is_null()),
        }
    }

    /// Delta for a field that only has a new value
    pub fn set(new: RawValue) -> Self {
        Self::new(None, Some(new))
    }

    /// Delta for a field whose value changed
    pub fn changed(old: RawValue, new: RawValue) -> Self {
        Self::new(Some(old), Some(new))
    }

    /// True when neither side carries a value
    pub fn is_empty(&self) -> bool {
        self.old.is_none() && self.new.is_none()
    }

    /// True when both sides are deep-equal (including both absent)
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

/// One field delta tagged with the rendering policy that applies to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub kind: FieldKind,
    #[serde(flatten)]
    pub delta: FieldDelta,
}

impl FieldChange {
    pub fn new(field: impl Into<String>, kind: FieldKind, delta: FieldDelta) -> Self {
        Self {
            field: field.into(),
            kind,
            delta,
        }
    }
}

/// Canonical, immutable record of one audit event on a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogEntry {
    /// Opaque identifier of the audit row
    pub id: String,

    /// Affected customer; never empty
    pub customer_id: String,

    #[serde(rename = "actionType")]
    pub action: ActionType,

    /// Field deltas in the insertion order of the raw payload
    pub changes: Vec<FieldChange>,

    pub created_at: DateTime<Utc>,

    /// Actor id as recorded by the audit writer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Actor display name, when the audit writer resolved it already
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
}

impl ChangeLogEntry {
    /// Look up the change recorded for a field, if any
    pub fn change(&self, field: &str) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.changes.iter().map(|c| c.field.as_str())
    }
}

/// Stringify an identifier-like JSON value
///
/// Strings are trimmed, integral numbers lose any `.0`, everything else
/// (booleans, objects, arrays, empty strings) is not an identifier.
pub fn value_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delta_folds_null_into_absent() {
        let delta = FieldDelta::new(Some(Value::Null), Some(json!("A")));
        assert_eq!(delta.old, None);
        assert_eq!(delta.new, Some(json!("A")));
        assert!(!delta.is_noop());
    }

    #[test]
    fn test_delta_noop_is_deep_equality() {
        let delta = FieldDelta::changed(
            json!({"province": "กรุงเทพ", "district": "บางรัก"}),
            json!({"district": "บางรัก", "province": "กรุงเทพ"}),
        );
        assert!(delta.is_noop());
        assert!(FieldDelta::default().is_noop());
        assert!(FieldDelta::default().is_empty());
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let delta = FieldDelta::changed(json!(""), json!("0812345678"));
        assert!(!delta.is_empty());
        assert!(!delta.is_noop());
    }

    #[test]
    fn test_value_key() {
        assert_eq!(value_key(&json!(42)), Some("42".to_string()));
        assert_eq!(value_key(&json!(42.0)), Some("42".to_string()));
        assert_eq!(value_key(&json!(" 7 ")), Some("7".to_string()));
        assert_eq!(value_key(&json!("")), None);
        assert_eq!(value_key(&json!(true)), None);
        assert_eq!(value_key(&json!({"id": 1})), None);
    }
}
