use serde_json::Value;

use super::entry::value_key;

/// Reference to a tag inside a tag-set delta
///
/// Audit writers record tags either as `{id, name}` objects or as bare ids;
/// older rows sometimes carry only names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl TagRef {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(obj) => {
                let id = obj.get("id").and_then(value_key);
                let name = obj
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                (id.is_some() || name.is_some()).then_some(Self { id, name })
            }
            Value::Number(_) => value_key(value).map(|id| Self {
                id: Some(id),
                name: None,
            }),
            Value::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else if s.chars().all(|c| c.is_ascii_digit()) {
                    Some(Self {
                        id: Some(s.to_string()),
                        name: None,
                    })
                } else {
                    Some(Self {
                        id: None,
                        name: Some(s.to_string()),
                    })
                }
            }
            _ => None,
        }
    }

    /// Read a whole tag collection; a single reference counts as a set of one
    pub fn collect(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::from_value).collect(),
            other => Self::from_value(other).into_iter().collect(),
        }
    }

    /// True when a value looks like a tag collection
    pub fn looks_like_tags(value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().all(|item| match item {
                Value::Object(obj) => obj.contains_key("id") || obj.contains_key("name"),
                Value::Number(_) | Value::String(_) => true,
                _ => false,
            }),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_mixed_shapes() {
        let tags = TagRef::collect(&json!([{"id": 1, "name": "VIP"}, 2, "3", "ลูกค้าประจำ", null]));
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[0].id.as_deref(), Some("1"));
        assert_eq!(tags[0].name.as_deref(), Some("VIP"));
        assert_eq!(tags[1].id.as_deref(), Some("2"));
        assert_eq!(tags[2].id.as_deref(), Some("3"));
        assert_eq!(tags[2].name, None);
        assert_eq!(tags[3].id, None);
        assert_eq!(tags[3].name.as_deref(), Some("ลูกค้าประจำ"));
    }

    #[test]
    fn test_looks_like_tags() {
        assert!(TagRef::looks_like_tags(&json!([{"id": 1, "name": "A"}])));
        assert!(TagRef::looks_like_tags(&json!([])));
        assert!(!TagRef::looks_like_tags(&json!([{"sku": "x"}])));
        assert!(!TagRef::looks_like_tags(&json!("A")));
    }
}
