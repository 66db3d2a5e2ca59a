use serde::{Deserialize, Serialize};

/// Kind of audit event recorded for a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Create,
    Update,
    Delete,
}

impl ActionType {
    /// Parse a raw action spelling
    ///
    /// Matching is case-insensitive and accepts the SQL trigger spellings
    /// (`INSERT`, `UPDATE`, `DELETE`) some audit writers emit.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "create" | "created" | "insert" => Some(ActionType::Create),
            "update" | "updated" => Some(ActionType::Update),
            "delete" | "deleted" => Some(ActionType::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Create => "create",
            ActionType::Update => "update",
            ActionType::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::parse(s).ok_or_else(|| format!("unknown action type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_canonical_and_sql_spellings() {
        assert_eq!(ActionType::parse("create"), Some(ActionType::Create));
        assert_eq!(ActionType::parse("INSERT"), Some(ActionType::Create));
        assert_eq!(ActionType::parse(" Update "), Some(ActionType::Update));
        assert_eq!(ActionType::parse("DELETE"), Some(ActionType::Delete));
        assert_eq!(ActionType::parse("archive"), None);
        assert_eq!(ActionType::parse(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ActionType::Delete).unwrap();
        assert_eq!(json, "\"delete\"");
    }
}
