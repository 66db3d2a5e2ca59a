//! Lookup tables resolving actor and tag identifiers to display names

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entry::value_key;

/// Map from user id to display name
///
/// Read-only for the duration of one summarization call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorDirectory {
    names: HashMap<String, String>,
}

impl ActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id.trim()).map(String::as_str)
    }

    /// Resolve a raw id value (string or number) to a display name
    pub fn resolve_value(&self, value: &Value) -> Option<&str> {
        value_key(value).and_then(|id| self.get(&id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ActorDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Display data for one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<String>,
}

impl TagInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tag_type: None,
        }
    }
}

/// Map from tag id to tag display data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDirectory {
    tags: HashMap<String, TagInfo>,
}

impl TagDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: TagInfo) {
        self.tags.insert(tag.id.clone(), tag);
    }

    pub fn get(&self, id: &str) -> Option<&TagInfo> {
        self.tags.get(id.trim())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<TagInfo> for TagDirectory {
    fn from_iter<I: IntoIterator<Item = TagInfo>>(iter: I) -> Self {
        let mut directory = Self::new();
        for tag in iter {
            directory.insert(tag);
        }
        directory
    }
}
