use std::fmt;

use serde::Serialize;

use super::entry::ChangeLogEntry;
use crate::errors::NormalizeError;

/// One rendered human-readable line describing a field change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    /// Field the line was rendered from
    pub field: String,
    pub text: String,
}

impl ChangeLine {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An entry together with its resolved actor and rendered lines
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub entry: ChangeLogEntry,
    pub actor: String,
    pub lines: Vec<ChangeLine>,
}

/// A raw row the normalizer rejected, with its position in the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedRow {
    pub index: usize,
    pub reason: NormalizeError,
}

/// Ordered activity feed, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feed {
    pub items: Vec<FeedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedRow>,
}

impl Feed {
    /// The `n` most recent items
    pub fn recent(&self, n: usize) -> &[FeedItem] {
        &self.items[..n.min(self.items.len())]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
