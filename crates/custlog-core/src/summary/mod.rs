//! Summarization pipeline
//!
//! Normalizes raw rows, classifies every field of every entry, drops
//! entries with nothing to show and orders the rest newest first. The
//! pipeline is pure: identical inputs give structurally equal feeds.

pub mod text;

pub use text::render_feed_text;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{classify_change, ClassifyContext};
use crate::model::{ActionType, ChangeLine, ChangeLogEntry, Feed, FeedItem, FieldChange, FieldDelta};
use crate::normalize::normalize_rows;
use crate::{log_op_end, log_op_start};

/// Optional restrictions on what the feed shows; the default shows all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedFilter {
    /// Only these fields are rendered
    pub allowed_fields: Option<Vec<String>>,
    /// Only entries with one of these actions are kept
    pub actions: Option<Vec<ActionType>>,
    /// Only entries for this customer are kept
    pub customer_id: Option<String>,
    /// At most this many items, counted after sorting
    pub limit: Option<usize>,
}

impl FeedFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = ActionType>) -> Self {
        self.actions = Some(actions.into_iter().collect());
        self
    }

    pub fn for_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn admits_entry(&self, entry: &ChangeLogEntry) -> bool {
        let action_ok = self
            .actions
            .as_ref()
            .map_or(true, |actions| actions.contains(&entry.action));
        let customer_ok = self
            .customer_id
            .as_deref()
            .map_or(true, |id| id.trim() == entry.customer_id);
        action_ok && customer_ok
    }

    pub fn admits_field(&self, field: &str) -> bool {
        self.allowed_fields
            .as_ref()
            .map_or(true, |fields| fields.iter().any(|f| f == field))
    }
}

/// Display name of whoever made the change
pub fn resolve_actor(entry: &ChangeLogEntry, ctx: &ClassifyContext<'_>) -> String {
    entry
        .created_by_name
        .clone()
        .or_else(|| {
            entry
                .created_by
                .as_deref()
                .and_then(|id| ctx.actors.get(id))
                .map(str::to_string)
        })
        .unwrap_or_else(|| ctx.policy.system_actor_label.clone())
}

/// Lines of one entry in stored field order
///
/// A creation only ever shows what the customer was created with, so any
/// old side recorded on it is ignored.
fn entry_lines(
    entry: &ChangeLogEntry,
    ctx: &ClassifyContext<'_>,
    filter: &FeedFilter,
) -> Vec<ChangeLine> {
    entry
        .changes
        .iter()
        .filter(|change| filter.admits_field(&change.field))
        .flat_map(|change| {
            if entry.action == ActionType::Create && change.delta.old.is_some() {
                let created = FieldChange::new(
                    change.field.clone(),
                    change.kind,
                    FieldDelta::new(None, change.delta.new.clone()),
                );
                classify_change(&created, ctx)
            } else {
                classify_change(change, ctx)
            }
        })
        .collect()
}

/// Build feed items from already-normalized entries
///
/// Entries without any visible line are dropped. Items are ordered by
/// `created_at` descending; equal timestamps keep their input order.
pub fn summarize_entries(
    entries: &[ChangeLogEntry],
    ctx: &ClassifyContext<'_>,
    filter: &FeedFilter,
) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = entries
        .iter()
        .filter(|entry| filter.admits_entry(entry))
        .filter_map(|entry| {
            let lines = entry_lines(entry, ctx, filter);
            (!lines.is_empty()).then(|| FeedItem {
                entry: entry.clone(),
                actor: resolve_actor(entry, ctx),
                lines,
            })
        })
        .collect();

    // sort_by is stable
    items.sort_by(|a, b| b.entry.created_at.cmp(&a.entry.created_at));

    if let Some(limit) = filter.limit {
        items.truncate(limit);
    }
    items
}

/// Normalize raw rows and build the feed
///
/// Rows the normalizer rejects are reported in [`Feed::dropped`].
pub fn summarize(rows: &[Value], ctx: &ClassifyContext<'_>, filter: &FeedFilter) -> Feed {
    let start = std::time::Instant::now();
    log_op_start!("summarize", rows_len = rows.len());

    let normalized = normalize_rows(rows, ctx.policy);
    let items = summarize_entries(&normalized.entries, ctx, filter);
    let feed = Feed {
        items,
        dropped: normalized.dropped,
    };

    log_op_end!(
        "summarize",
        duration_ms = start.elapsed().as_millis() as u64,
        items_len = feed.items.len(),
        dropped_len = feed.dropped.len()
    );
    feed
}
