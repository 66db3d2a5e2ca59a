//! Plain-text rendering of a feed

use crate::model::Feed;
use crate::policy::{fill, RenderPolicy};

/// Render a feed as indented text, newest item first
///
/// Timestamps are shown in the policy's local offset.
pub fn render_feed_text(feed: &Feed, policy: &RenderPolicy) -> String {
    let templates = &policy.templates;
    let mut out = String::new();

    if feed.items.is_empty() {
        out.push_str(&templates.feed_empty);
        out.push('\n');
    }

    for (i, item) in feed.items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let at = item
            .entry
            .created_at
            .with_timezone(&policy.naive_offset())
            .to_rfc3339();
        out.push_str(&fill(
            &templates.feed_header,
            &[
                ("at", at.as_str()),
                ("action", policy.action_label(item.entry.action)),
                ("actor", item.actor.as_str()),
            ],
        ));
        out.push('\n');
        for line in &item.lines {
            out.push_str(&format!("  - {}\n", line));
        }
    }

    if !feed.dropped.is_empty() {
        let count = feed.dropped.len().to_string();
        out.push('\n');
        out.push_str(&fill(&templates.feed_dropped, &[("count", count.as_str())]));
        out.push('\n');
    }

    out
}
