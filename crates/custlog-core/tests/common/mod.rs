#![allow(dead_code)]

use custlog_core::{ActorDirectory, ClassifyContext, RenderPolicy, TagDirectory, TagInfo};
use serde_json::{json, Value};

/// Directories and policy shared by the integration tests
pub struct Fixture {
    pub actors: ActorDirectory,
    pub tags: TagDirectory,
    pub policy: RenderPolicy,
}

impl Fixture {
    /// Two known users (7, 8) and three known tags (1 VIP, 2 โทรซ้ำ, 3 ลูกค้าประจำ)
    pub fn new() -> Self {
        let actors = [("7", "สมชาย ใจดี"), ("8", "มานี มีนา")].into_iter().collect();
        let tags = vec![
            TagInfo::new("1", "VIP"),
            TagInfo::new("2", "โทรซ้ำ"),
            TagInfo::new("3", "ลูกค้าประจำ"),
        ]
        .into_iter()
        .collect();
        Self {
            actors,
            tags,
            policy: RenderPolicy::default(),
        }
    }

    pub fn ctx(&self) -> ClassifyContext<'_> {
        ClassifyContext::new(&self.actors, &self.tags, &self.policy)
    }
}

/// A well-formed update row for customer `C-1`
pub fn update_row(id: u64, created_at: &str, changes: Value) -> Value {
    json!({
        "id": id,
        "customer_id": "C-1",
        "action_type": "update",
        "created_at": created_at,
        "created_by": 7,
        "changes": changes
    })
}

/// Texts of every line of every item, in feed order
pub fn texts(lines: &[custlog_core::ChangeLine]) -> Vec<String> {
    lines.iter().map(|l| l.text.clone()).collect()
}
