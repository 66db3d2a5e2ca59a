use serde_json::Value;

use super::format::display_value;
use super::ClassifyContext;
use crate::model::{value_key, ChangeLine, FieldDelta};
use crate::policy::fill;

/// Display name of an assignee; unknown ids get the fallback label
fn assignee_name(value: &Value, ctx: &ClassifyContext<'_>) -> String {
    // Some writers store the assignee as a `{id, name}` object
    let id_value = value.get("id").unwrap_or(value);
    if let Some(name) = ctx.actors.resolve_value(id_value) {
        return name.to_string();
    }
    if let Some(name) = value.get("name").and_then(Value::as_str) {
        return name.to_string();
    }
    match value_key(id_value) {
        Some(id) => ctx.policy.unknown_user(&id),
        None => display_value(value, ctx.policy),
    }
}

pub(super) fn lines(field: &str, delta: &FieldDelta, ctx: &ClassifyContext<'_>) -> Vec<ChangeLine> {
    let templates = &ctx.policy.templates;
    let old = delta.old.as_ref().map(|v| assignee_name(v, ctx));
    let new = delta.new.as_ref().map(|v| assignee_name(v, ctx));

    let text = match (old, new) {
        (Some(old), Some(new)) if old == new => return Vec::new(),
        (Some(old), Some(new)) => fill(
            &templates.assignment_changed,
            &[("old", old.as_str()), ("new", new.as_str())],
        ),
        (None, Some(new)) => fill(&templates.assignment_set, &[("new", new.as_str())]),
        (Some(old), None) => fill(&templates.assignment_cleared, &[("old", old.as_str())]),
        (None, None) => return Vec::new(),
    };
    vec![ChangeLine::new(field, text)]
}
