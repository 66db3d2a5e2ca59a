//! Field diff classifier
//!
//! Turns one field delta into zero or more finished Thai sentence
//! fragments. Dispatch is a total `match` over [`FieldKind`]; the kind is
//! normally attached by the normalizer, and [`classify`] derives it from the
//! registry for callers holding a bare delta.
//!
//! ## Guarantees
//!
//! - **No-op suppression**: deep-equal sides (including both absent) yield
//!   nothing, and so do sides that render to the same text.
//! - **Total**: unresolved users/tags and unknown status values render with
//!   fallback labels or pass through; classification never fails.
//! - **Set forms**: a side that is absent never appears as an empty left or
//!   right operand.

mod address;
mod assignment;
pub mod format;
mod tag_set;

use crate::model::{ActorDirectory, ChangeLine, FieldChange, FieldDelta, FieldKind, TagDirectory};
use crate::policy::RenderPolicy;

/// Read-only lookups used while rendering
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub actors: &'a ActorDirectory,
    pub tags: &'a TagDirectory,
    pub policy: &'a RenderPolicy,
}

impl<'a> ClassifyContext<'a> {
    pub fn new(actors: &'a ActorDirectory, tags: &'a TagDirectory, policy: &'a RenderPolicy) -> Self {
        Self {
            actors,
            tags,
            policy,
        }
    }
}

/// Shared arrow/set/cleared template
///
/// Both present: `{label}: {old} → {new}`; old absent: `{label}: {new}`;
/// new absent: `{label}: {old} → -`. Equal renderings yield nothing.
pub(crate) fn transition(
    label: &str,
    old: Option<String>,
    new: Option<String>,
    ctx: &ClassifyContext<'_>,
) -> Option<String> {
    match (old, new) {
        (Some(old), Some(new)) if old == new => None,
        (Some(old), Some(new)) => Some(format!("{}: {} → {}", label, old, new)),
        (None, Some(new)) => Some(format!("{}: {}", label, new)),
        (Some(old), None) => Some(format!(
            "{}: {} → {}",
            label, old, ctx.policy.absent_value_label
        )),
        (None, None) => None,
    }
}

/// Single-line rendering for kinds without structure of their own
fn scalar_lines(
    field: &str,
    kind: FieldKind,
    delta: &FieldDelta,
    ctx: &ClassifyContext<'_>,
) -> Vec<ChangeLine> {
    let render = |value: &serde_json::Value| format::render_value(field, kind, value, ctx.policy);
    let (old, new) = format::render_sides(delta.old.as_ref(), delta.new.as_ref(), render);
    transition(ctx.policy.fields.label_for(field), old, new, ctx)
    .map(|text| ChangeLine::new(field, text))
    .into_iter()
    .collect()
}

fn classify_as(
    field: &str,
    kind: FieldKind,
    delta: &FieldDelta,
    ctx: &ClassifyContext<'_>,
) -> Vec<ChangeLine> {
    if delta.is_noop() {
        return Vec::new();
    }
    match kind {
        FieldKind::Internal => Vec::new(),
        FieldKind::Assignment => assignment::lines(field, delta, ctx),
        FieldKind::TagSet => tag_set::lines(field, delta, ctx),
        FieldKind::Address => address::lines(field, delta, ctx),
        FieldKind::Status
        | FieldKind::Currency
        | FieldKind::Numeric
        | FieldKind::Date
        | FieldKind::Scalar => scalar_lines(field, kind, delta, ctx),
    }
}

/// Render the lines for one field delta
pub fn classify(field: &str, delta: &FieldDelta, ctx: &ClassifyContext<'_>) -> Vec<ChangeLine> {
    let kind = ctx.policy.fields.kind_for(field, delta);
    classify_as(field, kind, delta, ctx)
}

/// Render the lines for a change already tagged by the normalizer
pub fn classify_change(change: &FieldChange, ctx: &ClassifyContext<'_>) -> Vec<ChangeLine> {
    classify_as(&change.field, change.kind, &change.delta, ctx)
}
