use super::ClassifyContext;
use crate::model::{ChangeLine, FieldDelta, TagRef};
use crate::policy::fill;

/// A tag reference with its display name resolved
struct NamedTag {
    id: Option<String>,
    name: String,
}

impl NamedTag {
    fn resolve(tag: TagRef, ctx: &ClassifyContext<'_>) -> Self {
        let name = tag
            .name
            .clone()
            .or_else(|| {
                tag.id
                    .as_deref()
                    .and_then(|id| ctx.tags.get(id))
                    .map(|info| info.name.clone())
            })
            .unwrap_or_else(|| ctx.policy.unknown_tag(tag.id.as_deref().unwrap_or_default()));
        Self { id: tag.id, name }
    }

    /// Same tag: equal ids when both sides carry one, else equal names
    fn same(&self, other: &NamedTag) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self.name == other.name,
        }
    }

    fn sort_key(&self) -> (&str, &str) {
        (self.name.as_str(), self.id.as_deref().unwrap_or_default())
    }
}

fn read_set(value: Option<&serde_json::Value>, ctx: &ClassifyContext<'_>) -> Vec<NamedTag> {
    let mut set: Vec<NamedTag> = Vec::new();
    for tag in value.map(TagRef::collect).unwrap_or_default() {
        let tag = NamedTag::resolve(tag, ctx);
        if !set.iter().any(|t| t.same(&tag)) {
            set.push(tag);
        }
    }
    set
}

/// Members of `from` with no counterpart in `other`, ordered by name
fn missing_from<'a>(from: &'a [NamedTag], other: &[NamedTag]) -> Vec<&'a NamedTag> {
    let mut out: Vec<&NamedTag> = from
        .iter()
        .filter(|tag| !other.iter().any(|t| t.same(tag)))
        .collect();
    out.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    out
}

pub(super) fn lines(field: &str, delta: &FieldDelta, ctx: &ClassifyContext<'_>) -> Vec<ChangeLine> {
    let templates = &ctx.policy.templates;
    let old = read_set(delta.old.as_ref(), ctx);
    let new = read_set(delta.new.as_ref(), ctx);

    let added = missing_from(&new, &old)
        .into_iter()
        .map(|tag| fill(&templates.tag_added, &[("name", tag.name.as_str())]));
    let removed = missing_from(&old, &new)
        .into_iter()
        .map(|tag| fill(&templates.tag_removed, &[("name", tag.name.as_str())]));

    added
        .chain(removed)
        .map(|text| ChangeLine::new(field, text))
        .collect()
}
