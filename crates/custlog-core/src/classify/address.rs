use super::format::{display_value, render_sides};
use super::{scalar_lines, transition, ClassifyContext};
use crate::model::{Address, AddressPart, ChangeLine, FieldDelta, FieldKind};

/// One line per changed address part
///
/// A side that is present but not an object makes the whole delta render
/// as a plain value instead.
pub(super) fn lines(field: &str, delta: &FieldDelta, ctx: &ClassifyContext<'_>) -> Vec<ChangeLine> {
    let old = delta.old.as_ref().map(Address::from_value);
    let new = delta.new.as_ref().map(Address::from_value);
    if matches!(old, Some(None)) || matches!(new, Some(None)) {
        return scalar_lines(field, FieldKind::Scalar, delta, ctx);
    }
    let old = old.flatten();
    let new = new.flatten();

    let render = |value: &serde_json::Value| display_value(value, ctx.policy);
    AddressPart::ALL
        .iter()
        .filter_map(|part| {
            let before = old.and_then(|a| a.part(*part));
            let after = new.and_then(|a| a.part(*part));
            if before == after {
                return None;
            }
            let (before, after) = render_sides(before, after, render);
            transition(part.label(), before, after, ctx)
        })
        .map(|text| ChangeLine::new(field, text))
        .collect()
}
