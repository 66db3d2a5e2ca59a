//! Render policy: every configurable string and the field registry
//!
//! The built-in defaults reproduce the console's fixed Thai wording. A TOML
//! document may override any subset of them; unspecified keys keep their
//! defaults and `[fields.<name>]` tables are merged over the built-in
//! registry rather than replacing it.
//!
//! ```
//! use custlog_core::model::FieldKind;
//! use custlog_core::policy::RenderPolicy;
//!
//! let policy = RenderPolicy::from_toml_str(
//!     r#"
//! system_actor_label = "System"
//!
//! [fields.nickname]
//! label = "ชื่อเล่น"
//! "#,
//! )
//! .unwrap();
//! assert_eq!(policy.system_actor_label, "System");
//! assert_eq!(policy.fields.label_for("nickname"), "ชื่อเล่น");
//! assert_eq!(policy.fields.kind_of("tags"), Some(FieldKind::TagSet));
//! ```

use std::collections::BTreeMap;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ExError, ExErrorKind, Result};
use crate::labels;
use crate::model::{ActionType, Address, FieldDelta, FieldKind, TagRef};

/// Largest accepted naive-timestamp offset, exclusive
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Substitute `{key}` placeholders in a template
///
/// One left-to-right pass over the template: substituted values are never
/// rescanned, and unknown placeholders are kept as written.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = after.find('}').and_then(|close| {
            vars.iter()
                .find(|(key, _)| *key == &after[..close])
                .map(|(_, value)| (*value, close))
        });
        match hit {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionLabels {
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl ActionLabels {
    pub fn label(&self, action: ActionType) -> &str {
        match action {
            ActionType::Create => &self.create,
            ActionType::Update => &self.update,
            ActionType::Delete => &self.delete,
        }
    }
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            create: labels::ACTION_CREATE.to_string(),
            update: labels::ACTION_UPDATE.to_string(),
            delete: labels::ACTION_DELETE.to_string(),
        }
    }
}

/// Sentence templates with `{placeholder}` slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    /// `{old}`, `{new}`
    pub assignment_changed: String,
    /// `{new}`
    pub assignment_set: String,
    /// `{old}`
    pub assignment_cleared: String,
    /// `{name}`
    pub tag_added: String,
    /// `{name}`
    pub tag_removed: String,
    /// `{at}`, `{action}`, `{actor}`
    pub feed_header: String,
    pub feed_empty: String,
    /// `{count}`
    pub feed_dropped: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            assignment_changed: labels::ASSIGNMENT_CHANGED.to_string(),
            assignment_set: labels::ASSIGNMENT_SET.to_string(),
            assignment_cleared: labels::ASSIGNMENT_CLEARED.to_string(),
            tag_added: labels::TAG_ADDED.to_string(),
            tag_removed: labels::TAG_REMOVED.to_string(),
            feed_header: labels::FEED_HEADER.to_string(),
            feed_empty: labels::FEED_EMPTY.to_string(),
            feed_dropped: labels::FEED_DROPPED.to_string(),
        }
    }
}

/// Display label, kind and value labels of one registered field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub kind: FieldKind,
    /// Raw value → display label, used by `Status` fields
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

impl FieldSpec {
    pub fn new(label: Option<&str>, kind: FieldKind) -> Self {
        Self {
            label: label.map(str::to_string),
            kind,
            values: BTreeMap::new(),
        }
    }
}

/// Partial field entry as written in a policy document
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FieldOverride {
    label: Option<String>,
    kind: Option<FieldKind>,
    #[serde(alias = "statuses")]
    values: BTreeMap<String, String>,
}

/// Field name → [`FieldSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldRegistry {
    specs: BTreeMap<String, FieldSpec>,
}

impl FieldRegistry {
    /// Registry with no fields; every field falls back to shape detection
    pub fn empty() -> Self {
        Self {
            specs: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for name in labels::INTERNAL_FIELDS {
            registry.insert(*name, FieldSpec::new(None, FieldKind::Internal));
        }
        for (name, label, kind, values) in labels::FIELDS {
            let mut spec = FieldSpec::new(Some(*label), *kind);
            spec.values = values
                .iter()
                .map(|(raw, shown)| (raw.to_string(), shown.to_string()))
                .collect();
            registry.insert(*name, spec);
        }
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: FieldSpec) {
        self.specs.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.get(name)
    }

    /// Registered kind, if the field is registered
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.get(name).map(|spec| spec.kind)
    }

    /// Display label, falling back to the raw field name
    pub fn label_for<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name)
            .and_then(|spec| spec.label.as_deref())
            .unwrap_or(name)
    }

    /// Display label of one enumerated value, if the field has one for it
    pub fn value_label(&self, name: &str, raw: &str) -> Option<&str> {
        self.get(name)
            .and_then(|spec| spec.values.get(raw))
            .map(String::as_str)
    }

    /// Kind for a delta: the registered kind, else a guess from the values
    pub fn kind_for(&self, name: &str, delta: &FieldDelta) -> FieldKind {
        if let Some(kind) = self.kind_of(name) {
            return kind;
        }
        let sides = || delta.old.iter().chain(delta.new.iter());
        if sides().any(Address::looks_like_address) {
            FieldKind::Address
        } else if name.ends_with("tags") && sides().any(TagRef::looks_like_tags) {
            FieldKind::TagSet
        } else {
            FieldKind::Scalar
        }
    }

    fn apply(&mut self, name: String, patch: FieldOverride) {
        let spec = self
            .specs
            .entry(name)
            .or_insert_with(|| FieldSpec::new(None, FieldKind::Scalar));
        if let Some(label) = patch.label {
            spec.label = Some(label);
        }
        if let Some(kind) = patch.kind {
            spec.kind = kind;
        }
        spec.values.extend(patch.values);
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for FieldRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let overrides = BTreeMap::<String, FieldOverride>::deserialize(deserializer)?;
        let mut registry = Self::builtin();
        for (name, patch) in overrides {
            registry.apply(name, patch);
        }
        Ok(registry)
    }
}

/// All configurable strings and field rules of the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPolicy {
    /// Actor shown when a change has no resolvable author
    pub system_actor_label: String,
    /// `{id}`
    pub unknown_user_label: String,
    /// `{id}`
    pub unknown_tag_label: String,
    pub empty_value_label: String,
    pub absent_value_label: String,
    pub true_label: String,
    pub false_label: String,
    pub currency_glyph: String,
    /// Offset applied to timestamps written without one, minutes east of UTC
    pub naive_offset_minutes: i32,
    pub actions: ActionLabels,
    pub templates: Templates,
    pub fields: FieldRegistry,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self {
            system_actor_label: labels::SYSTEM_ACTOR.to_string(),
            unknown_user_label: labels::UNKNOWN_USER.to_string(),
            unknown_tag_label: labels::UNKNOWN_TAG.to_string(),
            empty_value_label: labels::EMPTY_VALUE.to_string(),
            absent_value_label: labels::ABSENT_VALUE.to_string(),
            true_label: labels::BOOL_TRUE.to_string(),
            false_label: labels::BOOL_FALSE.to_string(),
            currency_glyph: labels::CURRENCY_GLYPH.to_string(),
            naive_offset_minutes: labels::NAIVE_OFFSET_MINUTES,
            actions: ActionLabels::default(),
            templates: Templates::default(),
            fields: FieldRegistry::builtin(),
        }
    }
}

impl RenderPolicy {
    /// Parse and validate a TOML policy document
    ///
    /// # Errors
    ///
    /// `InvalidPolicy` when the document is not valid TOML, has wrongly
    /// typed keys, or carries an offset of a day or more.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let policy: RenderPolicy = toml::from_str(source)?;
        policy.validate()?;
        Ok(policy)
    }

    /// # Errors
    ///
    /// `InvalidPolicy` when `naive_offset_minutes` is outside ±24h.
    pub fn validate(&self) -> Result<()> {
        if self.naive_offset_minutes.abs() >= MAX_OFFSET_MINUTES {
            return Err(ExError::new(ExErrorKind::InvalidPolicy)
                .with_op("load_policy")
                .with_message(format!(
                    "naive_offset_minutes must be within ±{}, got {}",
                    MAX_OFFSET_MINUTES, self.naive_offset_minutes
                )));
        }
        Ok(())
    }

    /// Offset for naive timestamps; UTC when the configured value is invalid
    pub fn naive_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.naive_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub fn action_label(&self, action: ActionType) -> &str {
        self.actions.label(action)
    }

    pub fn unknown_user(&self, id: &str) -> String {
        fill(&self.unknown_user_label, &[("id", id)])
    }

    pub fn unknown_tag(&self, id: &str) -> String {
        fill(&self.unknown_tag_label, &[("id", id)])
    }
}
