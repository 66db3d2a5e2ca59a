//! Value rendering shared by the per-kind classifiers

use serde_json::Value;

use crate::model::{value_key, FieldKind};
use crate::policy::RenderPolicy;
use crate::timestamp::parse_date_like;

/// Decimal places kept for currency amounts
const CURRENCY_DECIMALS: usize = 2;
/// Most decimal places kept for plain numbers, trailing zeros trimmed
const NUMBER_DECIMALS: usize = 3;

/// Group the integer digits of a formatted number in threes
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with thousands separators
///
/// `trim` drops trailing fractional zeros (and the point when nothing is
/// left).
pub fn format_number(value: f64, decimals: usize, trim: bool) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = if trim {
        frac_part.trim_end_matches('0')
    } else {
        frac_part
    };

    let is_zero = int_part.chars().chain(frac_part.chars()).all(|c| c == '0');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Numeric reading of a value; numeric strings (with or without
/// separators) count
pub fn as_number(value: &Value) -> Option<f64> {
    Reading::of(value).map(Reading::as_f64)
}

/// Numeric reading of a value, exact for integers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Int(i128),
    Float(f64),
}

impl Reading {
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(|i| Self::Int(i.into()))
                .or_else(|| n.as_u64().map(|u| Self::Int(u.into())))
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::String(s) => {
                let cleaned = s.trim().replace(',', "");
                cleaned
                    .parse::<i128>()
                    .ok()
                    .map(Self::Int)
                    .or_else(|| {
                        cleaned
                            .parse::<f64>()
                            .ok()
                            .filter(|f| f.is_finite())
                            .map(Self::Float)
                    })
            }
            _ => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Numeric equality; `5` and `5.0` are the same number
    pub fn same(self, other: Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    /// Thousands-grouped form; integers are printed exactly
    pub fn format(self) -> String {
        match self {
            Self::Int(i) => {
                let grouped = group_thousands(&i.unsigned_abs().to_string());
                if i < 0 {
                    format!("-{}", grouped)
                } else {
                    grouped
                }
            }
            Self::Float(f) => format_number(f, NUMBER_DECIMALS, true),
        }
    }
}

pub fn format_currency(amount: f64, policy: &RenderPolicy) -> String {
    let digits = format_number(amount, CURRENCY_DECIMALS, false);
    match digits.strip_prefix('-') {
        Some(abs) => format!("-{}{}", policy.currency_glyph, abs),
        None => format!("{}{}", policy.currency_glyph, digits),
    }
}

/// Generic display form of a value
pub fn display_value(value: &Value, policy: &RenderPolicy) -> String {
    match value {
        Value::Null => policy.absent_value_label.clone(),
        Value::Bool(true) => policy.true_label.clone(),
        Value::Bool(false) => policy.false_label.clone(),
        Value::Number(n) => Reading::of(value)
            .map(Reading::format)
            .unwrap_or_else(|| n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                policy.empty_value_label.clone()
            } else if let Some(date) = parse_date_like(trimmed, policy.naive_offset()) {
                date.format_thai(policy.naive_offset())
            } else {
                trimmed.to_string()
            }
        }
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display form of a value under the rules of its field kind
///
/// Values a kind cannot interpret (unknown status, non-numeric amount,
/// unparseable date) fall back to [`display_value`].
pub fn render_value(field: &str, kind: FieldKind, value: &Value, policy: &RenderPolicy) -> String {
    match kind {
        FieldKind::Status => value_key(value)
            .and_then(|raw| policy.fields.value_label(field, &raw).map(str::to_string))
            .unwrap_or_else(|| display_value(value, policy)),
        FieldKind::Currency => as_number(value)
            .map(|amount| format_currency(amount, policy))
            .unwrap_or_else(|| display_value(value, policy)),
        FieldKind::Numeric => Reading::of(value)
            .map(Reading::format)
            .unwrap_or_else(|| display_value(value, policy)),
        FieldKind::Date => value
            .as_str()
            .and_then(|s| parse_date_like(s, policy.naive_offset()))
            .map(|date| date.format_thai(policy.naive_offset()))
            .unwrap_or_else(|| display_value(value, policy)),
        FieldKind::Scalar
        | FieldKind::Address
        | FieldKind::Assignment
        | FieldKind::TagSet
        | FieldKind::Internal => display_value(value, policy),
    }
}

/// Raw text of a numeric value, used when rounded forms would collide
fn raw_number(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// Render both sides of a delta
///
/// Distinct numbers whose rounded renderings coincide fall back to their
/// raw text so the change stays visible.
pub fn render_sides(
    old: Option<&Value>,
    new: Option<&Value>,
    render: impl Fn(&Value) -> String,
) -> (Option<String>, Option<String>) {
    let old_text = old.map(&render);
    let new_text = new.map(&render);
    if let (Some(o), Some(n)) = (old, new) {
        if old_text == new_text {
            if let (Some(x), Some(y)) = (Reading::of(o), Reading::of(n)) {
                if !x.same(y) {
                    return (Some(raw_number(o)), Some(raw_number(n)));
                }
            }
        }
    }
    (old_text, new_text)
}
