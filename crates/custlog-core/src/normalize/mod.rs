//! Raw row normalizer
//!
//! Accepts every historical spelling of an audit row and produces canonical
//! [`ChangeLogEntry`] values. Rows that cannot yield an id, a customer, an
//! action and a timestamp are dropped and reported, never half-formed.

mod payload;
mod row;

pub use payload::extract_deltas;
pub use row::normalize_row;

use serde::Serialize;
use serde_json::Value;

use crate::model::{ChangeLogEntry, DroppedRow};
use crate::policy::RenderPolicy;

/// Outcome of normalizing a batch of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Normalized {
    pub entries: Vec<ChangeLogEntry>,
    pub dropped: Vec<DroppedRow>,
}

/// Normalize every row, keeping input order
///
/// Dropped rows are logged with their index and error code only; row
/// content is customer data and stays out of the log.
pub fn normalize_rows(rows: &[Value], policy: &RenderPolicy) -> Normalized {
    let mut out = Normalized::default();
    for (index, row) in rows.iter().enumerate() {
        match normalize_row(row, policy) {
            Ok(entry) => out.entries.push(entry),
            Err(reason) => {
                tracing::warn!(
                    row_index = index,
                    err.code = reason.kind().code(),
                    "Dropped malformed audit row"
                );
                out.dropped.push(DroppedRow { index, reason });
            }
        }
    }
    out
}
