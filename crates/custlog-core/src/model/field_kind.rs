use serde::{Deserialize, Serialize};

/// Rendering policy attached to each field delta
///
/// The set is closed: the classifier is a total `match` over these variants,
/// so adding a field only means registering it under one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain value rendered verbatim
    Scalar,
    /// Enumerated value translated through the field's label table
    Status,
    /// Monetary amount with currency glyph and two decimals
    Currency,
    /// Count or quantity with thousands separators
    Numeric,
    /// Address sub-object, diffed per part
    Address,
    /// User id resolved through the actor directory
    Assignment,
    /// Collection of tag references, diffed as a set
    TagSet,
    /// ISO date or date-time
    Date,
    /// Bookkeeping column never shown in the feed
    Internal,
}
