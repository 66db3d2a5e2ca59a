//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Row identifiers
pub const FIELD_ROW_INDEX: &str = "row_index";

// Collection sizes
pub const FIELD_ROWS_LEN: &str = "rows_len";
pub const FIELD_ITEMS_LEN: &str = "items_len";
pub const FIELD_DROPPED_LEN: &str = "dropped_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
