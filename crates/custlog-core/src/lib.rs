//! custlog core - customer activity audit diff & summarization engine
//!
//! This crate turns raw audit-log rows recorded against a customer into a
//! readable activity feed:
//! - Normalization of every historical row spelling into [`ChangeLogEntry`]
//! - Field-level classification into Thai sentence fragments (status labels,
//!   amounts, addresses, assignments, tag sets, dates)
//! - Noise suppression (no-op deltas, bookkeeping columns)
//! - A stable, newest-first, filterable feed
//!
//! Everything here is synchronous, does no I/O and holds no global state:
//! directories and the render policy are passed in by reference.
//!
//! ```
//! use custlog_core::{summarize, ActorDirectory, ClassifyContext, FeedFilter, RenderPolicy, TagDirectory};
//! use serde_json::json;
//!
//! let rows = vec![json!({
//!     "id": 1,
//!     "customer_id": "C-100",
//!     "action_type": "update",
//!     "created_at": "2024-03-05T10:00:00+07:00",
//!     "changes": {"lifecycle_status": {"old": "New", "new": "FollowUp"}}
//! })];
//! let actors = ActorDirectory::new();
//! let tags = TagDirectory::new();
//! let policy = RenderPolicy::default();
//! let ctx = ClassifyContext::new(&actors, &tags, &policy);
//!
//! let feed = summarize(&rows, &ctx, &FeedFilter::default());
//! assert_eq!(feed.items[0].lines[0].text, "สถานะลูกค้า: ลูกค้าใหม่ → ติดตาม");
//! ```

pub mod classify;
pub mod errors;
pub mod labels;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod policy;
pub mod summary;
pub mod timestamp;

#[doc(hidden)]
pub use custlog_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use classify::{classify, classify_change, ClassifyContext};
pub use errors::{ExError, ExErrorKind, NormalizeError, Result};
pub use model::{
    ActionType, ActorDirectory, ChangeLine, ChangeLogEntry, DroppedRow, Feed, FeedItem,
    FieldChange, FieldDelta, FieldKind, TagDirectory, TagInfo,
};
pub use normalize::{normalize_row, normalize_rows, Normalized};
pub use policy::{FieldRegistry, FieldSpec, RenderPolicy};
pub use summary::{render_feed_text, summarize, summarize_entries, FeedFilter};
