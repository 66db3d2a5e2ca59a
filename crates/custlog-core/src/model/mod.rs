//! Canonical data model of the activity feed
//!
//! Entries are created once by the normalizer and never mutated; everything
//! downstream (change lines, feed items) is derived view data.

pub mod action;
pub mod address;
pub mod directory;
pub mod entry;
pub mod feed;
pub mod field_kind;
pub mod tag;

pub use action::ActionType;
pub use address::{Address, AddressPart};
pub use directory::{ActorDirectory, TagDirectory, TagInfo};
pub use entry::{value_key, ChangeLogEntry, FieldChange, FieldDelta, RawValue};
pub use feed::{ChangeLine, DroppedRow, Feed, FeedItem};
pub use field_kind::FieldKind;
pub use tag::TagRef;
