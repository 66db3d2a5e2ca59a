//! Core types shared across custlog facilities
//!
//! This crate provides the foundational types used by both the logging
//! facility and the command-line front end:
//!
//! - **Correlation types**: RequestId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
