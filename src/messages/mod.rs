//! Message Catalog Module
//!
//! This module holds the user-facing message texts keyed by locale.
//! Widgets never embed display strings directly; they look them up
//! through the catalog carried in their widget context.

mod catalog;
pub use catalog::{MessageCatalog, MessageKey, DEFAULT_LOCALE};
