//! Field Widget Registry Module
//!
//! This module provides the lookup table mapping widget keys to widget
//! constructors. The table is built once at startup and handed to the
//! view layer by the caller; nothing in this crate keeps a process-wide
//! registry.

mod table;

pub use table::{FieldRegistry, WidgetFactory};
