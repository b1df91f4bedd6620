//! Conditional Field Validation Module
//!
//! This module decorates the base text field with a one-time advisory
//! check against the record's chain verification flag. The check runs
//! once at construction, raises at most one localized warning, and never
//! blocks initialization or rendering.

mod stock;


pub use stock::{StockValidator, TX_ID_FIELD};
