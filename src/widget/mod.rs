//! Field Widget Module
//!
//! This module defines the field-widget contract of the form layer and the
//! base text-field implementation every text-like widget builds on.
//!
//! # Contract
//! A widget is constructed with the rendering context, the name of the
//! field it is bound to, the form's current record, and pass-through
//! options. Construction runs to completion within one call: value
//! binding, formatting, and any construction-time checks all happen
//! before the instance is handed back to the view.

mod field;
mod text_field;

pub use field::{FieldWidget, WidgetContext};
pub use text_field::TextField;
