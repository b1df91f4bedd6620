//! Form View Module
//!
//! This module renders a declarative field list against one record. It
//! is the consumer side of the widget registry: the table is injected
//! per render call, never looked up from a global.

mod form;

pub use form::{FormView, RenderCycle, RenderedField};
