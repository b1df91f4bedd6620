//! This crate implements the form-field widget layer used by the stock views:
//! a base text field, a conditional validator that surfaces chain verification
//! failures, and the registration table through which declarative views select
//! widgets by name.

pub mod types; // Defines common data structures and types used throughout the widget layer.
pub mod messages; // Holds the locale-keyed catalog of user-facing message texts.
pub mod notify; // Defines the warning-display seam between widgets and the host.
pub mod widget; // Contains the field-widget contract and the base text field.
pub mod validator; // Contains the text field with the chain-verification check.
pub mod registry; // Manages registration and lookup of widget constructors.
pub mod view; // Renders declarative field lists through an injected registry.
pub mod config; // Defines and loads the configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use registry::FieldRegistry;
