use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Form record handed over by the host runtime.
///
/// `data` holds the current field values of one form view as decoded JSON.
/// The record is owned by the host; widgets only ever read from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    /// Build a record from raw field values
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    /// String value of a field.
    ///
    /// Returns `None` for absent fields and for any non-string value,
    /// including native booleans. Sentinel checks against string codes
    /// must go through here so they never coerce other JSON types.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }
}

/// Options forwarded unchanged to a widget at construction time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetOptions {
    /// Text shown by a text field when the bound value is empty
    pub placeholder: Option<String>,
    /// Render the field as non-editable
    #[serde(default)]
    pub readonly: bool,
}

/// Advisory notification surfaced to the user.
///
/// Warnings never block construction, rendering, or editing; they are
/// displayed by whatever sink the host wired into the widget context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// Field the warning originated from
    pub field: String,
    /// Localized, user-facing message text
    pub message: String,
    /// When the warning was raised
    pub raised_at: DateTime<Utc>,
}

impl Warning {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            raised_at: Utc::now(),
        }
    }
}

/// Widget registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("no widget registered under key '{0}'")]
    UnknownWidget(String),
    #[error("widget key '{0}' is already registered")]
    DuplicateWidget(String),
}
