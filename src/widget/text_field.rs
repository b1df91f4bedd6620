use crate::widget::FieldWidget;
use crate::{Record, WidgetOptions};
use serde_json::Value;

/// Base text-field widget
///
/// Binds one record attribute to an editable text control. Performs the
/// standard text-field initialization every text-like widget shares:
/// value binding, formatting of non-string values, and option handling.
/// No validation of any kind happens here.
pub struct TextField {
    /// Record attribute this field is bound to
    field: String,
    /// Bound value, formatted to text at construction time
    value: String,
    /// Pass-through rendering options
    options: WidgetOptions,
}

impl TextField {
    /// Creates a text field bound to `field` of `record`
    ///
    /// # Value Binding
    /// - string values pass through unchanged
    /// - numbers and booleans are formatted to their text form
    /// - absent or null attributes bind the empty string
    ///
    /// # Arguments
    /// * `field` - name of the record attribute to bind
    /// * `record` - the form's current record
    /// * `options` - rendering options, stored unchanged
    pub fn new(field: &str, record: &Record, options: WidgetOptions) -> Self {
        Self {
            field: field.to_string(),
            value: Self::bind_value(record, field),
            options,
        }
    }

    /// Format a record attribute for display in a text control
    fn bind_value(record: &Record, field: &str) -> String {
        match record.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl FieldWidget for TextField {
    fn field_name(&self) -> &str {
        &self.field
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn render(&self) -> String {
        let mut attrs = format!(" name=\"{}\"", self.field);
        if let Some(placeholder) = &self.options.placeholder {
            attrs.push_str(&format!(" placeholder=\"{}\"", placeholder));
        }
        if self.options.readonly {
            attrs.push_str(" readonly");
        }
        format!("<textarea{}>{}</textarea>", attrs, self.value)
    }
}
