use crate::messages::{MessageCatalog, MessageKey};
use crate::notify::WarningSink;
use crate::Warning;
use std::sync::Arc;
use tracing::debug;

/// Contract every registered field widget satisfies.
///
/// Widgets are read-only views over one record attribute: they bind the
/// attribute's value at construction time and render it on demand. The
/// view that constructed a widget discards it together with the form
/// view; widgets hold no state beyond the bound value and their options.
pub trait FieldWidget {
    /// Name of the record attribute this widget is bound to
    fn field_name(&self) -> &str;

    /// The bound value as text (empty when the attribute is absent)
    fn value(&self) -> &str;

    /// Produce the markup for this field
    fn render(&self) -> String;
}

/// Per-render-cycle context handed to every widget constructor.
///
/// Carries the host capabilities a widget may need while initializing:
/// the warning-display sink and the message catalog with the active
/// locale. Cloning is cheap; all shared parts are behind `Arc`.
#[derive(Clone)]
pub struct WidgetContext {
    warnings: Arc<dyn WarningSink>,
    messages: Arc<MessageCatalog>,
    locale: String,
}

impl WidgetContext {
    /// Creates a context for one render cycle
    ///
    /// # Arguments
    /// * `warnings` - sink the host displays warnings through
    /// * `messages` - message catalog used to localize warning texts
    /// * `locale` - active locale tag (e.g., "zh-CN")
    pub fn new(
        warnings: Arc<dyn WarningSink>,
        messages: Arc<MessageCatalog>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            warnings,
            messages,
            locale: locale.into(),
        }
    }

    /// Active locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Raise a localized advisory warning for a field.
    ///
    /// Resolves `key` against the catalog in the active locale and hands
    /// the result to the warning sink. Never fails: if the catalog has no
    /// text for the key at all, the warning is dropped with a debug log
    /// rather than surfacing an empty banner.
    pub fn raise_warning(&self, field: &str, key: MessageKey) {
        match self.messages.lookup(&self.locale, key) {
            Some(text) => self.warnings.raise(Warning::new(field, text)),
            None => debug!(?key, locale = %self.locale, "no catalog text for warning, dropping"),
        }
    }
}
