use crate::validator::StockValidator;
use crate::widget::{FieldWidget, TextField, WidgetContext};
use crate::{Record, WidgetError, WidgetOptions};
use std::collections::HashMap;
use tracing::debug;

/// Constructor for one widget implementation.
///
/// Every factory takes the same inputs the host hands a widget at
/// construction time: the render-cycle context, the bound field name,
/// the form's record, and pass-through options.
pub type WidgetFactory =
    Box<dyn Fn(&WidgetContext, &str, &Record, WidgetOptions) -> Box<dyn FieldWidget> + Send + Sync>;

/// Widget registration table
///
/// Maps well-known string keys to widget constructors so declarative
/// view definitions can select an implementation by name. The table is
/// explicit state owned by whoever builds it; it is injected into the
/// view layer rather than living in a global.
pub struct FieldRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl FieldRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates the standard startup table
    ///
    /// # Registered Widgets
    /// - `"text"`: the base [`TextField`]
    /// - `"stock_validator"`: [`StockValidator`], the text field with the
    ///   chain-verification check
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(
            "text".to_string(),
            Box::new(|_ctx, field, record, options| {
                Box::new(TextField::new(field, record, options))
            }),
        );
        registry.factories.insert(
            "stock_validator".to_string(),
            Box::new(|ctx, field, record, options| {
                Box::new(StockValidator::new(ctx, field, record, options))
            }),
        );
        registry
    }

    /// Register a widget constructor under a key
    ///
    /// # Arguments
    /// * `key` - well-known name view definitions will use
    /// * `factory` - constructor invoked for each field bound to the key
    ///
    /// # Returns
    /// * `Ok(())` if the key was free
    /// * `Err(WidgetError::DuplicateWidget)` if the key is already taken;
    ///   a startup table has no legitimate overwrite, so collisions are
    ///   reported instead of silently replacing the earlier entry
    pub fn register(&mut self, key: &str, factory: WidgetFactory) -> Result<(), WidgetError> {
        if self.factories.contains_key(key) {
            return Err(WidgetError::DuplicateWidget(key.to_string()));
        }
        debug!(key, "registering field widget");
        self.factories.insert(key.to_string(), factory);
        Ok(())
    }

    /// Construct the widget registered under `key`
    ///
    /// # Arguments
    /// * `key` - registry key from the view definition
    /// * `ctx` - render-cycle context
    /// * `field` - record attribute the widget is bound to
    /// * `record` - the form's current record
    /// * `options` - pass-through widget options
    ///
    /// # Returns
    /// * `Ok(widget)` with a fully initialized instance
    /// * `Err(WidgetError::UnknownWidget)` if no constructor is registered
    pub fn create(
        &self,
        key: &str,
        ctx: &WidgetContext,
        field: &str,
        record: &Record,
        options: WidgetOptions,
    ) -> Result<Box<dyn FieldWidget>, WidgetError> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| WidgetError::UnknownWidget(key.to_string()))?;
        Ok(factory(ctx, field, record, options))
    }

    /// Whether a constructor is registered under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered widget keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCatalog;
    use crate::notify::{WarningCollector, WarningSink};
    use serde_json::json;
    use std::sync::Arc;

    fn create_test_context() -> (WidgetContext, Arc<WarningCollector>) {
        let collector = Arc::new(WarningCollector::new());
        let sink: Arc<dyn WarningSink> = collector.clone();
        let catalog = Arc::new(MessageCatalog::with_defaults());
        (WidgetContext::new(sink, catalog, "zh-CN"), collector)
    }

    #[test]
    fn test_defaults_register_both_widgets() {
        let registry = FieldRegistry::with_defaults();
        assert!(registry.contains("text"));
        assert!(registry.contains("stock_validator"));
        assert_eq!(registry.keys().count(), 2);
    }

    #[test]
    fn test_lookup_builds_a_checking_text_field() {
        let registry = FieldRegistry::with_defaults();
        let (ctx, collector) = create_test_context();

        let mut data = serde_json::Map::new();
        data.insert("tx_id".to_string(), json!("False"));
        let record = Record::new(data);

        let widget = registry
            .create("stock_validator", &ctx, "tx_id", &record, WidgetOptions::default())
            .unwrap();

        // Behaves as a text field and raised the one advisory warning.
        assert_eq!(widget.field_name(), "tx_id");
        assert_eq!(widget.value(), "False");
        assert_eq!(collector.drain().len(), 1);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let registry = FieldRegistry::with_defaults();
        let (ctx, _) = create_test_context();
        let record = Record::default();

        let result = registry.create("many2one", &ctx, "name", &record, WidgetOptions::default());
        assert_eq!(
            result.err(),
            Some(WidgetError::UnknownWidget("many2one".to_string()))
        );
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = FieldRegistry::with_defaults();
        let result = registry.register(
            "text",
            Box::new(|_ctx, field, record, options| {
                Box::new(TextField::new(field, record, options))
            }),
        );
        assert_eq!(
            result.err(),
            Some(WidgetError::DuplicateWidget("text".to_string()))
        );
    }
}
