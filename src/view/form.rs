use crate::config::FieldConfig;
use crate::messages::MessageCatalog;
use crate::notify::{WarningCollector, WarningSink};
use crate::registry::FieldRegistry;
use crate::widget::{FieldWidget, WidgetContext};
use crate::{Record, Warning, WidgetError};
use std::sync::Arc;
use tracing::debug;

/// One rendered field of a form view
#[derive(Debug, Clone)]
pub struct RenderedField {
    /// Record attribute the field is bound to
    pub field: String,
    /// Registry key of the widget that produced the markup
    pub widget: String,
    /// Markup produced by the widget
    pub markup: String,
}

/// Outcome of rendering a form view once
///
/// Widgets live only for the duration of the render call; what remains
/// is their markup and whatever advisory warnings they raised.
#[derive(Debug, Clone)]
pub struct RenderCycle {
    pub fields: Vec<RenderedField>,
    pub warnings: Vec<Warning>,
}

/// Declarative form view
///
/// Holds the field list of one form (from configuration) together with
/// the message catalog and active locale its widgets localize through.
/// Each [`FormView::render`] call is one complete render cycle: every
/// configured field is constructed through the injected registry, in
/// order, within a single synchronous pass.
pub struct FormView {
    fields: Vec<FieldConfig>,
    messages: Arc<MessageCatalog>,
    locale: String,
}

impl FormView {
    /// Creates a view for the given field list
    ///
    /// # Arguments
    /// * `fields` - ordered field definitions (name, widget key, options)
    /// * `messages` - catalog used to localize widget warnings
    /// * `locale` - active locale tag
    pub fn new(
        fields: Vec<FieldConfig>,
        messages: Arc<MessageCatalog>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            fields,
            messages,
            locale: locale.into(),
        }
    }

    /// Render every configured field against `record`
    ///
    /// Constructs each widget through `registry`, collects the markup,
    /// and drains the warnings raised during this cycle. Warnings are
    /// advisory: a cycle that produced warnings still returns `Ok`.
    ///
    /// # Returns
    /// * `Ok(RenderCycle)` with the rendered fields and their warnings
    /// * `Err(WidgetError::UnknownWidget)` if a field names a widget key
    ///   the registry does not know
    pub fn render(
        &self,
        registry: &FieldRegistry,
        record: &Record,
    ) -> Result<RenderCycle, WidgetError> {
        let collector = Arc::new(WarningCollector::new());
        let sink: Arc<dyn WarningSink> = collector.clone();
        let ctx = WidgetContext::new(sink, self.messages.clone(), self.locale.clone());

        let mut rendered = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            let widget = registry.create(
                &field.widget,
                &ctx,
                &field.name,
                record,
                field.options.clone(),
            )?;
            rendered.push(RenderedField {
                field: field.name.clone(),
                widget: field.widget.clone(),
                markup: widget.render(),
            });
        }

        let warnings = collector.drain();
        debug!(
            fields = rendered.len(),
            warnings = warnings.len(),
            locale = %ctx.locale(),
            "form view rendered"
        );
        Ok(RenderCycle {
            fields: rendered,
            warnings,
        })
    }
}
