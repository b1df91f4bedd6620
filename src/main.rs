use std::fs;
use std::sync::Arc;
use stock_validator::{
    config::Config,
    messages::MessageCatalog,
    registry::FieldRegistry,
    view::FormView,
    Record,
};
use tracing::{info, warn};

/// The main entry point for the widget-layer demo binary.
///
/// This function initializes logging, loads the configuration, builds
/// the message catalog and the widget registration table, and renders
/// the configured form view once against the configured record.
fn main() -> anyhow::Result<()> {
    // Initialize logging with the default stdout formatter.
    tracing_subscriber::fmt::init();

    let config = Config::load("config/default.toml")?;
    info!("Widget layer starting with config: {:?}", config);

    // Build the message catalog with the shipped translations.
    let messages = Arc::new(MessageCatalog::with_defaults());

    // Build the widget registration table once at startup. The table is
    // passed into the view below; nothing holds it globally.
    let registry = FieldRegistry::with_defaults();

    // Load the record the view is rendered against.
    let content = fs::read_to_string(&config.view.record_path)?;
    let record: Record = serde_json::from_str(&content)?;

    // Render the configured form view once.
    let view = FormView::new(config.view.fields, messages, config.locale.tag);
    let cycle = view.render(&registry, &record)?;

    for field in &cycle.fields {
        info!(field = %field.field, widget = %field.widget, "{}", field.markup);
    }
    for warning in &cycle.warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }

    Ok(())
}
