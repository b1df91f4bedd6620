//! Configuration Module
//!
//! This module defines all configuration structures for the widget layer.
//! Configuration is loaded from TOML files and parsed using serde.

use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Contains all configuration sections for the widget layer.
/// Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [locale]
/// tag = "zh-CN"
///
/// [view]
/// record_path = "config/record.json"
///
/// [[view.fields]]
/// name = "tx_id"
/// widget = "stock_validator"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub locale: LocaleConfig,
    pub view: ViewConfig,
}

/// Locale configuration
///
/// Selects which message-catalog locale user-facing warnings are
/// rendered in.
///
/// # Fields
/// - `tag`: locale tag such as "zh-CN" or "en" (defaults to "zh-CN",
///   the locale the message catalog always ships)
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_locale_tag")]
    pub tag: String,
}

fn default_locale_tag() -> String {
    "zh-CN".to_string()
}

/// Form view configuration
///
/// Declares which widget renders each field of the form, by registry key.
///
/// # Fields
/// - `record_path`: path of the JSON record the binary renders
/// - `fields`: ordered field list; each entry names a record attribute
///   and the registry key of the widget bound to it
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    pub record_path: String,
    pub fields: Vec<FieldConfig>,
}

/// One field of a declarative view definition
///
/// # Fields
/// - `name`: record attribute this field is bound to
/// - `widget`: registry key of the widget implementation (e.g., "text"
///   or "stock_validator")
/// - `options`: widget options forwarded unchanged to the constructor
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    pub widget: String,
    #[serde(default)]
    pub options: crate::WidgetOptions,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path of the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` when the file was read and parsed
    /// * `Err` when the file is unreadable or the TOML does not match
    ///   the structures above
    ///
    /// # Example
    /// ```no_run
    /// # use stock_validator::Config;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::load("config/default.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_view_and_locale() {
        let toml_str = r#"
            [locale]
            tag = "en"

            [view]
            record_path = "config/record.json"

            [[view.fields]]
            name = "name"
            widget = "text"

            [[view.fields]]
            name = "tx_id"
            widget = "stock_validator"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.locale.tag, "en");
        assert_eq!(config.view.fields.len(), 2);
        assert_eq!(config.view.fields[1].name, "tx_id");
        assert_eq!(config.view.fields[1].widget, "stock_validator");
    }

    #[test]
    fn test_locale_tag_defaults_to_zh_cn() {
        let toml_str = r#"
            [locale]

            [view]
            record_path = "config/record.json"
            fields = []
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.locale.tag, "zh-CN");
    }
}
