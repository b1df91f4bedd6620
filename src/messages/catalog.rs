use std::collections::HashMap;

/// Locale every catalog ships and the fallback for unknown locale tags.
///
/// Simplified Chinese is the reference locale: its texts are the ones
/// end users of the stock views have always seen.
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// Identifier of one user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Shown when a record's chain verification did not go through
    BlockchainVerificationError,
}

/// Locale-keyed table of user-facing message texts
///
/// Built once at startup and shared read-only across all widget
/// constructions. Lookup falls back to [`DEFAULT_LOCALE`] when the
/// requested locale has no entry for a key, so a misconfigured locale
/// tag degrades to the reference texts instead of an empty banner.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    texts: HashMap<String, HashMap<MessageKey, String>>,
}

impl MessageCatalog {
    /// Creates an empty catalog with no locales
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
        }
    }

    /// Creates a catalog preloaded with the shipped translations
    ///
    /// # Shipped Locales
    /// - `zh-CN`: the reference texts
    /// - `en`: English translations
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            DEFAULT_LOCALE,
            MessageKey::BlockchainVerificationError,
            "区块链验证错误！",
        );
        catalog.insert(
            "en",
            MessageKey::BlockchainVerificationError,
            "Blockchain verification error!",
        );
        catalog
    }

    /// Add or replace the text of one message in one locale
    ///
    /// # Arguments
    /// * `locale` - locale tag (e.g., "zh-CN")
    /// * `key` - message identifier
    /// * `text` - translated message text
    pub fn insert(&mut self, locale: &str, key: MessageKey, text: &str) {
        self.texts
            .entry(locale.to_string())
            .or_default()
            .insert(key, text.to_string());
    }

    /// Resolve a message for a locale
    ///
    /// Falls back to [`DEFAULT_LOCALE`] when the locale is unknown or is
    /// missing this key. Returns `None` only if the key is absent from
    /// the fallback locale as well, which cannot happen for a catalog
    /// built via [`MessageCatalog::with_defaults`].
    pub fn lookup(&self, locale: &str, key: MessageKey) -> Option<&str> {
        self.texts
            .get(locale)
            .and_then(|m| m.get(&key))
            .or_else(|| self.texts.get(DEFAULT_LOCALE).and_then(|m| m.get(&key)))
            .map(String::as_str)
    }

    /// Locales with at least one message
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_honors_active_locale() {
        let catalog = MessageCatalog::with_defaults();
        assert_eq!(catalog.locales().count(), 2);
        assert_eq!(
            catalog.lookup("en", MessageKey::BlockchainVerificationError),
            Some("Blockchain verification error!")
        );
        assert_eq!(
            catalog.lookup("zh-CN", MessageKey::BlockchainVerificationError),
            Some("区块链验证错误！")
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_reference_texts() {
        let catalog = MessageCatalog::with_defaults();
        assert_eq!(
            catalog.lookup("fr", MessageKey::BlockchainVerificationError),
            Some("区块链验证错误！")
        );
    }

    #[test]
    fn test_empty_catalog_has_no_fallback() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.lookup("zh-CN", MessageKey::BlockchainVerificationError),
            None
        );
    }
}
