//! Read-only translation catalog.
//!
//! The backing file maps locale codes to key/value objects:
//!
//! ```json
//! { "en": { "greeting": "Hello" }, "fr": { "greeting": "Bonjour" } }
//! ```
//!
//! The catalog is loaded once and never mutated, so a shared reference can
//! be handed to any number of readers.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, UmbraError};

/// Translations for a single locale: key -> translated string.
pub type LocaleTranslations = BTreeMap<String, String>;

/// Two-level locale -> key -> value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    locales: BTreeMap<String, LocaleTranslations>,
}

impl TranslationCatalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `MissingCatalog` if the file does not exist, `Io` if it cannot
    /// be read, or `MalformedData` if it is not a locale -> key -> string map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UmbraError::MissingCatalog(path.to_path_buf())
            } else {
                UmbraError::Io(e)
            }
        })?;

        let locales: BTreeMap<String, LocaleTranslations> = serde_json::from_str(&content)
            .map_err(|e| UmbraError::malformed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            locales = locales.len(),
            "Loaded translation catalog"
        );
        Ok(Self { locales })
    }

    /// Locale codes in ascending order.
    #[must_use]
    pub fn list_locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// All translations for `locale`.
    ///
    /// # Errors
    ///
    /// Returns `LocaleNotFound` if the locale is absent.
    pub fn lookup_locale(&self, locale: &str) -> Result<&LocaleTranslations> {
        self.locales
            .get(locale)
            .ok_or_else(|| UmbraError::LocaleNotFound {
                locale: locale.to_string(),
            })
    }

    /// The translation of `key` in `locale`.
    ///
    /// # Errors
    ///
    /// Returns `LocaleNotFound` if the locale is absent (checked first), or
    /// `KeyNotFound` if the locale lacks the key.
    pub fn lookup_key(&self, locale: &str, key: &str) -> Result<&str> {
        self.lookup_locale(locale)?
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| UmbraError::KeyNotFound {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Number of locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "fr": {"greeting": "Bonjour", "thanks": "Merci"},
        "en": {"greeting": "Hello", "thanks": "Thank you"},
        "es": {"greeting": "Hola"}
    }"#;

    fn catalog() -> TranslationCatalog {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");
        fs::write(&path, SAMPLE).unwrap();
        TranslationCatalog::load(&path).unwrap()
    }

    #[test]
    fn test_list_locales_sorted() {
        assert_eq!(catalog().list_locales(), vec!["en", "es", "fr"]);
    }

    #[test]
    fn test_lookup_key() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_key("en", "greeting").unwrap(), "Hello");
        assert_eq!(catalog.lookup_key("fr", "thanks").unwrap(), "Merci");
    }

    #[test]
    fn test_lookup_key_unknown_locale_takes_precedence() {
        let catalog = catalog();
        let result = catalog.lookup_key("xx", "missing-key");
        assert!(matches!(result, Err(UmbraError::LocaleNotFound { .. })));
    }

    #[test]
    fn test_lookup_key_missing_key() {
        let catalog = catalog();
        let result = catalog.lookup_key("en", "missing-key");
        assert!(matches!(result, Err(UmbraError::KeyNotFound { .. })));
    }

    #[test]
    fn test_lookup_locale() {
        let catalog = catalog();
        let es = catalog.lookup_locale("es").unwrap();
        assert_eq!(es.len(), 1);
        assert!(matches!(
            catalog.lookup_locale("it"),
            Err(UmbraError::LocaleNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = TranslationCatalog::load("/nonexistent/translations.json");
        assert!(matches!(result, Err(UmbraError::MissingCatalog(_))));
    }

    #[test]
    fn test_load_rejects_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.json");
        fs::write(&path, r#"{"en": {"count": 3}}"#).unwrap();

        let result = TranslationCatalog::load(&path);
        assert!(matches!(result, Err(UmbraError::MalformedData { .. })));
    }

    #[test]
    fn test_len() {
        let mut locales = BTreeMap::new();
        locales.insert("de".to_string(), LocaleTranslations::new());
        let catalog = TranslationCatalog { locales };
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert!(TranslationCatalog::default().is_empty());
    }
}
