//! Typed application context for TRACE.
//!
//! The selected-language state used to live in a globally mutable context;
//! here it is an explicit object with a defined lifecycle: constructed once
//! at app start from a translation table, read-only thereafter except
//! through [`LanguageContext::set_language`].
//!
//! The translation table itself is input data (a JSON object keyed by
//! language code); this crate only implements the lookup.
//!
//! # Example
//!
//! ```rust
//! use app_context::LanguageContext;
//! use serde_json::json;
//!
//! let table = json!({
//!     "en": { "profile": { "editProfile": "Edit Profile" } },
//!     "hi": { "profile": { "editProfile": "प्रोफ़ाइल संपादित करें" } },
//! });
//!
//! let context = LanguageContext::new(table);
//! assert_eq!(context.text("profile.editProfile"), "Edit Profile");
//!
//! context.set_language("Hindi").unwrap();
//! assert_eq!(context.text("profile.editProfile"), "प्रोफ़ाइल संपादित करें");
//! ```

use std::sync::RwLock;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Supported languages and their table codes.
const LANGUAGE_MAP: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Chinese", "zh"),
    ("Japanese", "ja"),
];

/// The fallback language.
const DEFAULT_LANGUAGE: &str = "English";

/// Errors that can occur when using the context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// The language is not in the supported set.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// The selected-language state with translation lookup.
#[derive(Debug)]
pub struct LanguageContext {
    translations: Value,
    selected: RwLock<String>,
}

impl LanguageContext {
    /// Create a context over the given translation table, selecting English.
    pub fn new(translations: Value) -> Self {
        Self {
            translations,
            selected: RwLock::new(DEFAULT_LANGUAGE.to_string()),
        }
    }

    /// Create a context with a specific initial language.
    pub fn with_language(translations: Value, language: &str) -> Result<Self, ContextError> {
        let context = Self::new(translations);
        context.set_language(language)?;
        Ok(context)
    }

    /// The currently selected language name.
    pub fn language(&self) -> String {
        self.selected
            .read()
            .map(|s| s.clone())
            .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string())
    }

    /// Select a language by name.
    pub fn set_language(&self, language: &str) -> Result<(), ContextError> {
        if !LANGUAGE_MAP.iter().any(|(name, _)| *name == language) {
            return Err(ContextError::UnknownLanguage(language.to_string()));
        }

        if let Ok(mut selected) = self.selected.write() {
            debug!(language = %language, "Language changed");
            *selected = language.to_string();
        }
        Ok(())
    }

    /// Names of the supported languages.
    pub fn available_languages(&self) -> Vec<&'static str> {
        LANGUAGE_MAP.iter().map(|(name, _)| *name).collect()
    }

    /// Look up a translation by dotted key, e.g. `"profile.editProfile"`.
    ///
    /// Falls back to English when the selected language has no entry, and
    /// to the key itself when English has none either.
    pub fn text(&self, key: &str) -> String {
        let code = language_code(&self.language());

        if let Some(value) = lookup(&self.translations, code, key) {
            return value;
        }

        if let Some(value) = lookup(&self.translations, "en", key) {
            return value;
        }

        key.to_string()
    }
}

/// Table code of a language name; falls back to English.
fn language_code(language: &str) -> &'static str {
    LANGUAGE_MAP
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, code)| *code)
        .unwrap_or("en")
}

/// Walk a dotted key through the language's subtree.
fn lookup(translations: &Value, code: &str, key: &str) -> Option<String> {
    let mut current = translations.get(code)?;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    current.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> Value {
        json!({
            "en": {
                "profile": {
                    "editProfile": "Edit Profile",
                    "selectLanguage": "Select Language",
                },
                "greeting": "Hello",
            },
            "hi": {
                "profile": {
                    "editProfile": "प्रोफ़ाइल संपादित करें",
                },
            },
        })
    }

    #[test]
    fn test_default_language_lookup() {
        let context = LanguageContext::new(table());
        assert_eq!(context.language(), "English");
        assert_eq!(context.text("profile.editProfile"), "Edit Profile");
        assert_eq!(context.text("greeting"), "Hello");
    }

    #[test]
    fn test_set_language_and_lookup() {
        let context = LanguageContext::new(table());
        context.set_language("Hindi").unwrap();
        assert_eq!(context.language(), "Hindi");
        assert_eq!(context.text("profile.editProfile"), "प्रोफ़ाइल संपादित करें");
    }

    #[test]
    fn test_falls_back_to_english() {
        let context = LanguageContext::new(table());
        context.set_language("Hindi").unwrap();
        // Not translated in Hindi, present in English.
        assert_eq!(context.text("profile.selectLanguage"), "Select Language");
    }

    #[test]
    fn test_falls_back_to_key() {
        let context = LanguageContext::new(table());
        assert_eq!(context.text("profile.unknownKey"), "profile.unknownKey");
    }

    #[test]
    fn test_unknown_language_rejected() {
        let context = LanguageContext::new(table());
        let err = context.set_language("Klingon").unwrap_err();
        assert_eq!(err, ContextError::UnknownLanguage("Klingon".to_string()));
        // Selection unchanged.
        assert_eq!(context.language(), "English");
    }

    #[test]
    fn test_available_languages() {
        let context = LanguageContext::new(table());
        let languages = context.available_languages();
        assert_eq!(languages.len(), 7);
        assert!(languages.contains(&"English"));
        assert!(languages.contains(&"Japanese"));
    }

    #[test]
    fn test_with_language() {
        let context = LanguageContext::with_language(table(), "Hindi").unwrap();
        assert_eq!(context.language(), "Hindi");

        assert!(LanguageContext::with_language(table(), "Klingon").is_err());
    }
}
