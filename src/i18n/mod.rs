//! Internationalization module
//!
//! Provides translations for French (fr) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::debug!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string with `{name}` placeholders filled from `args`
    pub fn get_with(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.get(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("fr", "Fran\u{00E7}ais")]
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_code(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "fr_FR.UTF-8" -> "fr")
fn language_code(locale: &str) -> &'static str {
    let code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match code {
        "fr" => "fr",
        _ => "en",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(language_code("fr_FR.UTF-8"), "fr");
        assert_eq!(language_code("en_GB.UTF-8"), "en");
        assert_eq!(language_code("de_DE"), "en");
        assert_eq!(language_code("C"), "en");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("es");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("menu.add"), "Add equipment");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_placeholders() {
        let i18n = I18n::new("en");
        let text = i18n.get_with(
            "result.bill",
            &[("amount", "3600.00".to_string()), ("currency", "INR".to_string())],
        );
        assert_eq!(text, "Estimated Bi-monthly Bill: 3600.00 INR");
    }

    #[test]
    fn test_languages_have_same_keys() {
        let en = en::get_translations();
        let fr = fr::get_translations();
        let mut missing: Vec<&String> = en.keys().filter(|k| !fr.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "missing French keys: {:?}", missing);
        assert_eq!(en.len(), fr.len());
        assert_eq!(I18n::available_languages().len(), 2);
    }
}
