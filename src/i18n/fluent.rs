// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles loaded from the embedded `assets/i18n/*.ftl` files.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded locale and picks the current one from the CLI,
    /// the config file, then the OS, falling back to `en-US`.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(filename, ?errors, "skipping unparseable translation file");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(filename, ?errors, "duplicate translation entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(|| {
                DEFAULT_LOCALE.parse().unwrap_or_default()
            });

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key`, falling back to a visible marker when missing.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn parse_available(value: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    value
        .parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI
    if let Some(lang) = cli_lang.and_then(|value| parse_available(&value, available)) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|value| parse_available(value, available))
    {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().and_then(|value| parse_available(&value, available))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(value: &str) -> LanguageIdentifier {
        value.parse().expect("valid language identifier")
    }

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid("en-US"), langid("fr")]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid("fr")));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid("fr")));
    }

    #[test]
    fn unknown_language_is_skipped() {
        let config = Config::default();
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        // Falls through to the OS locale, which depends on the machine
        if let Some(lang) = lang {
            assert!(available().contains(&lang));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&langid("en-US")));
        assert_eq!(i18n.current_locale(), &langid("fr"));
    }

    #[test]
    fn translations_resolve_per_locale() {
        let english = I18n::new(Some("en-US".to_string()), &Config::default());
        let french = I18n::new(Some("fr".to_string()), &Config::default());

        assert!(!english.tr("deck-empty-title").starts_with("MISSING"));
        assert_ne!(english.tr("deck-empty-title"), french.tr("deck-empty-title"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale(langid("de"));
        assert_eq!(i18n.current_locale(), &langid("en-US"));
    }
}
