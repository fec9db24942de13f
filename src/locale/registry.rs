// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale registry: platform locale to map locale lookup.
//!
//! Entries are kept in registration order. Exact lookups match language,
//! script and region; the language-only fallback walks the entries in that
//! order and takes the first one with the same language, so the order of
//! [`LocaleRegistry::builtin`] is part of the observable behaviour.

use crate::error::LocalizationError;
use crate::locale::{Locale, MapLocale};
use crate::types::Language;
use indexmap::IndexMap;
use tracing::debug;
use unic_langid::langid;

#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    entries: IndexMap<Locale, MapLocale>,
}

impl LocaleRegistry {
    /// Registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the built-in entries.
    ///
    /// Order: en-US, fr-CA, en-CA, zh-CN, zh-TW, en-GB, ja-JP, ko-KR, de-DE,
    /// fr-FR, ru-RU, es-ES, pt-PT, pt-BR, vi-VN, it-IT, zh-Hans-CN, zh-Hant-TW.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        let builtin = [
            (Locale::from(langid!("en-US")), MapLocale::US),
            (Locale::from(langid!("fr-CA")), MapLocale::CANADA_FRENCH),
            (Locale::from(langid!("en-CA")), MapLocale::CANADA),
            (Locale::from(langid!("zh-CN")), MapLocale::CHINA),
            (Locale::from(langid!("zh-TW")), MapLocale::TAIWAN),
            (Locale::from(langid!("en-GB")), MapLocale::UK),
            (Locale::from(langid!("ja-JP")), MapLocale::JAPAN),
            (Locale::from(langid!("ko-KR")), MapLocale::KOREA),
            (Locale::from(langid!("de-DE")), MapLocale::GERMANY),
            (Locale::from(langid!("fr-FR")), MapLocale::FRANCE),
            (Locale::from(langid!("ru-RU")), MapLocale::RUSSIA),
            (Locale::from(langid!("es-ES")), MapLocale::SPAIN),
            (Locale::from(langid!("pt-PT")), MapLocale::PORTUGAL),
            (Locale::from(langid!("pt-BR")), MapLocale::BRAZIL),
            (Locale::from(langid!("vi-VN")), MapLocale::VIETNAM),
            (Locale::from(langid!("it-IT")), MapLocale::ITALY),
            (Locale::from(langid!("zh-Hans-CN")), MapLocale::CHINESE_HANS),
            (Locale::from(langid!("zh-Hant-TW")), MapLocale::CHINESE_HANT),
        ];
        for (locale, map_locale) in builtin {
            registry.add_map_locale(locale, map_locale);
        }
        registry
    }

    /// Register a locale. Re-registering an existing locale replaces its
    /// map locale but keeps its original position.
    pub fn add_map_locale(&mut self, locale: Locale, map_locale: MapLocale) {
        self.entries.insert(locale, map_locale);
    }

    /// Resolve a platform locale.
    ///
    /// Exact match first. Without an exact entry the language-only fallback
    /// is used when `accept_fallback` is set, otherwise the lookup fails with
    /// [`LocalizationError::UnresolvedLocale`].
    pub fn resolve(
        &self,
        locale: &Locale,
        accept_fallback: bool,
    ) -> Result<MapLocale, LocalizationError> {
        if let Some(found) = self.entries.get(locale) {
            return Ok(*found);
        }

        if accept_fallback {
            if let Some((fallback, found)) = self
                .entries
                .iter()
                .find(|(candidate, _)| candidate.language() == locale.language())
            {
                debug!(%locale, %fallback, "resolved locale through language fallback");
                return Ok(*found);
            }
        }

        Err(LocalizationError::UnresolvedLocale {
            locale: locale.to_string(),
        })
    }

    /// Explicit language selection; always succeeds.
    pub fn resolve_language(&self, language: Language) -> MapLocale {
        MapLocale::new(language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &MapLocale)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
