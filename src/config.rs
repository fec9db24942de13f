// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization config files.
//!
//! ```yaml
//! accept_fallback: true
//! default_language: de
//! locales:
//!   - locale: de-AT
//!     language: GERMAN
//!   - locale: zh-HK
//!     language: zh-Hant
//! ```
//!
//! JSON is accepted too; the format follows the file extension.

use crate::locale::{Locale, LocaleRegistry, MapLocale};
use crate::types::Language;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizationConfig {
    #[serde(default)]
    pub accept_fallback: bool,
    pub default_language: Option<String>,
    #[serde(default)]
    pub locales: Vec<LocaleEntrySpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleEntrySpec {
    pub locale: String,
    pub language: String,
}

impl LocalizationConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let ext = path.extension().and_then(|s| s.to_str());
        if matches!(ext, Some("yaml") | Some("yml")) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))
        }
    }

    pub fn default_language(&self) -> Result<Option<Language>> {
        self.default_language
            .as_deref()
            .map(|value| {
                Language::parse(value).ok_or_else(|| anyhow!("unknown default_language '{}'", value))
            })
            .transpose()
    }

    /// Append the configured locales to `registry`, after whatever it
    /// already holds.
    pub fn apply_to(&self, registry: &mut LocaleRegistry) -> Result<()> {
        for entry in &self.locales {
            let locale = Locale::parse(&entry.locale)
                .with_context(|| format!("config locale '{}'", entry.locale))?;
            let language = Language::parse(&entry.language).ok_or_else(|| {
                anyhow!(
                    "unknown language '{}' for locale '{}'",
                    entry.language,
                    entry.locale
                )
            })?;
            registry.add_map_locale(locale, MapLocale::new(language));
        }
        Ok(())
    }

    /// Built-in registry extended with the configured locales.
    pub fn registry(&self) -> Result<LocaleRegistry> {
        let mut registry = LocaleRegistry::builtin();
        self.apply_to(&mut registry)?;
        Ok(registry)
    }
}
