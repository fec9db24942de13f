// SPDX-License-Identifier: PMPL-1.0-or-later

//! Platform locale identifiers.
//!
//! Accepts both BCP 47 tags (`zh-Hans-CN`) and POSIX locale names
//! (`de_DE.UTF-8@euro`). Only the language, script and region subtags are
//! kept; variants and extensions are dropped.

use crate::error::LocalizationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(LanguageIdentifier);

impl Locale {
    pub fn parse(value: &str) -> Result<Self, LocalizationError> {
        let invalid = || LocalizationError::InvalidLocale(value.to_string());

        // POSIX codeset and modifier: de_DE.UTF-8@euro
        let base = value.trim().split(['.', '@']).next().unwrap_or_default();

        let id: LanguageIdentifier = base.parse().map_err(|_| invalid())?;
        // Map data only carries two- and three-letter language codes; this
        // also rejects `und` and five-plus letter subtags such as "english".
        let language = id.language.as_str();
        if language == "und" || !(2..=3).contains(&language.len()) {
            return Err(invalid());
        }

        Ok(Self::from(id))
    }

    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    pub fn script(&self) -> Option<&str> {
        self.0.script.as_ref().map(|script| script.as_str())
    }

    pub fn region(&self) -> Option<&str> {
        self.0.region.as_ref().map(|region| region.as_str())
    }

    pub fn as_language_identifier(&self) -> &LanguageIdentifier {
        &self.0
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(mut id: LanguageIdentifier) -> Self {
        id.clear_variants();
        Self(id)
    }
}

impl FromStr for Locale {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocalizationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    #[test]
    fn parses_bcp47_with_script() {
        let locale = Locale::parse("zh-hans-cn").unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.script(), Some("Hans"));
        assert_eq!(locale.region(), Some("CN"));
        assert_eq!(locale.to_string(), "zh-Hans-CN");
    }

    #[test]
    fn parses_posix_names() {
        let locale = Locale::parse("de_DE.UTF-8@euro").unwrap();
        assert_eq!(locale, Locale::from(langid!("de-DE")));
        assert_eq!(Locale::parse("fr").unwrap(), Locale::from(langid!("fr")));
    }

    #[test]
    fn numeric_region_and_variants() {
        let locale = Locale::parse("es-419").unwrap();
        assert_eq!(locale.region(), Some("419"));

        let locale = Locale::parse("en-US-posix").unwrap();
        assert_eq!(locale, Locale::from(langid!("en-US")));
        assert_eq!(locale.to_string(), "en-US");
    }

    #[test]
    fn rejects_non_language_tags() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("C").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("und-US").is_err());
        assert!(Locale::parse("12-US").is_err());
    }

    #[test]
    fn serializes_as_tag() {
        let locale = Locale::parse("pt_BR").unwrap();
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"pt-BR\"");
        let back: Locale = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(back, locale);
        assert!(serde_json::from_str::<Locale>("\"C\"").is_err());
    }
}
