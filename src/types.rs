// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for map-localize
//!
//! Language tokens, streets schema generations and the read-only
//! snapshots of style sources and layers handed over by the style host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Map label languages.
///
/// Each token resolves to one name field in the streets vector tiles:
/// `name_<suffix>`, or plain `name` for [`Language::LocalName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    /// The name in the local language of the feature.
    LocalName,
    English,
    French,
    Arabic,
    Spanish,
    German,
    Portuguese,
    Russian,
    Chinese,
    SimplifiedChinese,
    TraditionalChinese,
    Japanese,
    Korean,
    Vietnamese,
    Italian,
}

impl Language {
    /// Field suffix for this language, `None` for the local name.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Language::LocalName => None,
            Language::English => Some("en"),
            Language::French => Some("fr"),
            Language::Arabic => Some("ar"),
            Language::Spanish => Some("es"),
            Language::German => Some("de"),
            Language::Portuguese => Some("pt"),
            Language::Russian => Some("ru"),
            Language::Chinese => Some("zh"),
            Language::SimplifiedChinese => Some("zh-Hans"),
            Language::TraditionalChinese => Some("zh-Hant"),
            Language::Japanese => Some("ja"),
            Language::Korean => Some("ko"),
            Language::Vietnamese => Some("vi"),
            Language::Italian => Some("it"),
        }
    }

    /// Vector tile property holding the label in this language.
    pub fn field_name(&self) -> &'static str {
        match self {
            Language::LocalName => "name",
            Language::English => "name_en",
            Language::French => "name_fr",
            Language::Arabic => "name_ar",
            Language::Spanish => "name_es",
            Language::German => "name_de",
            Language::Portuguese => "name_pt",
            Language::Russian => "name_ru",
            Language::Chinese => "name_zh",
            Language::SimplifiedChinese => "name_zh-Hans",
            Language::TraditionalChinese => "name_zh-Hant",
            Language::Japanese => "name_ja",
            Language::Korean => "name_ko",
            Language::Vietnamese => "name_vi",
            Language::Italian => "name_it",
        }
    }

    /// Upper-case token name, e.g. `SIMPLIFIED_CHINESE`.
    pub fn token(&self) -> &'static str {
        match self {
            Language::LocalName => "LOCAL_NAME",
            Language::English => "ENGLISH",
            Language::French => "FRENCH",
            Language::Arabic => "ARABIC",
            Language::Spanish => "SPANISH",
            Language::German => "GERMAN",
            Language::Portuguese => "PORTUGUESE",
            Language::Russian => "RUSSIAN",
            Language::Chinese => "CHINESE",
            Language::SimplifiedChinese => "SIMPLIFIED_CHINESE",
            Language::TraditionalChinese => "TRADITIONAL_CHINESE",
            Language::Japanese => "JAPANESE",
            Language::Korean => "KOREAN",
            Language::Vietnamese => "VIETNAMESE",
            Language::Italian => "ITALIAN",
        }
    }

    /// Parse a language from its token (`GERMAN`), suffix (`de`) or
    /// field name (`name_de`). Tokens are case-insensitive, suffixes and
    /// field names are matched exactly.
    pub fn parse(value: &str) -> Option<Language> {
        let value = value.trim();
        Language::all().iter().copied().find(|language| {
            language.token().eq_ignore_ascii_case(value)
                || language.field_name() == value
                || language.suffix() == Some(value)
        })
    }

    /// All languages, in declaration order.
    pub fn all() -> &'static [Language] {
        &[
            Language::LocalName,
            Language::English,
            Language::French,
            Language::Arabic,
            Language::Spanish,
            Language::German,
            Language::Portuguese,
            Language::Russian,
            Language::Chinese,
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
            Language::Japanese,
            Language::Korean,
            Language::Vietnamese,
            Language::Italian,
        ]
    }

    pub fn is_chinese(&self) -> bool {
        matches!(
            self,
            Language::Chinese | Language::SimplifiedChinese | Language::TraditionalChinese
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Generations of the streets vector tile schema.
///
/// They differ in which localized name fields exist, so the field a label
/// must read depends on the generation backing the layer's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaGeneration {
    StreetsV6,
    StreetsV7,
    StreetsV8,
}

impl SchemaGeneration {
    /// Dataset identifier that appears in the backing URL of a source.
    pub fn dataset_id(&self) -> &'static str {
        match self {
            SchemaGeneration::StreetsV6 => "mapbox.mapbox-streets-v6",
            SchemaGeneration::StreetsV7 => "mapbox.mapbox-streets-v7",
            SchemaGeneration::StreetsV8 => "mapbox.mapbox-streets-v8",
        }
    }

    pub fn all() -> &'static [SchemaGeneration] {
        &[
            SchemaGeneration::StreetsV6,
            SchemaGeneration::StreetsV7,
            SchemaGeneration::StreetsV8,
        ]
    }
}

impl fmt::Display for SchemaGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaGeneration::StreetsV6 => write!(f, "streets-v6"),
            SchemaGeneration::StreetsV7 => write!(f, "streets-v7"),
            SchemaGeneration::StreetsV8 => write!(f, "streets-v8"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Vector,
    Other(String),
}

impl SourceKind {
    pub fn from_type(value: &str) -> Self {
        match value {
            "vector" => SourceKind::Vector,
            other => SourceKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Symbol,
    Other(String),
}

impl LayerKind {
    pub fn from_type(value: &str) -> Self {
        match value {
            "symbol" => LayerKind::Symbol,
            other => LayerKind::Other(other.to_string()),
        }
    }
}

/// Read-only snapshot of one style source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub id: String,
    pub kind: SourceKind,
    pub url: Option<String>,
}

impl SourceDescriptor {
    pub fn vector(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: SourceKind::Vector,
            url: Some(url.into()),
        }
    }
}

/// Read-only snapshot of one style layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub id: String,
    pub kind: LayerKind,
    /// Source the layer draws from; background layers have none.
    pub source: Option<String>,
}

impl LayerDescriptor {
    pub fn is_symbol(&self) -> bool {
        self.kind == LayerKind::Symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_suffix() {
        for language in Language::all() {
            match language.suffix() {
                Some(suffix) => assert_eq!(language.field_name(), format!("name_{}", suffix)),
                None => assert_eq!(language.field_name(), "name"),
            }
        }
    }

    #[test]
    fn parse_accepts_token_suffix_and_field() {
        assert_eq!(Language::parse("GERMAN"), Some(Language::German));
        assert_eq!(Language::parse("simplified_chinese"), Some(Language::SimplifiedChinese));
        assert_eq!(Language::parse("zh-Hant"), Some(Language::TraditionalChinese));
        assert_eq!(Language::parse("name_ja"), Some(Language::Japanese));
        assert_eq!(Language::parse("name"), Some(Language::LocalName));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn chinese_variants() {
        assert!(Language::Chinese.is_chinese());
        assert!(Language::SimplifiedChinese.is_chinese());
        assert!(Language::TraditionalChinese.is_chinese());
        assert!(!Language::Japanese.is_chinese());
    }

    #[test]
    fn dataset_ids_are_disjoint() {
        let ids: Vec<_> = SchemaGeneration::all().iter().map(|g| g.dataset_id()).collect();
        for (i, a) in ids.iter().enumerate() {
            for (j, b) in ids.iter().enumerate() {
                if i != j {
                    assert!(!a.contains(b));
                }
            }
        }
    }

    #[test]
    fn kinds_from_type_strings() {
        assert_eq!(SourceKind::from_type("vector"), SourceKind::Vector);
        assert_eq!(
            SourceKind::from_type("raster"),
            SourceKind::Other("raster".to_string())
        );
        assert_eq!(LayerKind::from_type("symbol"), LayerKind::Symbol);
    }
}
