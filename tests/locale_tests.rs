// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale registry resolution through the public API

use map_localize::locale::{Locale, LocaleRegistry, MapLocale};
use map_localize::types::Language;
use map_localize::LocalizationError;

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).expect("valid locale")
}

#[test]
fn test_every_registered_locale_resolves_exactly() {
    let registry = LocaleRegistry::builtin();
    assert_eq!(registry.len(), 18);
    for (registered, expected) in registry.iter() {
        let found = registry
            .resolve(registered, false)
            .unwrap_or_else(|err| panic!("{} should resolve: {}", registered, err));
        assert_eq!(&found, expected);
    }
}

#[test]
fn test_registration_order_is_observable() {
    let registry = LocaleRegistry::builtin();
    let order: Vec<String> = registry.iter().map(|(l, _)| l.to_string()).collect();
    assert_eq!(
        order,
        vec![
            "en-US", "fr-CA", "en-CA", "zh-CN", "zh-TW", "en-GB", "ja-JP", "ko-KR", "de-DE",
            "fr-FR", "ru-RU", "es-ES", "pt-PT", "pt-BR", "vi-VN", "it-IT", "zh-Hans-CN",
            "zh-Hant-TW"
        ]
    );
}

#[test]
fn test_fallback_only_when_requested() {
    let registry = LocaleRegistry::builtin();

    assert_eq!(
        registry.resolve(&locale("de-CH"), false),
        Err(LocalizationError::UnresolvedLocale {
            locale: "de-CH".to_string()
        })
    );
    assert_eq!(registry.resolve(&locale("de-CH"), true), Ok(MapLocale::GERMANY));
    assert_eq!(registry.resolve(&locale("es-MX"), true), Ok(MapLocale::SPAIN));
    assert_eq!(registry.resolve(&locale("ko"), true), Ok(MapLocale::KOREA));
}

#[test]
fn test_custom_locale_added_at_the_end() {
    let mut registry = LocaleRegistry::builtin();
    registry.add_map_locale(locale("ar-EG"), MapLocale::new(Language::Arabic));

    assert_eq!(
        registry.resolve(&locale("ar-SA"), true).map(|m| m.language),
        Ok(Language::Arabic)
    );
    assert_eq!(registry.iter().last().map(|(l, _)| l.to_string()), Some("ar-EG".to_string()));
}

#[test]
fn test_hans_locale_differs_from_china() {
    let registry = LocaleRegistry::builtin();
    let hans = registry.resolve(&locale("zh-Hans-CN"), false).unwrap();
    let china = registry.resolve(&locale("zh-CN"), false).unwrap();
    assert!(hans.is_hans());
    assert!(!china.is_hans());
    assert_eq!(china.language, Language::Chinese);
}
