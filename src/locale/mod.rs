// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution for map labels.
//!
//! A platform [`Locale`] (`de-DE`, `zh-Hans-CN`, `pt_BR.UTF-8`) is resolved
//! through the [`LocaleRegistry`] to a [`MapLocale`], whose
//! [`Language`](crate::types::Language) names the tile field labels read.
//!
//! ## Built-in locales
//!
//! | Locale      | Map locale     | Field          |
//! |-------------|----------------|----------------|
//! | en-US       | US             | name_en        |
//! | fr-CA       | CANADA_FRENCH  | name_fr        |
//! | en-CA       | CANADA         | name_en        |
//! | zh-CN       | CHINA          | name_zh        |
//! | zh-TW       | TAIWAN         | name_zh-Hant   |
//! | en-GB       | UK             | name_en        |
//! | ja-JP       | JAPAN          | name_ja        |
//! | ko-KR       | KOREA          | name_ko        |
//! | de-DE       | GERMANY        | name_de        |
//! | fr-FR       | FRANCE         | name_fr        |
//! | ru-RU       | RUSSIA         | name_ru        |
//! | es-ES       | SPAIN          | name_es        |
//! | pt-PT       | PORTUGAL       | name_pt        |
//! | pt-BR       | BRAZIL         | name_pt        |
//! | vi-VN       | VIETNAM        | name_vi        |
//! | it-IT       | ITALY          | name_it        |
//! | zh-Hans-CN  | CHINESE_HANS   | name_zh-Hans   |
//! | zh-Hant-TW  | CHINESE_HANT   | name_zh-Hant   |
//!
//! Further entries can be added with
//! [`LocaleRegistry::add_map_locale`] or a config file.

mod device;
mod map_locale;
mod registry;
mod tag;

pub use device::device_locale;
pub use map_locale::{LatLngBounds, MapLocale};
pub use registry::LocaleRegistry;
pub use tag::Locale;
