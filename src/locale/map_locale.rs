// SPDX-License-Identifier: PMPL-1.0-or-later

//! Map locales: a label language plus the region it is associated with.

use crate::types::Language;
use serde::{Deserialize, Serialize};

/// Geographic bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl LatLngBounds {
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }
}

const USA_BBOX: LatLngBounds = LatLngBounds::new(-124.733253, 24.544245, -66.954811, 49.388611);
const UK_BBOX: LatLngBounds = LatLngBounds::new(-8.623555, 49.906193, 1.759, 59.360249);
const CANADA_BBOX: LatLngBounds = LatLngBounds::new(-141.0, 41.67598, -52.636291, 83.110626);
const CHINA_BBOX: LatLngBounds = LatLngBounds::new(73.557693, 15.775416, 134.773911, 53.56086);
const TAIWAN_BBOX: LatLngBounds = LatLngBounds::new(118.115255, 21.733333, 122.107778, 26.389444);
const GERMANY_BBOX: LatLngBounds = LatLngBounds::new(5.865639, 47.275776, 15.039889, 55.055637);
const FRANCE_BBOX: LatLngBounds = LatLngBounds::new(-5.142222, 41.371582, 9.561556, 51.092804);
const JAPAN_BBOX: LatLngBounds = LatLngBounds::new(122.93457, 24.266121, 145.820159, 45.52314);
const KOREA_BBOX: LatLngBounds = LatLngBounds::new(124.609815, 33.114198, 131.873558, 38.613709);
const RUSSIA_BBOX: LatLngBounds = LatLngBounds::new(19.638861, 41.185902, -168.997849, 81.856903);
const SPAIN_BBOX: LatLngBounds = LatLngBounds::new(-18.393684, 27.433542, 4.591888, 43.993308);
const PORTUGAL_BBOX: LatLngBounds = LatLngBounds::new(-31.275158, 32.637497, -6.189142, 42.154311);
const BRAZIL_BBOX: LatLngBounds = LatLngBounds::new(-73.983062, -33.868905, -28.634116, 5.284287);
const VIETNAM_BBOX: LatLngBounds = LatLngBounds::new(102.118937, 8.383496, 109.483938, 23.388834);
const ITALY_BBOX: LatLngBounds = LatLngBounds::new(6.749955, 36.619987, 18.480247, 47.115393);

/// A language selection, optionally tied to the region it is spoken in.
///
/// This is what the plugin records as the active selection and replays
/// whenever a new style is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapLocale {
    pub language: Language,
    pub bounds: Option<LatLngBounds>,
}

impl MapLocale {
    pub const US: MapLocale = MapLocale::with_bounds(Language::English, USA_BBOX);
    pub const CANADA_FRENCH: MapLocale = MapLocale::with_bounds(Language::French, CANADA_BBOX);
    pub const CANADA: MapLocale = MapLocale::with_bounds(Language::English, CANADA_BBOX);
    pub const CHINA: MapLocale = MapLocale::with_bounds(Language::Chinese, CHINA_BBOX);
    pub const TAIWAN: MapLocale = MapLocale::with_bounds(Language::TraditionalChinese, TAIWAN_BBOX);
    pub const UK: MapLocale = MapLocale::with_bounds(Language::English, UK_BBOX);
    pub const JAPAN: MapLocale = MapLocale::with_bounds(Language::Japanese, JAPAN_BBOX);
    pub const KOREA: MapLocale = MapLocale::with_bounds(Language::Korean, KOREA_BBOX);
    pub const GERMANY: MapLocale = MapLocale::with_bounds(Language::German, GERMANY_BBOX);
    pub const FRANCE: MapLocale = MapLocale::with_bounds(Language::French, FRANCE_BBOX);
    pub const RUSSIA: MapLocale = MapLocale::with_bounds(Language::Russian, RUSSIA_BBOX);
    pub const SPAIN: MapLocale = MapLocale::with_bounds(Language::Spanish, SPAIN_BBOX);
    pub const PORTUGAL: MapLocale = MapLocale::with_bounds(Language::Portuguese, PORTUGAL_BBOX);
    pub const BRAZIL: MapLocale = MapLocale::with_bounds(Language::Portuguese, BRAZIL_BBOX);
    pub const VIETNAM: MapLocale = MapLocale::with_bounds(Language::Vietnamese, VIETNAM_BBOX);
    pub const ITALY: MapLocale = MapLocale::with_bounds(Language::Italian, ITALY_BBOX);
    pub const CHINESE_HANS: MapLocale =
        MapLocale::with_bounds(Language::SimplifiedChinese, CHINA_BBOX);
    pub const CHINESE_HANT: MapLocale =
        MapLocale::with_bounds(Language::TraditionalChinese, TAIWAN_BBOX);

    pub const fn new(language: Language) -> Self {
        Self {
            language,
            bounds: None,
        }
    }

    pub const fn with_bounds(language: Language, bounds: LatLngBounds) -> Self {
        Self {
            language,
            bounds: Some(bounds),
        }
    }

    /// Whether the selection asks specifically for Han simplified script.
    pub fn is_hans(&self) -> bool {
        self.language == Language::SimplifiedChinese
    }
}

impl From<Language> for MapLocale {
    fn from(language: Language) -> Self {
        MapLocale::new(language)
    }
}
