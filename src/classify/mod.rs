// SPDX-License-Identifier: PMPL-1.0-or-later

//! Source classification
//!
//! Decides whether a style source is a localizable streets basemap and
//! which schema generation it implements. Only vector sources qualify, and
//! the generation is read off the dataset identifier in the backing URL.

use crate::types::{SchemaGeneration, SourceDescriptor, SourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceClass {
    UnsupportedSource,
    StreetsV6,
    StreetsV7,
    StreetsV8,
}

impl SourceClass {
    pub fn generation(&self) -> Option<SchemaGeneration> {
        match self {
            SourceClass::UnsupportedSource => None,
            SourceClass::StreetsV6 => Some(SchemaGeneration::StreetsV6),
            SourceClass::StreetsV7 => Some(SchemaGeneration::StreetsV7),
            SourceClass::StreetsV8 => Some(SchemaGeneration::StreetsV8),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.generation().is_some()
    }
}

impl From<SchemaGeneration> for SourceClass {
    fn from(generation: SchemaGeneration) -> Self {
        match generation {
            SchemaGeneration::StreetsV6 => SourceClass::StreetsV6,
            SchemaGeneration::StreetsV7 => SourceClass::StreetsV7,
            SchemaGeneration::StreetsV8 => SourceClass::StreetsV8,
        }
    }
}

impl fmt::Display for SourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.generation() {
            Some(generation) => write!(f, "{}", generation),
            None => write!(f, "unsupported"),
        }
    }
}

/// Dataset identifiers of the supported streets sources.
pub fn supported_datasets() -> Vec<&'static str> {
    SchemaGeneration::all()
        .iter()
        .map(SchemaGeneration::dataset_id)
        .collect()
}

/// Classify a source by substring match of its URL against the known
/// dataset identifiers.
pub fn classify(source: &SourceDescriptor) -> SourceClass {
    if source.kind != SourceKind::Vector {
        return SourceClass::UnsupportedSource;
    }
    let Some(url) = source.url.as_deref() else {
        return SourceClass::UnsupportedSource;
    };

    SchemaGeneration::all()
        .iter()
        .find(|generation| url.contains(generation.dataset_id()))
        .map(|generation| SourceClass::from(*generation))
        .unwrap_or(SourceClass::UnsupportedSource)
}
