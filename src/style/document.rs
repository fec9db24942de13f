// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON style documents.
//!
//! A [`StyleHandle`] over a style document held in memory, as written by
//! map style editors: a `sources` object keyed by id and an ordered
//! `layers` array. Everything the localizer does not touch is preserved,
//! key order included.

use super::{StyleError, StyleHandle};
use crate::expression::{LabelExpression, LabelValue};
use crate::types::{LayerDescriptor, LayerKind, SourceDescriptor, SourceKind};
use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct StyleDocument {
    root: Value,
}

impl StyleDocument {
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(anyhow!("style document must be a JSON object"));
        }
        Ok(Self { root })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).context("parsing style document")?;
        Self::from_value(root)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading style {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("loading style {}", path.display()))
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    fn layers(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.root
            .get("layers")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    fn layer(&self, layer_id: &str) -> Result<&Map<String, Value>, StyleError> {
        self.layers()
            .find(|layer| layer_id_of(layer) == Some(layer_id))
            .ok_or_else(|| StyleError::LayerNotFound(layer_id.to_string()))
    }

    fn layer_mut(&mut self, layer_id: &str) -> Result<&mut Map<String, Value>, StyleError> {
        self.root
            .get_mut("layers")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
            .find(|layer| layer_id_of(layer) == Some(layer_id))
            .ok_or_else(|| StyleError::LayerNotFound(layer_id.to_string()))
    }
}

fn layer_id_of(layer: &Map<String, Value>) -> Option<&str> {
    layer.get("id").and_then(Value::as_str)
}

fn layer_type_of(layer: &Map<String, Value>) -> &str {
    layer.get("type").and_then(Value::as_str).unwrap_or_default()
}

fn ensure_symbol(layer_id: &str, layer: &Map<String, Value>) -> Result<(), StyleError> {
    match layer_type_of(layer) {
        "symbol" => Ok(()),
        kind => Err(StyleError::NotSymbolLayer {
            layer_id: layer_id.to_string(),
            kind: kind.to_string(),
        }),
    }
}

impl StyleHandle for StyleDocument {
    fn style_sources(&self) -> Vec<SourceDescriptor> {
        self.root
            .get("sources")
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(id, source)| SourceDescriptor {
                id: id.clone(),
                kind: SourceKind::from_type(
                    source.get("type").and_then(Value::as_str).unwrap_or_default(),
                ),
                url: source.get("url").and_then(Value::as_str).map(str::to_string),
            })
            .collect()
    }

    fn style_layers(&self) -> Vec<LayerDescriptor> {
        self.layers()
            .filter_map(|layer| {
                Some(LayerDescriptor {
                    id: layer_id_of(layer)?.to_string(),
                    kind: LayerKind::from_type(layer_type_of(layer)),
                    source: layer
                        .get("source")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                })
            })
            .collect()
    }

    fn text_field(&self, layer_id: &str) -> Result<Option<LabelValue>, StyleError> {
        let layer = self.layer(layer_id)?;
        ensure_symbol(layer_id, layer)?;
        Ok(layer
            .get("layout")
            .and_then(|layout| layout.get("text-field"))
            .cloned()
            .map(LabelValue::from_value))
    }

    fn set_text_field(
        &mut self,
        layer_id: &str,
        expression: LabelExpression,
    ) -> Result<(), StyleError> {
        let layer = self.layer_mut(layer_id)?;
        ensure_symbol(layer_id, layer)?;

        let layout = layer
            .entry("layout")
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(layout) = layout.as_object_mut() else {
            return Err(StyleError::Rejected {
                layer_id: layer_id.to_string(),
                message: "layout is not an object".to_string(),
            });
        };
        layout.insert("text-field".to_string(), expression.into_value());
        Ok(())
    }
}
