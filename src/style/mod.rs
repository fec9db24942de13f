// SPDX-License-Identifier: PMPL-1.0-or-later

//! Style host interface
//!
//! The localizer never owns a style. It reads snapshots of sources and
//! layers through [`StyleHandle`], writes labels back through it, and is
//! told about newly loaded styles through [`StyleObserver`].

mod document;

pub use document::StyleDocument;

use crate::expression::{LabelExpression, LabelValue};
use crate::report::ApplyReport;
use crate::types::{LayerDescriptor, SourceDescriptor};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("layer {0} not found")]
    LayerNotFound(String),

    #[error("layer {layer_id} is a {kind} layer, not a symbol layer")]
    NotSymbolLayer { layer_id: String, kind: String },

    #[error("style rejected text-field for layer {layer_id}: {message}")]
    Rejected { layer_id: String, message: String },
}

/// Capabilities the localizer needs from a loaded style.
pub trait StyleHandle {
    /// Sources in style order.
    fn style_sources(&self) -> Vec<SourceDescriptor>;

    /// Layers in style order.
    fn style_layers(&self) -> Vec<LayerDescriptor>;

    /// Current `text-field` of a symbol layer; `Ok(None)` when unset.
    fn text_field(&self, layer_id: &str) -> Result<Option<LabelValue>, StyleError>;

    fn set_text_field(
        &mut self,
        layer_id: &str,
        expression: LabelExpression,
    ) -> Result<(), StyleError>;
}

/// Receiver of style-reload notifications.
///
/// Called once per newly loaded style document, with the handle to query
/// it. Implementations replay their active selection against it.
pub trait StyleObserver<S: StyleHandle> {
    fn on_style_changed(&mut self, style: S) -> Option<ApplyReport>;
}
