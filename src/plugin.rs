// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization plugin
//!
//! Owns the active language selection and the handle of the style it is
//! applied to. Selecting a language rewrites the labels of the current
//! style; loading a new style replays the last selection against it.
//! All methods take `&mut self`, so one application always finishes before
//! the next selection or reload is accepted.

use crate::classify::{classify, supported_datasets, SourceClass};
use crate::error::LocalizationError;
use crate::expression::{rewrite, LabelValue, RewriteError, RewriteOutcome};
use crate::locale::{device_locale, Locale, LocaleRegistry, MapLocale};
use crate::report::{ApplyReport, LayerOutcome, LayerReport};
use crate::style::{StyleHandle, StyleObserver};
use crate::types::{Language, LayerDescriptor, SchemaGeneration, SourceDescriptor};
use tracing::{debug, warn};

pub struct LocalizationPlugin<S> {
    registry: LocaleRegistry,
    map_locale: Option<MapLocale>,
    style: Option<S>,
}

impl<S: StyleHandle> LocalizationPlugin<S> {
    pub fn new() -> Self {
        Self::with_registry(LocaleRegistry::builtin())
    }

    pub fn with_registry(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            map_locale: None,
            style: None,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// The active selection, if any.
    pub fn map_locale(&self) -> Option<&MapLocale> {
        self.map_locale.as_ref()
    }

    pub fn style(&self) -> Option<&S> {
        self.style.as_ref()
    }

    /// Detach the style, e.g. when the owning map is torn down. The
    /// selection is kept for the next style.
    pub fn take_style(&mut self) -> Option<S> {
        self.style.take()
    }

    /// Resolve the operating system locale and apply it.
    pub fn match_device_language(&mut self, accept_fallback: bool) -> ApplyReport {
        match device_locale() {
            Ok(locale) => self.set_locale(&locale, accept_fallback),
            Err(err) => {
                warn!("device locale: {}", err);
                ApplyReport::unresolved(&err)
            }
        }
    }

    /// Apply an explicit language.
    pub fn set_language(&mut self, language: Language) -> ApplyReport {
        let map_locale = self.registry.resolve_language(language);
        self.set_map_locale(map_locale)
    }

    /// Resolve a locale through the registry and apply it. An unresolved
    /// locale is logged and leaves the active selection untouched.
    pub fn set_locale(&mut self, locale: &Locale, accept_fallback: bool) -> ApplyReport {
        match self.registry.resolve(locale, accept_fallback) {
            Ok(map_locale) => self.set_map_locale(map_locale),
            Err(err) => {
                warn!("{}", err);
                ApplyReport::unresolved(&err)
            }
        }
    }

    /// Record `map_locale` as the active selection and apply it to the
    /// current style, if one is attached.
    pub fn set_map_locale(&mut self, map_locale: MapLocale) -> ApplyReport {
        self.map_locale = Some(map_locale);
        self.apply(map_locale)
    }

    fn apply(&mut self, map_locale: MapLocale) -> ApplyReport {
        let language = map_locale.language;
        let mut report = ApplyReport::new(Some(language));

        let Some(style) = self.style.as_mut() else {
            debug!(%language, "no style attached, selection recorded");
            return report;
        };
        report.style_attached = true;

        let layers = style.style_layers();
        for source in style.style_sources() {
            let class = classify(&source);
            let Some(generation) = class.generation() else {
                let err = LocalizationError::UnsupportedSource {
                    source_id: source.id.clone(),
                    supported: supported_datasets(),
                };
                warn!("{}", err);
                report.push_issue(&err);
                continue;
            };

            for layer in layers.iter().filter(|layer| references(layer, &source)) {
                let outcome = localize_layer(style, layer, language, generation, &mut report);
                report.layers.push(LayerReport {
                    layer_id: layer.id.clone(),
                    source_id: source.id.clone(),
                    class,
                    outcome,
                });
            }
        }

        debug!(
            %language,
            rewritten = report.rewritten().count(),
            issues = report.issues.len(),
            "applied map language"
        );
        report
    }
}

impl<S: StyleHandle> Default for LocalizationPlugin<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StyleHandle> StyleObserver<S> for LocalizationPlugin<S> {
    fn on_style_changed(&mut self, style: S) -> Option<ApplyReport> {
        self.style = Some(style);
        let map_locale = self.map_locale?;
        Some(self.apply(map_locale))
    }
}

fn references(layer: &LayerDescriptor, source: &SourceDescriptor) -> bool {
    layer.is_symbol() && layer.source.as_deref() == Some(source.id.as_str())
}

fn localize_layer<S: StyleHandle>(
    style: &mut S,
    layer: &LayerDescriptor,
    language: Language,
    generation: SchemaGeneration,
    report: &mut ApplyReport,
) -> LayerOutcome {
    let skipped = |reason: String| LayerOutcome::Skipped { reason };

    let label = match style.text_field(&layer.id) {
        Ok(label) => label,
        Err(err) => {
            let err = LocalizationError::from(err);
            warn!("{}", err);
            report.push_issue(&err);
            return skipped(err.to_string());
        }
    };

    let no_label = || {
        let err = LocalizationError::NoLabelExpression {
            layer_id: layer.id.clone(),
        };
        debug!("{}", err);
        LayerOutcome::Skipped {
            reason: err.to_string(),
        }
    };

    let Some(LabelValue::Expression(expression)) = label else {
        return no_label();
    };

    match rewrite(language, generation, &expression) {
        Ok(RewriteOutcome::Unchanged) => LayerOutcome::Unchanged,
        Ok(RewriteOutcome::Rewritten(localized)) => {
            let before = expression.into_value();
            let after = localized.as_value().clone();
            match style.set_text_field(&layer.id, localized) {
                Ok(()) => {
                    debug!(layer = %layer.id, %after, "rewrote label");
                    LayerOutcome::Rewritten { before, after }
                }
                Err(err) => {
                    let err = LocalizationError::from(err);
                    warn!("{}", err);
                    report.push_issue(&err);
                    skipped(err.to_string())
                }
            }
        }
        Err(RewriteError::NoNameReference) => no_label(),
        Err(mismatch) => {
            let err = LocalizationError::PatternMismatch {
                layer_id: layer.id.clone(),
                reason: mismatch.to_string(),
            };
            warn!("{}", err);
            report.push_issue(&err);
            skipped(mismatch.to_string())
        }
    }
}

/// Classification of every source in `style`, in style order.
pub fn classify_sources<S: StyleHandle>(style: &S) -> Vec<(SourceDescriptor, SourceClass)> {
    style
        .style_sources()
        .into_iter()
        .map(|source| {
            let class = classify(&source);
            (source, class)
        })
        .collect()
}
