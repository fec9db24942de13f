// SPDX-License-Identifier: PMPL-1.0-or-later

//! Label expression rewriter
//!
//! Pure transform from `(language, generation, expression)` to a new
//! expression reading the localized name field. Anything unrelated to the
//! name field is copied through unchanged, and rewriting an already
//! localized expression for the same language yields the same tree.

use super::field::{get, get_field, is_localized_field, is_name_field, target_field};
use super::template::{localized_match, match_localized};
use super::{operator, LabelExpression};
use crate::types::{Language, SchemaGeneration};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum RewriteOutcome {
    Rewritten(LabelExpression),
    /// Already reads the target field.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    #[error("label does not reference a name field")]
    NoNameReference,

    /// `step` with an even number of elements lacks its default output.
    /// Some engine versions hand these out; there is no safe repair.
    #[error("malformed step expression with {len} elements")]
    MalformedStep { len: usize },

    #[error("label does not match the streets-v8 localized template")]
    TemplateMismatch,
}

/// Rewrite `original` so that it reads `language`'s field for a source of
/// the given schema generation.
pub fn rewrite(
    language: Language,
    generation: SchemaGeneration,
    original: &LabelExpression,
) -> Result<RewriteOutcome, RewriteError> {
    let value = original.as_value();

    if let Some(len) = malformed_step(value) {
        return Err(RewriteError::MalformedStep { len });
    }

    let mut references = Vec::new();
    collect_name_references(value, &mut references);
    if references.is_empty() {
        return Err(RewriteError::NoNameReference);
    }

    let field = target_field(language, generation);
    let rewritten = match generation {
        SchemaGeneration::StreetsV6 | SchemaGeneration::StreetsV7 => replace_fields(value, field),
        SchemaGeneration::StreetsV8 => {
            let rewritten = localize_v8(value, field);
            // Every name the label reads must end up inside a template.
            if has_stray_reference(&rewritten) {
                return Err(RewriteError::TemplateMismatch);
            }
            rewritten
        }
    };

    if rewritten == *value {
        Ok(RewriteOutcome::Unchanged)
    } else {
        Ok(RewriteOutcome::Rewritten(LabelExpression(rewritten)))
    }
}

fn malformed_step(value: &Value) -> Option<usize> {
    let items = value.as_array()?;
    (operator(value) == Some("step") && items.len() % 2 == 0).then_some(items.len())
}

fn is_literal(items: &[Value]) -> bool {
    items.first().and_then(Value::as_str) == Some("literal")
}

fn collect_name_references<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Array(items) if !is_literal(items) => {
            if let Some(field) = get_field(value).filter(|f| is_name_field(f)) {
                out.push(field);
                return;
            }
            for item in items {
                collect_name_references(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_name_references(item, out);
            }
        }
        _ => {}
    }
}

/// v6/v7: point every name `get` at `field`.
///
/// A plain `name` that follows another name reference inside a `coalesce`
/// is the local-name fallback and is kept as is.
fn replace_fields(value: &Value, field: &str) -> Value {
    match value {
        Value::Array(items) if !is_literal(items) => {
            if get_field(value).is_some_and(is_name_field) {
                return get(field);
            }
            let is_coalesce = operator(value) == Some("coalesce");
            let mut seen_name = false;
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let current = get_field(item).filter(|f| is_name_field(f));
                if is_coalesce && seen_name && current == Some("name") {
                    out.push(item.clone());
                } else {
                    out.push(replace_fields(item, field));
                }
                seen_name |= current.is_some();
            }
            Value::Array(out)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), replace_fields(item, field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// v8: re-key the localized template, or expand the base
/// `coalesce(get name_xx, get name)` pair into it.
fn localize_v8(value: &Value, field: &str) -> Value {
    if match_localized(value).is_some() {
        return localized_match(field);
    }

    match value {
        Value::Array(items) if !is_literal(items) => {
            let is_coalesce = operator(value) == Some("coalesce");
            let mut out = Vec::with_capacity(items.len());
            let mut index = 0;
            while index < items.len() {
                if is_coalesce && index > 0 && is_base_pair(&items[index..]) {
                    out.push(localized_match(field));
                    index += 2;
                    continue;
                }
                out.push(localize_v8(&items[index], field));
                index += 1;
            }
            Value::Array(out)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), localize_v8(item, field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// A name `get` outside any localized template.
fn has_stray_reference(value: &Value) -> bool {
    if match_localized(value).is_some() {
        return false;
    }
    match value {
        Value::Array(items) if !is_literal(items) => {
            get_field(value).is_some_and(is_name_field) || items.iter().any(has_stray_reference)
        }
        Value::Object(map) => map.values().any(has_stray_reference),
        _ => false,
    }
}

fn is_base_pair(items: &[Value]) -> bool {
    match items {
        [first, second, ..] => {
            get_field(first).is_some_and(is_localized_field) && get_field(second) == Some("name")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expr(value: Value) -> LabelExpression {
        LabelExpression::from_value(value).unwrap()
    }

    fn rewritten(outcome: Result<RewriteOutcome, RewriteError>) -> Value {
        match outcome {
            Ok(RewriteOutcome::Rewritten(expression)) => expression.into_value(),
            other => panic!("expected a rewrite, got {:?}", other),
        }
    }

    #[test]
    fn v7_german_keeps_local_fallback() {
        let original = expr(json!([
            "format",
            ["coalesce", ["get", "name_en"], ["get", "name"]],
            {}
        ]));
        let out = rewritten(rewrite(
            Language::German,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(
            out,
            json!(["format", ["coalesce", ["get", "name_de"], ["get", "name"]], {}])
        );
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"["format",["coalesce",["get","name_de"],["get","name"]],{}]"#
        );
    }

    #[test]
    fn local_name_then_german_matches_direct_german() {
        let original = expr(json!([
            "format",
            ["coalesce", ["get", "name_en"], ["get", "name"]],
            {}
        ]));
        let local = rewritten(rewrite(
            Language::LocalName,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(
            local,
            json!(["format", ["coalesce", ["get", "name"], ["get", "name"]], {}])
        );

        let german = rewritten(rewrite(
            Language::German,
            SchemaGeneration::StreetsV7,
            &expr(local),
        ));
        let direct = rewritten(rewrite(
            Language::German,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(german, direct);
        assert_eq!(
            german,
            json!(["format", ["coalesce", ["get", "name_de"], ["get", "name"]], {}])
        );
    }

    #[test]
    fn leading_local_name_in_coalesce_is_replaced() {
        let original = expr(json!(["coalesce", ["get", "name"], ["get", "name_en"]]));
        let out = rewritten(rewrite(
            Language::Korean,
            SchemaGeneration::StreetsV6,
            &original,
        ));
        assert_eq!(out, json!(["coalesce", ["get", "name_ko"], ["get", "name_ko"]]));
    }

    #[test]
    fn lone_local_name_is_replaced() {
        let original = expr(json!(["to-string", ["get", "name"]]));
        let out = rewritten(rewrite(
            Language::French,
            SchemaGeneration::StreetsV6,
            &original,
        ));
        assert_eq!(out, json!(["to-string", ["get", "name_fr"]]));
    }

    #[test]
    fn v6_chinese_always_plain_zh() {
        let original = expr(json!(["get", "name_en"]));
        for language in [
            Language::Chinese,
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
        ] {
            let out = rewritten(rewrite(language, SchemaGeneration::StreetsV6, &original));
            assert_eq!(out, json!(["get", "name_zh"]));
        }
    }

    #[test]
    fn v7_hans_variant() {
        let original = expr(json!(["get", "name_en"]));
        let hans = rewritten(rewrite(
            Language::SimplifiedChinese,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(hans, json!(["get", "name_zh-Hans"]));

        let generic = rewritten(rewrite(
            Language::Chinese,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(generic, json!(["get", "name_zh"]));
    }

    #[test]
    fn name_script_and_other_properties_untouched() {
        let original = expr(json!([
            "case",
            ["==", ["get", "name_script"], "Latin"],
            ["get", "name_en"],
            ["get", "ref"]
        ]));
        let out = rewritten(rewrite(
            Language::Japanese,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(
            out,
            json!([
                "case",
                ["==", ["get", "name_script"], "Latin"],
                ["get", "name_ja"],
                ["get", "ref"]
            ])
        );
    }

    #[test]
    fn literal_arrays_are_not_rewritten() {
        let original = expr(json!([
            "coalesce",
            ["get", "name_en"],
            ["literal", ["get", "name_en"]]
        ]));
        let out = rewritten(rewrite(
            Language::Spanish,
            SchemaGeneration::StreetsV7,
            &original,
        ));
        assert_eq!(
            out,
            json!(["coalesce", ["get", "name_es"], ["literal", ["get", "name_en"]]])
        );
    }

    #[test]
    fn v8_template_is_rekeyed() {
        let original = expr(json!(["format", localized_match("name_en"), {}]));
        let out = rewritten(rewrite(
            Language::Russian,
            SchemaGeneration::StreetsV8,
            &original,
        ));
        assert_eq!(out, json!(["format", localized_match("name_ru"), {}]));
    }

    #[test]
    fn v8_chinese_uses_hans_and_keeps_hant_branch() {
        let original = expr(localized_match("name_en"));
        let out = rewritten(rewrite(
            Language::Chinese,
            SchemaGeneration::StreetsV8,
            &original,
        ));
        assert_eq!(out[1], json!("name_zh-Hans"));
        assert_eq!(out[4][1], json!(["get", "name_zh-Hans"]));
        assert_eq!(out[3], original.as_value()[3]);
        assert_eq!(out[3][1], json!(["get", "name_zh-Hant"]));
    }

    #[test]
    fn v8_base_pair_expands_to_template() {
        let original = expr(json!([
            "format",
            ["coalesce", ["get", "name_en"], ["get", "name"]],
            {}
        ]));
        let out = rewritten(rewrite(
            Language::Italian,
            SchemaGeneration::StreetsV8,
            &original,
        ));
        assert_eq!(
            out,
            json!(["format", ["coalesce", localized_match("name_it")], {}])
        );
    }

    #[test]
    fn v8_unknown_shape_is_a_mismatch() {
        let original = expr(json!(["to-string", ["get", "name_en"]]));
        assert_eq!(
            rewrite(Language::German, SchemaGeneration::StreetsV8, &original),
            Err(RewriteError::TemplateMismatch)
        );
    }

    #[test]
    fn v8_partial_match_is_a_mismatch() {
        let original = expr(json!([
            "case",
            ["has", "x"],
            ["coalesce", ["get", "name_en"], ["get", "name"]],
            ["get", "name_en"]
        ]));
        assert_eq!(
            rewrite(Language::German, SchemaGeneration::StreetsV8, &original),
            Err(RewriteError::TemplateMismatch)
        );

        let trailing = expr(json!([
            "coalesce",
            ["get", "name_en"],
            ["get", "name"],
            ["get", "name_fr"]
        ]));
        assert_eq!(
            rewrite(Language::German, SchemaGeneration::StreetsV8, &trailing),
            Err(RewriteError::TemplateMismatch)
        );
    }

    #[test]
    fn reapplying_is_idempotent() {
        let base = expr(json!(["coalesce", ["get", "name_en"], ["get", "name"]]));
        for generation in SchemaGeneration::all() {
            for language in [Language::German, Language::Chinese, Language::English] {
                let once = match rewrite(language, *generation, &base).unwrap() {
                    RewriteOutcome::Rewritten(expression) => expression,
                    RewriteOutcome::Unchanged => base.clone(),
                };
                assert_eq!(
                    rewrite(language, *generation, &once),
                    Ok(RewriteOutcome::Unchanged),
                    "{:?} {:?}",
                    language,
                    generation
                );
            }
        }
    }

    #[test]
    fn no_name_reference() {
        let original = expr(json!(["get", "ref"]));
        assert_eq!(
            rewrite(Language::German, SchemaGeneration::StreetsV7, &original),
            Err(RewriteError::NoNameReference)
        );
    }

    #[test]
    fn malformed_step_is_rejected() {
        let original = expr(json!(["step", ["zoom"], ["get", "name_en"], 10]));
        assert_eq!(
            rewrite(Language::German, SchemaGeneration::StreetsV7, &original),
            Err(RewriteError::MalformedStep { len: 4 })
        );

        let valid = expr(json!([
            "step",
            ["zoom"],
            ["get", "name_en"],
            10,
            ["get", "name"]
        ]));
        assert!(rewrite(Language::German, SchemaGeneration::StreetsV7, &valid).is_ok());
    }
}
