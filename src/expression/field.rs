// SPDX-License-Identifier: PMPL-1.0-or-later

//! Name-field references inside label expressions.

use crate::types::{Language, SchemaGeneration};
use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;

// `name`, or `name_` plus a 2-7 character locale suffix (`en`, `zh-Hans`).
static NAME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^name(?:_(?P<suffix>[a-z]{2,3}(?:-[A-Za-z]{2,4})?))?$").expect("valid regex")
});

/// Whether a tile property is a label name field.
pub fn is_name_field(field: &str) -> bool {
    match NAME_FIELD.captures(field) {
        Some(captures) => captures
            .name("suffix")
            .is_none_or(|suffix| (2..=7).contains(&suffix.as_str().len())),
        None => false,
    }
}

/// Whether a tile property is a localized name field, i.e. not plain `name`.
pub fn is_localized_field(field: &str) -> bool {
    field != "name" && is_name_field(field)
}

/// Property read by a `["get", <field>]` node.
pub fn get_field(value: &Value) -> Option<&str> {
    match value.as_array()?.as_slice() {
        [op, Value::String(field)] if op == "get" => Some(field.as_str()),
        _ => None,
    }
}

/// Build a `["get", <field>]` node.
pub fn get(field: &str) -> Value {
    json!(["get", field])
}

/// Field a label must read for `language` on a source of `generation`.
///
/// Chinese needs care because the generations carry different fields:
/// v6 only has `name_zh`; v7 has `name_zh` and `name_zh-Hans`; v8 keeps
/// traditional script on `name_zh-Hant` and resolves it inside its own
/// label template, so plain Chinese maps to `name_zh-Hans` there.
pub fn target_field(language: Language, generation: SchemaGeneration) -> &'static str {
    match generation {
        SchemaGeneration::StreetsV6 if language.is_chinese() => Language::Chinese.field_name(),
        SchemaGeneration::StreetsV7 if language.is_chinese() => {
            if language == Language::SimplifiedChinese {
                Language::SimplifiedChinese.field_name()
            } else {
                Language::Chinese.field_name()
            }
        }
        SchemaGeneration::StreetsV8
            if matches!(language, Language::Chinese | Language::SimplifiedChinese) =>
        {
            Language::SimplifiedChinese.field_name()
        }
        _ => language.field_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_fields() {
        assert!(is_name_field("name"));
        assert!(is_name_field("name_en"));
        assert!(is_name_field("name_zh-Hans"));
        assert!(is_name_field("name_zh-Hant"));
        assert!(!is_name_field("name_script"));
        assert!(!is_name_field("name_"));
        assert!(!is_name_field("ref"));
        assert!(!is_name_field("housename_en"));
    }

    #[test]
    fn localized_excludes_plain_name() {
        assert!(!is_localized_field("name"));
        assert!(is_localized_field("name_de"));
    }

    #[test]
    fn get_nodes() {
        assert_eq!(get_field(&json!(["get", "name_en"])), Some("name_en"));
        assert_eq!(get_field(&json!(["get", "name_en", ["properties"]])), None);
        assert_eq!(get_field(&json!(["has", "name_en"])), None);
        assert_eq!(get("name_fr"), json!(["get", "name_fr"]));
    }

    #[test]
    fn chinese_fields_per_generation() {
        use Language::*;
        use SchemaGeneration::*;

        for language in [Chinese, SimplifiedChinese, TraditionalChinese] {
            assert_eq!(target_field(language, StreetsV6), "name_zh");
        }
        assert_eq!(target_field(SimplifiedChinese, StreetsV7), "name_zh-Hans");
        assert_eq!(target_field(Chinese, StreetsV7), "name_zh");
        assert_eq!(target_field(TraditionalChinese, StreetsV7), "name_zh");
        assert_eq!(target_field(Chinese, StreetsV8), "name_zh-Hans");
        assert_eq!(target_field(SimplifiedChinese, StreetsV8), "name_zh-Hans");
        assert_eq!(target_field(TraditionalChinese, StreetsV8), "name_zh-Hant");
        assert_eq!(target_field(German, StreetsV8), "name_de");
    }
}
