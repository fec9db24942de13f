// SPDX-License-Identifier: PMPL-1.0-or-later

//! The streets-v8 localized label template.
//!
//! ```text
//! ["match", <field>,
//!   "name_zh-Hant", ["coalesce",
//!       ["get", "name_zh-Hant"],
//!       ["get", "name_zh-Hans"],
//!       ["match", ["get", "name_script"], "Latin", ["get", "name"], ["get", "name_en"]],
//!       ["get", "name"]],
//!   ["coalesce",
//!       ["get", <field>],
//!       ["match", ["get", "name_script"], "Latin", ["get", "name"], ["get", "name_en"]],
//!       ["get", "name"]]]
//! ```
//!
//! The outer key is a literal, so the traditional-Chinese branch is taken
//! only when the selected field is `name_zh-Hant`.

use super::field::{get, get_field, is_name_field};
use serde_json::{json, Value};

fn script_fallback() -> Value {
    json!([
        "match",
        ["get", "name_script"],
        "Latin",
        ["get", "name"],
        ["get", "name_en"]
    ])
}

fn traditional_branch() -> Value {
    json!([
        "coalesce",
        ["get", "name_zh-Hant"],
        ["get", "name_zh-Hans"],
        script_fallback(),
        ["get", "name"]
    ])
}

/// The localized template selecting `field`.
pub fn localized_match(field: &str) -> Value {
    json!([
        "match",
        field,
        "name_zh-Hant",
        traditional_branch(),
        ["coalesce", get(field), script_fallback(), ["get", "name"]]
    ])
}

/// If `value` is the localized template, return its `(key, primary)`
/// fields. Every other node of the template must match exactly.
pub fn match_localized(value: &Value) -> Option<(&str, &str)> {
    let [op, key, hant, branch, default] = value.as_array()?.as_slice() else {
        return None;
    };
    if op != "match" || hant != "name_zh-Hant" || *branch != traditional_branch() {
        return None;
    }
    let key = key.as_str().filter(|key| is_name_field(key))?;

    let [coalesce, primary, script, local] = default.as_array()?.as_slice() else {
        return None;
    };
    if coalesce != "coalesce" || *script != script_fallback() || *local != get("name") {
        return None;
    }
    let primary = get_field(primary).filter(|field| is_name_field(field))?;

    Some((key, primary))
}
