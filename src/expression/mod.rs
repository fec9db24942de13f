// SPDX-License-Identifier: PMPL-1.0-or-later

//! Label expressions and their localization.
//!
//! Labels are kept as parsed JSON trees. The rewriter pattern-matches on
//! tree shape; text only appears at the parse/serialise boundary.

mod field;
mod rewrite;
mod template;

pub use field::{get, get_field, is_localized_field, is_name_field, target_field};
pub use rewrite::{rewrite, RewriteError, RewriteOutcome};
pub use template::{localized_match, match_localized};

use crate::error::LocalizationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A data-driven label: a JSON array whose head is an operator name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelExpression(Value);

impl LabelExpression {
    /// Wrap a JSON value, rejecting anything that is not an expression.
    pub fn from_value(value: Value) -> Result<Self, LocalizationError> {
        if operator(&value).is_some() {
            Ok(Self(value))
        } else {
            Err(LocalizationError::InvalidExpression(value.to_string()))
        }
    }

    pub fn parse(text: &str) -> Result<Self, LocalizationError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| LocalizationError::InvalidExpression(err.to_string()))?;
        Self::from_value(value)
    }

    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl fmt::Display for LabelExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current value of a symbol layer's `text-field`.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    /// A constant label, a legacy `{token}` string or a legacy function
    /// object. Never rewritten.
    Literal(Value),
    Expression(LabelExpression),
}

impl LabelValue {
    pub fn from_value(value: Value) -> Self {
        if operator(&value).is_some() {
            LabelValue::Expression(LabelExpression(value))
        } else {
            LabelValue::Literal(value)
        }
    }

    pub fn as_expression(&self) -> Option<&LabelExpression> {
        match self {
            LabelValue::Expression(expression) => Some(expression),
            LabelValue::Literal(_) => None,
        }
    }
}

/// Operator name of an expression array.
pub(crate) fn operator(value: &Value) -> Option<&str> {
    value.as_array()?.first()?.as_str()
}
