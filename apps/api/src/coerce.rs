//! Loose-type coercion for fields that arrive from LLM output or free-form clients.
//!
//! Models return `skills` as either a list or a comma-delimited string and
//! numbers as either JSON numbers or strings. These helpers fold both shapes
//! into the strongly typed values the rest of the service uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoercionError {
    #[error("missing field '{0}'")]
    Missing(&'static str),

    #[error("field '{field}' is not an integer: {value}")]
    NotAnInteger { field: &'static str, value: String },
}

/// `skills` as sent by a model or form: a list or a delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    List(Vec<String>),
    Delimited(String),
}

impl Default for SkillsField {
    fn default() -> Self {
        SkillsField::List(Vec::new())
    }
}

impl SkillsField {
    /// Ordered, trimmed, non-empty skill names.
    pub fn into_list(self) -> Vec<String> {
        match self {
            SkillsField::List(items) => clean(items.into_iter()),
            SkillsField::Delimited(text) => clean(text.split(',').map(str::to_string)),
        }
    }
}

fn clean(items: impl Iterator<Item = String>) -> Vec<String> {
    items
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Reads an integer from a JSON number (integral floats allowed) or a numeric string.
pub fn coerce_integer(field: &'static str, value: Option<&Value>) -> Result<i64, CoercionError> {
    let value = match value {
        None | Some(Value::Null) => return Err(CoercionError::Missing(field)),
        Some(v) => v,
    };

    let not_an_integer = || CoercionError::NotAnInteger {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(not_an_integer),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| not_an_integer()),
        _ => Err(not_an_integer()),
    }
}

/// Reads a 0 – 100 score. Fractional scores are rounded, out-of-range scores clamped.
pub fn coerce_score(field: &'static str, value: Option<&Value>) -> Result<u8, CoercionError> {
    let value = match value {
        None | Some(Value::Null) => return Err(CoercionError::Missing(field)),
        Some(v) => v,
    };

    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
    .ok_or_else(|| CoercionError::NotAnInteger {
        field,
        value: value.to_string(),
    })?;

    Ok(raw.round().clamp(0.0, 100.0) as u8)
}
