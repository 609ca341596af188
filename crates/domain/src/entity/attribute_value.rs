//! Typed attribute values attached to entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Build a list attribute (e.g. `options`, `hvac_modes`) from strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Json(Value::Array(
            items.into_iter().map(|s| Value::String(s.into())).collect(),
        ))
    }

    /// The value as text, when it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The value as a finite number.
    ///
    /// Numbers are accepted as-is when finite. Strings are accepted when
    /// their trimmed text is non-empty and parses to a finite number.
    /// Booleans, `"NaN"`, `"inf"` and everything else are rejected.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f).filter(|f| f.is_finite()),
            Self::String(s) | Self::Json(Value::String(s)) => parse_finite(s),
            Self::Json(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()),
            Self::Bool(_) | Self::Json(_) => None,
        }
    }

    /// The string elements of a list value, in order.
    ///
    /// Returns `None` when the value is not a list. Non-string elements are
    /// skipped.
    #[must_use]
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            Self::Json(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        }
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
