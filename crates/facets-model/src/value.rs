//! Option values and their canonical key form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A primitive option value as delivered by the options endpoint.
///
/// Selection state never stores these directly. It stores the canonical
/// key returned by [`FacetValue::to_key`], so two values that render to the
/// same key are the same selection (`1` and `"1"` collide on purpose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl FacetValue {
    /// Canonical string key used by selection state.
    pub fn to_key(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => float_key(*value),
            Self::String(value) => value.clone(),
        }
    }
}

// f64's Display already drops the fractional part of integral values.
fn float_key(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        value.to_string()
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FacetValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FacetValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FacetValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
