//! Raw shortcode attribute bag as supplied by the content author.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single loosely-typed attribute value.
///
/// Authors write attributes as text, while programmatic callers may pass
/// native numbers or booleans. Nothing downstream trusts the variant; each
/// consumer coerces with one of the `as_*` helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    /// Textual form of the value.
    pub fn as_text(&self) -> String {
        match self {
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Int(i) => i.to_string(),
            AttrValue::Float(f) => f.to_string(),
            AttrValue::Text(s) => s.clone(),
        }
    }

    /// Truthiness: non-zero numbers and `1|true|yes|on` strings are true.
    pub fn as_bool(&self) -> bool {
        match self {
            AttrValue::Bool(b) => *b,
            AttrValue::Int(i) => *i != 0,
            AttrValue::Float(f) => *f != 0.0,
            AttrValue::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
        }
    }

    /// Integer value, if the attribute holds one.
    ///
    /// Integral floats are accepted; fractional ones are not.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Bool(_) => None,
            AttrValue::Int(i) => Some(*i),
            AttrValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            AttrValue::Float(_) => None,
            AttrValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Finite numeric value, if the attribute looks numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Bool(_) => None,
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
            AttrValue::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        }
    }

    /// True for empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        matches!(self, AttrValue::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// The attribute bag of one `[gallery]` shortcode occurrence.
///
/// Keys are matched case-sensitively, the way authors write them
/// (`hideControls`, not `hidecontrols`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcodeRequest {
    attrs: BTreeMap<String, AttrValue>,
}

impl ShortcodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Returns the attribute unless it is absent or blank text.
    pub fn get_present(&self, key: &str) -> Option<&AttrValue> {
        self.get(key).filter(|v| !v.is_blank())
    }
}

impl<K, V> FromIterator<(K, V)> for ShortcodeRequest
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = ShortcodeRequest::new();
        for (k, v) in iter {
            request.insert(k, v);
        }
        request
    }
}
