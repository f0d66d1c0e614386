//! Ordered, labeled calculation output.
//!
//! Insertion order is display order, so the result is a list of keyed
//! entries rather than a hash map. It serializes to a JSON object with the
//! keys in that same order:
//!
//! ```json
//! {
//!   "qty": { "value": 4.0, "label": "# Up / Inverse Qty:" },
//!   "percentWaste": { "value": 0.25, "label": "% Out of Material:" }
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A single result value: numeric for every current algorithm, text kept for
/// result rows that carry a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(f64),
    Text(String),
}

impl ResultValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ResultValue::Number(n) => Some(*n),
            ResultValue::Text(_) => None,
        }
    }

    /// Display form: numbers keep at most six fraction digits.
    pub fn display(&self) -> String {
        match self {
            ResultValue::Number(n) => format_number(*n),
            ResultValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        ResultValue::Number(value)
    }
}

impl From<u64> for ResultValue {
    fn from(value: u64) -> Self {
        ResultValue::Number(value as f64)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        ResultValue::Text(value.to_string())
    }
}

fn format_number(n: f64) -> String {
    let fixed = format!("{:.6}", n);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A value with its display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub value: ResultValue,
    pub label: String,
}

/// Labeled results of one calculation, in display order.
///
/// Built by the engine and handed back read-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationResult {
    entries: Vec<(String, ResultEntry)>,
}

impl CalculationResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: &str, value: impl Into<ResultValue>, label: &str) -> Self {
        self.entries.push((
            key.to_string(),
            ResultEntry {
                value: value.into(),
                label: label.to_string(),
            },
        ));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ResultEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Numeric value for a key, if present and numeric
    pub fn value(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|e| e.value.as_f64())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (label, formatted value) pairs ready to print
    pub fn display_rows(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(_, e)| (e.label.clone(), e.value.display()))
            .collect()
    }
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}
