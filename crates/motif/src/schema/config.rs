//! The validated configuration produced by schema validation.

use serde::Serialize;
use serde_json::{Map, Value};

/// A configuration that has passed schema validation.
///
/// Every required field is present, every omitted field with a default has
/// that default, and every value has its declared kind. The only way to get a
/// `ValidatedConfig` is through [`validate`](crate::validate) (directly or via
/// [`resolve`](crate::resolve)), so holding one is proof of validity.
///
/// Values are addressed by dotted paths (`"social.github"`); numeric segments
/// index into arrays (`"nav.0.href"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig {
    values: Map<String, Value>,
}

impl ValidatedConfig {
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Looks up a value by dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.values.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns true if a value exists at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// The top-level values, keyed by field name.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Converts into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    /// Number of top-level fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
