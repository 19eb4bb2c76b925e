//! Validation of raw configuration against a [`Schema`].

use serde_json::{Map, Value};
use tracing::trace;

use super::config::ValidatedConfig;
use super::field::{FieldKind, FieldSpec, Schema};
use crate::error::SchemaError;

/// Validates `raw` against `schema`, applying declared defaults.
///
/// - Present fields are checked against their declared kind, recursively
///   for objects and arrays.
/// - Omitted fields take their default if one is declared, are left out if
///   merely optional, and fail with [`SchemaError::MissingField`] otherwise.
///   An explicit `null` on an optional field counts as omitted.
/// - Keys the schema does not declare fail with [`SchemaError::UnknownField`]
///   at every nesting level.
/// - A `null` root is treated as an empty configuration.
///
/// The first error found is returned; keys are visited in sorted order so the
/// reported error is stable.
///
/// # Example
///
/// ```rust
/// use motif::{validate, FieldSpec, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("title", FieldSpec::string())
///     .field("sitemap", FieldSpec::boolean().default(true));
///
/// let config = validate(&schema, &json!({ "title": "Hey!" })).unwrap();
/// assert_eq!(config.get_bool("sitemap"), Some(true));
///
/// assert!(validate(&schema, &json!({ "title": "Hey!", "sitmap": false })).is_err());
/// ```
pub fn validate(schema: &Schema, raw: &Value) -> Result<ValidatedConfig, SchemaError> {
    validate_counting(schema, raw).map(|(config, _)| config)
}

/// Like [`validate`], also returning how many fields took their default.
pub(crate) fn validate_counting(
    schema: &Schema,
    raw: &Value,
) -> Result<(ValidatedConfig, usize), SchemaError> {
    let empty = Map::new();
    let map = match raw {
        Value::Object(map) => map,
        Value::Null => &empty,
        other => {
            return Err(SchemaError::NotAnObject {
                actual: value_kind(other),
            })
        }
    };
    let mut defaulted = 0;
    let values = validate_object(schema, map, "", &mut defaulted)?;
    Ok((ValidatedConfig::new(values), defaulted))
}

fn validate_object(
    schema: &Schema,
    map: &Map<String, Value>,
    prefix: &str,
    defaulted: &mut usize,
) -> Result<Map<String, Value>, SchemaError> {
    if let Some(unknown) = map.keys().find(|key| !schema.contains(key)) {
        return Err(SchemaError::UnknownField {
            path: join(prefix, unknown),
        });
    }

    let mut out = Map::new();
    for (name, spec) in schema.iter() {
        let path = join(prefix, name);
        match map.get(name) {
            Some(Value::Null) if spec.is_optional() => {
                if let Some(value) = default_for(spec, &path, defaulted)? {
                    out.insert(name.to_string(), value);
                }
            }
            Some(value) => {
                let checked = check_kind(spec.kind(), value, &path, defaulted)?;
                out.insert(name.to_string(), checked);
            }
            None if spec.is_optional() => {
                if let Some(value) = default_for(spec, &path, defaulted)? {
                    out.insert(name.to_string(), value);
                }
            }
            None => return Err(SchemaError::MissingField { path }),
        }
    }
    Ok(out)
}

/// Validates and returns the field's default, if it has one.
fn default_for(
    spec: &FieldSpec,
    path: &str,
    defaulted: &mut usize,
) -> Result<Option<Value>, SchemaError> {
    let Some(default) = spec.default_value() else {
        return Ok(None);
    };
    trace!(field = path, "applying schema default");
    *defaulted += 1;
    check_kind(spec.kind(), default, path, defaulted)
        .map(Some)
        .map_err(|err| SchemaError::InvalidDefault {
            path: path.to_string(),
            reason: err.to_string(),
        })
}

fn check_kind(
    kind: &FieldKind,
    value: &Value,
    path: &str,
    defaulted: &mut usize,
) -> Result<Value, SchemaError> {
    match (kind, value) {
        (FieldKind::Object(schema), Value::Object(map)) => {
            validate_object(schema, map, path, defaulted).map(Value::Object)
        }
        (FieldKind::Array(items), Value::Array(values)) => values
            .iter()
            .enumerate()
            .map(|(i, item)| {
                check_kind(items, item, &format!("{}[{}]", path, i), defaulted)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (kind, value) if kind.matches_shallow(value) => Ok(value.clone()),
        (kind, value) => Err(SchemaError::TypeMismatch {
            path: path.to_string(),
            expected: kind.to_string(),
            actual: value_kind(value),
        }),
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

/// Name of a JSON value's kind, as used in error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
