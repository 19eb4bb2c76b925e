//! Schema declarations: field kinds, field specs, and the schema map.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;

/// The kind of value a field accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KindDecl", into = "KindDecl")]
pub enum FieldKind {
    String,
    Boolean,
    Number,
    /// A nested, closed object with its own field declarations.
    Object(Schema),
    /// A homogeneous array whose items all have the given kind.
    Array(Box<FieldKind>),
}

impl FieldKind {
    /// Shorthand for an array of `items`.
    pub fn array_of(items: FieldKind) -> Self {
        FieldKind::Array(Box::new(items))
    }

    /// Returns true if `value` is of this kind at the top level.
    ///
    /// Nested object fields and array items are not inspected; the
    /// validator does that with path tracking.
    pub fn matches_shallow(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (FieldKind::String, Value::String(_))
                | (FieldKind::Boolean, Value::Bool(_))
                | (FieldKind::Number, Value::Number(_))
                | (FieldKind::Object(_), Value::Object(_))
                | (FieldKind::Array(_), Value::Array(_))
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Object(_) => write!(f, "object"),
            FieldKind::Array(items) => write!(f, "array of {}", items),
        }
    }
}

/// Declaration of a single configuration field.
///
/// A field with a default is implicitly optional: when omitted, the default
/// is substituted. An optional field without a default is simply absent from
/// the validated config when omitted.
///
/// # Example
///
/// ```rust
/// use motif::FieldSpec;
/// use serde_json::json;
///
/// let title = FieldSpec::string();
/// let description = FieldSpec::string().optional();
/// let sitemap = FieldSpec::boolean().default(json!(true));
///
/// assert!(!title.is_optional());
/// assert!(description.is_optional());
/// assert!(sitemap.is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldDecl", into = "FieldDecl")]
pub struct FieldSpec {
    kind: FieldKind,
    optional: bool,
    default: Option<Value>,
}

impl FieldSpec {
    /// Creates a required field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            optional: false,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldKind::String)
    }

    pub fn boolean() -> Self {
        Self::new(FieldKind::Boolean)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    /// A nested object field validated against `schema`.
    pub fn object(schema: Schema) -> Self {
        Self::new(FieldKind::Object(schema))
    }

    /// An array field whose items have kind `items`.
    pub fn array(items: FieldKind) -> Self {
        Self::new(FieldKind::array_of(items))
    }

    /// Marks the field optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets a default value, which also makes the field optional.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.optional = true;
        self.default = Some(value.into());
        self
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

/// A closed set of field declarations.
///
/// Fields are kept sorted by name so validation visits them, and reports
/// errors, in a stable order.
///
/// # Example
///
/// ```rust
/// use motif::{FieldKind, FieldSpec, Schema};
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field("title", FieldSpec::string())
///     .field("sitemap", FieldSpec::boolean().default(json!(true)))
///     .field("tags", FieldSpec::array(FieldKind::String).optional());
///
/// assert_eq!(schema.len(), 3);
/// ```
///
/// Schemas can also be declared as data:
///
/// ```rust
/// use motif::Schema;
///
/// let schema = Schema::from_yaml(r#"
/// title: { type: string }
/// sitemap: { type: boolean, default: true }
/// nav:
///   type: array
///   optional: true
///   items:
///     type: object
///     fields:
///       label: { type: string }
///       href: { type: string }
/// "#).unwrap();
///
/// assert!(schema.get("nav").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: BTreeMap<String, FieldSpec>,
}

impl Schema {
    /// Creates an empty schema, which accepts only an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field, replacing any earlier declaration with the same name.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates declared fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a schema declaration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        crate::usage::parse_yaml(yaml)
    }

    /// Parses a schema declaration from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a schema declaration from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match crate::usage::read_document(path)? {
            (crate::usage::DocumentFormat::Json, content) => Self::from_json(&content),
            (crate::usage::DocumentFormat::Yaml, content) => Self::from_yaml(&content),
        }
    }
}

// ============================================================================
// Declarative form
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindName {
    String,
    Boolean,
    Number,
    Object,
    Array,
}

/// Serialized form of a [`FieldKind`]: `{ type, fields?, items? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct KindDecl {
    #[serde(rename = "type")]
    name: KindName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Box<KindDecl>>,
}

/// Serialized form of a [`FieldSpec`]: a [`KindDecl`] plus `optional` and `default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDecl {
    #[serde(rename = "type")]
    name: KindName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fields: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Box<KindDecl>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

impl TryFrom<KindDecl> for FieldKind {
    type Error = String;

    fn try_from(decl: KindDecl) -> Result<Self, Self::Error> {
        match (decl.name, decl.fields, decl.items) {
            (KindName::String, None, None) => Ok(FieldKind::String),
            (KindName::Boolean, None, None) => Ok(FieldKind::Boolean),
            (KindName::Number, None, None) => Ok(FieldKind::Number),
            (KindName::Object, Some(fields), None) => Ok(FieldKind::Object(fields)),
            (KindName::Object, None, None) => Ok(FieldKind::Object(Schema::new())),
            (KindName::Array, None, Some(items)) => {
                Ok(FieldKind::array_of(FieldKind::try_from(*items)?))
            }
            (KindName::Array, _, None) => Err("array declarations require 'items'".to_string()),
            (_, Some(_), _) => Err("'fields' is only valid for object declarations".to_string()),
            (_, _, Some(_)) => Err("'items' is only valid for array declarations".to_string()),
        }
    }
}

impl From<FieldKind> for KindDecl {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::String => KindDecl::bare(KindName::String),
            FieldKind::Boolean => KindDecl::bare(KindName::Boolean),
            FieldKind::Number => KindDecl::bare(KindName::Number),
            FieldKind::Object(schema) => KindDecl {
                fields: Some(schema),
                ..KindDecl::bare(KindName::Object)
            },
            FieldKind::Array(items) => KindDecl {
                items: Some(Box::new(KindDecl::from(*items))),
                ..KindDecl::bare(KindName::Array)
            },
        }
    }
}

impl KindDecl {
    fn bare(name: KindName) -> Self {
        Self {
            name,
            fields: None,
            items: None,
        }
    }
}

impl TryFrom<FieldDecl> for FieldSpec {
    type Error = String;

    fn try_from(decl: FieldDecl) -> Result<Self, Self::Error> {
        let kind = FieldKind::try_from(KindDecl {
            name: decl.name,
            fields: decl.fields,
            items: decl.items,
        })?;
        let mut spec = FieldSpec::new(kind);
        if decl.optional {
            spec = spec.optional();
        }
        if let Some(default) = decl.default {
            spec = spec.default(default);
        }
        Ok(spec)
    }
}

impl From<FieldSpec> for FieldDecl {
    fn from(spec: FieldSpec) -> Self {
        let kind = KindDecl::from(spec.kind);
        Self {
            name: kind.name,
            fields: kind.fields,
            items: kind.items,
            // A default implies optional, so only spell it out when needed.
            optional: spec.optional && spec.default.is_none(),
            default: spec.default,
        }
    }
}
