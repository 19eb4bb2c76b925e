//! Error types for theme resolution.
//!
//! Each stage of resolution has its own error type ([`SchemaError`],
//! [`MergeError`], [`IntegrationError`]). They are unified by
//! [`ResolutionError`], which is what [`resolve`](crate::resolve) returns and
//! what a host reports to the user.
//!
//! Every error carries enough structure for a host to format it: a
//! [`kind`](ResolutionError::kind), the offending [`path`](ResolutionError::path)
//! (dotted field path, override key, or integration name), and a message via
//! `Display`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by integration factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while validating a raw configuration against a [`Schema`](crate::Schema).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A required field was not supplied and has no default.
    #[error("missing required field '{path}'")]
    MissingField { path: String },

    /// The configuration contains a key the schema does not declare.
    #[error("unknown field '{path}'")]
    UnknownField { path: String },

    /// A value does not have the kind the schema declares.
    #[error("field '{path}' expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: &'static str,
    },

    /// A declared default does not satisfy its own field kind.
    #[error("default for field '{path}' is invalid: {reason}")]
    InvalidDefault { path: String, reason: String },

    /// The configuration root is not an object.
    #[error("configuration must be an object, got {actual}")]
    NotAnObject { actual: &'static str },
}

impl SchemaError {
    /// Returns the dotted field path this error refers to, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            SchemaError::MissingField { path }
            | SchemaError::UnknownField { path }
            | SchemaError::TypeMismatch { path, .. }
            | SchemaError::InvalidDefault { path, .. } => Some(path),
            SchemaError::NotAnObject { .. } => None,
        }
    }
}

/// Errors produced while merging owner overrides into theme defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A page override names a page the theme never declared.
    #[error("cannot override page '{key}': the theme declares no such page")]
    UnknownPageKey { key: String },

    /// A component override names a slot the theme never declared.
    #[error("cannot override component slot '{slot}': the theme declares no such slot")]
    UnknownSlot { slot: String },
}

/// A sub-integration factory failed to materialize its integration.
#[derive(Debug, Error)]
#[error("integration '{integration}' failed to materialize: {source}")]
pub struct IntegrationError {
    /// Name of the sub-integration whose factory failed.
    pub integration: String,
    /// The error returned by the factory.
    #[source]
    pub source: BoxError,
}

/// The category of a [`ResolutionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Configuration failed schema validation.
    Schema,
    /// A page override referenced an undeclared page.
    UnknownPageKey,
    /// A component override referenced an undeclared slot.
    UnknownSlot,
    /// A sub-integration factory failed.
    IntegrationFactory,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Schema => write!(f, "schema"),
            ErrorKind::UnknownPageKey => write!(f, "unknown-page"),
            ErrorKind::UnknownSlot => write!(f, "unknown-slot"),
            ErrorKind::IntegrationFactory => write!(f, "integration"),
        }
    }
}

/// The single error surfaced by [`resolve`](crate::resolve).
///
/// Resolution is fail-fast: whichever stage fails first aborts the whole
/// resolution and no partial build config is produced.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Step 1: schema validation failed.
    #[error("invalid theme configuration: {0}")]
    Schema(#[from] SchemaError),

    /// Steps 2-3: an override referenced an undeclared key.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Step 5: a sub-integration factory failed.
    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

impl ResolutionError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolutionError::Schema(_) => ErrorKind::Schema,
            ResolutionError::Merge(MergeError::UnknownPageKey { .. }) => ErrorKind::UnknownPageKey,
            ResolutionError::Merge(MergeError::UnknownSlot { .. }) => ErrorKind::UnknownSlot,
            ResolutionError::Integration(_) => ErrorKind::IntegrationFactory,
        }
    }

    /// Returns the field path, override key, or integration name at fault.
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolutionError::Schema(err) => err.path(),
            ResolutionError::Merge(MergeError::UnknownPageKey { key }) => Some(key),
            ResolutionError::Merge(MergeError::UnknownSlot { slot }) => Some(slot),
            ResolutionError::Integration(err) => Some(&err.integration),
        }
    }
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Errors from loading a usage document or schema declaration.
///
/// Loading happens before resolution and is reported separately from
/// [`ResolutionError`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse or shape error.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parse or shape error.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A YAML number is NaN or infinite and has no JSON counterpart.
    #[error("non-finite number at {path}: .nan and .inf are not valid values")]
    NonFiniteNumber { path: String },

    /// The file extension is not one we know how to parse.
    #[error("unsupported file format for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_display_includes_path_and_kinds() {
        let err = SchemaError::TypeMismatch {
            path: "nav.links[1].href".to_string(),
            expected: "string".to_string(),
            actual: "number",
        };
        let msg = err.to_string();
        assert!(msg.contains("nav.links[1].href"));
        assert!(msg.contains("expected string"));
        assert!(msg.contains("got number"));
    }

    #[test]
    fn resolution_error_kind_and_path() {
        let err: ResolutionError = MergeError::UnknownPageKey {
            key: "blog".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnknownPageKey);
        assert_eq!(err.path(), Some("blog"));

        let err: ResolutionError = MergeError::UnknownSlot {
            slot: "Footer".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnknownSlot);
        assert_eq!(err.path(), Some("Footer"));
    }

    #[test]
    fn schema_root_error_has_no_path() {
        let err: ResolutionError = SchemaError::NotAnObject { actual: "array" }.into();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(err.path(), None);
        assert!(err.to_string().contains("must be an object"));
    }

    #[test]
    fn integration_error_exposes_source() {
        use std::error::Error as _;

        let err = IntegrationError {
            integration: "sitemap".to_string(),
            source: "no site url".into(),
        };
        assert!(err.to_string().contains("sitemap"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("no site url".into()));

        let err: ResolutionError = err.into();
        assert_eq!(err.kind(), ErrorKind::IntegrationFactory);
        assert_eq!(err.path(), Some("sitemap"));
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::Schema.to_string(), "schema");
        assert_eq!(ErrorKind::UnknownPageKey.to_string(), "unknown-page");
        assert_eq!(ErrorKind::UnknownSlot.to_string(), "unknown-slot");
        assert_eq!(ErrorKind::IntegrationFactory.to_string(), "integration");
    }
}
